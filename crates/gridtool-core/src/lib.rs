// Grid Tool Core Library
// Re-export all modules for external use

pub mod app;
pub mod display;
pub mod grid;
pub mod image_io;
pub mod platform;
pub mod session;
pub mod ui;

// Re-export GridToolApp from app module
pub use app::GridToolApp;
