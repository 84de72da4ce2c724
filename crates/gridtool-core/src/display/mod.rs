pub mod pan;
pub mod pipeline;
pub mod view;

// Re-export the main types for easy access
pub use pan::PanState;
pub use pipeline::{RenderedFrame, center_offset, compose_for_save, render, rotate, scale_for_zoom};
pub use view::{Rotation, ScrollDirection, ViewState};
