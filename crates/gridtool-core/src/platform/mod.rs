// Platform module
pub mod banner;
pub mod details;

pub mod parameters {
    pub mod gui {
        pub const APPLICATION_NAME: &str = "Grid Tool";
        pub const APPLICATION_TAGLINE: &str = "Create customizable grids for your images";
        pub const VERSION: &str = env!("CARGO_PKG_VERSION"); // Single source of truth from Cargo.toml
        pub const VIEWPORT_X: f32 = 1200.0;
        pub const VIEWPORT_Y: f32 = 800.0;
    }
}
