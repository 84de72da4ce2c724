// Custom log types for different event categories
pub const LOG_TYPE_GRID: &str = "grid";
pub const LOG_TYPE_ROTATION: &str = "rotation";
pub const LOG_TYPE_ZOOM: &str = "zoom";
pub const LOG_TYPE_FILE: &str = "file";

pub const READY_STATUS: &str = "Ready to start. Click 'Open Image' to begin.";
