pub mod about;
pub mod dialogs;
pub mod preview;
pub mod settings_panel;
pub mod start_page;
pub mod system_info;
pub mod tabs;
pub mod toolbar;

pub use about::AboutPanel;
pub use preview::{PreviewState, show_preview};
pub use settings_panel::show_settings_panel;
pub use start_page::show_start_page;
pub use system_info::{initialize_and_show_banner, show_system_info};
pub use tabs::{Tab, TabKind, TabViewer};
pub use toolbar::show_toolbar;
