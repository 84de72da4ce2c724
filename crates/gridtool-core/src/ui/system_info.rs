use crate::platform::{banner, details};
use egui_lens::ReactiveEventLogger;

/// Initialize and display the application banner and system details
pub fn initialize_and_show_banner(
    logger: &ReactiveEventLogger,
) {
    // Create and format banner
    let mut app_banner = banner::Banner::new();
    app_banner.format();

    // Create and get system details
    let mut system_details = details::Details::new();
    system_details.get_os();

    // Log system details first (will appear below in reverse chronological view)
    let details_text = system_details.format_os();
    logger.log_info(&details_text);

    // Log banner message last (will appear on top in reverse chronological view)
    logger.log_info(&app_banner.message);
    log::info!("{}", app_banner.message.trim());
}

/// Show system information on demand
pub fn show_system_info(logger: &ReactiveEventLogger) {
    let mut system_details = details::Details::new();
    system_details.get_os();
    logger.log_info(&system_details.format_os());
}
