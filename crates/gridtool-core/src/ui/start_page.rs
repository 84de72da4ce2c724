use crate::GridToolApp;
use crate::platform::parameters::gui;
use crate::session::Command;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x4C, 0xAF, 0x50);
const BUTTON_SIZE: egui::Vec2 = egui::vec2(180.0, 45.0);

/// Title screen with START / ABOUT / EXIT
pub fn show_start_page(ctx: &egui::Context, app: &mut GridToolApp) {
    egui::TopBottomPanel::bottom("start_version").show_separator_line(false).show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(format!("Version {}", gui::VERSION)).small().weak());
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        // Roughly center the block vertically
        let block_height = 330.0;
        ui.add_space(((ui.available_height() - block_height) / 2.0).max(0.0));

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(gui::APPLICATION_NAME.to_uppercase()).size(36.0).strong().color(ACCENT));
            ui.add_space(30.0);
            ui.label(egui::RichText::new(gui::APPLICATION_TAGLINE).size(14.0).weak());
            ui.add_space(50.0);

            let start = egui::Button::new(egui::RichText::new("START").color(egui::Color32::WHITE))
                .fill(ACCENT)
                .min_size(BUTTON_SIZE);
            if ui.add(start).clicked() {
                app.dispatch(Command::StartEditing);
            }
            ui.add_space(10.0);

            if ui.add(egui::Button::new("ABOUT").min_size(BUTTON_SIZE)).clicked() {
                app.dispatch(Command::ShowAbout);
            }
            ui.add_space(10.0);

            if ui.add(egui::Button::new("EXIT").min_size(BUTTON_SIZE)).clicked() {
                log::info!("Exit requested from start page");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    });
}
