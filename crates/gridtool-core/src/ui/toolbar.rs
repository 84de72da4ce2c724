use crate::GridToolApp;
use crate::session::Command;

/// Open / save / reset / back buttons on the left, zoom controls on the right
pub fn show_toolbar(ui: &mut egui::Ui, app: &mut GridToolApp) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 10.0;

        if ui.button("📂 Open Image").clicked() {
            app.open_dialog.pick_file();
        }

        if ui.button("💾 Save Image").clicked() {
            app.request_save();
        }

        if ui.button("Reset All").clicked() {
            app.dispatch(Command::ResetAll);
        }

        if ui.button("Back to Start").clicked() {
            app.dispatch(Command::BackToStart);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let has_image = app.session.has_image();

            // Right-to-left, so the 1:1 button is added first
            if ui.add_enabled(has_image, egui::Button::new("1:1")).clicked() {
                app.dispatch(Command::ResetZoom);
            }
            ui.add_space(10.0);
            if ui.add_enabled(has_image, egui::Button::new("+")).clicked() {
                app.dispatch(Command::ZoomIn);
            }
            ui.label(format!("{}%", app.session.view().zoom_percent()));
            if ui.add_enabled(has_image, egui::Button::new("−")).clicked() {
                app.dispatch(Command::ZoomOut);
            }
        });
    });
}
