use std::path::Path;
use std::sync::Arc;

use egui_file_dialog::FileDialog;

use crate::app::Notice;
use crate::image_io;
use crate::platform::parameters::gui;
use crate::ui::AboutPanel;

/// File dialog for picking a source image (PNG, JPEG, BMP)
pub fn open_image_dialog() -> FileDialog {
    FileDialog::new()
        .title("Open Image")
        .add_file_filter(
            "Image files",
            Arc::new(|path: &Path| image_io::open_format(path).is_ok()),
        )
        .default_file_filter("Image files")
}

/// File dialog for choosing the output path; the extension picks the format
pub fn save_image_dialog() -> FileDialog {
    FileDialog::new()
        .title("Save Image")
        .default_file_name(&format!("grid.{}", image_io::DEFAULT_SAVE_EXTENSION))
}

fn modal(title: &str) -> egui::Window<'static> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
}

/// Yes/No question. Some(true) on yes, Some(false) on no, None while open.
pub fn confirm_window(ctx: &egui::Context, title: &str, message: &str) -> Option<bool> {
    let mut answer = None;
    modal(title).show(ctx, |ui| {
        ui.label(message);
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("No").clicked() {
                    answer = Some(false);
                }
                if ui.button("Yes").clicked() {
                    answer = Some(true);
                }
            });
        });
    });
    answer
}

/// About window; returns true once closed
pub fn about_window(ctx: &egui::Context) -> bool {
    let mut closed = false;
    modal(&format!("About {}", gui::APPLICATION_NAME)).show(ctx, |ui| {
        AboutPanel::render(ui);

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    closed = true;
                }
            });
        });
    });
    closed
}

/// Error or warning window; returns true once dismissed
pub fn notice_window(ctx: &egui::Context, notice: &Notice) -> bool {
    let (title, message, color) = match notice {
        Notice::Error(message) => ("Error", message, egui::Color32::from_rgb(220, 80, 80)),
        Notice::Warning(message) => ("Warning", message, egui::Color32::from_rgb(255, 165, 0)),
    };

    let mut dismissed = false;
    modal(title).show(ctx, |ui| {
        ui.colored_label(color, message);
        ui.add_space(12.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });
    dismissed
}
