use crate::GridToolApp;
use crate::display::Rotation;
use crate::session::{Command, defaults};

const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(0x55, 0x55, 0x55);

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(12.0);
    ui.label(egui::RichText::new(title).color(LABEL_COLOR));
}

pub fn show_settings_panel(ui: &mut egui::Ui, app: &mut GridToolApp) {
    ui.heading("SETTINGS");
    ui.separator();

    let has_image = app.session.has_image();
    if !has_image {
        ui.label(egui::RichText::new("Open an image to adjust the grid").weak());
    }

    ui.add_enabled_ui(has_image, |ui| {
        let grid = *app.session.grid();

        section(ui, "Grid Size");
        let mut cell_count = grid.cell_count;
        if ui
            .add(egui::Slider::new(&mut cell_count, defaults::CELL_COUNT_MIN..=defaults::CELL_COUNT_MAX))
            .changed()
        {
            app.dispatch(Command::SetCellCount(cell_count));
        }

        section(ui, "Line Thickness");
        let mut thickness = grid.thickness;
        if ui
            .add(egui::Slider::new(&mut thickness, defaults::THICKNESS_MIN..=defaults::THICKNESS_MAX).suffix(" px"))
            .changed()
        {
            app.dispatch(Command::SetThickness(thickness));
        }

        section(ui, "Line Color");
        ui.horizontal(|ui| {
            let mut rgb = grid.color.0;
            if ui.color_edit_button_srgb(&mut rgb).on_hover_text("Choose Color").changed() {
                app.dispatch(Command::SetColor(rgb));
            }
            if ui.button("Reset").clicked() {
                app.dispatch(Command::ResetColor);
            }
            ui.label(egui::RichText::new(grid.color_hex()).monospace().weak());
        });

        section(ui, "Cell Type");
        let mut square_cells = grid.square_cells;
        if ui.checkbox(&mut square_cells, "Use Square Cells").changed() {
            app.dispatch(Command::SetSquareCells(square_cells));
        }

        section(ui, "Rotation");
        ui.horizontal(|ui| {
            let current = app.session.view().rotation;
            for rotation in Rotation::all() {
                if ui.selectable_label(current == rotation, rotation.label()).clicked() {
                    app.dispatch(Command::SetRotation(rotation));
                }
            }
        });

        ui.add_space(20.0);
        let apply = egui::Button::new(egui::RichText::new("APPLY CHANGES").strong().color(egui::Color32::WHITE))
            .fill(egui::Color32::from_rgb(0x4C, 0xAF, 0x50))
            .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add(apply).clicked() {
            app.dispatch(Command::ApplyChanges);
        }
    });
}
