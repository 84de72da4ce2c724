use crate::platform::parameters::gui;

pub struct AboutPanel;

impl AboutPanel {
    pub fn render(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(format!("{} v{}", gui::APPLICATION_NAME, gui::VERSION));
            ui.add_space(8.0);
            ui.label("A modern application for adding customizable grids to images.");
        });

        ui.add_space(12.0);
        ui.label(egui::RichText::new("Features").strong());
        ui.label("• Customizable grid size and color");
        ui.label("• Square or rectangular grid cells");
        ui.label("• Image rotation");
        ui.label("• Zoom and pan functionality");

        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(format!(
                "image {} · egui {}",
                env!("IMAGE_CRATE_VERSION"),
                env!("EGUI_CRATE_VERSION")
            ))
            .small()
            .weak(),
        );
    }
}
