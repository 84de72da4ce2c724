use egui_dock::{NodeIndex, SurfaceIndex};
use egui_lens::ReactiveEventLogger;

use crate::GridToolApp;
use crate::ui;

/// Define the tabs for the DockArea
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabKind {
    Settings,
    Preview,
    EventLog,
}

pub struct TabParams<'a> {
    pub app: &'a mut GridToolApp,
}

/// Tab container struct for DockArea
#[derive(Clone)]
pub struct Tab {
    pub kind: TabKind,
    #[allow(dead_code)]
    pub surface: Option<SurfaceIndex>,
    #[allow(dead_code)]
    pub node: Option<NodeIndex>,
}

impl Tab {
    pub fn new(kind: TabKind, surface: SurfaceIndex, node: NodeIndex) -> Self {
        Self {
            kind,
            surface: Some(surface),
            node: Some(node),
        }
    }

    pub fn title(&self) -> String {
        match self.kind {
            TabKind::Settings => "Settings".to_string(),
            TabKind::Preview => "Preview".to_string(),
            TabKind::EventLog => "Event Log".to_string(),
        }
    }

    pub fn content(&self, ui: &mut egui::Ui, params: &mut TabParams<'_>) {
        match self.kind {
            TabKind::Settings => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui::show_settings_panel(ui, params.app);
                });
            }
            TabKind::Preview => {
                ui::show_preview(ui, params.app);
            }
            TabKind::EventLog => {
                ui.horizontal(|ui| {
                    if ui.small_button("System Info").clicked() {
                        let logger = ReactiveEventLogger::with_colors(&params.app.logger_state, &params.app.log_colors);
                        ui::show_system_info(&logger);
                    }
                });
                let logger = ReactiveEventLogger::with_colors(&params.app.logger_state, &params.app.log_colors);
                logger.show(ui);
            }
        }
    }
}

pub struct TabViewer<'a> {
    pub app: &'a mut GridToolApp,
}

impl<'a> egui_dock::TabViewer for TabViewer<'a> {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.title().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        let mut params = TabParams {
            app: self.app,
        };
        tab.content(ui, &mut params);
    }
}
