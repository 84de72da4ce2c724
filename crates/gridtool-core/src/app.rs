use std::path::Path;

use egui_dock::{DockArea, DockState, NodeIndex, Style, SurfaceIndex};
use egui_file_dialog::FileDialog;

/// egui_lens imports
use egui_lens::{LogColors, ReactiveEventLogger, ReactiveEventLoggerState};
use egui_mobius_reactive::Dynamic;

use crate::image_io;
use crate::session::constants::{LOG_TYPE_FILE, LOG_TYPE_GRID, LOG_TYPE_ROTATION, LOG_TYPE_ZOOM, READY_STATUS};
use crate::session::{Command, Effect, Prompt, Screen, Session};
use crate::ui::{self, PreviewState, Tab, TabKind, TabViewer, initialize_and_show_banner};

/// Modal notices raised by file operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Warning(String),
}

/// The main application struct
pub struct GridToolApp {
    /// Screen, loaded image, grid and view settings
    pub session: Session,

    // Logger state and colors
    pub logger_state: Dynamic<ReactiveEventLoggerState>,
    pub log_colors: Dynamic<LogColors>,

    // Preview texture, centering and pan
    pub preview: PreviewState,

    // File dialogs
    pub open_dialog: FileDialog,
    pub save_dialog: FileDialog,

    /// Single-line status shown at the bottom of the window
    pub status: String,

    /// Error or warning window waiting to be dismissed
    pub notice: Option<Notice>,

    // Dock state
    dock_state: DockState<Tab>,
}

impl GridToolApp {
    /// **Create a new instance of the GridToolApp**
    ///
    /// Sets up the event log, logs the startup banner and system details and
    /// builds the editor dock layout. The application opens on the start screen.
    pub fn new() -> Self {
        let mut initial_logger_state = ReactiveEventLoggerState::new();
        // Set timestamp to be unchecked by default
        initial_logger_state.show_timestamps = false;
        let logger_state = Dynamic::new(initial_logger_state);
        let log_colors = Dynamic::new(LogColors::default());

        let app = Self {
            session: Session::new(),
            logger_state,
            log_colors,
            preview: PreviewState::new(),
            open_dialog: ui::dialogs::open_image_dialog(),
            save_dialog: ui::dialogs::save_image_dialog(),
            status: READY_STATUS.to_string(),
            notice: None,
            dock_state: Self::create_default_dock_state(),
        };

        let logger = ReactiveEventLogger::with_colors(&app.logger_state, &app.log_colors);
        initialize_and_show_banner(&logger);

        app
    }

    /// Run a command through the session and act on the resulting effect
    pub fn dispatch(&mut self, command: Command) {
        let category = log_category(&command);
        let effect = self.session.apply(command);
        self.handle_effect(category, effect);
    }

    fn handle_effect(&mut self, category: Option<&'static str>, effect: Effect) {
        if effect.needs_render() {
            self.preview.request_render();
        }

        // Leaving the editor drops the preview along with the image
        if !self.session.has_image() {
            self.preview.clear();
        }

        if let Some(category) = category {
            if effect.needs_render() || effect.status.is_some() {
                let message = self.event_message(category, effect.status.as_deref());
                ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors).log_custom(category, &message);
                log::info!("{}", message);
            }
        }

        if let Some(status) = effect.status {
            self.status = status;
        }
    }

    fn event_message(&self, category: &'static str, status: Option<&str>) -> String {
        match category {
            LOG_TYPE_GRID => {
                let grid = self.session.grid();
                format!(
                    "Grid: {} cells, {}px, {}, {}",
                    grid.cell_count,
                    grid.thickness,
                    grid.color_hex(),
                    grid.mode_description()
                )
            }
            LOG_TYPE_ZOOM => format!("Zoom {}%", self.session.view().zoom_percent()),
            _ => status.map(str::to_string).unwrap_or_else(|| category.to_string()),
        }
    }

    /// Load an image from disk; on failure the session is left untouched
    pub fn open_image(&mut self, path: &Path) {
        match image_io::load_image(path) {
            Ok(source) => {
                self.preview.pan.reset();
                self.dispatch(Command::ImageLoaded(source));
            }
            Err(e) => {
                let message = format!("Failed to load image: {}", e);
                ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors).log_error(&message);
                log::error!("{}", message);
                self.notice = Some(Notice::Error(message));
            }
        }
    }

    /// Ask for an output path, or warn when there is nothing to save
    pub fn request_save(&mut self) {
        if self.session.has_image() {
            self.save_dialog.save_file();
        } else {
            self.notice = Some(Notice::Warning("No image to save.".to_string()));
        }
    }

    /// Write the rotated, gridded image (zoom excluded) to `path`
    pub fn save_to(&mut self, path: &Path) {
        let Some(output) = self.session.output_image() else {
            self.notice = Some(Notice::Warning("No image to save.".to_string()));
            return;
        };

        match image_io::save_image(&output, path) {
            Ok(written) => {
                let status = format!("Saved: {}", image_io::display_name(&written));
                ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors).log_custom(LOG_TYPE_FILE, &format!("Saved {}", written.display()));
                self.status = status;
            }
            Err(e) => {
                let message = format!("Failed to save image: {}", e);
                ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors).log_error(&message);
                log::error!("{}", message);
                self.notice = Some(Notice::Error(message));
            }
        }
    }

    /// Poll the file dialogs and act on a picked path
    fn update_file_dialogs(&mut self, ctx: &egui::Context) {
        self.open_dialog.update(ctx);
        if let Some(path) = self.open_dialog.take_picked() {
            self.open_image(&path);
        }

        self.save_dialog.update(ctx);
        if let Some(path) = self.save_dialog.take_picked() {
            self.save_to(&path);
        }
    }

    fn create_default_dock_state() -> DockState<Tab> {
        let settings_tab = Tab::new(TabKind::Settings, SurfaceIndex::main(), NodeIndex(0));
        let preview_tab = Tab::new(TabKind::Preview, SurfaceIndex::main(), NodeIndex(1));
        let log_tab = Tab::new(TabKind::EventLog, SurfaceIndex::main(), NodeIndex(2));

        let mut dock_state = DockState::new(vec![preview_tab]);
        let surface = dock_state.main_surface_mut();

        let [left, _right] = surface.split_left(NodeIndex::root(), 0.25, vec![settings_tab]);

        surface.split_below(left, 0.7, vec![log_tab]);
        dock_state
    }

    fn show_editor(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::show_toolbar(ui, self);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.status).color(egui::Color32::from_rgb(0x55, 0x55, 0x55)));
                if let Some(source) = self.session.source() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (width, height) = source.dimensions();
                        ui.label(egui::RichText::new(format!("{} × {}", width, height)).weak());
                    });
                }
            });
        });

        // Main dock area between toolbar and status bar
        let mut dock_state = self.dock_state.clone();
        let mut tab_viewer = TabViewer { app: self };
        let mut style = Style::from_egui(ctx.style().as_ref());
        style.dock_area_padding = None;
        style.tab_bar.fill_tab_bar = true;

        DockArea::new(&mut dock_state)
            .style(style)
            .show_add_buttons(false)
            .show_close_buttons(false)
            .show(ctx, &mut tab_viewer);

        self.dock_state = dock_state;
    }

    fn show_modals(&mut self, ctx: &egui::Context) {
        match self.session.pending_prompt {
            Some(Prompt::ConfirmBackToStart) => {
                let answer = ui::dialogs::confirm_window(
                    ctx,
                    "Confirm",
                    "Are you sure you want to return to the start page?\nAny unsaved changes will be lost.",
                );
                match answer {
                    Some(true) => {
                        self.dispatch(Command::ConfirmBackToStart);
                        ReactiveEventLogger::with_colors(&self.logger_state, &self.log_colors).log_info("Returned to start page");
                    }
                    Some(false) => self.dispatch(Command::CancelPrompt),
                    None => {}
                }
            }
            Some(Prompt::About) => {
                if ui::dialogs::about_window(ctx) {
                    self.dispatch(Command::CancelPrompt);
                }
            }
            None => {}
        }

        let dismissed = self
            .notice
            .as_ref()
            .is_some_and(|notice| ui::dialogs::notice_window(ctx, notice));
        if dismissed {
            self.notice = None;
        }
    }
}

impl Default for GridToolApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Event log category for a command, None for commands that are not logged
fn log_category(command: &Command) -> Option<&'static str> {
    match command {
        Command::SetCellCount(_)
        | Command::SetThickness(_)
        | Command::SetColor(_)
        | Command::ResetColor
        | Command::SetSquareCells(_)
        | Command::ResetAll
        | Command::ApplyChanges => Some(LOG_TYPE_GRID),
        Command::SetRotation(_) => Some(LOG_TYPE_ROTATION),
        Command::ZoomIn | Command::ZoomOut | Command::ZoomScroll(_) | Command::ResetZoom => Some(LOG_TYPE_ZOOM),
        Command::ImageLoaded(_) => Some(LOG_TYPE_FILE),
        Command::StartEditing
        | Command::ShowAbout
        | Command::BackToStart
        | Command::ConfirmBackToStart
        | Command::CancelPrompt => None,
    }
}

/// Implement the eframe::App trait for GridToolApp
///
/// Each frame draws either the start page or the editor (toolbar, dock area
/// with settings, preview and event log, status bar), then any open modal.
/// File dialogs are polled here so a picked path is handled in the same frame.
impl eframe::App for GridToolApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.session.screen {
            Screen::Start => ui::show_start_page(ctx, self),
            Screen::Editor => self.show_editor(ctx),
        }

        self.update_file_dialogs(ctx);
        self.show_modals(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Rotation;
    use image::{Rgba, RgbaImage};

    fn editor_app() -> GridToolApp {
        let mut app = GridToolApp::new();
        app.dispatch(Command::StartEditing);
        app
    }

    fn write_png(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        image_io::save_image(&RgbaImage::from_pixel(40, 20, Rgba([10, 20, 30, 255])), &path).unwrap();
        path
    }

    #[test]
    fn corrupt_file_shows_error_and_keeps_current_image() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = editor_app();
        app.open_image(&write_png(dir.path(), "first.png"));
        app.dispatch(Command::SetCellCount(7));
        assert_eq!(app.status, "Loaded: first.png");

        let broken = dir.path().join("broken.jpg");
        std::fs::write(&broken, b"not a jpeg").unwrap();
        app.open_image(&broken);

        assert!(matches!(&app.notice, Some(Notice::Error(message)) if message.contains("broken.jpg")));
        assert_eq!(app.session.source().map(|s| s.file_name()), Some("first.png".to_string()));
        assert_eq!(app.session.grid().cell_count, 7);
        assert_eq!(app.status, "Loaded: first.png");
    }

    #[test]
    fn unsupported_save_shows_error_and_keeps_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = editor_app();
        app.open_image(&write_png(dir.path(), "photo.png"));
        let status = app.status.clone();

        let target = dir.path().join("out.tiff");
        app.save_to(&target);

        assert!(matches!(app.notice, Some(Notice::Error(_))));
        assert_eq!(app.status, status);
        assert!(!target.exists());
    }

    #[test]
    fn save_without_image_warns() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = editor_app();

        app.request_save();
        assert_eq!(app.notice, Some(Notice::Warning("No image to save.".to_string())));

        app.notice = None;
        app.save_to(&dir.path().join("out.png"));
        assert_eq!(app.notice, Some(Notice::Warning("No image to save.".to_string())));
        assert!(!dir.path().join("out.png").exists());
    }

    #[test]
    fn closed_dialogs_pick_nothing() {
        let ctx = egui::Context::default();
        let mut app = editor_app();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.update_file_dialogs(ctx));

        assert_eq!(app.notice, None);
        assert!(!app.session.has_image());
        assert_eq!(app.status, READY_STATUS);
    }

    #[test]
    fn successful_save_updates_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = editor_app();
        app.open_image(&write_png(dir.path(), "photo.png"));
        app.dispatch(Command::SetRotation(Rotation::Deg90));

        app.save_to(&dir.path().join("result"));

        assert_eq!(app.notice, None);
        assert_eq!(app.status, "Saved: result.png");
        let saved = image_io::load_image(&dir.path().join("result.png")).unwrap();
        assert_eq!(saved.dimensions(), (20, 40));
    }

    #[test]
    fn commands_map_to_log_categories() {
        assert_eq!(log_category(&Command::SetCellCount(4)), Some(LOG_TYPE_GRID));
        assert_eq!(log_category(&Command::SetRotation(Rotation::Deg90)), Some(LOG_TYPE_ROTATION));
        assert_eq!(log_category(&Command::ZoomIn), Some(LOG_TYPE_ZOOM));
        assert_eq!(log_category(&Command::BackToStart), None);
    }
}
