//! Editing session: which screen is showing, the loaded image, and the grid
//! and view settings applied to it.
//!
//! All user actions arrive as [`Command`]s. [`Session::apply`] mutates the
//! session and answers with an [`Effect`] telling the UI whether to
//! re-render, what to put in the status bar and which modal to open.

pub mod commands;
pub mod constants;
pub mod defaults;

pub use commands::{Command, Effect, Prompt, RenderRequest};

use egui::Vec2;
use image::{Rgb, RgbaImage};

use crate::display::{self, RenderedFrame, ViewState};
use crate::grid::GridParameters;
use crate::image_io::SourceImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Idle, nothing loaded
    #[default]
    Start,

    /// Main editing screen
    Editor,
}

/// Everything the editor screen works on
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub source: Option<SourceImage>,
    pub grid: GridParameters,
    pub view: ViewState,
}

impl EditorState {
    fn reset_settings(&mut self) {
        self.grid = GridParameters::default();
        self.view = ViewState::default();
    }
}

#[derive(Debug, Default)]
pub struct Session {
    pub screen: Screen,
    pub editor: EditorState,

    /// Modal currently waiting for an answer
    pub pending_prompt: Option<Prompt>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_image(&self) -> bool {
        self.editor.source.is_some()
    }

    pub fn grid(&self) -> &GridParameters {
        &self.editor.grid
    }

    pub fn view(&self) -> &ViewState {
        &self.editor.view
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.editor.source.as_ref()
    }

    /// Handle one user action
    pub fn apply(&mut self, command: Command) -> Effect {
        log::debug!("Session command {:?} on {:?} screen", CommandName(&command), self.screen);

        match self.screen {
            Screen::Start => self.apply_on_start(command),
            Screen::Editor => self.apply_on_editor(command),
        }
    }

    fn apply_on_start(&mut self, command: Command) -> Effect {
        match command {
            Command::StartEditing => {
                self.screen = Screen::Editor;
                self.editor = EditorState::default();
                Effect::none().with_status(constants::READY_STATUS)
            }
            Command::ShowAbout => self.open_prompt(Prompt::About),
            Command::CancelPrompt => self.close_prompt(),
            _ => Effect::none(),
        }
    }

    fn apply_on_editor(&mut self, command: Command) -> Effect {
        match command {
            Command::StartEditing => Effect::none(),
            Command::ShowAbout => self.open_prompt(Prompt::About),

            Command::BackToStart => {
                if self.has_image() {
                    self.open_prompt(Prompt::ConfirmBackToStart)
                } else {
                    self.return_to_start()
                }
            }
            Command::ConfirmBackToStart => {
                if self.pending_prompt == Some(Prompt::ConfirmBackToStart) {
                    self.return_to_start()
                } else {
                    Effect::none()
                }
            }
            Command::CancelPrompt => self.close_prompt(),

            Command::ImageLoaded(source) => {
                let status = format!("Loaded: {}", source.file_name());
                // Replace image and settings together
                self.editor = EditorState {
                    source: Some(source),
                    ..EditorState::default()
                };
                Effect::refresh().with_status(status)
            }

            // Everything below needs an image
            _ if !self.has_image() => Effect::none(),

            Command::ResetAll => {
                self.editor.reset_settings();
                Effect::refresh().with_status("All settings reset to default values")
            }
            Command::ApplyChanges => Effect::refresh().with_status("Changes applied successfully!"),

            Command::SetCellCount(count) => {
                let previous = self.editor.grid;
                self.editor.grid.set_cell_count(count);
                self.refresh_if_changed(previous)
            }
            Command::SetThickness(thickness) => {
                let previous = self.editor.grid;
                self.editor.grid.set_thickness(thickness);
                self.refresh_if_changed(previous)
            }
            Command::SetColor(rgb) => {
                self.editor.grid.color = Rgb(rgb);
                Effect::refresh().with_status(format!("Grid Color: {}", self.editor.grid.color_hex()))
            }
            Command::ResetColor => {
                self.editor.grid.reset_color();
                Effect::refresh()
            }
            Command::SetSquareCells(square_cells) => {
                let previous = self.editor.grid;
                self.editor.grid.square_cells = square_cells;
                self.refresh_if_changed(previous)
            }

            Command::SetRotation(rotation) => {
                self.editor.view.rotation = rotation;
                Effect::refresh().with_status(format!("Rotation set to {}", rotation.label()))
            }
            Command::ZoomIn => {
                self.editor.view.zoom_in();
                Effect::refresh()
            }
            Command::ZoomOut => {
                self.editor.view.zoom_out();
                Effect::refresh()
            }
            Command::ZoomScroll(direction) => {
                self.editor.view.zoom_scroll(direction);
                Effect::refresh()
            }
            Command::ResetZoom => {
                self.editor.view.reset_zoom();
                Effect::refresh()
            }
        }
    }

    fn refresh_if_changed(&self, previous: GridParameters) -> Effect {
        if previous == self.editor.grid {
            Effect::none()
        } else {
            Effect::refresh()
        }
    }

    fn open_prompt(&mut self, prompt: Prompt) -> Effect {
        self.pending_prompt = Some(prompt);
        Effect::prompt(prompt)
    }

    fn close_prompt(&mut self) -> Effect {
        self.pending_prompt = None;
        Effect::none()
    }

    fn return_to_start(&mut self) -> Effect {
        self.screen = Screen::Start;
        self.editor = EditorState::default();
        self.pending_prompt = None;
        Effect::none()
    }

    /// Preview frame for the current settings, None without an image
    pub fn render(&self, viewport: Vec2) -> Option<RenderedFrame> {
        let source = self.editor.source.as_ref()?;
        Some(display::render(
            &source.pixels,
            self.editor.view.rotation,
            &self.editor.grid,
            self.editor.view.zoom(),
            viewport,
        ))
    }

    /// Image to write on save: rotation and grid, never zoom
    pub fn output_image(&self) -> Option<RgbaImage> {
        let source = self.editor.source.as_ref()?;
        Some(display::compose_for_save(
            &source.pixels,
            self.editor.view.rotation,
            &self.editor.grid,
        ))
    }
}

/// Debug view of a command that leaves out image pixels
struct CommandName<'a>(&'a Command);

impl std::fmt::Debug for CommandName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Command::ImageLoaded(source) => write!(f, "ImageLoaded({})", source.path.display()),
            other => write!(f, "{:?}", other),
        }
    }
}
