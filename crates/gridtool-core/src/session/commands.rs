use crate::display::{Rotation, ScrollDirection};
use crate::image_io::SourceImage;

/// Every user action the session understands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Start screen
    StartEditing,
    ShowAbout,

    // Navigation
    BackToStart,
    ConfirmBackToStart,
    CancelPrompt,

    // Image
    ImageLoaded(SourceImage),
    ResetAll,
    ApplyChanges,

    // Grid
    SetCellCount(u32),
    SetThickness(u32),
    SetColor([u8; 3]),
    ResetColor,
    SetSquareCells(bool),

    // View
    SetRotation(Rotation),
    ZoomIn,
    ZoomOut,
    ZoomScroll(ScrollDirection),
    ResetZoom,
}

/// Whether the preview has to be recomputed after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderRequest {
    #[default]
    None,
    Refresh,
}

/// Modal questions and notices the UI must show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    ConfirmBackToStart,
    About,
}

/// Result of handling one command
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Effect {
    pub render: RenderRequest,
    pub status: Option<String>,
    pub prompt: Option<Prompt>,
}

impl Effect {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn refresh() -> Self {
        Self {
            render: RenderRequest::Refresh,
            ..Self::default()
        }
    }

    pub fn prompt(prompt: Prompt) -> Self {
        Self {
            prompt: Some(prompt),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn needs_render(&self) -> bool {
        self.render == RenderRequest::Refresh
    }
}
