//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{FormField, InputMode, Panel};
use crate::models::{Item, NewItem};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    // List
    pub items: Vec<Item>,
    pub selected: usize,

    // Form
    pub form: NewItem,
    pub active_field: FormField,
    pub cursor_position: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,

    // Popups
    pub show_help: bool,
}
