//! App state - pure data structure with no I/O logic

use crate::app::form::ItemForm;
use crate::app::list::ItemList;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::Item;

/// Root container: owns the item collection, the form and the list view.
///
/// `items` is only ever replaced wholesale by a fetched snapshot.
#[derive(Debug, Default)]
pub struct AppState {
    pub items: Vec<Item>,
    pub form: ItemForm,
    pub list: ItemList,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub show_help: bool,

    pub next_command_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            next_command_id: 1,
            ..Default::default()
        }
    }

    /// Generate a unique command ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_command_id;
        self.next_command_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            items: self.items.clone(),
            selected: self.list.selected,
            form: self.form.values.clone(),
            active_field: self.form.active_field,
            cursor_position: self.form.cursor_position,
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            show_help: self.show_help,
        }
    }
}
