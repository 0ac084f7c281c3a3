//! Command handlers - business logic for processing UI events and store responses
//!
//! Mutations never touch `items` directly. A successful insert or delete
//! answers with a fresh `SelectAll`, and only its rows replace the collection.

use crate::app::AppState;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{StoreCommand, StoreResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
        self.input_mode = InputMode::Normal;
    }

    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }

    pub fn select_next(&mut self) {
        self.list.select_next(&self.items);
    }

    pub fn select_prev(&mut self) {
        self.list.select_prev(&self.items);
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.active_panel == Panel::Form {
            self.input_mode = InputMode::Editing;
            self.form.focus(self.form.active_field);
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Store commands
    // ========================

    /// Re-query the whole table
    pub fn fetch_items(&mut self) -> StoreCommand {
        StoreCommand::SelectAll { id: self.next_id() }
    }

    /// Insert the form values as one record. Fields stay as they are until
    /// the store confirms.
    pub fn submit_form(&mut self) -> StoreCommand {
        self.input_mode = InputMode::Normal;
        StoreCommand::Insert {
            id: self.next_id(),
            record: self.form.record(),
        }
    }

    /// Delete the selected row, if any
    pub fn delete_selected(&mut self) -> Option<StoreCommand> {
        let item_id = self.list.selected_item(&self.items)?.id;
        Some(StoreCommand::Delete {
            id: self.next_id(),
            item_id,
        })
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a store response; returns the follow-up refresh, if any
    pub fn handle_response(&mut self, response: StoreResponse) -> Option<StoreCommand> {
        let id = response.id();
        match response {
            StoreResponse::Rows { items, .. } => {
                tracing::debug!(id, rows = items.len(), "Replacing item collection");
                self.items = items;
                self.list.clamp(&self.items);
                None
            }
            StoreResponse::Inserted { .. } => {
                tracing::debug!(id, "Insert confirmed, clearing form");
                self.form.clear();
                Some(self.fetch_items())
            }
            StoreResponse::Deleted { .. } => {
                tracing::debug!(id, "Delete confirmed");
                Some(self.fetch_items())
            }
            StoreResponse::Failed { op, message, .. } => {
                tracing::error!(id, op = op.as_str(), error = %message, "Remote operation failed");
                None
            }
        }
    }
}
