//! App actor - message loop processing UI events and store responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, StoreCommand, StoreResponse, UiEvent};

/// App actor that processes UI events and store responses.
///
/// It is the only writer of the item collection.
pub struct AppActor {
    state: AppState,
    store_tx: mpsc::UnboundedSender<StoreCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        store_tx: mpsc::UnboundedSender<StoreCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            store_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut store_rx: mpsc::UnboundedReceiver<StoreResponse>,
    ) {
        // Initial load
        let cmd = self.state.fetch_items();
        self.send(cmd);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.store_tx.send(StoreCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = store_rx.recv() => {
                    if let Some(cmd) = self.state.handle_response(response) {
                        self.send(cmd);
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send(&self, cmd: StoreCommand) {
        if let Some(op) = cmd.op() {
            tracing::debug!(op = op.as_str(), "Dispatching store command");
        }
        let _ = self.store_tx.send(cmd);
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Navigation
            UiEvent::NextPanel => self.state.next_panel(),
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),

            // Input editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.form.enter_char(c),
            UiEvent::Backspace => self.state.form.delete_char(),
            UiEvent::CursorLeft => self.state.form.move_cursor_left(),
            UiEvent::CursorRight => self.state.form.move_cursor_right(),

            // Store actions
            UiEvent::SubmitForm => {
                let cmd = self.state.submit_form();
                self.send(cmd);
            }
            UiEvent::DeleteSelected => {
                if let Some(cmd) = self.state.delete_selected() {
                    self.send(cmd);
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
