//! App layer - central state management and command processing
//!
//! The App actor receives UI events and store responses,
//! updates state, and emits store commands and render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod form;
pub mod list;

pub use state::AppState;
pub use actor::AppActor;
pub use form::ItemForm;
pub use list::ItemList;
