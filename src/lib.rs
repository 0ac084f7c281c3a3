//! # Inventory TUI
//!
//! A minimal terminal inventory manager over a hosted PostgREST table.
//!
//! ## Features
//! - List every item (id, name, description, quantity)
//! - Add an item from a four-field form
//! - Delete the selected item
//! - The list is re-fetched in full after every successful change
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (owns the item collection)
//! - Store Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use models::{Item, NewItem};
pub use messages::{UiEvent, StoreCommand, StoreResponse, RenderState};
pub use app::{AppState, AppActor};
pub use store::{StoreActor, StoreClient, StoreError};
