//! Store layer - round trips to the remote `items` table
//!
//! The Store actor receives table commands and sends back responses.

pub mod actor;
pub mod client;
pub mod error;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
