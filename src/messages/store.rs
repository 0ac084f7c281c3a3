//! Store messages - communication between App and Store layers

use crate::models::{Item, NewItem};

/// Commands sent from App layer to Store layer
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    /// Fetch every row of the table
    SelectAll { id: u64 },
    /// Insert one record
    Insert { id: u64, record: NewItem },
    /// Delete the row whose `id` column matches
    Delete { id: u64, item_id: i64 },
    /// Shutdown the store actor
    Shutdown,
}

impl StoreCommand {
    /// Operation kind, `None` for control messages
    pub fn op(&self) -> Option<StoreOp> {
        match self {
            StoreCommand::SelectAll { .. } => Some(StoreOp::SelectAll),
            StoreCommand::Insert { .. } => Some(StoreOp::Insert),
            StoreCommand::Delete { .. } => Some(StoreOp::Delete),
            StoreCommand::Shutdown => None,
        }
    }
}

/// Remote operation kinds, used to route failures and label logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    SelectAll,
    Insert,
    Delete,
}

impl StoreOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreOp::SelectAll => "select",
            StoreOp::Insert => "insert",
            StoreOp::Delete => "delete",
        }
    }
}

/// Responses sent from Store layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum StoreResponse {
    /// Full table snapshot
    Rows { id: u64, items: Vec<Item> },
    /// Insert accepted
    Inserted { id: u64 },
    /// Delete accepted
    Deleted { id: u64 },
    /// Any remote-operation failure
    Failed {
        id: u64,
        op: StoreOp,
        message: String,
    },
}

impl StoreResponse {
    /// Get the command ID from the response
    pub fn id(&self) -> u64 {
        match self {
            StoreResponse::Rows { id, .. } => *id,
            StoreResponse::Inserted { id } => *id,
            StoreResponse::Deleted { id } => *id,
            StoreResponse::Failed { id, .. } => *id,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, StoreResponse::Failed { .. })
    }
}
