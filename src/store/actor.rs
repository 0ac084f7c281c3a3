//! Store actor - runs table operations in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{StoreCommand, StoreOp, StoreResponse};
use crate::store::{StoreClient, StoreError};

/// Store actor that executes table commands.
///
/// Every command runs as its own task; responses come back in completion
/// order, not submission order.
pub struct StoreActor {
    client: StoreClient,
    response_tx: mpsc::UnboundedSender<StoreResponse>,
    active_requests: JoinSet<()>,
}

impl StoreActor {
    pub fn new(client: StoreClient, response_tx: mpsc::UnboundedSender<StoreResponse>) -> Self {
        StoreActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the store actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<StoreCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(StoreCommand::Shutdown) | None => break,
                        Some(cmd) => self.spawn(cmd),
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }

    fn spawn(&mut self, cmd: StoreCommand) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();

        self.active_requests.spawn(async move {
            if let Some(response) = execute(&client, cmd).await {
                let _ = response_tx.send(response);
            }
        });
    }
}

/// Perform one command and turn the outcome into a response
pub async fn execute(client: &StoreClient, cmd: StoreCommand) -> Option<StoreResponse> {
    let response = match cmd {
        StoreCommand::SelectAll { id } => {
            tracing::debug!(id, table = %client.table_url(), "Selecting all rows");
            match client.select_all().await {
                Ok(items) => {
                    tracing::info!(id, rows = items.len(), "Rows fetched");
                    StoreResponse::Rows { id, items }
                }
                Err(e) => failed(id, StoreOp::SelectAll, e),
            }
        }
        StoreCommand::Insert { id, record } => {
            tracing::debug!(id, item_id = %record.id, "Inserting row");
            match client.insert(&record).await {
                Ok(()) => {
                    tracing::info!(id, item_id = %record.id, "Row inserted");
                    StoreResponse::Inserted { id }
                }
                Err(e) => failed(id, StoreOp::Insert, e),
            }
        }
        StoreCommand::Delete { id, item_id } => {
            tracing::debug!(id, item_id, "Deleting row");
            match client.delete(item_id).await {
                Ok(()) => {
                    tracing::info!(id, item_id, "Row deleted");
                    StoreResponse::Deleted { id }
                }
                Err(e) => failed(id, StoreOp::Delete, e),
            }
        }
        StoreCommand::Shutdown => return None,
    };
    Some(response)
}

fn failed(id: u64, op: StoreOp, error: StoreError) -> StoreResponse {
    StoreResponse::Failed {
        id,
        op,
        message: error.to_string(),
    }
}
