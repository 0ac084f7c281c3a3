use thiserror::Error;

/// A failed remote operation.
///
/// The app treats every variant the same way; they differ only in what ends
/// up in the log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never got a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-2xx status
    #[error("store returned {status}: {message}")]
    Remote { status: u16, message: String },

    /// The response body did not decode into rows
    #[error("could not decode rows: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StoreError {
    /// Build a `Remote` error, preferring PostgREST's JSON `message` field
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());
        StoreError::Remote { status, message }
    }
}
