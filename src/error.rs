use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions that abort a run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The address did not split into exactly a username and an instance.
    #[error("malformed address {address:?}: expected username@instance, got {parts} part(s)")]
    MalformedAddress { address: String, parts: usize },

    #[error("invalid follow record {}: {source}", path.display())]
    FollowRecord {
        path: PathBuf,
        source: serde_json::Error,
    },
}
