use serde::Deserialize;

/// Column of the extracted handles file.
pub const HANDLE_COLUMN: &str = "Handle";

/// One `app.bsky.graph.follow` record from a repository export. Only the subject is read.
#[derive(Deserialize, Debug)]
pub struct FollowRecord {
    #[serde(default)]
    pub subject: Option<String>,
}

impl FollowRecord {
    /// The followed account, if the record names one.
    ///
    /// Handles are not resolved over the network, so this is the subject DID as stored.
    pub fn handle(&self) -> Option<&str> {
        self.subject.as_deref().filter(|subject| !subject.is_empty())
    }
}
