use serde::Deserialize;

/// CSV input record for the link page. Any other column is ignored.
#[derive(Deserialize, Debug)]
pub struct ProfileRecord {
    #[serde(rename = "Profile URL")]
    pub url: String,
}
