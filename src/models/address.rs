use serde::Deserialize;

use crate::error::ConvertError;

/// Column holding the account address, in both the input and the output file.
pub const ADDRESS_COLUMN: &str = "Account address";

/// Suffixes of accounts that are already bridged or not reachable through the bridge.
pub const EXCLUDED_SUFFIXES: [&str; 2] = ["@bsky.brid.gy", "@threads.net"];

const BRIDGE_DOMAIN: &str = "ap.brid.gy";

/// CSV input record. Any other column in the export is ignored.
#[derive(Deserialize, Debug)]
pub struct AddressRecord {
    #[serde(rename = "Account address")]
    pub address: String,
}

/// Checks the raw address, before any `@` stripping, against the excluded suffixes.
pub fn is_excluded(address: &str) -> bool {
    EXCLUDED_SUFFIXES
        .iter()
        .any(|suffix| address.ends_with(suffix))
}

/// Rewrites `@username@instance` into `@username.instance.ap.brid.gy`.
///
/// Leading and trailing `@` characters are stripped first; what remains must
/// contain exactly one `@`.
pub fn to_bridged(address: &str) -> Result<String, ConvertError> {
    let parts: Vec<&str> = address.trim_matches('@').split('@').collect();

    match parts.as_slice() {
        [username, instance] => Ok(format!("@{}.{}.{}", username, instance, BRIDGE_DOMAIN)),
        _ => Err(ConvertError::MalformedAddress {
            address: address.to_string(),
            parts: parts.len(),
        }),
    }
}
