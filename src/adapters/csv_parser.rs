use std::{fs::File, path::Path};

use crate::error::ConvertError;

/// Build CSV reader for an exported list. Fields are kept as-is, short rows are
/// accepted and only fail if the looked-up column is missing from them.
pub fn build_csv_reader(path: &Path) -> Result<csv::Reader<File>, ConvertError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    Ok(reader)
}
