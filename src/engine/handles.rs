use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    adapters::{
        cli::RunConfig,
        output::{build_csv_writer, write_header, write_value},
    },
    error::ConvertError,
    models::follow::{FollowRecord, HANDLE_COLUMN},
};

/// Collect the followed accounts from a directory of exported follow records, one JSON
/// document per file, in file name order. Subdirectories are skipped.
pub fn extract_handles(directory: &Path) -> Result<Vec<String>, ConvertError> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;

        if entry.file_type()?.is_dir() {
            debug!("Skipping directory {}", entry.path().display());
            continue;
        }

        paths.push(entry.path());
    }

    paths.sort();

    let mut handles = Vec::new();

    for path in paths {
        let content = fs::read(&path)?;
        let record: FollowRecord = serde_json::from_slice(&content)
            .map_err(|source| ConvertError::FollowRecord {
                path: path.clone(),
                source,
            })?;

        match record.handle() {
            Some(handle) => handles.push(handle.to_string()),
            None => debug!("No subject in {}", path.display()),
        }
    }

    Ok(handles)
}

pub fn write_handles<W: Write>(
    csv_writer: &mut csv::Writer<W>,
    handles: &[String],
) -> Result<(), ConvertError> {
    write_header(csv_writer, HANDLE_COLUMN)?;

    for handle in handles {
        write_value(csv_writer, handle)?;
    }

    csv_writer.flush()?;

    Ok(())
}

/// Extract every handle first, so a bad record leaves no output file behind.
pub fn run(config: &RunConfig) -> Result<usize, ConvertError> {
    let handles = extract_handles(&config.input_path)?;

    let mut csv_writer = build_csv_writer(&config.output_path)?;
    write_handles(&mut csv_writer, &handles)?;

    info!("Extracted {} handles.", handles.len());

    Ok(handles.len())
}
