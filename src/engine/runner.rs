use std::io::{Read, Write};

use log::{debug, info};

use crate::{
    adapters::{
        cli::RunConfig,
        csv_parser::build_csv_reader,
        output::{build_csv_writer, write_header, write_value},
    },
    error::ConvertError,
    models::address::{ADDRESS_COLUMN, AddressRecord, is_excluded, to_bridged},
};

/// Row counts for a finished run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub read: usize,
    pub converted: usize,
    pub excluded: usize,
}

/// Read records, drop excluded ones and write the bridged form of the rest, in input order.
/// Stops at the first bad row; everything written before it stays in the writer.
pub fn convert_addresses<R: Read, W: Write>(
    csv_reader: &mut csv::Reader<R>,
    csv_writer: &mut csv::Writer<W>,
) -> Result<RunSummary, ConvertError> {
    let mut summary = RunSummary::default();

    write_header(csv_writer, ADDRESS_COLUMN)?;

    for result in csv_reader.deserialize::<AddressRecord>() {
        let record = result?;
        summary.read += 1;

        if is_excluded(&record.address) {
            debug!("Excluding {}", record.address);
            summary.excluded += 1;
            continue;
        }

        let bridged = to_bridged(&record.address)?;
        debug!("Converted {} -> {}", record.address, bridged);

        write_value(csv_writer, &bridged)?;
        summary.converted += 1;
    }

    csv_writer.flush()?;

    Ok(summary)
}

/// Open both files and run the conversion. Handles are closed when they go out of scope,
/// on success or on error.
pub fn run(config: &RunConfig) -> Result<RunSummary, ConvertError> {
    let mut csv_reader = build_csv_reader(&config.input_path)?;
    let mut csv_writer = build_csv_writer(&config.output_path)?;

    let summary = convert_addresses(&mut csv_reader, &mut csv_writer)?;

    info!(
        "Read {} records, converted {}, excluded {}.",
        summary.read, summary.converted, summary.excluded
    );

    Ok(summary)
}
