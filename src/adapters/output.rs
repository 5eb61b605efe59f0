use std::{fs::File, io::Write, path::Path};

use crate::error::ConvertError;

/// Build single-column CSV writer, truncating any existing file.
pub fn build_csv_writer(path: &Path) -> Result<csv::Writer<File>, ConvertError> {
    let file = File::create(path)?;

    Ok(writer_builder().from_writer(file))
}

/// Headers are written by hand so that an empty result still gets one.
pub fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.has_headers(false).terminator(csv::Terminator::CRLF);
    builder
}

pub fn write_header<W: Write>(
    writer: &mut csv::Writer<W>,
    column: &str,
) -> Result<(), ConvertError> {
    writer.write_record([column])?;
    Ok(())
}

pub fn write_value<W: Write>(writer: &mut csv::Writer<W>, value: &str) -> Result<(), ConvertError> {
    writer.write_record([value])?;
    Ok(())
}
