use std::path::PathBuf;

/// Output file names, always relative to the current working directory.
pub const OUTPUT_FILE: &str = "output.csv";
pub const LINK_PAGE_FILE: &str = "output.html";
pub const HANDLES_FILE: &str = "accountHandles.csv";

pub const USAGE: &str = "Usage: masto_to_bsky <filename>.csv";
pub const LINK_PAGE_USAGE: &str = "Usage: link_page <filename>.csv";
pub const HANDLES_USAGE: &str = "Usage: bsky_handles <directory>";

/// Paths for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// Build the run configuration from a list of arguments, program name first.
/// Arguments past the input path are ignored.
pub fn config_from_args<I>(args: I, output_file: &str) -> Option<RunConfig>
where
    I: IntoIterator<Item = String>,
{
    let input_path = args.into_iter().nth(1)?;

    Some(RunConfig {
        input_path: PathBuf::from(input_path),
        output_path: PathBuf::from(output_file),
    })
}

/// Parse command-line arguments for the input path, printing `usage` and exiting if it is missing
pub fn parse_config_from_cli_args(usage: &str, output_file: &str) -> RunConfig {
    config_from_args(std::env::args(), output_file).unwrap_or_else(|| {
        println!("{}", usage);
        std::process::exit(1);
    })
}
