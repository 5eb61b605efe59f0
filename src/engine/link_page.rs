use std::{fmt::Write as _, fs, io::Read};

use log::info;

use crate::{
    adapters::{cli::RunConfig, csv_parser::build_csv_reader},
    error::ConvertError,
    models::profile::ProfileRecord,
};

const PAGE_TITLE: &str = "Profile URLs";
const PAGE_CSS: &str =
    "a { text-decoration: none; color: blue; } a:hover { text-decoration: underline; }";

/// Read every `Profile URL` value, in input order.
pub fn collect_urls<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<Vec<String>, ConvertError> {
    let mut urls = Vec::new();

    for result in csv_reader.deserialize::<ProfileRecord>() {
        let record = result?;
        urls.push(record.url);
    }

    Ok(urls)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// One link per URL, each opening in a new tab.
pub fn render_page(urls: &[String]) -> String {
    let links = urls
        .iter()
        .map(|url| {
            let url = escape_html(url);
            format!(r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a><br>"#)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut page = String::new();
    let _ = writeln!(page, "<!DOCTYPE html>");
    let _ = writeln!(page, "<html lang=\"en\">");
    let _ = writeln!(page, "<head>");
    let _ = writeln!(page, "<meta charset=\"utf-8\">");
    let _ = writeln!(page, "<title>{}</title>", PAGE_TITLE);
    let _ = writeln!(page, "<style>{}</style>", PAGE_CSS);
    let _ = writeln!(page, "</head>");
    let _ = writeln!(page, "<body>");
    let _ = writeln!(page, "{}", links);
    let _ = writeln!(page, "</body>");
    let _ = writeln!(page, "</html>");

    page
}

/// Read the whole CSV before creating the page, so a bad row leaves no output file.
pub fn run(config: &RunConfig) -> Result<usize, ConvertError> {
    let mut csv_reader = build_csv_reader(&config.input_path)?;
    let urls = collect_urls(&mut csv_reader)?;

    fs::write(&config.output_path, render_page(&urls))?;

    info!("Wrote {} links.", urls.len());

    Ok(urls.len())
}
