use crate::utils::error::{Result, SerpError};
use crate::utils::validation::validate_file_extension;
use std::path::Path;

/// Header names that identify the keyword column, compared case-insensitively.
const KEYWORD_HEADERS: &[&str] = &["keyword", "keywords", "query", "queries"];

/// Splits a free-text keyword field on newlines and commas, dropping blanks.
pub fn parse_inline(input: &str) -> Vec<String> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Gathers the keyword list for one submission: free-text values split on
/// newlines and commas, then any spreadsheet rows appended in file order.
pub fn collect(inline: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut keywords: Vec<String> = inline
        .iter()
        .flat_map(|value| parse_inline(value))
        .collect();

    if let Some(path) = file {
        keywords.extend(load_spreadsheet(path)?);
    }

    Ok(keywords)
}

/// Reads the keyword column from a CSV or TSV spreadsheet.
///
/// The column is located by header name (`keyword`/`query` variants, any
/// case). A spreadsheet without a recognizable keyword column is rejected as
/// a validation error rather than failing mid-read.
pub fn load_spreadsheet(path: &Path) -> Result<Vec<String>> {
    let path_str = path.to_string_lossy();
    validate_file_extension("keywords_file", &path_str, &["csv", "tsv"])?;

    let delimiter = match path.extension().and_then(|ext| ext.to_str()) {
        Some("tsv") => b'\t',
        _ => b',',
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;

    let column = keyword_column(reader.headers()?)?;

    let mut keywords = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(cell) = record.get(column) {
            let keyword = cell.trim();
            if !keyword.is_empty() {
                keywords.push(keyword.to_string());
            }
        }
    }

    tracing::debug!("Loaded {} keywords from {}", keywords.len(), path_str);
    Ok(keywords)
}

fn keyword_column(headers: &csv::StringRecord) -> Result<usize> {
    headers
        .iter()
        .position(|header| {
            KEYWORD_HEADERS.contains(&header.trim().to_ascii_lowercase().as_str())
        })
        .ok_or_else(|| SerpError::ValidationError {
            message: format!(
                "Keyword file has no keyword column (accepted headers: {})",
                KEYWORD_HEADERS.join(", ")
            ),
        })
}
