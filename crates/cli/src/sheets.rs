use std::fmt;

use doclink_recon::model::MatchResult;
use doclink_recon::title::compose;

pub const DIRECTORY_COLUMN: &str = "directory";
pub const TITLE_COLUMN: &str = "title";

const RESULT_HEADERS: [&str; 6] = ["row", "title", "outcome", "score", "key", "link"];

#[derive(Debug, PartialEq)]
pub enum SheetError {
    /// Malformed CSV.
    Csv(String),
    /// Required header absent from the title sheet.
    MissingColumn(String),
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::MissingColumn(column) => write!(f, "missing column '{column}'"),
        }
    }
}

impl std::error::Error for SheetError {}

/// One path per line; blank lines are skipped.
pub fn read_paths(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Titles in sheet order, each composed with its directory prefix. Row `i`
/// of the result is data row `i` of the sheet.
pub fn read_titles(csv_data: &str) -> Result<Vec<String>, SheetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SheetError::Csv(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let idx = |name: &str| -> Result<usize, SheetError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SheetError::MissingColumn(name.into()))
    };
    let directory_idx = idx(DIRECTORY_COLUMN)?;
    let title_idx = idx(TITLE_COLUMN)?;

    let mut titles = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SheetError::Csv(e.to_string()))?;
        let directory = record.get(directory_idx).unwrap_or("");
        let title = record.get(title_idx).unwrap_or("");
        titles.push(compose(directory, title));
    }
    Ok(titles)
}

/// Results as CSV, one line per resolved title.
pub fn write_results(results: &[MatchResult]) -> Result<String, SheetError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(RESULT_HEADERS)
        .map_err(|e| SheetError::Csv(e.to_string()))?;

    for r in results {
        let score = r.outcome.score().map(|s| format!("{s:.4}")).unwrap_or_default();
        let key = r.outcome.key().unwrap_or_default();
        writer
            .write_record([
                r.row.to_string().as_str(),
                r.title.as_str(),
                r.outcome.to_string().as_str(),
                score.as_str(),
                key,
                r.link.as_str(),
            ])
            .map_err(|e| SheetError::Csv(e.to_string()))?;
    }

    let bytes = writer.into_inner().map_err(|e| SheetError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SheetError::Csv(e.to_string()))
}
