use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LinkError {
    /// Path has too few segments to derive a category and document key.
    PathParse { path: String, segments: usize, required: usize },
    /// A generated URL failed syntax validation. Fatal for the whole batch.
    UrlValidation { url: String, reason: String },
    /// Statistics requested over zero fuzzy comparisons.
    EmptySimilaritySample,
    /// Fuzzy resolution found no candidate key for a title.
    UnmatchedTitle { title: String },
    /// Title range does not fit the title list.
    TitleRange { start: usize, end: usize, len: usize },
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (threshold out of range, bad range, etc.).
    ConfigValidation(String),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathParse { path, segments, required } => {
                write!(f, "path '{path}' has {segments} segment(s), at least {required} required")
            }
            Self::UrlValidation { url, reason } => {
                write!(f, "invalid URL '{url}': {reason}")
            }
            Self::EmptySimilaritySample => {
                write!(f, "no fuzzy comparisons were made; similarity statistics are undefined")
            }
            Self::UnmatchedTitle { title } => {
                write!(f, "title '{title}' has no candidate key to match against")
            }
            Self::TitleRange { start, end, len } => {
                write!(f, "title range {start}..{end} is invalid for {len} title(s)")
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for LinkError {}
