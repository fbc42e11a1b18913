use indexmap::IndexMap;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Document key → URLs in discovery order. Insertion order is part of the
/// output contract.
pub type UrlGroup = IndexMap<String, Vec<String>>;

/// Document key → rendered anchor text.
pub type GroupText = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupingStats {
    pub total: usize,
    pub phases: usize,
    pub workflow: usize,
    /// Category directory was neither Phases nor Workflow.
    pub excluded: usize,
    /// Too few segments; only non-zero when paths are not strict.
    pub dropped: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedLinks {
    pub phases: UrlGroup,
    pub workflow: UrlGroup,
    pub stats: GroupingStats,
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Section header row; never matched.
    Header,
    /// Title equals a document key verbatim.
    Exact,
    /// Best-scoring key from a full scan.
    Fuzzy { key: String, score: f64 },
}

impl MatchOutcome {
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Fuzzy { score, .. } => Some(*score),
            _ => None,
        }
    }

    /// Winning key of a fuzzy match.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Fuzzy { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Exact => write!(f, "exact"),
            Self::Fuzzy { .. } => write!(f, "fuzzy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Index of the title in the caller's title list.
    pub row: usize,
    pub title: String,
    /// Resolved anchor text; empty for header rows.
    pub link: String,
    pub outcome: MatchOutcome,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadMatch {
    pub title: String,
    pub key: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconReport {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Number of fuzzy comparisons behind the statistics.
    pub samples: usize,
    pub exact: usize,
    pub headers: usize,
    pub bad_matches: Vec<BadMatch>,
}
