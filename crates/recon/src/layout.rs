//! Directory layout convention of the document archive.
//!
//! Paths are split on `/`, so an absolute path has an empty segment 0:
//!
//! ```text
//! /Users/me/Desktop/archive/Master/Phases/02 Plan/Templates/Doc_Name_Checkliste.xlsx
//!  1     2  3       4       5      6      7       8         9 (filename)
//! ```
//!
//! Segments `0..BASE_DEPTH` are the local mount point and never appear in a
//! generated URL. The category directory sits `CATEGORY_OFFSET_FROM_END`
//! segments before the end (counting the filename as 1).

use serde::{Deserialize, Serialize};

use crate::error::LinkError;

/// Number of leading segments stripped before building the URL path.
pub const BASE_DEPTH: usize = 5;

/// Position of the category directory, counted from the end.
pub const CATEGORY_OFFSET_FROM_END: usize = 4;

/// Fewest segments a path may have: the base plus a filename.
pub const MIN_SEGMENTS: usize = BASE_DEPTH + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Phases,
    Workflow,
}

impl Category {
    /// Directory name that selects this category. Matching is exact.
    pub fn from_dir(name: &str) -> Option<Self> {
        match name {
            "Phases" => Some(Self::Phases),
            "Workflow" => Some(Self::Workflow),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Phases => write!(f, "phases"),
            Self::Workflow => write!(f, "workflow"),
        }
    }
}

/// A raw path cut into the pieces the grouping engine needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts<'a> {
    /// Directory segments between the base and the filename.
    pub relative_dirs: &'a [&'a str],
    pub filename: &'a str,
    /// Raw directory name at the category offset.
    pub category_dir: &'a str,
}

pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').collect()
}

pub fn parse_parts<'a>(path: &str, segments: &'a [&'a str]) -> Result<PathParts<'a>, LinkError> {
    if segments.len() < MIN_SEGMENTS {
        return Err(LinkError::PathParse {
            path: path.to_string(),
            segments: segments.len(),
            required: MIN_SEGMENTS,
        });
    }
    let last = segments.len() - 1;
    Ok(PathParts {
        relative_dirs: &segments[BASE_DEPTH..last],
        filename: segments[last],
        category_dir: segments[segments.len() - CATEGORY_OFFSET_FROM_END],
    })
}

/// Document key: filename tokens split on `_`, minus the trailing token,
/// joined with spaces.
pub fn doc_key(filename: &str) -> String {
    let tokens: Vec<&str> = filename.split('_').collect();
    tokens[..tokens.len() - 1].join(" ")
}
