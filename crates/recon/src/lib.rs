//! `doclink-recon` — Document link grouping and title reconciliation engine.
//!
//! Pure engine crate: receives path and title lists, returns rendered links,
//! match results and a review report. No CLI or IO dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod layout;
pub mod matcher;
pub mod model;
pub mod render;
pub mod report;
pub mod similarity;
pub mod title;

pub use config::LinkConfig;
pub use engine::{link_lines, links_for_filenames, run, RunOutput};
pub use error::LinkError;
pub use matcher::TitleMatcher;
pub use model::{GroupedLinks, MatchOutcome, MatchResult, ReconReport};
