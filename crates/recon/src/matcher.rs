use std::ops::Range;

use log::debug;

use crate::error::LinkError;
use crate::model::{GroupText, MatchOutcome, MatchResult, ReconReport};
use crate::report::summarize;
use crate::similarity::jaro;

/// Substrings marking a section header row rather than a document title.
pub const HEADER_MARKERS: [&str; 2] = ["/Phases", "/Workstreams"];

pub fn is_header(title: &str) -> bool {
    HEADER_MARKERS.iter().any(|m| title.contains(m))
}

/// Highest-scoring key for `title`. The first key to beat the running
/// maximum wins; later ties do not replace it.
pub fn best_match<'a>(title: &str, text: &'a GroupText) -> Result<(&'a str, f64), LinkError> {
    let mut best: Option<&str> = None;
    let mut max = 0.0;

    if !title.is_empty() {
        for key in text.keys().filter(|k| !k.is_empty()) {
            let score = jaro(key, title);
            if score > max {
                max = score;
                best = Some(key.as_str());
                debug!("update key: {key} ({score:.3})");
            }
        }
    }

    best.map(|key| (key, max))
        .ok_or_else(|| LinkError::UnmatchedTitle { title: title.to_string() })
}

/// Resolves titles to rendered link text and keeps every result across
/// ranges so one report covers the whole run.
#[derive(Debug)]
pub struct TitleMatcher {
    threshold: f64,
    results: Vec<MatchResult>,
}

impl TitleMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, results: Vec::new() }
    }

    /// Resolve `titles[range]` against `text`. Results are only kept when
    /// the whole range resolves.
    pub fn resolve<S: AsRef<str>>(
        &mut self,
        titles: &[S],
        range: Range<usize>,
        text: &GroupText,
    ) -> Result<Vec<MatchResult>, LinkError> {
        if range.start > range.end || range.end > titles.len() {
            return Err(LinkError::TitleRange {
                start: range.start,
                end: range.end,
                len: titles.len(),
            });
        }

        let mut results = Vec::with_capacity(range.len());
        for row in range {
            let title = titles[row].as_ref();

            let (link, outcome) = if is_header(title) {
                debug!("{title} -> [TITLE]");
                (String::new(), MatchOutcome::Header)
            } else if let Some(link) = text.get(title) {
                debug!("{title} == {link}");
                (link.clone(), MatchOutcome::Exact)
            } else {
                let (key, score) = best_match(title, text)?;
                debug!("similarity {score:.3}: {title} ~ {key}");
                (text[key].clone(), MatchOutcome::Fuzzy { key: key.to_string(), score })
            };

            results.push(MatchResult { row, title: title.to_string(), link, outcome });
        }

        self.results.extend(results.iter().cloned());
        Ok(results)
    }

    /// Every result kept so far, in resolution order.
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// Aggregate report over every range resolved so far.
    pub fn finish(self) -> Result<ReconReport, LinkError> {
        summarize(&self.results, self.threshold)
    }
}
