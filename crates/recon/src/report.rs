use log::warn;

use crate::error::LinkError;
use crate::model::{BadMatch, MatchOutcome, MatchResult, ReconReport};

/// `(mean, min, max)` of a similarity sample.
pub fn statistics(samples: &[f64]) -> Result<(f64, f64, f64), LinkError> {
    if samples.is_empty() {
        return Err(LinkError::EmptySimilaritySample);
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((mean, min, max))
}

/// Build a report from match results. Fuzzy results scoring at or below
/// `threshold` become bad matches, in result order.
pub fn summarize(results: &[MatchResult], threshold: f64) -> Result<ReconReport, LinkError> {
    let mut samples = Vec::new();
    let mut bad_matches = Vec::new();
    let mut exact = 0;
    let mut headers = 0;

    for r in results {
        match &r.outcome {
            MatchOutcome::Header => headers += 1,
            MatchOutcome::Exact => exact += 1,
            MatchOutcome::Fuzzy { key, score } => {
                samples.push(*score);
                if *score <= threshold {
                    warn!("bad match ({score:.3}): '{}' -> '{key}'", r.title);
                    bad_matches.push(BadMatch {
                        title: r.title.clone(),
                        key: key.clone(),
                        score: *score,
                    });
                }
            }
        }
    }

    let (mean, min, max) = statistics(&samples)?;
    Ok(ReconReport {
        mean,
        min,
        max,
        samples: samples.len(),
        exact,
        headers,
        bad_matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, outcome: MatchOutcome) -> MatchResult {
        MatchResult { row: 0, title: title.into(), link: String::new(), outcome }
    }

    fn fuzzy(title: &str, key: &str, score: f64) -> MatchResult {
        result(title, MatchOutcome::Fuzzy { key: key.into(), score })
    }

    #[test]
    fn summary_statistics() {
        let results = vec![
            result("h", MatchOutcome::Header),
            result("e", MatchOutcome::Exact),
            fuzzy("a", "A", 0.9),
            fuzzy("b", "B", 0.6),
            fuzzy("c", "C", 0.85),
        ];
        let report = summarize(&results, 0.85).unwrap();
        assert_eq!(report.samples, 3);
        assert_eq!(report.headers, 1);
        assert_eq!(report.exact, 1);
        assert!((report.mean - (0.9 + 0.6 + 0.85) / 3.0).abs() < 1e-12);
        assert_eq!(report.min, 0.6);
        assert_eq!(report.max, 0.9);

        // Threshold is inclusive.
        let flagged: Vec<&str> = report.bad_matches.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(flagged, vec!["b", "c"]);
    }

    #[test]
    fn no_fuzzy_results_is_an_error() {
        let results = vec![result("h", MatchOutcome::Header), result("e", MatchOutcome::Exact)];
        assert_eq!(summarize(&results, 0.85).unwrap_err(), LinkError::EmptySimilaritySample);
        assert_eq!(statistics(&[]).unwrap_err(), LinkError::EmptySimilaritySample);
    }
}
