use log::info;
use serde::Serialize;

use crate::config::LinkConfig;
use crate::error::LinkError;
use crate::grouping::group;
use crate::layout::Category;
use crate::matcher::TitleMatcher;
use crate::model::{GroupText, GroupedLinks, MatchResult, ReconReport};
use crate::render::{render, render_for_filename, render_lines};

#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    pub grouped: GroupedLinks,
    pub phases_text: GroupText,
    pub workflow_text: GroupText,
    /// Results of every configured range, in range order.
    pub matches: Vec<MatchResult>,
    pub report: ReconReport,
}

/// Group + render only: one rendered line per document key.
pub fn link_lines<S: AsRef<str>>(config: &LinkConfig, paths: &[S]) -> Result<Vec<String>, LinkError> {
    let grouped = group(paths, config)?;
    Ok(render_lines(&grouped))
}

/// Anchor text for each bare filename, in the order given. Phases keys are
/// looked up first, then Workflow; a filename whose key is in neither map
/// yields an empty string.
pub fn links_for_filenames<P, F>(
    config: &LinkConfig,
    paths: &[P],
    filenames: &[F],
) -> Result<Vec<String>, LinkError>
where
    P: AsRef<str>,
    F: AsRef<str>,
{
    let grouped = group(paths, config)?;
    Ok(filenames
        .iter()
        .map(|filename| {
            let filename = filename.as_ref();
            let text = render_for_filename(&grouped.phases, filename);
            if text.is_empty() {
                render_for_filename(&grouped.workflow, filename)
            } else {
                text
            }
        })
        .collect())
}

/// Full run: group paths, render links, resolve each configured title range
/// and summarize.
pub fn run<P, T>(config: &LinkConfig, paths: &[P], titles: &[T]) -> Result<RunOutput, LinkError>
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    let grouped = group(paths, config)?;
    let phases_text = render(&grouped.phases);
    let workflow_text = render(&grouped.workflow);

    let mut matcher = TitleMatcher::new(config.bad_match_threshold);
    let mut matches = Vec::new();
    for range in &config.ranges {
        let text = match range.category {
            Category::Phases => &phases_text,
            Category::Workflow => &workflow_text,
        };
        let results = matcher.resolve(titles, range.start..range.end, text)?;
        info!(
            "{} range {}..{}: resolved {} title(s)",
            range.category,
            range.start,
            range.end,
            results.len()
        );
        matches.extend(results);
    }

    let report = matcher.finish()?;
    info!(
        "similarity mean {:.3}, min {:.3}, max {:.3}; {} bad match(es)",
        report.mean,
        report.min,
        report.max,
        report.bad_matches.len()
    );

    Ok(RunOutput { grouped, phases_text, workflow_text, matches, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RangeConfig;
    use crate::model::MatchOutcome;

    fn paths() -> Vec<String> {
        [
            "Master/Phases/01 Start/Templates/Kickoff_Meeting_Template.xlsx",
            "Master/Phases/01 Start/Templates/Kickoff_Meeting_Checkliste.xlsx",
            "Master/Workflow/Finance/Items/Budget_Plan_Template.xlsx",
        ]
        .iter()
        .map(|p| format!("/Users/me/Desktop/archive/{p}"))
        .collect()
    }

    fn config() -> LinkConfig {
        LinkConfig {
            ranges: vec![
                RangeConfig { category: Category::Phases, start: 0, end: 2 },
                RangeConfig { category: Category::Workflow, start: 2, end: 3 },
            ],
            ..LinkConfig::default()
        }
    }

    #[test]
    fn ranges_use_their_category() {
        let titles = ["x/Phases/y", "Kickoff Meetng", "Budget Plan"];
        let out = run(&config(), &paths(), &titles).unwrap();

        assert_eq!(out.matches.len(), 3);
        assert_eq!(out.matches[0].outcome, MatchOutcome::Header);
        assert_eq!(out.matches[1].link, out.phases_text["Kickoff Meeting"]);
        assert_eq!(out.matches[2].outcome, MatchOutcome::Exact);
        assert_eq!(out.report.samples, 1);
        assert!(out.report.bad_matches.is_empty());
    }

    #[test]
    fn run_is_deterministic() {
        let titles = ["Kickof Meeting", "Kickoff", "Budget"];
        let a = run(&config(), &paths(), &titles).unwrap();
        let b = run(&config(), &paths(), &titles).unwrap();
        assert_eq!(a.matches, b.matches);
        assert_eq!(a.report, b.report);
    }

    #[test]
    fn link_lines_follow_key_order() {
        let lines = link_lines(&LinkConfig::default(), &paths()).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches("<a href").count(), 2);
        assert!(lines[1].contains(">Template<"));
    }

    #[test]
    fn links_for_filenames_check_both_categories() {
        let filenames = [
            "Kickoff_Meeting_Whatever.xlsx",
            "Budget_Plan_x.xlsx",
            "Unknown_Doc_x.xlsx",
        ];
        let lines = links_for_filenames(&LinkConfig::default(), &paths(), &filenames).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches("<a href").count(), 2);
        assert!(lines[0].contains(">Checklist<"));
        assert!(lines[1].contains("Budget_Plan_Template.xlsx"));
        assert_eq!(lines[2], "");
    }
}
