use crate::grouping::preview_filename;
use crate::layout::doc_key;
use crate::model::{GroupText, GroupedLinks, UrlGroup};

/// Characters kept in a link label.
pub const LABEL_ALPHABET: &str = "ChecklistTemplate123456";

/// Extension length stripped from the trailing filename token, dot included.
const EXTENSION_LEN: usize = 5;

/// Label for a URL: the filename's last `_` token without its extension,
/// filtered to [`LABEL_ALPHABET`].
pub fn link_label(url: &str) -> String {
    let filename = preview_filename(url)
        .unwrap_or_else(|| url.rsplit('/').next().unwrap_or_default().to_string());
    let token = filename.rsplit('_').next().unwrap_or_default();
    let keep = token.chars().count().saturating_sub(EXTENSION_LEN);

    let filtered: String = token
        .chars()
        .take(keep)
        .filter(|c| LABEL_ALPHABET.contains(*c))
        .collect();
    filtered.replace("Checkliste", "Checklist")
}

pub fn anchor(url: &str) -> String {
    let href = url.replace('\n', "").replace("\\xa0", " ");
    format!("Please access the <a href=\"{href}\">{}</a> for this task here. ", link_label(url))
}

/// Render one anchor string per document key, URLs in stored order.
pub fn render(group: &UrlGroup) -> GroupText {
    group
        .iter()
        .map(|(key, urls)| (key.clone(), urls.iter().map(|u| anchor(u)).collect::<String>()))
        .collect()
}

/// Anchor text for the document a bare filename belongs to; empty when the
/// key has no links.
pub fn render_for_filename(group: &UrlGroup, filename: &str) -> String {
    group
        .get(&doc_key(filename))
        .map(|urls| urls.iter().map(|u| anchor(u)).collect::<String>())
        .unwrap_or_default()
}

/// One line per key: Phases keys first, then Workflow.
pub fn render_lines(grouped: &GroupedLinks) -> Vec<String> {
    render(&grouped.phases)
        .into_values()
        .chain(render(&grouped.workflow).into_values())
        .collect()
}
