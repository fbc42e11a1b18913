use log::{info, warn};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::{form_urlencoded, Url};

use crate::config::LinkConfig;
use crate::error::LinkError;
use crate::layout::{doc_key, parse_parts, split_segments, Category};
use crate::model::{GroupedLinks, GroupingStats, UrlGroup};

/// Path segments keep only unreserved characters; everything else, space
/// included, is percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

const PREVIEW_PARAM: &str = "preview";

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Form encoding: space becomes `+`.
pub fn encode_query(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// `<base>/<dir>/<dir>/?preview=<filename>`
pub fn build_url(base_url: &str, relative_dirs: &[&str], filename: &str) -> String {
    let mut url = String::with_capacity(base_url.len() + filename.len() * 2 + 16);
    url.push_str(base_url);
    url.push('/');
    for dir in relative_dirs {
        url.push_str(&encode_segment(dir));
        url.push('/');
    }
    url.push('?');
    url.push_str(PREVIEW_PARAM);
    url.push('=');
    url.push_str(&encode_query(filename));
    url
}

/// Syntax check only: parseable, http(s), has a host. Reachability is not
/// checked.
pub fn validate_url(url: &str) -> Result<(), LinkError> {
    let invalid = |reason: String| LinkError::UrlValidation { url: url.to_string(), reason };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(invalid("missing host".into())),
    }
}

/// Decoded filename from the `preview` query parameter.
pub fn preview_filename(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == PREVIEW_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Inverse of [`build_url`]: decoded directory segments and filename.
pub fn decode_url(base_url: &str, url: &str) -> Option<(Vec<String>, String)> {
    let rest = url.strip_prefix(base_url)?.strip_prefix('/')?;
    let (path, _) = rest.split_once('?')?;
    let dirs = path
        .strip_suffix('/')
        .map(|p| {
            p.split('/')
                .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    Some((dirs, preview_filename(url)?))
}

/// Group raw paths into per-category URL maps.
///
/// Malformed paths are dropped unless `strict_paths` is set. Every URL is
/// validated once all paths are processed; a single failure rejects the
/// whole batch.
pub fn group<S: AsRef<str>>(paths: &[S], config: &LinkConfig) -> Result<GroupedLinks, LinkError> {
    let mut phases = UrlGroup::new();
    let mut workflow = UrlGroup::new();
    let mut stats = GroupingStats { total: paths.len(), ..GroupingStats::default() };

    for path in paths {
        let path = path.as_ref();
        let segments = split_segments(path);
        let parts = match parse_parts(path, &segments) {
            Ok(parts) => parts,
            Err(e) if !config.strict_paths => {
                warn!("dropping path: {e}");
                stats.dropped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let target = match Category::from_dir(parts.category_dir) {
            Some(Category::Phases) => {
                stats.phases += 1;
                &mut phases
            }
            Some(Category::Workflow) => {
                stats.workflow += 1;
                &mut workflow
            }
            None => {
                stats.excluded += 1;
                continue;
            }
        };

        let url = build_url(&config.base_url, parts.relative_dirs, parts.filename);
        target.entry(doc_key(parts.filename)).or_default().push(url);
    }

    for url in phases.values().chain(workflow.values()).flatten() {
        validate_url(url)?;
    }

    info!(
        "grouped {} path(s): {} phases key(s), {} workflow key(s), {} excluded, {} dropped",
        stats.total,
        phases.len(),
        workflow.len(),
        stats.excluded,
        stats.dropped
    );

    Ok(GroupedLinks { phases, workflow, stats })
}
