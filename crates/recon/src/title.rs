//! Title composition from the title sheet's directory column.
//!
//! Directory strings look like `SCOAP/Master/1.Initiation/Phase 01/...`.
//! Segment positions below index the `/`-split directory.

/// Fewest directory segments for a prefix to be added.
pub const MIN_DIRECTORY_SEGMENTS: usize = 5;

/// Segment whose text up to the first `.` names the track.
pub const TRACK_SEGMENT: usize = 2;

/// Segment whose last space-separated token is the item number.
pub const NUMBER_SEGMENT: usize = 3;

/// Workstream name, counted from the end.
pub const STREAM_OFFSET_FROM_END: usize = 3;

const PHASES_MARKER: &str = "/Phases/";
const WORKSTREAMS_MARKER: &str = "/Workstreams/";

/// Structural prefix for a directory, or an empty string.
pub fn prefix(directory: &str) -> String {
    let segments: Vec<&str> = directory.split('/').collect();
    if segments.len() < MIN_DIRECTORY_SEGMENTS {
        return String::new();
    }

    let number = segments[NUMBER_SEGMENT]
        .rsplit(' ')
        .next()
        .unwrap_or_default()
        .trim_start_matches('0');

    if directory.contains(PHASES_MARKER) {
        let track = segments[TRACK_SEGMENT].split('.').next().unwrap_or_default();
        format!("{track} [{number}] ")
    } else if directory.contains(WORKSTREAMS_MARKER) {
        let stream = segments[segments.len() - STREAM_OFFSET_FROM_END];
        format!("[{number}] {stream} ")
    } else {
        String::new()
    }
}

/// Prefix plus the title with non-breaking spaces replaced.
pub fn compose(directory: &str, title: &str) -> String {
    let mut composed = prefix(directory);
    composed.push_str(&title.replace('\u{a0}', " "));
    composed
}
