//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! | Code | Trigger                                                      |
//! |------|--------------------------------------------------------------|
//! | 0    | Success                                                      |
//! | 1    | General error (unspecified)                                  |
//! | 2    | Usage error (bad args, missing file)                         |
//! | 3    | Config file failed to parse or validate                      |
//! | 4    | Cannot read input or write output                            |
//! | 5    | Batch rejected: malformed path (strict) or invalid URL       |
//! | 6    | A title could not be matched, or a range is out of bounds    |
//! | 7    | No fuzzy comparisons were made; no statistics to report      |
//! | 8    | Bad matches present and `--fail-on-bad-match` set            |

use doclink_recon::LinkError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Config TOML could not be parsed or failed validation.
pub const EXIT_CONFIG: u8 = 3;

/// File read/write failure.
pub const EXIT_IO: u8 = 4;

/// Whole batch rejected by path parsing or URL validation.
pub const EXIT_BATCH_REJECTED: u8 = 5;

/// Title unmatched or title range invalid.
pub const EXIT_MATCH_FAILED: u8 = 6;

/// Every resolved title was a header or exact match.
pub const EXIT_EMPTY_SAMPLE: u8 = 7;

/// Low-confidence matches found (only with `--fail-on-bad-match`).
pub const EXIT_BAD_MATCHES: u8 = 8;

/// Map an engine error to its exit code.
pub fn link_exit_code(err: &LinkError) -> u8 {
    match err {
        LinkError::ConfigParse(_) | LinkError::ConfigValidation(_) => EXIT_CONFIG,
        LinkError::PathParse { .. } | LinkError::UrlValidation { .. } => EXIT_BATCH_REJECTED,
        LinkError::UnmatchedTitle { .. } | LinkError::TitleRange { .. } => EXIT_MATCH_FAILED,
        LinkError::EmptySimilaritySample => EXIT_EMPTY_SAMPLE,
    }
}
