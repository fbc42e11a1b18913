// Property-based tests for URL construction and Jaro similarity.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;
use doclink_recon::config::{LinkConfig, DEFAULT_BASE_URL};
use doclink_recon::grouping::{build_url, decode_url, group, validate_url};
use doclink_recon::similarity::jaro;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Directory name: words, spaces and characters that need escaping.
fn arb_dir() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => r"[A-Za-z0-9 _.-]{1,12}",
        1 => r"[A-Za-z0-9 &#%+?=~äöü]{1,12}",
    ]
}

fn arb_filename() -> impl Strategy<Value = String> {
    (r"[A-Za-z0-9 &#%+?=äöü-]{1,10}(_[A-Za-z0-9 ]{1,8}){0,3}", r"_[A-Za-z0-9]{1,10}\.xlsx")
        .prop_map(|(stem, tail)| format!("{stem}{tail}"))
}

// ---------------------------------------------------------------------------
// URL round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn url_round_trips(dirs in prop::collection::vec(arb_dir(), 0..5), filename in arb_filename()) {
        let dir_refs: Vec<&str> = dirs.iter().map(String::as_str).collect();
        let url = build_url(DEFAULT_BASE_URL, &dir_refs, &filename);

        prop_assert!(validate_url(&url).is_ok(), "invalid: {url}");
        prop_assert!(!url.contains(' '));

        let (decoded_dirs, decoded_name) = decode_url(DEFAULT_BASE_URL, &url).unwrap();
        prop_assert_eq!(decoded_dirs, dirs);
        prop_assert_eq!(decoded_name, filename);
    }

    #[test]
    fn grouped_paths_round_trip(
        stage in arb_dir(),
        folder in arb_dir(),
        filename in arb_filename(),
    ) {
        let path = format!("/Users/me/Desktop/acccoi/Master/Workflow/{stage}/{folder}/{filename}");
        let config = LinkConfig::default();
        let grouped = group(&[path], &config).unwrap();

        prop_assert_eq!(grouped.workflow.len(), 1);
        let url = &grouped.workflow[0][0];
        let (dirs, name) = decode_url(&config.base_url, url).unwrap();
        prop_assert_eq!(dirs, vec!["Master".to_string(), "Workflow".to_string(), stage, folder]);
        prop_assert_eq!(name, filename);
    }
}

// ---------------------------------------------------------------------------
// Jaro
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn jaro_is_symmetric(a in r"\PC{0,24}", b in r"\PC{0,24}") {
        prop_assert_eq!(jaro(&a, &b), jaro(&b, &a));
    }

    #[test]
    fn jaro_in_unit_interval(a in r"\PC{0,24}", b in r"\PC{0,24}") {
        let s = jaro(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "{s}");
    }

    #[test]
    fn jaro_self_is_one(a in r"\PC{1,24}") {
        prop_assert_eq!(jaro(&a, &a), 1.0);
    }

    #[test]
    fn jaro_one_only_when_identical(a in r"[a-c]{1,6}", b in r"[a-c]{1,6}") {
        if a != b {
            prop_assert!(jaro(&a, &b) < 1.0);
        }
    }
}
