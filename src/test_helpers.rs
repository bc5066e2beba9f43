//! Shared test utilities for the landing-kit test suite.
//!
//! Provides the fixture site, scratch directories and assertions over
//! rendered HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = sample_site();
//! let html = render_page(&site).into_string();
//! assert_in_order(&html, &[r#"id="hero""#, r#"id="problem""#]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config;
use crate::types::SiteConfig;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        if entry.path().is_file() {
            std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
        }
    }
    tmp
}

/// The fixture site, parsed and validated.
pub fn sample_site() -> SiteConfig {
    config::parse_site(config::stock_site_toml(), false)
        .unwrap_or_else(|e| panic!("fixture site.toml is invalid: {e}"))
}

// =========================================================================
// HTML assertions
// =========================================================================

/// Assert that every needle occurs in `haystack`, in the given order.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("'{needle}' not found after byte {from} (expected order: {needles:?})"),
        }
    }
}
