//! Engine release metadata.
//!
//! [`VERSION`] is the single place the release number, date and name are
//! recorded. Bump it when cutting a release.

use std::cmp::Ordering;

pub const PRODUCT_NAME: &str = "SaasLandingKit Engine";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    /// Semver number, e.g. `"1.0.0"`.
    pub number: &'static str,
    /// Release date, ISO 8601.
    pub date: &'static str,
    pub name: Option<&'static str>,
}

pub const VERSION: Version = Version {
    number: "1.0.0",
    date: "2026-01-17",
    name: Some("Initial Release"),
};

impl Version {
    /// `"SaasLandingKit Engine v1.0.0"`
    pub fn full(&self) -> String {
        format!("{PRODUCT_NAME} v{}", self.number)
    }

    /// `"v1.0.0"`
    pub fn short(&self) -> String {
        format!("v{}", self.number)
    }

    /// Compare against another version string on major, minor and patch.
    pub fn compare(&self, other: &str) -> Ordering {
        components(self.number).cmp(&components(other))
    }

    pub fn is_newer_than(&self, other: &str) -> bool {
        self.compare(other) == Ordering::Greater
    }
}

/// `"SaasLandingKit Engine v1.0.0 (2026-01-17)"`
pub fn version_info() -> String {
    format!("{} ({})", VERSION.full(), VERSION.date)
}

/// Whether the running engine is newer than `version`.
pub fn is_newer_than(version: &str) -> bool {
    VERSION.is_newer_than(version)
}

// Missing and non-numeric components count as 0, negative ones stay negative;
// anything past patch is ignored.
fn components(version: &str) -> [i64; 3] {
    let mut parts = version.split('.').map(|p| p.trim().parse::<i64>().unwrap_or(0));
    [
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    ]
}
