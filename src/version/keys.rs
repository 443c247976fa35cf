//! Canonical version key extraction
//!
//! Raw version identifiers arrive as loosely structured strings such as
//! `stable-19-2-18.bfa368f`: an optional branch prefix, dash-separated
//! numeric release components, an optional hotfix suffix and a trailing
//! build hash. The minor key strips the hotfix suffix and build hash; the
//! major key additionally drops the trailing patch component. Strings that
//! do not follow the scheme pass through unchanged and act as opaque
//! singleton labels.

use std::sync::LazyLock;

use regex::Regex;

/// Compiled patterns for version key extraction
struct VersionKeys {
    /// Regex for the canonical trailing form: stem, optional hotfix, build hash
    minor: Regex,
}

impl VersionKeys {
    fn new() -> Self {
        Self {
            // Match: numeric stem + optional "-hotfix-N(-M)" + ".hash"
            minor: Regex::new(r"^(.*?\d+-\d+(?:-\d+)?)(?:-hotfix-\d+(?:-\d+)?)?\.[0-9a-zA-Z]+$")
                .unwrap(),
        }
    }
}

static KEYS: LazyLock<VersionKeys> = LazyLock::new(VersionKeys::new);

/// Extract the minor version key from a raw version string.
///
/// Examples:
/// - "stable-19-2-18.bfa368f" -> "stable-19-2-18"
/// - "stable-19-2-18-hotfix-3.93f0fa9" -> "stable-19-2-18"
/// - "25-1-1.a1b2c3" -> "25-1-1"
/// - "custom-build" -> "custom-build" (unrecognized, passes through)
pub fn minor_version(raw: &str) -> &str {
    KEYS.minor
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |stem| stem.as_str())
}

/// Extract the major version key from a minor version key.
///
/// Drops the trailing numeric patch component when the key carries at least
/// three dash-separated numeric components; anything shorter or non-numeric
/// is returned unchanged.
///
/// Examples:
/// - "stable-19-2-18" -> "stable-19-2"
/// - "stable-19-2" -> "stable-19-2" (only two numeric components)
/// - "custom-build" -> "custom-build"
pub fn major_version(minor: &str) -> &str {
    let Some((stem, patch)) = minor.rsplit_once('-') else {
        return minor;
    };
    let numeric = minor.split('-').filter(|c| is_numeric(c)).count();
    if numeric >= 3 && is_numeric(patch) {
        stem
    } else {
        minor
    }
}

fn is_numeric(component: &str) -> bool {
    !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit())
}
