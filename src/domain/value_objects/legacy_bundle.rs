//! Legacy Bundle Policy Value Object
//!
//! Decides who produces the minified UMD bundle the manifest's `main` field
//! points at.

use serde::{Deserialize, Serialize};

/// Who produces `bundles/<name>.umd.min.js`
///
/// - `Packager`: the packager emits it next to the plain UMD bundle (default)
/// - `Minify`: the minify stage compresses the UMD bundle itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LegacyBundlePolicy {
    /// The packager emits the minified UMD bundle (default)
    #[default]
    Packager,
    /// Minify the UMD bundle as a third parallel branch
    Minify,
}

impl LegacyBundlePolicy {
    /// Parse from a config or environment value, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "packager" => Some(Self::Packager),
            "minify" => Some(Self::Minify),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_packager() {
        assert_eq!(LegacyBundlePolicy::default(), LegacyBundlePolicy::Packager);
    }

    #[test]
    fn serde_lowercase() {
        let policy: LegacyBundlePolicy = serde_json::from_str(r#""minify""#).unwrap();
        assert_eq!(policy, LegacyBundlePolicy::Minify);
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(
            LegacyBundlePolicy::parse(" Minify "),
            Some(LegacyBundlePolicy::Minify)
        );
        assert_eq!(
            LegacyBundlePolicy::parse("PACKAGER"),
            Some(LegacyBundlePolicy::Packager)
        );
        assert_eq!(LegacyBundlePolicy::parse("uglify"), None);
    }
}
