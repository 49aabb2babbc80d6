//! Header name classification.
//!
//! A header is classified from its name alone. No include path, installed
//! SDK, or filesystem lookup is consulted, so this stays a heuristic:
//! standard headers missing from the fixed list (e.g. `thread`) come back
//! as [`Classification::Unknown`].

use colored::*;

/// Standard headers recognized by name. Intentionally fixed; anything the
/// list misses classifies as Unknown rather than Standard Library.
const STANDARD_HEADERS: [&str; 11] = [
    "iostream", "vector", "map", "set", "string", "cmath", "cstdio", "cstdlib", "cstring",
    "cassert", "algorithm",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Exact match against the fixed standard header list.
    StandardLibrary,
    /// Contains a path separator or carries a `.h`/`.hpp` suffix.
    LocalOrThirdParty,
    /// Nothing matched; likely a standard header the fixed list omits.
    Unknown,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::StandardLibrary => "Standard Library",
            Classification::LocalOrThirdParty => "Local or Third-Party",
            Classification::Unknown => "Unknown",
        }
    }

    /// Label colored for terminal output.
    pub fn colored_label(&self) -> ColoredString {
        match self {
            Classification::StandardLibrary => self.label().green(),
            Classification::LocalOrThirdParty => self.label().yellow(),
            Classification::Unknown => self.label().dimmed(),
        }
    }
}

/// Classify a header name. First match wins: fixed standard list, then the
/// local/third-party naming convention, then Unknown.
pub fn classify(header: &str) -> Classification {
    if STANDARD_HEADERS.contains(&header) {
        return Classification::StandardLibrary;
    }
    if header.contains('/') || header.ends_with(".h") || header.ends_with(".hpp") {
        return Classification::LocalOrThirdParty;
    }
    Classification::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_headers() {
        assert_eq!(classify("vector"), Classification::StandardLibrary);
        assert_eq!(classify("iostream"), Classification::StandardLibrary);
        assert_eq!(classify("algorithm"), Classification::StandardLibrary);
    }

    #[test]
    fn test_local_by_suffix() {
        assert_eq!(classify("local.h"), Classification::LocalOrThirdParty);
        assert_eq!(classify("widget.hpp"), Classification::LocalOrThirdParty);
    }

    #[test]
    fn test_local_by_path_separator() {
        assert_eq!(classify("SDL2/SDL"), Classification::LocalOrThirdParty);
        assert_eq!(
            classify("boost/asio.hpp"),
            Classification::LocalOrThirdParty
        );
    }

    #[test]
    fn test_unknown_for_unlisted_standard_headers() {
        // `thread` is standard but not in the fixed list.
        assert_eq!(classify("thread"), Classification::Unknown);
        assert_eq!(classify("memory"), Classification::Unknown);
    }

    #[test]
    fn test_backslash_is_not_a_separator() {
        assert_eq!(classify("pkg\\header"), Classification::Unknown);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Classification::StandardLibrary.label(), "Standard Library");
        assert_eq!(
            Classification::LocalOrThirdParty.label(),
            "Local or Third-Party"
        );
        assert_eq!(Classification::Unknown.label(), "Unknown");
    }
}
