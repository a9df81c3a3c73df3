//! Tracked symbol identifier.

use std::fmt;

/// Ticker symbol under monitoring.
///
/// Always stored trimmed and uppercased. The inner String is private to
/// ensure all construction goes through [`TrackedSymbol::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackedSymbol(String);

impl TrackedSymbol {
    /// Normalize raw user input into a symbol.
    ///
    /// Returns `None` when the input is blank after trimming.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_uppercases() {
        let symbol = TrackedSymbol::parse("  aapl ").unwrap();
        assert_eq!(symbol.as_str(), "AAPL");
        assert_eq!(symbol.to_string(), "AAPL");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(TrackedSymbol::parse("").is_none());
        assert!(TrackedSymbol::parse("   ").is_none());
    }
}
