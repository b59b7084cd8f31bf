//! Port code types.

use std::fmt;

/// Error returned when parsing an invalid port code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid port code: {reason}")]
pub struct InvalidPortCode {
    reason: &'static str,
}

/// A port identifier such as a UN/LOCODE (`CNSHA`, `NLRTM`).
///
/// Port codes are compared exactly as written in the catalog. The only
/// validation is that a code is non-empty and contains no whitespace or
/// control characters, so a `PortCode` can always be used as a graph key.
///
/// # Examples
///
/// ```
/// use sailing_planner::domain::PortCode;
///
/// let shanghai = PortCode::parse("CNSHA").unwrap();
/// assert_eq!(shanghai.as_str(), "CNSHA");
///
/// assert!(PortCode::parse("").is_err());
/// assert!(PortCode::parse("CN SHA").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortCode(String);

impl PortCode {
    /// Parse a port code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidPortCode> {
        if s.is_empty() {
            return Err(InvalidPortCode {
                reason: "must not be empty",
            });
        }

        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidPortCode {
                reason: "must not contain whitespace or control characters",
            });
        }

        Ok(PortCode(s.to_string()))
    }

    /// Returns the port code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PortCode({})", self.0)
    }
}

impl fmt::Display for PortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z]{2}[A-Z0-9]{3}") {
            let port = PortCode::parse(&s).unwrap();
            prop_assert_eq!(port.as_str(), s.as_str());
        }

        /// Anything containing a space is rejected
        #[test]
        fn spaces_rejected(a in "[A-Z]{1,4}", b in "[A-Z]{1,4}") {
            let s = format!("{a} {b}");
            prop_assert!(PortCode::parse(&s).is_err());
        }
    }
}
