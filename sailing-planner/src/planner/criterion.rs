//! Optimisation criteria.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unsupported criterion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search criteria '{0}' (allowed: cheapest-direct, cheapest, fastest)")]
pub struct UnknownCriterion(pub String);

/// What a search optimises for.
///
/// The set is closed: every stage of the planner matches on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Lowest cost among single sailings only.
    CheapestDirect,
    /// Lowest total cost, transfers allowed.
    Cheapest,
    /// Shortest door-to-door duration, transfers allowed.
    Fastest,
}

impl Criterion {
    /// Every criterion, in the order they are listed to users.
    pub const ALL: [Criterion; 3] = [
        Criterion::CheapestDirect,
        Criterion::Cheapest,
        Criterion::Fastest,
    ];

    /// The wire name of this criterion.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::CheapestDirect => "cheapest-direct",
            Criterion::Cheapest => "cheapest",
            Criterion::Fastest => "fastest",
        }
    }

    /// Returns true if candidates come from multi-leg traversal.
    pub fn allows_transfers(&self) -> bool {
        match self {
            Criterion::CheapestDirect => false,
            Criterion::Cheapest | Criterion::Fastest => true,
        }
    }
}

impl FromStr for Criterion {
    type Err = UnknownCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCriterion(s.to_string()))
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_criteria() {
        assert_eq!(
            "cheapest-direct".parse::<Criterion>(),
            Ok(Criterion::CheapestDirect)
        );
        assert_eq!("cheapest".parse::<Criterion>(), Ok(Criterion::Cheapest));
        assert_eq!("fastest".parse::<Criterion>(), Ok(Criterion::Fastest));
    }

    #[test]
    fn reject_unknown_criteria() {
        assert!("cheapest_direct".parse::<Criterion>().is_err());
        assert!("Cheapest".parse::<Criterion>().is_err());
        assert!("".parse::<Criterion>().is_err());

        let err = "slowest".parse::<Criterion>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown search criteria 'slowest' (allowed: cheapest-direct, cheapest, fastest)"
        );
    }

    #[test]
    fn display_roundtrip() {
        for criterion in Criterion::ALL {
            assert_eq!(criterion.to_string().parse::<Criterion>(), Ok(criterion));
        }
    }

    #[test]
    fn transfers() {
        assert!(!Criterion::CheapestDirect.allows_transfers());
        assert!(Criterion::Cheapest.allows_transfers());
        assert!(Criterion::Fastest.allows_transfers());
    }
}
