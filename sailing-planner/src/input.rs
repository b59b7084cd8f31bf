//! Search input protocol.
//!
//! A search is requested with three lines of text:
//!
//! ```text
//! CNSHA
//! NLRTM
//! cheapest
//! ```
//!
//! origin port, destination port and criterion, in that order.

use std::io::BufRead;
use std::path::Path;

use crate::domain::{InvalidPortCode, PortCode};
use crate::planner::{Criterion, SearchRequest, UnknownCriterion};

const USAGE: &str = "expected three lines: origin port (e.g. CNSHA), destination port (e.g. NLRTM) \
                     and search criteria (one of: cheapest-direct, cheapest, fastest)";

/// Errors from reading or validating search input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input source could not be read
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// One or more lines were absent or blank
    #[error("missing required input(s): {}; {}", .0.join(", "), USAGE)]
    Missing(Vec<&'static str>),

    /// The criterion is not one we search for
    #[error(transparent)]
    UnknownCriterion(#[from] UnknownCriterion),

    /// A port code is malformed
    #[error("{field}: {source}")]
    Port {
        field: &'static str,
        #[source]
        source: InvalidPortCode,
    },
}

/// Validate raw origin, destination and criterion strings.
///
/// Values are trimmed; blanks are reported together before the criterion
/// or port codes are parsed.
pub fn parse_search_input(
    origin: &str,
    destination: &str,
    criteria: &str,
) -> Result<SearchRequest, InputError> {
    let (origin, destination, criteria) = (origin.trim(), destination.trim(), criteria.trim());

    let missing: Vec<&'static str> = [
        ("origin", origin),
        ("destination", destination),
        ("criteria", criteria),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(name, _)| name)
    .collect();
    if !missing.is_empty() {
        return Err(InputError::Missing(missing));
    }

    let criterion: Criterion = criteria.parse()?;
    let origin = PortCode::parse(origin).map_err(|source| InputError::Port {
        field: "origin",
        source,
    })?;
    let destination = PortCode::parse(destination).map_err(|source| InputError::Port {
        field: "destination",
        source,
    })?;

    Ok(SearchRequest::new(origin, destination, criterion))
}

/// Read one search request from the first three lines of `reader`.
pub fn read_search_input<R: BufRead>(reader: R) -> Result<SearchRequest, InputError> {
    let mut lines = reader.lines();
    let mut next_line = || -> Result<String, InputError> {
        Ok(lines.next().transpose()?.unwrap_or_default())
    };

    let origin = next_line()?;
    let destination = next_line()?;
    let criteria = next_line()?;

    parse_search_input(&origin, &destination, &criteria)
}

/// Read one search request from a file.
pub fn read_search_file(path: impl AsRef<Path>) -> Result<SearchRequest, InputError> {
    let file = std::fs::File::open(path)?;
    read_search_input(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_three_lines() {
        let request = read_search_input(Cursor::new("CNSHA\nNLRTM\ncheapest\n")).unwrap();

        assert_eq!(request.origin.as_str(), "CNSHA");
        assert_eq!(request.destination.as_str(), "NLRTM");
        assert_eq!(request.criterion, Criterion::Cheapest);
    }

    #[test]
    fn trims_whitespace_and_ignores_extra_lines() {
        let request =
            read_search_input(Cursor::new("  CNSHA \r\n\tNLRTM\nfastest  \nignored\n")).unwrap();

        assert_eq!(request.origin.as_str(), "CNSHA");
        assert_eq!(request.destination.as_str(), "NLRTM");
        assert_eq!(request.criterion, Criterion::Fastest);
    }

    #[test]
    fn missing_lines_are_listed() {
        let err = read_search_input(Cursor::new("CNSHA\n")).unwrap_err();
        assert!(matches!(
            &err,
            InputError::Missing(fields) if fields == &vec!["destination", "criteria"]
        ));
        assert!(err.to_string().starts_with("missing required input(s): destination, criteria"));
        assert!(err.to_string().contains("cheapest-direct"));

        let err = read_search_input(Cursor::new("")).unwrap_err();
        assert!(matches!(
            err,
            InputError::Missing(fields) if fields == vec!["origin", "destination", "criteria"]
        ));
    }

    #[test]
    fn blank_line_counts_as_missing() {
        let err = read_search_input(Cursor::new("CNSHA\n   \ncheapest\n")).unwrap_err();
        assert!(matches!(err, InputError::Missing(fields) if fields == vec!["destination"]));
    }

    #[test]
    fn unknown_criterion() {
        let err = read_search_input(Cursor::new("CNSHA\nNLRTM\ncheapest_direct\n")).unwrap_err();
        assert!(matches!(err, InputError::UnknownCriterion(_)));
        assert_eq!(
            err.to_string(),
            "unknown search criteria 'cheapest_direct' (allowed: cheapest-direct, cheapest, fastest)"
        );
    }

    #[test]
    fn malformed_port() {
        let err = parse_search_input("CN SHA", "NLRTM", "cheapest").unwrap_err();
        assert!(matches!(err, InputError::Port { field: "origin", .. }));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "CNSHA\nNLRTM\ncheapest-direct\n").unwrap();

        let request = read_search_file(&path).unwrap();
        assert_eq!(request.criterion, Criterion::CheapestDirect);

        let err = read_search_file(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
