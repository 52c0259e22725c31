//! Pre-built inputs for testing splitters and readers.

use crate::iter::LineDelimiter;

/// One splitting scenario: an input, the delimiter to split it on, and the
/// records that must come out regardless of chunk size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryCase {
    pub name: &'static str,
    pub input: &'static str,
    pub delimiter: LineDelimiter,
    pub expected: Vec<&'static str>,
}

/// The line-splitting edge cases: trailing, leading and both-sided
/// delimiters, plus CRLF input split on a bare line feed.
///
/// # Example
///
/// ```
/// use ironstream::testing::line_boundary_cases;
///
/// let cases = line_boundary_cases();
/// assert!(cases.iter().any(|c| c.expected.first() == Some(&"")));
/// ```
#[must_use]
pub fn line_boundary_cases() -> Vec<BoundaryCase> {
    vec![
        BoundaryCase {
            name: "no trailing delimiter",
            input: "line 1\nline 2\nline 3",
            delimiter: LineDelimiter::Lf,
            expected: vec!["line 1", "line 2", "line 3"],
        },
        BoundaryCase {
            name: "trailing delimiter",
            input: "line 1\nline 2\nline 3\n",
            delimiter: LineDelimiter::Lf,
            expected: vec!["line 1", "line 2", "line 3", ""],
        },
        BoundaryCase {
            name: "leading delimiter",
            input: "\nline 1\nline 2\nline 3",
            delimiter: LineDelimiter::Lf,
            expected: vec!["", "line 1", "line 2", "line 3"],
        },
        BoundaryCase {
            name: "leading and trailing delimiters",
            input: "\nline 1\nline 2\nline 3\n",
            delimiter: LineDelimiter::Lf,
            expected: vec!["", "line 1", "line 2", "line 3", ""],
        },
        BoundaryCase {
            name: "crlf split on lf",
            input: "\r\nline 1\r\nline 2\r\nline 3\r\n",
            delimiter: LineDelimiter::Lf,
            expected: vec!["", "line 1", "line 2", "line 3", ""],
        },
        BoundaryCase {
            name: "crlf split on crlf",
            input: "line 1\r\nline 2\r\n",
            delimiter: LineDelimiter::CrLf,
            expected: vec!["line 1", "line 2", ""],
        },
    ]
}

/// Chunk sizes 1, 6, 11, ..., 51: small enough to cut every record and
/// delimiter apart, large enough to swallow whole inputs.
#[must_use]
pub fn chunk_sizes() -> Vec<usize> {
    (1..=51).step_by(5).collect()
}

/// `count` lines of the form `Line N\n`, numbered from 1.
///
/// # Example
///
/// ```
/// use ironstream::testing::sample_lines;
///
/// assert_eq!(sample_lines(3), "Line 1\nLine 2\nLine 3\n");
/// ```
#[must_use]
pub fn sample_lines(count: usize) -> String {
    (1..=count).map(|i| format!("Line {i}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_sizes() {
        let sizes = chunk_sizes();
        assert_eq!(sizes.first(), Some(&1));
        assert_eq!(sizes.last(), Some(&51));
        assert_eq!(sizes.len(), 11);
    }

    #[test]
    fn test_sample_lines_length() {
        assert_eq!(sample_lines(3).len(), 21);
        assert!(sample_lines(0).is_empty());
    }
}
