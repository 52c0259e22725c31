use crate::error::StreamResult;
use crate::iter::read::ChunkReader;
use crate::iter::split::DelimiterSplitter;

/// Line terminator a [`LineSplitter`] splits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineDelimiter {
    #[default]
    Lf,
    Cr,
    CrLf,
}

impl LineDelimiter {
    #[must_use]
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Lf => b"\n",
            Self::Cr => b"\r",
            Self::CrLf => b"\r\n",
        }
    }
}

/// Strip leading and trailing `\r` / `\n` bytes. Other whitespace is kept.
#[must_use]
pub fn trim_line(record: &[u8]) -> &[u8] {
    let is_eol = |b: &u8| matches!(b, b'\r' | b'\n');
    let Some(first) = record.iter().position(|b| !is_eol(b)) else {
        return &record[..0];
    };
    let last = record.iter().rposition(|b| !is_eol(b)).unwrap_or(first);
    &record[first..=last]
}

/// A [`DelimiterSplitter`] for text lines.
///
/// Every record has stray carriage returns and line feeds trimmed from both
/// ends, so CRLF input split on [`LineDelimiter::Lf`] gives the same lines as
/// LF input.
///
/// ```
/// use ironstream::{memory, ChunkReader, LineDelimiter, LineSplitter};
///
/// let mut stream = memory("one\r\n two \r\n")?;
/// let lines = LineSplitter::new(ChunkReader::new(&mut stream, 4)?, LineDelimiter::Lf)
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(lines, vec![b"one".to_vec(), b" two ".to_vec(), vec![]]);
/// # Ok::<(), ironstream::StreamError>(())
/// ```
pub struct LineSplitter<'a> {
    inner: DelimiterSplitter<'a>,
    delimiter: LineDelimiter,
}

impl<'a> LineSplitter<'a> {
    #[must_use]
    pub fn new(reader: ChunkReader<'a>, delimiter: LineDelimiter) -> Self {
        Self {
            inner: DelimiterSplitter::with_checked_delimiter(reader, delimiter.as_bytes().to_vec()),
            delimiter,
        }
    }

    #[must_use]
    pub fn delimiter(&self) -> LineDelimiter {
        self.delimiter
    }

    #[must_use]
    pub fn splitter(&self) -> &DelimiterSplitter<'a> {
        &self.inner
    }
}

impl Iterator for LineSplitter<'_> {
    type Item = StreamResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.inner.next()?;
        Some(record.map(|mut line| {
            let trimmed = trim_line(&line);
            if trimmed.len() != line.len() {
                line = trimmed.to_vec();
            }
            line
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::trim_line;

    #[test]
    fn trims_only_line_breaks() {
        assert_eq!(trim_line(b"\r\nabc\r\n"), b"abc");
        assert_eq!(trim_line(b" abc\t\n"), b" abc\t");
        assert_eq!(trim_line(b"\r\n\r"), b"");
        assert_eq!(trim_line(b""), b"");
        assert_eq!(trim_line(b"a\r\nb"), b"a\r\nb");
    }
}
