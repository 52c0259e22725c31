//! Delimiter splitting over a chunked byte stream.
//!
//! Records are assembled in a `pending` buffer. Each new chunk is appended
//! to it and the delimiter is searched for in the combined bytes, so a
//! delimiter that straddles two reads is still found. Searching restarts
//! `delimiter.len() - 1` bytes before the old end of the buffer; bytes
//! earlier than that were already ruled out.
//!
//! Invariant: every record yielded so far, each followed by the delimiter,
//! then `pending`, then the unread rest of the stream, equals the stream
//! content from where splitting started. Nothing is dropped or duplicated.

use crate::error::{StreamError, StreamResult};
use crate::iter::read::ChunkReader;

/// Splits a [`ChunkReader`]'s output into delimiter-separated records.
///
/// The delimiter itself is not part of any record. Adjacent, leading and
/// trailing delimiters produce empty records, and the bytes after the last
/// delimiter are always yielded as a final record, even when empty. Splitting
/// an empty stream therefore yields exactly one empty record.
///
/// ```
/// use ironstream::{memory, ChunkReader, DelimiterSplitter};
///
/// let mut stream = memory("a,,b,")?;
/// let reader = ChunkReader::new(&mut stream, 2)?;
/// let records = DelimiterSplitter::new(reader, ",")?.collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(records, vec![b"a".to_vec(), vec![], b"b".to_vec(), vec![]]);
/// # Ok::<(), ironstream::StreamError>(())
/// ```
pub struct DelimiterSplitter<'a> {
    reader: ChunkReader<'a>,
    delimiter: Vec<u8>,
    pending: Vec<u8>,
    /// Start of the record being assembled within `pending`.
    start: usize,
    /// Where the next delimiter search begins within `pending`.
    scan_from: usize,
    finished: bool,
}

impl<'a> DelimiterSplitter<'a> {
    /// # Errors
    ///
    /// [`StreamError::InvalidArgument`] if `delimiter` is empty.
    pub fn new(reader: ChunkReader<'a>, delimiter: impl AsRef<[u8]>) -> StreamResult<Self> {
        let delimiter = delimiter.as_ref();
        check_delimiter(delimiter)?;
        Ok(Self::with_checked_delimiter(reader, delimiter.to_vec()))
    }

    pub(crate) fn with_checked_delimiter(reader: ChunkReader<'a>, delimiter: Vec<u8>) -> Self {
        Self {
            reader,
            delimiter,
            pending: Vec::new(),
            start: 0,
            scan_from: 0,
            finished: false,
        }
    }

    #[must_use]
    pub fn delimiter(&self) -> &[u8] {
        &self.delimiter
    }

    /// Replace the delimiter. Takes effect from the next search; buffered
    /// bytes are rescanned with the new delimiter.
    ///
    /// # Errors
    ///
    /// [`StreamError::InvalidArgument`] if `delimiter` is empty.
    pub fn set_delimiter(&mut self, delimiter: impl AsRef<[u8]>) -> StreamResult<&mut Self> {
        let delimiter = delimiter.as_ref();
        check_delimiter(delimiter)?;
        self.delimiter = delimiter.to_vec();
        self.scan_from = self.start;
        Ok(self)
    }

    #[must_use]
    pub fn reader(&self) -> &ChunkReader<'a> {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut ChunkReader<'a> {
        &mut self.reader
    }

    /// Bytes read past the last yielded record.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.pending[self.start..]
    }

    fn take_record(&mut self) -> Option<Vec<u8>> {
        let at = self.scan_from + find(&self.pending[self.scan_from..], &self.delimiter)?;
        let record = self.pending[self.start..at].to_vec();
        self.start = at + self.delimiter.len();
        self.scan_from = self.start;
        Some(record)
    }

    fn append(&mut self, chunk: &[u8]) {
        self.pending.drain(..self.start);
        self.start = 0;
        self.scan_from = self.pending.len().saturating_sub(self.delimiter.len() - 1);
        self.pending.extend_from_slice(chunk);
    }
}

fn check_delimiter(delimiter: &[u8]) -> StreamResult<()> {
    if delimiter.is_empty() {
        return Err(StreamError::invalid("delimiter must not be empty"));
    }
    Ok(())
}

/// Position of the first occurrence of `needle` in `haystack`.
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    match needle {
        [byte] => haystack.iter().position(|b| b == byte),
        _ => haystack.windows(needle.len()).position(|w| w == needle),
    }
}

impl Iterator for DelimiterSplitter<'_> {
    type Item = StreamResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            if let Some(record) = self.take_record() {
                return Some(Ok(record));
            }
            match self.reader.next() {
                Some(Ok(chunk)) => self.append(&chunk),
                Some(Err(e)) => return Some(Err(e)),
                None => {
                    self.finished = true;
                    let last = self.pending.split_off(self.start);
                    self.pending.clear();
                    self.start = 0;
                    self.scan_from = 0;
                    return Some(Ok(last));
                }
            }
        }
    }
}
