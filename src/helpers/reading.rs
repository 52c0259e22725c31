use crate::error::StreamResult;
use crate::iter::{ChunkReader, DelimiterSplitter, LineDelimiter, LineSplitter};
use crate::stream::Stream;

/// Iterate over `stream` in chunks of at most `chunk_size` bytes.
///
/// # Errors
///
/// See [`ChunkReader::new`].
pub fn read_chunks(stream: &mut Stream, chunk_size: usize) -> StreamResult<ChunkReader<'_>> {
    ChunkReader::new(stream, chunk_size)
}

/// Split an existing reader into lines.
#[must_use]
pub fn read_lines(reader: ChunkReader<'_>, delimiter: LineDelimiter) -> LineSplitter<'_> {
    LineSplitter::new(reader, delimiter)
}

/// Lines of `stream`, read `chunk_size` bytes at a time.
///
/// ```
/// use ironstream::{get_lines, memory, LineDelimiter};
///
/// let mut stream = memory("line 1\nline 2\n")?;
/// let lines: Vec<_> = get_lines(&mut stream, LineDelimiter::Lf, 1024)?.collect::<Result<_, _>>()?;
/// assert_eq!(lines, vec![b"line 1".to_vec(), b"line 2".to_vec(), vec![]]);
/// # Ok::<(), ironstream::StreamError>(())
/// ```
///
/// # Errors
///
/// See [`ChunkReader::new`].
pub fn get_lines(
    stream: &mut Stream,
    delimiter: LineDelimiter,
    chunk_size: usize,
) -> StreamResult<LineSplitter<'_>> {
    Ok(read_lines(read_chunks(stream, chunk_size)?, delimiter))
}

/// Split an existing reader on `delimiter`.
///
/// # Errors
///
/// See [`DelimiterSplitter::new`].
pub fn read_split(
    reader: ChunkReader<'_>,
    delimiter: impl AsRef<[u8]>,
) -> StreamResult<DelimiterSplitter<'_>> {
    DelimiterSplitter::new(reader, delimiter)
}

/// Records of `stream` separated by `delimiter`, read `chunk_size` bytes at
/// a time.
///
/// # Errors
///
/// See [`ChunkReader::new`] and [`DelimiterSplitter::new`].
pub fn split(
    stream: &mut Stream,
    delimiter: impl AsRef<[u8]>,
    chunk_size: usize,
) -> StreamResult<DelimiterSplitter<'_>> {
    read_split(read_chunks(stream, chunk_size)?, delimiter)
}
