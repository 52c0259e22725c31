use crate::error::StreamResult;
use crate::iter::{AlwaysOk, ChunkReader, ChunkWriter};
use crate::stream::Stream;
use log::debug;

/// Lazily write each chunk of `source` to `stream`.
///
/// For sources that can fail, build a [`ChunkWriter`] directly.
///
/// # Errors
///
/// [`StreamError::NotWritable`](crate::StreamError::NotWritable) if the stream cannot be written.
pub fn write<S>(stream: &mut Stream, source: S) -> StreamResult<ChunkWriter<'_, AlwaysOk<S::IntoIter>>>
where
    S: IntoIterator,
    S::Item: AsRef<[u8]>,
{
    ChunkWriter::from_chunks(stream, source)
}

/// Write every chunk of `source` to `stream`, returning the total byte count.
///
/// # Errors
///
/// The first write failure, or `NotWritable` up front.
pub fn write_all<S>(stream: &mut Stream, source: S) -> StreamResult<usize>
where
    S: IntoIterator,
    S::Item: AsRef<[u8]>,
{
    write(stream, source)?.write_all()
}

/// Lazily copy `input` into `output`, one chunk per item.
///
/// A read failure on `input` surfaces as
/// [`StreamError::UnwritableSource`](crate::StreamError::UnwritableSource)
/// wrapping the original error.
///
/// # Errors
///
/// `NotReadable` for `input`, `NotWritable` for `output`, or an invalid
/// chunk size.
pub fn pipe<'a, 'b>(
    input: &'a mut Stream,
    output: &'b mut Stream,
    chunk_size: usize,
) -> StreamResult<ChunkWriter<'b, ChunkReader<'a>>> {
    let reader = ChunkReader::new(input, chunk_size)?;
    ChunkWriter::new(output, reader)
}

/// Copy all of `input` into `output`, returning the number of bytes copied.
///
/// ```
/// use ironstream::{memory, pipe_all};
///
/// let mut input = memory("Line 1\nLine 2\n")?;
/// let mut output = memory("")?;
/// assert_eq!(pipe_all(&mut input, &mut output, 4)?, 14);
/// assert_eq!(output.snapshot(), b"Line 1\nLine 2\n");
/// # Ok::<(), ironstream::StreamError>(())
/// ```
///
/// # Errors
///
/// See [`pipe`]; copying stops at the first failure.
pub fn pipe_all(input: &mut Stream, output: &mut Stream, chunk_size: usize) -> StreamResult<usize> {
    let copied = pipe(input, output, chunk_size)?.write_all()?;
    debug!("piped {copied} bytes in chunks of {chunk_size}");
    Ok(copied)
}
