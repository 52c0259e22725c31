use crate::error::{StreamError, StreamResult};
use crate::stream::Stream;

/// Chunk size used by the convenience helpers when the caller has no
/// preference.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Reads a stream as a sequence of chunks of at most `chunk_size` bytes.
///
/// The sequence ends at end of stream and never contains an empty chunk.
/// Reading a stream of `N` bytes yields `ceil(N / chunk_size)` chunks, all
/// full except possibly the last. To read again, [`rewind`](Self::rewind)
/// and keep pulling.
///
/// ```
/// use ironstream::{memory, ChunkReader};
///
/// let mut stream = memory("test")?;
/// let chunks = ChunkReader::new(&mut stream, 3)?.collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(chunks, vec![b"tes".to_vec(), b"t".to_vec()]);
/// # Ok::<(), ironstream::StreamError>(())
/// ```
pub struct ChunkReader<'a> {
    stream: &'a mut Stream,
    chunk_size: usize,
}

impl<'a> ChunkReader<'a> {
    /// # Errors
    ///
    /// - [`StreamError::ResourceClosed`] if the stream was closed or detached
    /// - [`StreamError::NotReadable`] if the stream cannot be read
    /// - [`StreamError::InvalidArgument`] if `chunk_size` is zero
    pub fn new(stream: &'a mut Stream, chunk_size: usize) -> StreamResult<Self> {
        if !stream.is_open() {
            return Err(StreamError::ResourceClosed);
        }
        if !stream.is_readable() {
            return Err(StreamError::NotReadable);
        }
        check_chunk_size(chunk_size)?;
        Ok(Self { stream, chunk_size })
    }

    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// # Errors
    ///
    /// [`StreamError::InvalidArgument`] if `chunk_size` is zero.
    pub fn set_chunk_size(&mut self, chunk_size: usize) -> StreamResult<&mut Self> {
        check_chunk_size(chunk_size)?;
        self.chunk_size = chunk_size;
        Ok(self)
    }

    #[must_use]
    pub fn stream(&self) -> &Stream {
        &*self.stream
    }

    pub fn stream_mut(&mut self) -> &mut Stream {
        &mut *self.stream
    }

    #[must_use]
    pub fn eof(&self) -> bool {
        self.stream.eof()
    }

    /// Seek the stream back to its start so the chunks can be read again.
    ///
    /// # Errors
    ///
    /// Whatever [`Stream::rewind`] reports, e.g. [`StreamError::NotSeekable`].
    pub fn rewind(&mut self) -> StreamResult<()> {
        self.stream.rewind()
    }
}

fn check_chunk_size(chunk_size: usize) -> StreamResult<()> {
    if chunk_size == 0 {
        return Err(StreamError::invalid("chunk size must be positive"));
    }
    Ok(())
}

impl Iterator for ChunkReader<'_> {
    type Item = StreamResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.stream.eof() {
            match self.stream.read(self.chunk_size) {
                // A read that lands exactly on the end comes back empty
                // before the stream reports EOF.
                Ok(chunk) if chunk.is_empty() => {}
                other => return Some(other),
            }
        }
        None
    }
}
