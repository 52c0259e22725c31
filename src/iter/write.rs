use crate::error::{BoxError, StreamError, StreamResult};
use crate::stream::Stream;

/// Writes each item of a producer sequence to a stream, yielding the number
/// of bytes written per item.
///
/// The source is fallible: its items are `Result<B, E>` where `B` is any
/// byte container. A source error is reported as
/// [`StreamError::UnwritableSource`] so it cannot be mistaken for a failure
/// of the target stream. Use [`ChunkWriter::from_chunks`] for plain,
/// infallible sequences.
///
/// Nothing is written until the writer is iterated or drained with
/// [`write_all`](Self::write_all).
///
/// ```
/// use ironstream::{memory, ChunkWriter};
///
/// let mut out = memory("")?;
/// let counts = ChunkWriter::from_chunks(&mut out, ["ab\n", "c"])?
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(counts, vec![3, 1]);
/// assert_eq!(out.snapshot(), b"ab\nc");
/// # Ok::<(), ironstream::StreamError>(())
/// ```
pub struct ChunkWriter<'a, I> {
    stream: &'a mut Stream,
    source: I,
}

impl<'a, I> ChunkWriter<'a, I> {
    /// # Errors
    ///
    /// [`StreamError::ResourceClosed`] after close/detach,
    /// [`StreamError::NotWritable`] if the stream cannot be written.
    pub fn new<S>(stream: &'a mut Stream, source: S) -> StreamResult<Self>
    where
        S: IntoIterator<IntoIter = I>,
    {
        if !stream.is_open() {
            return Err(StreamError::ResourceClosed);
        }
        if !stream.is_writable() {
            return Err(StreamError::NotWritable);
        }
        Ok(Self {
            stream,
            source: source.into_iter(),
        })
    }

    #[must_use]
    pub fn stream(&self) -> &Stream {
        &*self.stream
    }

    #[must_use]
    pub fn source(&self) -> &I {
        &self.source
    }

    /// Seek the target stream back to its start.
    ///
    /// # Errors
    ///
    /// Whatever [`Stream::rewind`] reports.
    pub fn rewind(&mut self) -> StreamResult<()> {
        self.stream.rewind()
    }
}

impl<'a, I: Iterator> ChunkWriter<'a, AlwaysOk<I>> {
    /// Writer over a sequence that cannot fail, such as a `Vec<String>`.
    ///
    /// # Errors
    ///
    /// See [`ChunkWriter::new`].
    pub fn from_chunks<S>(stream: &'a mut Stream, source: S) -> StreamResult<Self>
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self::new(stream, AlwaysOk(source.into_iter()))
    }
}

impl<I, B, E> ChunkWriter<'_, I>
where
    I: Iterator<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<BoxError>,
{
    /// Drain the source, returning the total number of bytes written.
    ///
    /// # Errors
    ///
    /// Stops at the first failure: [`StreamError::UnwritableSource`] for a
    /// source error, or the target stream's own error.
    pub fn write_all(&mut self) -> StreamResult<usize> {
        self.try_fold(0, |total, written: StreamResult<usize>| {
            written.map(|n| total + n)
        })
    }
}

impl<I, B, E> Iterator for ChunkWriter<'_, I>
where
    I: Iterator<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<BoxError>,
{
    type Item = StreamResult<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(match self.source.next()? {
            Ok(chunk) => self.stream.write(chunk.as_ref()),
            Err(e) => Err(StreamError::UnwritableSource(e.into())),
        })
    }
}

/// Adapts a plain iterator into the fallible shape [`ChunkWriter`] expects.
#[derive(Clone, Debug)]
pub struct AlwaysOk<I>(I);

impl<I: Iterator> Iterator for AlwaysOk<I> {
    type Item = Result<I::Item, std::convert::Infallible>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
