//! Stream constructors.
//!
//! The free functions cover the common resources. [`StreamFactory`] is the
//! seam for code that wants streams injected rather than constructed in
//! place; [`DefaultStreamFactory`] backs it with temp streams and files.

use crate::error::StreamResult;
use crate::io::{MemoryResource, NullResource, Resource, TempOptions, TempResource};
use crate::mode::DEFAULT_MODE;
use crate::stream::Stream;
use std::path::Path;

/// Creates streams for callers that should not care where bytes live.
pub trait StreamFactory {
    /// A readable, writable, seekable stream holding `content`, positioned at 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing resource cannot be set up or filled.
    fn create_stream(&self, content: &[u8]) -> StreamResult<Stream>;

    /// # Errors
    ///
    /// See [`Stream::open`].
    fn create_stream_from_file(&self, path: &Path, mode: &str) -> StreamResult<Stream> {
        Stream::open(path, mode)
    }

    /// # Errors
    ///
    /// See [`Stream::from_resource`].
    fn create_stream_from_resource(
        &self,
        resource: Box<dyn Resource>,
        mode: &str,
    ) -> StreamResult<Stream> {
        Stream::from_resource(resource, mode)
    }
}

/// Factory whose in-memory streams are [`TempResource`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultStreamFactory {
    pub temp: TempOptions,
}

impl DefaultStreamFactory {
    #[must_use]
    pub fn new(temp: TempOptions) -> Self {
        Self { temp }
    }
}

impl StreamFactory for DefaultStreamFactory {
    fn create_stream(&self, content: &[u8]) -> StreamResult<Stream> {
        temp(content, Some(self.temp.max_memory))
    }
}

/// A memory-backed stream holding `content`, positioned at its start.
///
/// # Errors
///
/// Never fails in practice; the signature matches the other constructors.
pub fn memory(content: impl AsRef<[u8]>) -> StreamResult<Stream> {
    Stream::from_resource(MemoryResource::with_content(content.as_ref()), DEFAULT_MODE)
}

/// A temp stream holding `content`, positioned at its start. It stays in
/// memory up to `max_memory` bytes (default
/// [`DEFAULT_MAX_MEMORY`](crate::io::DEFAULT_MAX_MEMORY)) and then moves to
/// an anonymous temp file.
///
/// # Errors
///
/// Returns an error if spilling `content` to disk fails.
pub fn temp(content: impl AsRef<[u8]>, max_memory: Option<usize>) -> StreamResult<Stream> {
    let options = max_memory.map_or_else(TempOptions::default, |max_memory| TempOptions {
        max_memory,
    });
    let mut stream = Stream::from_resource(TempResource::new(options), DEFAULT_MODE)?;
    let content = content.as_ref();
    if !content.is_empty() {
        stream.write(content)?;
        stream.rewind()?;
    }
    Ok(stream)
}

/// Open a file path, like `fopen`.
///
/// # Errors
///
/// See [`Stream::open`].
pub fn file(path: impl AsRef<Path>, mode: &str) -> StreamResult<Stream> {
    Stream::open(path, mode)
}

/// A stream that is always at its end and discards writes.
///
/// # Errors
///
/// Never fails in practice; the signature matches the other constructors.
pub fn null() -> StreamResult<Stream> {
    Stream::from_resource(NullResource, DEFAULT_MODE)
}

#[cfg(feature = "stdio")]
mod stdio {
    use crate::error::StreamResult;
    use crate::io::{StderrResource, StdinResource, StdoutResource};
    use crate::stream::Stream;

    /// Read-only stream over the process's standard input.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches the other constructors.
    pub fn stdin() -> StreamResult<Stream> {
        Stream::from_resource(StdinResource::new(), "rb")
    }

    /// Write-only stream over the process's standard output.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches the other constructors.
    pub fn stdout() -> StreamResult<Stream> {
        Stream::from_resource(StdoutResource::new(), "wb")
    }

    /// Write-only stream over the process's standard error.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches the other constructors.
    pub fn stderr() -> StreamResult<Stream> {
        Stream::from_resource(StderrResource::new(), "wb")
    }
}

#[cfg(feature = "stdio")]
pub use stdio::{stderr, stdin, stdout};
