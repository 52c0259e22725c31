//! Error taxonomy shared by streams and the iterator pipeline.

use thiserror::Error;

/// Boxed error produced by a [`ChunkWriter`](crate::iter::ChunkWriter) source.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type StreamResult<T> = std::result::Result<T, StreamError>;

#[derive(Error, Debug)]
pub enum StreamError {
    /// Malformed call or constructor arguments (bad mode string, zero chunk
    /// size, empty delimiter, unopenable path, negative seek target).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The stream was closed or detached before the call.
    #[error("stream is closed")]
    ResourceClosed,
    /// The underlying resource failed on an apparently open stream.
    #[error("resource error: {0}")]
    ResourceInvalid(#[from] std::io::Error),
    #[error("stream is not readable")]
    NotReadable,
    #[error("stream is not writable")]
    NotWritable,
    #[error("stream is not seekable")]
    NotSeekable,
    /// A writer's source sequence yielded something that could not be
    /// written. Kept apart from the target stream's own errors.
    #[error("source produced an unwritable value: {0}")]
    UnwritableSource(#[source] BoxError),
}

impl StreamError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// `true` for the three capability failures.
    #[must_use]
    pub fn is_capability_error(&self) -> bool {
        matches!(
            self,
            Self::NotReadable | Self::NotWritable | Self::NotSeekable
        )
    }
}
