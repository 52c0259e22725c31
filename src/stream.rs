//! The [`Stream`] type: exclusive, capability-checked access to one resource.
//!
//! # Lifecycle
//!
//! A stream is open from construction until one of:
//! - [`Stream::close`] - flushes and releases the resource (idempotent)
//! - [`Stream::detach`] - hands the resource back to the caller unreleased
//! - drop - same as `close`
//!
//! After that every operation that needs the resource fails with
//! [`StreamError::ResourceClosed`], while the capability queries and
//! [`Stream::eof`] simply report `false`/`true`.
//!
//! # Capabilities
//!
//! Readability and writability come from the mode string; seekability from
//! the resource. All three are fixed at construction, see [`Mode`].
//!
//! Streams are move-only: there is no `Clone`, so a resource can never have
//! two owners.

use crate::error::{StreamError, StreamResult};
use crate::io::{FileResource, Resource};
use crate::metadata::Metadata;
use crate::mode::{Capabilities, Mode};
use log::{debug, trace, warn};
use serde_json::Value;
use std::fmt;
use std::io::{ErrorKind, SeekFrom};
use std::path::Path;

/// Upper bound on how much buffer a single read grows at a time.
const READ_STEP: usize = 64 * 1024;

/// Reference point for [`Stream::seek`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Whence {
    #[default]
    Start,
    Current,
    End,
}

/// An open byte resource plus the mode it was opened with.
///
/// ```
/// use ironstream::{memory, Whence};
///
/// let mut stream = memory("hello world")?;
/// stream.seek(-5, Whence::End)?;
/// assert_eq!(stream.read(16)?, b"world");
/// assert!(stream.eof());
/// assert_eq!(stream.tell()?, 11);
/// # Ok::<(), ironstream::StreamError>(())
/// ```
pub struct Stream {
    resource: Option<Box<dyn Resource>>,
    capabilities: Capabilities,
    metadata: Option<Metadata>,
    eof: bool,
}

impl Stream {
    /// Open a filesystem path with an fopen-style mode.
    ///
    /// # Errors
    ///
    /// [`StreamError::InvalidArgument`] if `mode` is malformed or the path
    /// cannot be opened with it.
    pub fn open(path: impl AsRef<Path>, mode: &str) -> StreamResult<Self> {
        let path = path.as_ref();
        let parsed = Mode::parse(mode)?;
        let resource = FileResource::open(path, &parsed).map_err(|e| {
            StreamError::invalid(format!("open {} with mode {mode:?}: {e}", path.display()))
        })?;
        Self::with_mode(Box::new(resource), parsed)
    }

    /// Take ownership of an already-open resource.
    ///
    /// # Errors
    ///
    /// [`StreamError::InvalidArgument`] if `mode` is malformed.
    pub fn from_resource<R: Resource + 'static>(resource: R, mode: &str) -> StreamResult<Self> {
        Self::with_mode(Box::new(resource), Mode::parse(mode)?)
    }

    fn with_mode(resource: Box<dyn Resource>, mode: Mode) -> StreamResult<Self> {
        let capabilities = mode.capabilities(resource.is_seekable());
        let metadata = Metadata {
            mode: mode.to_string(),
            seekable: capabilities.seekable,
            readable: capabilities.readable,
            writable: capabilities.writable,
            stream_type: resource.kind().to_string(),
            uri: resource.uri().map(str::to_string),
        };
        trace!("opened {} stream with mode {mode}", metadata.stream_type);
        Ok(Self {
            resource: Some(resource),
            capabilities,
            metadata: Some(metadata),
            eof: false,
        })
    }

    fn resource(&mut self) -> StreamResult<&mut Box<dyn Resource>> {
        self.resource.as_mut().ok_or(StreamError::ResourceClosed)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.resource.is_some()
    }

    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.is_open() && self.capabilities.readable
    }

    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.is_open() && self.capabilities.writable
    }

    #[must_use]
    pub fn is_seekable(&self) -> bool {
        self.is_open() && self.capabilities.seekable
    }

    /// The capabilities fixed at construction. Unlike the `is_*` queries this
    /// does not consider whether the stream is still open.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Read up to `n` bytes. On a seekable resource fewer bytes are returned
    /// only when the end is reached, which also sets [`eof`](Stream::eof).
    /// A non-seekable resource (pipe, terminal) returns whatever its first
    /// successful read delivers.
    ///
    /// Bytes already taken from the resource are never discarded. If the
    /// resource fails after part of the buffer was filled, that part is
    /// returned instead of the error; a failure that persists is reported by
    /// the next call.
    ///
    /// # Errors
    ///
    /// - [`StreamError::ResourceClosed`] after close/detach
    /// - [`StreamError::NotReadable`] if the mode does not allow reading
    /// - [`StreamError::ResourceInvalid`] if the resource fails
    pub fn read(&mut self, n: usize) -> StreamResult<Vec<u8>> {
        let Capabilities {
            readable, seekable, ..
        } = self.capabilities;
        let resource = self.resource()?;
        if !readable {
            return Err(StreamError::NotReadable);
        }
        let mut buf = Vec::with_capacity(n.min(READ_STEP));
        let mut hit_end = false;
        while buf.len() < n {
            let start = buf.len();
            buf.resize(start + (n - start).min(READ_STEP), 0);
            match resource.read(&mut buf[start..]) {
                Ok(0) => {
                    buf.truncate(start);
                    hit_end = true;
                    break;
                }
                Ok(k) => {
                    buf.truncate(start + k);
                    if !seekable {
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => buf.truncate(start),
                Err(e) if start > 0 => {
                    buf.truncate(start);
                    debug!("short read of {start} bytes, deferring resource error: {e}");
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        if hit_end {
            self.eof = true;
        }
        Ok(buf)
    }

    /// Read everything from the current position to the end.
    ///
    /// # Errors
    ///
    /// Same as [`read`](Stream::read).
    pub fn contents(&mut self) -> StreamResult<Vec<u8>> {
        let mut out = Vec::new();
        loop {
            let chunk = self.read(READ_STEP)?;
            if chunk.is_empty() {
                return Ok(out);
            }
            out.extend_from_slice(&chunk);
        }
    }

    /// Write all of `bytes`, returning how many were written.
    ///
    /// # Errors
    ///
    /// - [`StreamError::ResourceClosed`] after close/detach
    /// - [`StreamError::NotWritable`] if the mode does not allow writing
    /// - [`StreamError::ResourceInvalid`] if the resource fails or stops
    ///   accepting bytes
    pub fn write(&mut self, bytes: &[u8]) -> StreamResult<usize> {
        let writable = self.capabilities.writable;
        let resource = self.resource()?;
        if !writable {
            return Err(StreamError::NotWritable);
        }
        let mut written = 0;
        while written < bytes.len() {
            match resource.write(&bytes[written..]) {
                Ok(0) => return Err(std::io::Error::from(ErrorKind::WriteZero).into()),
                Ok(k) => written += k,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(written)
    }

    /// # Errors
    ///
    /// [`StreamError::ResourceClosed`] or the resource's flush failure.
    pub fn flush(&mut self) -> StreamResult<()> {
        Ok(self.resource()?.flush()?)
    }

    /// Move to `offset` relative to `whence`, returning the new position.
    /// Clears the end-of-stream flag.
    ///
    /// # Errors
    ///
    /// - [`StreamError::ResourceClosed`] after close/detach
    /// - [`StreamError::NotSeekable`] if the resource cannot seek
    /// - [`StreamError::InvalidArgument`] if the target lies before the start
    pub fn seek(&mut self, offset: i64, whence: Whence) -> StreamResult<u64> {
        let seekable = self.capabilities.seekable;
        let resource = self.resource()?;
        if !seekable {
            return Err(StreamError::NotSeekable);
        }
        let pos = match whence {
            Whence::Start => SeekFrom::Start(u64::try_from(offset).map_err(|_| {
                StreamError::invalid(format!("cannot seek to negative offset {offset}"))
            })?),
            Whence::Current => SeekFrom::Current(offset),
            Whence::End => SeekFrom::End(offset),
        };
        let at = resource.seek(pos).map_err(|e| match e.kind() {
            ErrorKind::InvalidInput => {
                StreamError::invalid(format!("cannot seek to {pos:?}: {e}"))
            }
            _ => StreamError::from(e),
        })?;
        self.eof = false;
        Ok(at)
    }

    /// # Errors
    ///
    /// Same as [`seek`](Stream::seek).
    pub fn rewind(&mut self) -> StreamResult<()> {
        self.seek(0, Whence::Start).map(|_| ())
    }

    /// Current position.
    ///
    /// # Errors
    ///
    /// Same as [`seek`](Stream::seek).
    pub fn tell(&mut self) -> StreamResult<u64> {
        let seekable = self.capabilities.seekable;
        let resource = self.resource()?;
        if !seekable {
            return Err(StreamError::NotSeekable);
        }
        Ok(resource.seek(SeekFrom::Current(0))?)
    }

    /// `true` once a read has run into the end of the resource, and always
    /// `true` for a closed stream. Never fails.
    #[must_use]
    pub fn eof(&self) -> bool {
        match &self.resource {
            Some(resource) => self.eof || resource.is_exhausted(),
            None => true,
        }
    }

    /// Size of the resource in bytes, when known. `None` once closed.
    #[must_use]
    pub fn size(&self) -> Option<u64> {
        self.resource.as_ref()?.size()
    }

    /// Full metadata record, or `None` once closed.
    #[must_use]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// A single metadata value, or `None` if absent or closed.
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<Value> {
        self.metadata.as_ref()?.get(key)
    }

    /// Flush and release the resource. Does nothing if already closed.
    pub fn close(&mut self) {
        self.metadata = None;
        if let Some(mut resource) = self.resource.take() {
            if let Err(e) = resource.flush() {
                warn!("flush failed while closing {} stream: {e}", resource.kind());
            }
            trace!("closed {} stream", resource.kind());
        }
    }

    /// Hand the resource to the caller without releasing it. The stream is
    /// closed afterwards. Returns `None` if it already was.
    pub fn detach(&mut self) -> Option<Box<dyn Resource>> {
        self.metadata = None;
        let resource = self.resource.take()?;
        trace!("detached {} stream", resource.kind());
        Some(resource)
    }

    /// Whole content as bytes, never failing: rewinds first when the stream
    /// is readable and seekable, and yields an empty buffer on any error.
    pub fn snapshot(&mut self) -> Vec<u8> {
        if self.is_readable() && self.is_seekable() && self.rewind().is_err() {
            return Vec::new();
        }
        self.contents().unwrap_or_default()
    }
}

impl Drop for Stream {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("open", &self.is_open())
            .field("capabilities", &self.capabilities)
            .field("eof", &self.eof)
            .field("metadata", &self.metadata)
            .finish()
    }
}
