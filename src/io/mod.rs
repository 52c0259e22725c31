//! Byte resources that a [`Stream`](crate::Stream) can own.
//!
//! A [`Resource`] is the thin contract between a stream and the thing that
//! actually holds bytes: read/write/seek primitives plus a couple of static
//! facts (is it seekable, what kind of resource is it). Streams add the
//! lifecycle and capability checks on top; resources never see a closed
//! stream.
//!
//! ## Built-in resources
//!
//! - [`FileResource`] - a filesystem path or an already-open [`std::fs::File`]
//! - [`MemoryResource`] - a growable in-memory buffer
//! - [`TempResource`] - an in-memory buffer that spills to an anonymous temp file
//! - [`StdinResource`], [`StdoutResource`], [`StderrResource`] (feature: `stdio`)
//! - [`NullResource`] - reads nothing, swallows writes
//!
//! ## Custom resources
//!
//! ```
//! use ironstream::io::Resource;
//! use ironstream::Stream;
//! use std::io::{self, SeekFrom};
//!
//! /// Endless zeros.
//! struct Zeros;
//!
//! impl Resource for Zeros {
//!     fn kind(&self) -> &str { "zeros" }
//!     fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
//!         buf.fill(0);
//!         Ok(buf.len())
//!     }
//!     fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
//!         Err(io::ErrorKind::Unsupported.into())
//!     }
//!     fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
//!         Err(io::ErrorKind::Unsupported.into())
//!     }
//!     fn is_seekable(&self) -> bool { false }
//! }
//!
//! let mut stream = Stream::from_resource(Zeros, "rb")?;
//! assert_eq!(stream.read(4)?, vec![0, 0, 0, 0]);
//! # Ok::<(), ironstream::StreamError>(())
//! ```

use std::io::{self, SeekFrom};

pub mod file;
pub mod memory;
pub mod null;
#[cfg_attr(docsrs, doc(cfg(feature = "stdio")))]
#[cfg(feature = "stdio")]
pub mod stdio;
pub mod temp;

pub use file::FileResource;
pub use memory::MemoryResource;
pub use null::NullResource;
#[cfg(feature = "stdio")]
pub use stdio::{StderrResource, StdinResource, StdoutResource};
pub use temp::{TempOptions, TempResource, DEFAULT_MAX_MEMORY};

/// An OS-level byte resource owned by a stream.
///
/// Implementations must be `Send` so an owning stream can be moved between
/// threads; a single resource is never accessed concurrently.
pub trait Resource: Send {
    /// Short resource type name, reported as the `stream_type` metadata key.
    fn kind(&self) -> &str;

    /// Read into `buf`, returning the number of bytes read. `Ok(0)` means
    /// end of data.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Write from `buf`, returning how many bytes were accepted.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Reposition the resource, returning the new absolute offset.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64>;

    /// Whether [`seek`](Resource::seek) is supported. Queried once, when the
    /// owning stream is constructed.
    fn is_seekable(&self) -> bool;

    /// Total size in bytes, when the resource knows it.
    fn size(&self) -> Option<u64> {
        None
    }

    /// Location the resource was opened from, if any.
    fn uri(&self) -> Option<&str> {
        None
    }

    /// `true` for resources that can never produce data.
    fn is_exhausted(&self) -> bool {
        false
    }
}

impl<R: Resource + ?Sized> Resource for Box<R> {
    fn kind(&self) -> &str {
        (**self).kind()
    }
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        (**self).seek(pos)
    }
    fn is_seekable(&self) -> bool {
        (**self).is_seekable()
    }
    fn size(&self) -> Option<u64> {
        (**self).size()
    }
    fn uri(&self) -> Option<&str> {
        (**self).uri()
    }
    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}
