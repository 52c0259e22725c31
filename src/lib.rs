//! # Ironstream
//!
//! **Byte streams and lazy stream iterators** for Rust. Ironstream wraps files,
//! memory buffers, spill-to-disk temp buffers and the standard streams behind
//! one capability-checked [`Stream`] type, and processes them chunk by chunk
//! with iterators that never hold more than a chunk and a record in memory.
//!
//! ## Key Features
//!
//! - **One stream type** - read, write, seek, tell, eof, close and detach on any resource
//! - **Capability checks** - readability and writability come from an fopen-style mode
//! - **Chunked reading** - [`ChunkReader`] yields fixed-size chunks, never an empty one
//! - **Record splitting** - [`DelimiterSplitter`] and [`LineSplitter`] find delimiters across chunk boundaries
//! - **Lazy writing** - [`ChunkWriter`] writes a sequence of chunks as it is pulled
//! - **Temp streams** - memory-backed until a threshold, then an anonymous temp file
//! - **Pluggable resources** - implement [`Resource`](io::Resource) for anything else
//!
//! ## Quick Start
//!
//! ```
//! use ironstream::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut input = memory("ab\ncd\nde\ng")?;
//! let mut output = memory("")?;
//!
//! // Keep every line except "de", newline-terminated.
//! let lines: Vec<Vec<u8>> = get_lines(&mut input, LineDelimiter::Lf, DEFAULT_CHUNK_SIZE)?
//!     .collect::<Result<_, _>>()?;
//! let kept = lines
//!     .into_iter()
//!     .filter(|line| line != b"de")
//!     .map(|mut line| {
//!         line.push(b'\n');
//!         line
//!     });
//!
//! let counts: Vec<usize> = write(&mut output, kept)?.collect::<Result<_, _>>()?;
//! assert_eq!(counts, vec![3, 3, 2]);
//! assert_eq!(output.snapshot(), b"ab\ncd\ng\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Stream
//!
//! A [`Stream`] exclusively owns one resource. It is open until
//! [`close`](Stream::close)d, [`detach`](Stream::detach)ed or dropped; after
//! that every resource operation fails with [`StreamError::ResourceClosed`].
//! Streams cannot be cloned.
//!
//! ### Iterators
//!
//! The [`iter`] module holds the pull-based pipeline:
//! - [`ChunkReader`] - fixed-size chunks until end of stream
//! - [`DelimiterSplitter`] - records separated by an arbitrary byte delimiter
//! - [`LineSplitter`] - lines, with stray `\r`/`\n` trimmed from each
//! - [`ChunkWriter`] - writes each item of a producer, yielding byte counts
//!
//! Each borrows its stream mutably and does I/O only inside `next`.
//!
//! ### Constructors
//!
//! - [`memory`], [`temp`], [`file`], [`null`] and the `stdio` trio
//! - [`StreamFactory`] / [`DefaultStreamFactory`] when streams are injected
//! - [`Stream::from_resource`] for custom resources
//!
//! ## Feature Flags
//!
//! - `stdio` (default) - [`stdin`], [`stdout`] and [`stderr`] streams
//!
//! ## Module Overview
//!
//! - [`stream`] - The `Stream` type and seeking
//! - [`io`] - The `Resource` trait and the built-in resources
//! - [`iter`] - Chunk readers, splitters and writers
//! - [`helpers`] - Free functions composing the iterators
//! - [`factory`] - Stream constructors and the factory trait
//! - [`mode`] - Mode string parsing and capabilities
//! - [`metadata`] - The serializable metadata record
//! - [`error`] - `StreamError` and `StreamResult`
//! - [`testing`] - Assertions, fixtures and temp files for tests

pub mod error;
pub mod factory;
pub mod helpers;
pub mod io;
pub mod iter;
pub mod metadata;
pub mod mode;
pub mod stream;
pub mod testing;

// General re-exports
pub use error::{BoxError, StreamError, StreamResult};
pub use factory::{file, memory, null, temp, DefaultStreamFactory, StreamFactory};
pub use helpers::*;
pub use io::{Resource, TempOptions, DEFAULT_MAX_MEMORY};
pub use iter::{
    trim_line, AlwaysOk, ChunkReader, ChunkWriter, DelimiterSplitter, LineDelimiter,
    LineSplitter, DEFAULT_CHUNK_SIZE,
};
pub use metadata::Metadata;
pub use mode::{Capabilities, Mode, DEFAULT_MODE};
pub use stream::{Stream, Whence};

// Gated re-exports
#[cfg(feature = "stdio")]
pub use factory::{stderr, stdin, stdout};
