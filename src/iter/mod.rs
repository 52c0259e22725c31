//! Lazy, pull-based iterators over streams.
//!
//! ```text
//! Stream -> ChunkReader -> DelimiterSplitter / LineSplitter -> consumer
//! producer -> ChunkWriter -> Stream
//! ```
//!
//! Every iterator borrows its stream mutably and advances only when `next`
//! is called; reads and writes between items are synchronous. Memory use is
//! bounded by one chunk plus, for the splitters, the record currently being
//! assembled. Abandoning an iterator early leaves the stream open at
//! whatever position it reached.

pub mod line;
pub mod read;
pub mod split;
pub mod write;

pub use line::{trim_line, LineDelimiter, LineSplitter};
pub use read::{ChunkReader, DEFAULT_CHUNK_SIZE};
pub use split::DelimiterSplitter;
pub use write::{AlwaysOk, ChunkWriter};
