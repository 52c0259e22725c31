//! Free functions that compose the stream iterators.
//!
//! These are thin conveniences over [`ChunkReader`](crate::ChunkReader),
//! [`DelimiterSplitter`](crate::DelimiterSplitter),
//! [`LineSplitter`](crate::LineSplitter) and [`ChunkWriter`](crate::ChunkWriter);
//! reach for the types directly when you need their accessors.

pub(crate) mod reading;
pub(crate) mod writing;

pub use reading::*;
pub use writing::*;
