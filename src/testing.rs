//! Testing utilities for code built on streams and stream iterators.
//!
//! This module is what the crate's own test suite uses, exported so that
//! downstream crates can test their stream plumbing the same way. It
//! includes:
//!
//! - **Assertions**: compare yielded records and chunks with readable diffs
//! - **Fixtures**: the boundary inputs every splitter has to get right
//! - **Mock I/O**: temporary files and directories that clean up after themselves
//!
//! # Quick Start
//!
//! ```
//! use ironstream::testing::*;
//! use ironstream::{memory, split};
//!
//! # fn main() -> anyhow::Result<()> {
//! for chunk_size in chunk_sizes() {
//!     let mut stream = memory("a,b,c,d")?;
//!     let records = split(&mut stream, ",", chunk_size)?.collect::<Result<Vec<_>, _>>()?;
//!     assert_records_equal(&records, &["a", "b", "c", "d"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod mock_io;

pub use assertions::*;
pub use fixtures::*;
pub use mock_io::*;
