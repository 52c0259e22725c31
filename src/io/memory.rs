use crate::io::Resource;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

/// A growable in-memory buffer.
#[derive(Debug, Default)]
pub struct MemoryResource {
    cursor: Cursor<Vec<u8>>,
}

impl MemoryResource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer pre-filled with `content`, positioned at its start.
    #[must_use]
    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            cursor: Cursor::new(content.into()),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.cursor.get_ref()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.cursor.into_inner()
    }
}

impl Resource for MemoryResource {
    fn kind(&self) -> &str {
        "memory"
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.cursor.write(buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn size(&self) -> Option<u64> {
        Some(self.cursor.get_ref().len() as u64)
    }
}
