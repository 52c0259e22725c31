//! Memory-first scratch storage.
//!
//! A [`TempResource`] keeps its bytes in memory until a write would grow it
//! past [`TempOptions::max_memory`]. At that point the buffer is copied into
//! an anonymous temporary file (removed by the OS once closed) and all
//! further I/O goes to the file. Content and position are unchanged by the
//! switch.

use crate::io::Resource;
use log::debug;
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

/// Default spill threshold: 2 MiB.
pub const DEFAULT_MAX_MEMORY: usize = 2 * 1024 * 1024;

/// Configuration for [`TempResource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TempOptions {
    /// Largest in-memory size, in bytes, before spilling to disk.
    pub max_memory: usize,
}

impl Default for TempOptions {
    fn default() -> Self {
        Self {
            max_memory: DEFAULT_MAX_MEMORY,
        }
    }
}

enum Storage {
    Memory(Cursor<Vec<u8>>),
    File(File),
}

pub struct TempResource {
    storage: Storage,
    options: TempOptions,
}

impl TempResource {
    #[must_use]
    pub fn new(options: TempOptions) -> Self {
        Self {
            storage: Storage::Memory(Cursor::new(Vec::new())),
            options,
        }
    }

    /// Whether the content has moved to a temp file.
    #[must_use]
    pub fn is_spilled(&self) -> bool {
        matches!(self.storage, Storage::File(_))
    }

    #[must_use]
    pub fn options(&self) -> TempOptions {
        self.options
    }

    fn spill(&mut self) -> io::Result<()> {
        let Storage::Memory(cursor) = &self.storage else {
            return Ok(());
        };
        let mut file = tempfile::tempfile()?;
        file.write_all(cursor.get_ref())?;
        file.seek(SeekFrom::Start(cursor.position()))?;
        debug!(
            "temp resource spilled {} bytes to disk (max_memory = {})",
            cursor.get_ref().len(),
            self.options.max_memory
        );
        self.storage = Storage::File(file);
        Ok(())
    }
}

impl Default for TempResource {
    fn default() -> Self {
        Self::new(TempOptions::default())
    }
}

impl Resource for TempResource {
    fn kind(&self) -> &str {
        "temp"
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.storage {
            Storage::Memory(cursor) => cursor.read(buf),
            Storage::File(file) => file.read(buf),
        }
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Storage::Memory(cursor) = &self.storage {
            let end = cursor.position().saturating_add(buf.len() as u64);
            if end > self.options.max_memory as u64 {
                self.spill()?;
            }
        }
        match &mut self.storage {
            Storage::Memory(cursor) => cursor.write(buf),
            Storage::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.storage {
            Storage::Memory(_) => Ok(()),
            Storage::File(file) => file.flush(),
        }
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match &mut self.storage {
            Storage::Memory(cursor) => cursor.seek(pos),
            Storage::File(file) => file.seek(pos),
        }
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn size(&self) -> Option<u64> {
        match &self.storage {
            Storage::Memory(cursor) => Some(cursor.get_ref().len() as u64),
            Storage::File(file) => file.metadata().ok().map(|m| m.len()),
        }
    }
}
