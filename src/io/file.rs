use crate::io::Resource;
use crate::mode::Mode;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// A filesystem-backed resource.
///
/// Regular files are seekable; FIFOs, character devices and other special
/// files opened through a path are not.
pub struct FileResource {
    file: File,
    uri: Option<String>,
    seekable: bool,
}

impl FileResource {
    /// Open `path` using the options implied by `mode`.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the path cannot be opened with that mode.
    pub fn open(path: impl AsRef<Path>, mode: &Mode) -> io::Result<Self> {
        let path = path.as_ref();
        let file = mode.open_options().open(path)?;
        let mut resource = Self::from_file(file)?;
        resource.uri = Some(path.display().to_string());
        Ok(resource)
    }

    /// Wrap an already-open file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file's metadata cannot be queried.
    pub fn from_file(file: File) -> io::Result<Self> {
        let seekable = file.metadata()?.is_file();
        Ok(Self {
            file,
            uri: None,
            seekable,
        })
    }

    /// Give back the wrapped file.
    #[must_use]
    pub fn into_file(self) -> File {
        self.file
    }
}

impl Resource for FileResource {
    fn kind(&self) -> &str {
        "file"
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }

    fn is_seekable(&self) -> bool {
        self.seekable
    }

    fn size(&self) -> Option<u64> {
        self.file.metadata().ok().map(|m| m.len())
    }

    fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}
