//! Temporary files and directories for stream tests.
//!
//! Everything here is deleted when dropped.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

/// A temporary file that is automatically deleted when dropped.
pub struct TempFilePath {
    #[allow(dead_code)]
    temp_file: NamedTempFile,
    path: PathBuf,
}

impl TempFilePath {
    /// Create a new, empty temporary file.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created.
    pub fn new() -> std::io::Result<Self> {
        let temp_file = NamedTempFile::new()?;
        let path = temp_file.path().to_path_buf();
        Ok(Self { temp_file, path })
    }

    /// Get the path to the temporary file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A temporary directory that is automatically deleted when dropped.
pub struct TempDirPath {
    #[allow(dead_code)]
    temp_dir: TempDir,
    path: PathBuf,
}

impl TempDirPath {
    /// Create a new temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();
        Ok(Self { temp_dir, path })
    }

    /// Get the path to the temporary directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a file path within this directory. The file is not created.
    #[must_use]
    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.path.join(filename)
    }
}

/// Create a temporary file holding `content`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
///
/// # Example
///
/// ```
/// use ironstream::testing::mock_file;
/// use ironstream::file;
///
/// # fn main() -> anyhow::Result<()> {
/// let temp = mock_file("0123456789")?;
/// let mut stream = file(temp.path(), "rb")?;
/// assert_eq!(stream.read(4)?, b"0123");
/// # Ok(())
/// # }
/// ```
pub fn mock_file(content: impl AsRef<[u8]>) -> Result<TempFilePath> {
    let temp = TempFilePath::new().context("creating temporary file")?;
    std::fs::write(temp.path(), content.as_ref())
        .with_context(|| format!("writing {}", temp.path().display()))?;
    Ok(temp)
}

/// Read a file back for assertion.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_file_output(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).with_context(|| format!("reading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_file_path() {
        let temp = TempFilePath::new().unwrap();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_temp_dir_file_path() {
        let temp_dir = TempDirPath::new().unwrap();
        let file_path = temp_dir.file_path("test.txt");
        assert!(temp_dir.path().is_dir());
        assert!(file_path.starts_with(temp_dir.path()));
        assert!(!file_path.exists());
    }

    #[test]
    fn test_mock_file_round_trip() {
        let temp = mock_file("hello").unwrap();
        assert_eq!(read_file_output(temp.path()).unwrap(), b"hello");
    }
}
