use crate::io::Resource;
use std::io::{self, SeekFrom};

/// A resource that is always empty and discards everything written to it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResource;

impl Resource for NullResource {
    fn kind(&self) -> &str {
        "null"
    }

    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Ok(0)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Ok(0)
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn size(&self) -> Option<u64> {
        Some(0)
    }

    fn is_exhausted(&self) -> bool {
        true
    }
}
