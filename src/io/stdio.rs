//! Process standard handles. None of them are seekable.

use crate::io::Resource;
use std::io::{self, Read, SeekFrom, Write};

fn unsupported(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Unsupported, format!("{what} is not supported"))
}

#[derive(Debug)]
pub struct StdinResource(io::Stdin);

impl StdinResource {
    #[must_use]
    pub fn new() -> Self {
        Self(io::stdin())
    }
}

impl Default for StdinResource {
    fn default() -> Self {
        Self::new()
    }
}

impl Resource for StdinResource {
    fn kind(&self) -> &str {
        "stdin"
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }

    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(unsupported("writing to stdin"))
    }

    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(unsupported("seeking stdin"))
    }

    fn is_seekable(&self) -> bool {
        false
    }
}

#[derive(Debug)]
pub struct StdoutResource(io::Stdout);

impl StdoutResource {
    #[must_use]
    pub fn new() -> Self {
        Self(io::stdout())
    }
}

impl Default for StdoutResource {
    fn default() -> Self {
        Self::new()
    }
}

impl Resource for StdoutResource {
    fn kind(&self) -> &str {
        "stdout"
    }

    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(unsupported("reading from stdout"))
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }

    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(unsupported("seeking stdout"))
    }

    fn is_seekable(&self) -> bool {
        false
    }
}

#[derive(Debug)]
pub struct StderrResource(io::Stderr);

impl StderrResource {
    #[must_use]
    pub fn new() -> Self {
        Self(io::stderr())
    }
}

impl Default for StderrResource {
    fn default() -> Self {
        Self::new()
    }
}

impl Resource for StderrResource {
    fn kind(&self) -> &str {
        "stderr"
    }

    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(unsupported("reading from stderr"))
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }

    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Err(unsupported("seeking stderr"))
    }

    fn is_seekable(&self) -> bool {
        false
    }
}
