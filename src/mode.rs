//! fopen-style mode strings and the capabilities derived from them.
//!
//! A mode is parsed once, when a [`Stream`](crate::Stream) is constructed.
//! The resulting [`Capabilities`] are stored on the stream and never
//! re-derived from the string.
//!
//! | Mode | Readable | Writable | File handling |
//! |------|----------|----------|---------------|
//! | `r`  | yes | no  | must exist |
//! | `r+` | yes | yes | must exist |
//! | `w`  | no  | yes | create, truncate |
//! | `a`  | no  | yes | create, append |
//! | `x`  | no  | yes | create, fail if it exists |
//! | `c`  | no  | yes | create, keep contents |
//!
//! A trailing `+` on `w`, `a`, `x` or `c` also makes the stream readable.
//! The `b` and `t` flags are accepted and ignored.

use crate::error::{StreamError, StreamResult};
use serde::Serialize;
use std::fmt;
use std::fs::OpenOptions;
use std::str::FromStr;

/// Default mode for streams wrapping an already-open resource.
pub const DEFAULT_MODE: &str = "rb+";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Access {
    Read,
    Write,
    Append,
    Exclusive,
    Create,
}

impl Access {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Self::Read),
            'w' => Some(Self::Write),
            'a' => Some(Self::Append),
            'x' => Some(Self::Exclusive),
            'c' => Some(Self::Create),
            _ => None,
        }
    }
}

/// A validated mode string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mode {
    raw: String,
    #[serde(skip)]
    access: Access,
    #[serde(skip)]
    update: bool,
}

impl Mode {
    /// Parse a mode string such as `"rb"`, `"w+"` or `"r+b"`.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidArgument`] if the string does not contain
    /// exactly one of `r`, `w`, `a`, `x`, `c`, or contains flags other than
    /// `+`, `b` and `t`.
    pub fn parse(raw: &str) -> StreamResult<Self> {
        let mut access = None;
        let mut update = false;
        for c in raw.chars() {
            if let Some(a) = Access::from_char(c) {
                if access.replace(a).is_some() {
                    return Err(StreamError::invalid(format!(
                        "mode {raw:?} names more than one access type"
                    )));
                }
                continue;
            }
            match c {
                '+' => update = true,
                'b' | 't' => {}
                other => {
                    return Err(StreamError::invalid(format!(
                        "mode {raw:?} contains unknown flag {other:?}"
                    )));
                }
            }
        }
        let access = access.ok_or_else(|| {
            StreamError::invalid(format!("mode {raw:?} is missing an access type"))
        })?;
        Ok(Self {
            raw: raw.to_string(),
            access,
            update,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.raw.contains(['r', '+'])
    }

    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.raw.contains(['w', 'x', 'c', '+', 'a'])
    }

    /// Combine the mode's access flags with the resource's seekability.
    #[must_use]
    pub fn capabilities(&self, seekable: bool) -> Capabilities {
        Capabilities {
            readable: self.is_readable(),
            writable: self.is_writable(),
            seekable,
        }
    }

    /// Translate the mode into the options used to open a file path.
    #[must_use]
    pub fn open_options(&self) -> OpenOptions {
        let mut opts = OpenOptions::new();
        opts.read(self.is_readable());
        match self.access {
            Access::Read => {
                opts.write(self.update);
            }
            Access::Write => {
                opts.write(true).create(true).truncate(true);
            }
            Access::Append => {
                opts.append(true).create(true);
            }
            Access::Exclusive => {
                opts.write(true).create_new(true);
            }
            Access::Create => {
                opts.write(true).create(true);
            }
        }
        opts
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self {
            raw: DEFAULT_MODE.to_string(),
            access: Access::Read,
            update: true,
        }
    }
}

impl FromStr for Mode {
    type Err = StreamError;

    fn from_str(s: &str) -> StreamResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// What a stream is allowed to do. Fixed for the stream's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub readable: bool,
    pub writable: bool,
    pub seekable: bool,
}
