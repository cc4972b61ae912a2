//! Byte-wise escaping for literal text.
//!
//! Every byte of literal, prose and name text is written through
//! [`escape_byte`]. The dimension oracle measures with the same function, so a
//! measured width always matches the number of cells painted.
//!
//! | byte                         | cells       |
//! |------------------------------|-------------|
//! | `\` and `"`                  | `\\`, `\"`  |
//! | `\a \b \f \n \r \t \v`       | 2           |
//! | other non-printable bytes    | `\xHH` (4)  |
//! | printable ASCII              | 1           |

use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt;
use core::ops::Deref;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// The escaped form of a single byte: between one and four cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escaped {
    buf: [u8; 4],
    len: u8,
}

impl Escaped {
    const fn one(b: u8) -> Self {
        Self {
            buf: [b, 0, 0, 0],
            len: 1,
        }
    }

    const fn pair(c: u8) -> Self {
        Self {
            buf: [b'\\', c, 0, 0],
            len: 2,
        }
    }

    const fn hex(b: u8) -> Self {
        Self {
            buf: [b'\\', b'x', HEX[(b >> 4) as usize], HEX[(b & 0x0f) as usize]],
            len: 4,
        }
    }
}

impl Deref for Escaped {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

/// Escape one byte.
///
/// # Examples
///
/// ```
/// use ascii_railroad::text::escape_byte;
///
/// assert_eq!(&*escape_byte(b'a'), b"a");
/// assert_eq!(&*escape_byte(b'"'), b"\\\"");
/// assert_eq!(&*escape_byte(0x01), b"\\x01");
/// ```
pub const fn escape_byte(b: u8) -> Escaped {
    match b {
        b'\\' => Escaped::pair(b'\\'),
        b'"' => Escaped::pair(b'"'),
        0x07 => Escaped::pair(b'a'),
        0x08 => Escaped::pair(b'b'),
        0x0c => Escaped::pair(b'f'),
        b'\n' => Escaped::pair(b'n'),
        b'\r' => Escaped::pair(b'r'),
        b'\t' => Escaped::pair(b't'),
        0x0b => Escaped::pair(b'v'),
        0x20..=0x7e => Escaped::one(b),
        _ => Escaped::hex(b),
    }
}

/// Number of cells `bytes` occupies once escaped, without quotes.
pub fn escaped_len(bytes: &[u8]) -> usize {
    bytes.iter().map(|&b| escape_byte(b).len()).sum()
}

/// Append the escaped form of `bytes` to `out`.
pub fn escape_into(bytes: &[u8], out: &mut Vec<u8>) {
    for &b in bytes {
        out.extend_from_slice(&escape_byte(b));
    }
}

/// Immutable raw bytes held by literal and prose nodes.
///
/// The content need not be UTF-8 and may contain NUL.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ByteText(Box<[u8]>);

impl ByteText {
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for ByteText {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }
}

impl From<Vec<u8>> for ByteText {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}

impl From<&str> for ByteText {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().into())
    }
}

impl From<String> for ByteText {
    fn from(s: String) -> Self {
        Self(s.into_bytes().into_boxed_slice())
    }
}

impl fmt::Debug for ByteText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for &b in self.as_bytes() {
            for &c in escape_byte(b).iter() {
                fmt::Write::write_char(f, c as char)?;
            }
        }
        f.write_str("\"")
    }
}
