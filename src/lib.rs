//! Packs text into the data segment of a QR code symbol.
//!
//! A segment is a 4-bit mode indicator, a character-count indicator, the
//! mode-specific payload, a terminator and the `EC 11` pad bytes that fill
//! the symbol's data codewords. Error correction, module placement and
//! masking consume the returned bytes and live elsewhere.
//!
//! ```
//! use qrseg::{encode_best, ErrorCorrectLv};
//!
//! let data = encode_best(ErrorCorrectLv::L, 1, "HELLO WORLD").unwrap();
//! assert_eq!(data.len(), 19);
//! assert_eq!(&data[..4], &[0x20, 0x5B, 0x0B, 0x78]);
//! ```

pub mod bits;
pub mod capacity;
pub mod encode;
mod error;

pub use bits::BitsWriter;
pub use encode::{
    encode, encode_alphanumeric, encode_best, encode_bytes, encode_numeric, AlphanumericEncoder,
    BestEncoder, BytesEncoder, Encoder, NumericEncoder,
};
pub use error::EncodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCorrectLv {
    L, M, Q, H
}

impl ErrorCorrectLv {
    pub const ALL: [Self; 4] = [Self::L, Self::M, Self::Q, Self::H];

    /// Row of this level in every capacity table.
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Numeric,
    Alphanumeric,
    Bytes,
    Kanji,
}

impl Mode {
    /// The 4-bit mode indicator, right-aligned.
    pub const fn indicator(self) -> u8 {
        match self {
            Self::Numeric => 0b0001,
            Self::Alphanumeric => 0b0010,
            Self::Bytes => 0b0100,
            Self::Kanji => 0b1000,
        }
    }

    /// Character-count indicator widths for versions 1-9, 10-26 and 27-40.
    pub const fn count_widths(self) -> CountWidths {
        match self {
            Self::Numeric => CountWidths { small: 10, medium: 12, large: 14 },
            Self::Alphanumeric => CountWidths { small: 9, medium: 11, large: 13 },
            Self::Bytes => CountWidths { small: 8, medium: 16, large: 16 },
            Self::Kanji => CountWidths { small: 8, medium: 10, large: 12 },
        }
    }

    /// The densest mode able to carry every character of `string`.
    pub fn best_mode(string: &str) -> Self {
        if encode::numeric::is_numeric(string) {
            Self::Numeric
        } else if encode::alphanumeric::is_alphanumeric(string) {
            Self::Alphanumeric
        } else {
            Self::Bytes
        }
    }

    /// Number of characters `string` counts as in this mode.
    pub fn char_count(self, string: &str) -> usize {
        match self {
            Self::Bytes => string.len(),
            _ => string.chars().count(),
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Numeric => "numeric",
            Self::Alphanumeric => "alphanumeric",
            Self::Bytes => "bytes",
            Self::Kanji => "kanji",
        })
    }
}

/// Bit widths of a character-count indicator, one per version band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountWidths {
    pub small: u8,
    pub medium: u8,
    pub large: u8,
}

/// A symbol version in `1..=40`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(40);

    pub const fn new(v: u8) -> Result<Self, EncodeError> {
        if v >= Self::MIN.0 && v <= Self::MAX.0 {
            Ok(Self(v))
        } else {
            Err(EncodeError::InvalidVersion(v))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Column of this version in every capacity table.
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Smallest version whose `mode` capacity at level `ec` holds `chars` characters.
    pub fn smallest_version(chars: usize, ec: ErrorCorrectLv, mode: Mode) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .map(Self)
            .find(|v| capacity::character_capacity(mode, ec, *v) >= chars)
    }
}

impl TryFrom<u8> for Version {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl core::fmt::Display for Version {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn test_version_bounds() {
    assert_eq!(Version::new(0), Err(EncodeError::InvalidVersion(0)));
    assert_eq!(Version::new(41), Err(EncodeError::InvalidVersion(41)));
    assert_eq!(Version::new(1).map(Version::get), Ok(1));
    assert_eq!(Version::try_from(40), Ok(Version::MAX));
}

#[test]
fn test_best_mode() {
    assert_eq!(Mode::best_mode("0123"), Mode::Numeric);
    assert_eq!(Mode::best_mode("HELLO WORLD"), Mode::Alphanumeric);
    assert_eq!(Mode::best_mode("Hello, world!"), Mode::Bytes);
    assert_eq!(Mode::best_mode(""), Mode::Numeric);
}

#[test]
fn test_char_count() {
    assert_eq!(Mode::Bytes.char_count("é"), 2);
    assert_eq!(Mode::Alphanumeric.char_count("é"), 1);
    assert_eq!(Mode::Numeric.char_count("0123"), 4);
}

#[test]
fn test_smallest_version() {
    let v = |n| Version::new(n).ok();

    assert_eq!(Version::smallest_version(41, ErrorCorrectLv::L, Mode::Numeric), v(1));
    assert_eq!(Version::smallest_version(42, ErrorCorrectLv::L, Mode::Numeric), v(2));
    assert_eq!(Version::smallest_version(17, ErrorCorrectLv::L, Mode::Bytes), v(1));
    assert_eq!(Version::smallest_version(8, ErrorCorrectLv::H, Mode::Bytes), v(2));
    assert_eq!(Version::smallest_version(2954, ErrorCorrectLv::L, Mode::Bytes), None);
}
