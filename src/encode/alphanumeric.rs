use crate::*;
use super::{alphanumeric_table, encode_segment, Encoder};

pub fn is_alphanumeric(string: &str) -> bool {
    string.chars().all(|c| alphanumeric_table::value(c).is_some())
}

/// Packs symbol values in pairs of 11 bits, a trailing single in 6.
///
/// Nothing is written if `string` holds a character outside the
/// 45-symbol alphabet.
pub(crate) fn pack_alphanumeric(
    string: &str,
    buffer: &mut BitsWriter,
) -> Result<(), EncodeError> {
    let values = string
        .chars()
        .map(|ch| {
            alphanumeric_table::value(ch)
                .ok_or(EncodeError::InvalidCharacterSet { mode: Mode::Alphanumeric, ch })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for pair in values.chunks(2) {
        match *pair {
            [a, b] => buffer.append_bits((u16::from(a) * 45 + u16::from(b)) << 5, 11),
            [a] => buffer.append_bits(u16::from(a) << 10, 6),
            _ => {},
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphanumericEncoder {
    ec: ErrorCorrectLv,
    version: Version,
}

impl AlphanumericEncoder {
    pub fn new(ec: ErrorCorrectLv, version: Version) -> Self {
        Self { ec, version }
    }
}

impl Encoder for AlphanumericEncoder {
    fn encode(&self, string: &str) -> Result<Vec<u8>, EncodeError> {
        if let Some(ch) = string.chars().find(|c| alphanumeric_table::value(*c).is_none()) {
            return Err(EncodeError::InvalidCharacterSet { mode: Mode::Alphanumeric, ch });
        }

        let count = string.chars().count();
        encode_segment(Mode::Alphanumeric, self.ec, self.version, count, |buffer| {
            pack_alphanumeric(string, buffer)
        })
    }
}

#[test]
fn test_alphanumeric() {
    let mut w = BitsWriter::new();
    assert!(pack_alphanumeric("HELLO WORLD", &mut w).is_ok());

    assert_eq!(w.bit_len(), 61);
    assert_eq!(&w.finish(), &[
        0b0110_0001, 0b0110_1111, 0b0001_1010, 0b0010_1110,
        0b0101_1011, 0b1000_1001, 0b1010_1000, 0b0110_1000,
    ]);
}

#[test]
fn test_alphanumeric_packer_rejects_unknown_symbols() {
    let mut w = BitsWriter::new();

    assert_eq!(
        pack_alphanumeric("AB\u{c8}", &mut w),
        Err(EncodeError::InvalidCharacterSet { mode: Mode::Alphanumeric, ch: '\u{c8}' }),
    );
    assert_eq!(w.bit_len(), 0);
}

#[test]
fn test_alphanumeric_segment() {
    let encoder = AlphanumericEncoder::new(ErrorCorrectLv::L, Version::MIN);
    let data = encoder.encode("HELLO WORLD").unwrap();

    assert_eq!(&data, &[
        0x20, 0x5B, 0x0B, 0x78, 0xD1, 0x72, 0xDC, 0x4D, 0x43, 0x40,
        0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
    ]);
}

#[test]
fn test_alphanumeric_symbols() {
    let data = super::encode_alphanumeric(ErrorCorrectLv::H, 1, "AC-42").unwrap();

    assert_eq!(&data, &[0x20, 0x29, 0xCE, 0xE7, 0x21, 0x00, 0xEC, 0x11, 0xEC]);
}

#[test]
fn test_alphanumeric_rejects_lowercase() {
    assert_eq!(
        super::encode_alphanumeric(ErrorCorrectLv::L, 1, "HELLO world"),
        Err(EncodeError::InvalidCharacterSet { mode: Mode::Alphanumeric, ch: 'w' }),
    );
    assert!(!is_alphanumeric("MoNeY!!!$$$"));
    assert!(is_alphanumeric("$%*+-./: "));
}
