use crate::*;
use super::{encode_segment, Encoder};

pub fn is_numeric(string: &str) -> bool {
    string.bytes().all(|b| b.is_ascii_digit())
}

/// Packs digits in groups of three.
///
/// A group's width is `1 + 3n` bits where `n` counts its digits after
/// leading zeros (at least one), so `"867"` takes 10 bits, `"012"` 7 and
/// `"000"` 4. Nothing is written if `digits` holds a non-digit.
pub(crate) fn pack_numeric(digits: &str, buffer: &mut BitsWriter) -> Result<(), EncodeError> {
    if let Some(ch) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(EncodeError::InvalidCharacterSet { mode: Mode::Numeric, ch });
    }

    for group in digits.as_bytes().chunks(3) {
        let value = group.iter().fold(0_u16, |acc, d| acc * 10 + u16::from(d - b'0'));
        let significant = group.iter().skip_while(|d| **d == b'0').count().max(1);

        let width = 1 + 3 * significant as u8;
        buffer.append_bits(value << (16 - width), width);
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericEncoder {
    ec: ErrorCorrectLv,
    version: Version,
}

impl NumericEncoder {
    pub fn new(ec: ErrorCorrectLv, version: Version) -> Self {
        Self { ec, version }
    }
}

impl Encoder for NumericEncoder {
    fn encode(&self, string: &str) -> Result<Vec<u8>, EncodeError> {
        if let Some(ch) = string.chars().find(|c| !c.is_ascii_digit()) {
            return Err(EncodeError::InvalidCharacterSet { mode: Mode::Numeric, ch });
        }

        encode_segment(Mode::Numeric, self.ec, self.version, string.len(), |buffer| {
            pack_numeric(string, buffer)
        })
    }
}

#[test]
fn test_numeric() {
    let mut w = BitsWriter::new();
    assert!(pack_numeric("8675309", &mut w).is_ok());

    assert_eq!(w.bit_len(), 24);
    assert_eq!(&w.finish(), &[0b1101_1000, 0b1110_0001, 0b0010_1001]);
}

#[test]
fn test_numeric_leading_zeros() {
    let mut w = BitsWriter::new();
    assert!(pack_numeric("012000", &mut w).is_ok());

    // "012" -> 7 bits of 12, "000" -> 4 bits of 0
    assert_eq!(w.bit_len(), 11);
    assert_eq!(&w.finish(), &[0b0001_1000, 0b0000_0000]);
}

#[test]
fn test_numeric_packer_rejects_non_digits() {
    let mut w = BitsWriter::new();

    assert_eq!(
        pack_numeric("1 ", &mut w),
        Err(EncodeError::InvalidCharacterSet { mode: Mode::Numeric, ch: ' ' }),
    );
    assert_eq!(
        pack_numeric("1a", &mut w),
        Err(EncodeError::InvalidCharacterSet { mode: Mode::Numeric, ch: 'a' }),
    );
    assert_eq!(w.bit_len(), 0);
}

#[test]
fn test_numeric_segment() {
    let encoder = NumericEncoder::new(ErrorCorrectLv::L, Version::MIN);
    let data = encoder.encode("8675309").unwrap();

    assert_eq!(&data, &[
        0x10, 0x1F, 0x63, 0x84, 0xA4, 0x00,
        0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
    ]);
}

#[test]
fn test_numeric_segment_with_zero_groups() {
    let data = super::encode_numeric(ErrorCorrectLv::M, 1, "01234567").unwrap();

    assert_eq!(&data, &[
        0x10, 0x20, 0x62, 0xB3, 0x0C, 0x00,
        0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
    ]);
}

#[test]
fn test_numeric_rejects_letters() {
    assert_eq!(
        super::encode_numeric(ErrorCorrectLv::L, 1, "abcde"),
        Err(EncodeError::InvalidCharacterSet { mode: Mode::Numeric, ch: 'a' }),
    );
    assert_eq!(
        super::encode_numeric(ErrorCorrectLv::L, 1, "12 3"),
        Err(EncodeError::InvalidCharacterSet { mode: Mode::Numeric, ch: ' ' }),
    );
}

#[test]
fn test_numeric_empty() {
    let data = super::encode_numeric(ErrorCorrectLv::H, 1, "").unwrap();

    // mode, zero count, terminator, then padding
    assert_eq!(&data, &[0x10, 0x00, 0x00, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11]);
}
