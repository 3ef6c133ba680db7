use crate::*;
use super::{encode_segment, Encoder};

/// Packs each byte as 8 raw bits.
pub fn pack_bytes(bytes: &[u8], buffer: &mut BitsWriter) -> Result<(), EncodeError> {
    buffer.append_raw(bytes, bytes.len() * 8)
}

/// Byte mode over the UTF-8 encoding of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytesEncoder {
    ec: ErrorCorrectLv,
    version: Version,
}

impl BytesEncoder {
    pub fn new(ec: ErrorCorrectLv, version: Version) -> Self {
        Self { ec, version }
    }
}

impl Encoder for BytesEncoder {
    fn encode(&self, string: &str) -> Result<Vec<u8>, EncodeError> {
        let bytes = string.as_bytes();
        encode_segment(Mode::Bytes, self.ec, self.version, bytes.len(), |buffer| {
            pack_bytes(bytes, buffer)
        })
    }
}

#[test]
fn test_bytes_segment() {
    let data = BytesEncoder::new(ErrorCorrectLv::L, Version::MIN).encode("Hello, world!").unwrap();

    assert_eq!(&data, &[
        0x40, 0xD4, 0x86, 0x56, 0xC6, 0xC6, 0xF2, 0xC2, 0x07, 0x76, 0xF7, 0x26, 0xC6, 0x42, 0x10,
        0xEC, 0x11, 0xEC, 0x11,
    ]);
}

#[test]
fn test_bytes_accepts_anything() {
    for s in ["MoNeY!!!$$$", "abcde", "tab\tnewline\n", "héllo", ""] {
        assert!(super::encode_bytes(ErrorCorrectLv::L, 1, s).is_ok(), "{s:?}");
    }
}

#[test]
fn test_bytes_counts_utf8_length() {
    let data = super::encode_bytes(ErrorCorrectLv::L, 1, "é").unwrap();

    // mode 0100, count 2, then 0xC3 0xA9
    assert_eq!(&data[..4], &[0x40, 0x2C, 0x3A, 0x90]);
}

#[test]
fn test_bytes_wide_count_field() {
    let data = super::encode_bytes(ErrorCorrectLv::L, 10, "A").unwrap();

    // versions 10 and up carry a 16-bit count
    assert_eq!(&data[..4], &[0x40, 0x00, 0x14, 0x10]);
    assert_eq!(data.len(), 274);
}
