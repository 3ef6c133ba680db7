//! Bit-granular, append-only byte buffer.
//!
//! Values are written most significant bit first. The last byte may be
//! partially filled; its unused low bits are always zero.

use crate::EncodeError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitsWriter {
    bits: Vec<u8>,
    len: usize,
}

impl BitsWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.len
    }

    /// Appends the top `count` bits of `value`.
    ///
    /// `value` is left-aligned: the first bit written is bit 15. Counts above
    /// 16 are clamped to 16.
    pub fn append_bits(&mut self, value: u16, count: u8) {
        let count = count.min(16);
        let [hi, lo] = value.to_be_bytes();

        self.append_byte(hi, count.min(8));
        if count > 8 {
            self.append_byte(lo, count - 8);
        }
    }

    /// Appends the first `count` bits of `data`.
    ///
    /// Fails with [`EncodeError::OutOfRange`] if `data` holds fewer than
    /// `count` bits. The stream is left untouched in that case.
    pub fn append_raw(&mut self, data: &[u8], count: usize) -> Result<(), EncodeError> {
        let available = data.len() * 8;
        if count > available {
            return Err(EncodeError::OutOfRange { requested: count, available });
        }

        let mut left = count;
        for b in data.iter() {
            if left == 0 {
                break;
            }

            let n = left.min(8);
            self.append_byte(*b, n as u8);
            left -= n;
        }

        Ok(())
    }

    /// The written bytes, `ceil(bit_len / 8)` of them.
    pub fn finish(self) -> Vec<u8> {
        self.bits
    }

    /// Appends the top `count` (at most 8) bits of `byte`.
    fn append_byte(&mut self, byte: u8, count: u8) {
        if count == 0 {
            return;
        }

        let byte = byte & (0xFF_u8 << (8 - count));
        let offset = (self.len % 8) as u8;

        if offset == 0 {
            self.bits.push(byte);
        } else {
            if let Some(last) = self.bits.last_mut() {
                *last |= byte >> offset;
            }
            if offset + count > 8 {
                self.bits.push(byte << (8 - offset));
            }
        }

        self.len += count as usize;
    }

    #[cfg(test)]
    fn dump(&self) -> String {
        self.bits.iter().map(|b| format!("{b:08b}")).collect::<Vec<_>>().join(" ")
    }
}

/// Reads bits back out of a finished stream, most significant bit first.
#[cfg(test)]
pub(crate) struct BitsReader<'a> {
    bits: &'a [u8],
    pos: usize,
}

#[cfg(test)]
impl<'a> BitsReader<'a> {
    pub fn new(bits: &'a [u8]) -> Self {
        Self { bits, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() * 8 - self.pos
    }

    /// Reads `count` (at most 16) bits as a right-aligned value.
    pub fn read_bits(&mut self, count: u8) -> Option<u16> {
        if count > 16 || usize::from(count) > self.remaining() {
            return None;
        }

        let mut value = 0;
        for _ in 0..count {
            let bit = self.bits[self.pos / 8] >> (7 - self.pos % 8) & 1;
            value = value << 1 | u16::from(bit);
            self.pos += 1;
        }

        Some(value)
    }
}

#[test]
fn test_append_bits_straddles_bytes() {
    let mut w = BitsWriter::new();
    w.append_bits(0b1010_0000_0000_0000, 3);
    w.append_bits(0b1111_1111_1100_0000, 10);

    assert_eq!(w.bit_len(), 13);
    assert_eq!(w.finish(), vec![0b1011_1111, 0b1111_1000]);
}

#[test]
fn test_append_bits_keeps_high_bits() {
    let mut w = BitsWriter::new();
    w.append_bits(0b1100_0000 << 8, 2);
    w.append_bits(0, 3);
    w.append_bits(0b1110_0000 << 8, 3);

    assert_eq!(w.finish(), vec![0b1100_0111]);
}

#[test]
fn test_append_zero_is_noop() {
    let mut w = BitsWriter::new();
    w.append_bits(0xFFFF, 0);
    assert_eq!(w.bit_len(), 0);
    assert!(w.append_raw(&[], 0).is_ok());
    assert_eq!(w.finish(), Vec::<u8>::new());
}

#[test]
fn test_append_bits_clamps_to_16() {
    let mut w = BitsWriter::new();
    w.append_bits(0xABCD, 20);
    assert_eq!(w.bit_len(), 16);
    assert_eq!(w.finish(), vec![0xAB, 0xCD]);
}

#[test]
fn test_unused_low_bits_are_zero() {
    let mut w = BitsWriter::new();
    w.append_bits(0xFFFF, 5);
    assert_eq!(w.finish(), vec![0b1111_1000]);
}

#[test]
fn test_append_raw() {
    let mut w = BitsWriter::new();
    w.append_bits(0b1000_0000 << 8, 1);
    assert!(w.append_raw(&[0xFF, 0x0F, 0xAA], 20).is_ok());

    assert_eq!(w.bit_len(), 21);
    assert_eq!(w.dump(), "11111111 10000111 11010000");
}

#[test]
fn append_raw_rejects_without_writing() {
    let mut w = BitsWriter::new();
    w.append_bits(0b1010_0000 << 8, 4);

    assert_eq!(
        w.append_raw(&[0xFF, 0xFF], 17),
        Err(EncodeError::OutOfRange { requested: 17, available: 16 }),
    );
    assert_eq!(w.bit_len(), 4);
    assert_eq!(w.finish(), vec![0b1010_0000]);
}

#[test]
fn test_reader() {
    let mut r = BitsReader::new(&[0b1101_1000, 0b1110_0001]);
    assert_eq!(r.read_bits(10), Some(867));
    assert_eq!(r.read_bits(4), Some(0b1000));
    assert_eq!(r.remaining(), 2);
    assert_eq!(r.read_bits(3), None);
    assert_eq!(r.position(), 14);
}

#[cfg(test)]
mod prop {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_bits_round_trip(
            prefix in 0u8..=16,
            writes in proptest::collection::vec((any::<u16>(), 0u8..=16), 0..64),
        ) {
            let mut w = BitsWriter::new();
            w.append_bits(0xFFFF, prefix);
            for (value, count) in writes.iter() {
                w.append_bits(*value, *count);
            }

            let bit_len = w.bit_len();
            let data = w.finish();
            prop_assert_eq!(data.len(), bit_len.div_ceil(8));
            if bit_len % 8 != 0 {
                prop_assert_eq!(data[data.len() - 1] & (0xFF_u8 >> (bit_len % 8)), 0);
            }

            let mut r = BitsReader::new(&data);
            let ones = if prefix == 0 { 0 } else { u16::MAX >> (16 - prefix) };
            prop_assert_eq!(r.read_bits(prefix), Some(ones));
            for (value, count) in writes.iter() {
                let expected = if *count == 0 { 0 } else { *value >> (16 - *count) };
                prop_assert_eq!(r.read_bits(*count), Some(expected));
            }
        }

        #[test]
        fn prop_raw_matches_bytewise(
            data in proptest::collection::vec(any::<u8>(), 0..12),
            offset in 0u8..8,
            take in 0usize..120,
        ) {
            let mut raw = BitsWriter::new();
            let mut bytewise = BitsWriter::new();
            raw.append_bits(0, offset);
            bytewise.append_bits(0, offset);

            let result = raw.append_raw(&data, take);
            if take > data.len() * 8 {
                prop_assert!(result.is_err());
                prop_assert_eq!(raw.bit_len(), usize::from(offset));
            } else {
                prop_assert!(result.is_ok());
                let mut left = take;
                for b in data.iter() {
                    let n = left.min(8);
                    bytewise.append_bits(u16::from(*b) << 8, n as u8);
                    left -= n;
                }
                prop_assert_eq!(raw, bytewise);
            }
        }
    }
}
