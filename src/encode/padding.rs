use crate::*;

const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Tops `buffer` off to exactly `capacity` bits.
///
/// Writes a terminator of up to four zero bits, zero bits up to the next
/// byte boundary, then alternating `EC 11` pad bytes.
pub fn pad(buffer: &mut BitsWriter, capacity: usize) -> Result<(), EncodeError> {
    let bits = buffer.bit_len();
    if bits > capacity {
        return Err(EncodeError::DataOverCapacity { bits, capacity });
    }

    buffer.append_bits(0, (capacity - bits).min(4) as u8);
    buffer.append_bits(0, (buffer.bit_len().wrapping_neg() & 7) as u8);

    for b in PAD_BYTES.iter().cycle() {
        let left = capacity.saturating_sub(buffer.bit_len());
        if left == 0 {
            break;
        }

        buffer.append_bits(u16::from(*b) << 8, left.min(8) as u8);
    }

    Ok(())
}

#[cfg(test)]
fn padded(bits: &[(u16, u8)], capacity: usize) -> Result<(usize, Vec<u8>), EncodeError> {
    let mut w = BitsWriter::new();
    for (value, count) in bits.iter() {
        w.append_bits(*value, *count);
    }

    pad(&mut w, capacity)?;
    Ok((w.bit_len(), w.finish()))
}

#[test]
fn test_pad_alternates() {
    assert_eq!(padded(&[(0xF000, 4)], 40), Ok((40, vec![0xF0, 0xEC, 0x11, 0xEC, 0x11])));
}

#[test]
fn test_pad_short_terminator() {
    // two bits of room left: the terminator shrinks to fit
    assert_eq!(padded(&[(0xFFFF, 14)], 16), Ok((16, vec![0xFF, 0xFC])));
    assert_eq!(padded(&[(0xFFFF, 16)], 16), Ok((16, vec![0xFF, 0xFF])));
}

#[test]
fn test_pad_terminator_then_alignment() {
    // 4 terminator bits land in the same byte, then 2 alignment bits
    assert_eq!(padded(&[(0xFC00, 2)], 24), Ok((24, vec![0xC0, 0xEC, 0x11])));
    // terminator crosses a byte boundary
    assert_eq!(padded(&[(0xFE00, 6)], 24), Ok((24, vec![0xFC, 0x00, 0xEC])));
}

#[test]
fn test_pad_over_capacity() {
    assert_eq!(
        padded(&[(0xFFFF, 16), (0xFFFF, 1)], 16),
        Err(EncodeError::DataOverCapacity { bits: 17, capacity: 16 }),
    );
}

#[cfg(test)]
mod prop {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_pad_fills_every_symbol(
            level in 0usize..4,
            version in 1u8..=40,
            data in proptest::collection::vec(any::<u8>(), 0..64),
            tail in 0u8..8,
        ) {
            let ec = ErrorCorrectLv::ALL[level];
            let version = Version::new(version).unwrap();
            let capacity = capacity::data_bits(ec, version);

            let data = &data[..data.len().min(capacity / 8 - 1)];
            let mut w = BitsWriter::new();
            w.append_raw(data, data.len() * 8).unwrap();
            w.append_bits(0xFFFF, tail);
            let used = w.bit_len();

            pad(&mut w, capacity).unwrap();
            prop_assert_eq!(w.bit_len(), capacity);

            let out = w.finish();
            prop_assert_eq!(out.len() * 8, capacity);

            // everything between the data and the first pad byte is zero
            let zeros_end = (used + (capacity - used).min(4)).div_ceil(8) * 8;
            let mut r = crate::bits::BitsReader::new(&out);
            for _ in 0..used {
                r.read_bits(1).unwrap();
            }
            for _ in used..zeros_end {
                prop_assert_eq!(r.read_bits(1), Some(0));
            }

            for (i, b) in out[zeros_end / 8..].iter().enumerate() {
                prop_assert_eq!(*b, PAD_BYTES[i % 2]);
            }
        }
    }
}
