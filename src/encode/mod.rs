mod alphanumeric_table;
mod padding;
mod select;

pub mod alphanumeric;
pub mod bytes;
pub mod numeric;

use tracing::debug;

use crate::*;

pub use alphanumeric::AlphanumericEncoder;
pub use bytes::BytesEncoder;
pub use numeric::NumericEncoder;
pub use padding::pad;
pub use select::BestEncoder;

/// Encodes a string into a padded data segment.
pub trait Encoder {
    fn encode(&self, string: &str) -> Result<Vec<u8>, EncodeError>;
}

/// Appends a character-count indicator whose width depends on the version band.
pub fn encode_count(
    buffer: &mut BitsWriter,
    widths: CountWidths,
    version: Version,
    count: usize,
) -> Result<(), EncodeError> {
    let width = match version.get() {
        1..=9 => widths.small,
        10..=26 => widths.medium,
        27..=40 => widths.large,
        v => return Err(EncodeError::InvalidVersion(v)),
    };

    if count >> width != 0 {
        return Err(EncodeError::CountOverflow { count, width });
    }

    buffer.append_bits(((count as u32) << (16 - width)) as u16, width);
    Ok(())
}

/// Writes the mode indicator, count indicator and `payload`, then pads to the
/// symbol's data capacity.
fn encode_segment(
    mode: Mode,
    ec: ErrorCorrectLv,
    version: Version,
    count: usize,
    payload: impl FnOnce(&mut BitsWriter) -> Result<(), EncodeError>,
) -> Result<Vec<u8>, EncodeError> {
    let capacity = capacity::character_capacity(mode, ec, version);
    if count > capacity {
        return Err(EncodeError::TooManyCharacters { mode, count, capacity });
    }

    let mut buffer = BitsWriter::new();
    buffer.append_bits(u16::from(mode.indicator()) << 12, 4);
    encode_count(&mut buffer, mode.count_widths(), version, count)?;
    payload(&mut buffer)?;

    let data_bits = buffer.bit_len();
    pad(&mut buffer, capacity::data_bits(ec, version))?;

    let total_bits = buffer.bit_len();
    debug!(%mode, %version, ?ec, count, data_bits, total_bits, "encoded segment");
    Ok(buffer.finish())
}

/// Encodes `string` in the given mode.
pub fn encode(
    string: &str,
    mode: Mode,
    version: Version,
    ec: ErrorCorrectLv,
) -> Result<Vec<u8>, EncodeError> {
    match mode {
        Mode::Numeric => NumericEncoder::new(ec, version).encode(string),
        Mode::Alphanumeric => AlphanumericEncoder::new(ec, version).encode(string),
        Mode::Bytes => BytesEncoder::new(ec, version).encode(string),
        Mode::Kanji => Err(EncodeError::UnsupportedMode(mode)),
    }
}

pub fn encode_numeric(
    ec: ErrorCorrectLv,
    version: u8,
    string: &str,
) -> Result<Vec<u8>, EncodeError> {
    NumericEncoder::new(ec, Version::new(version)?).encode(string)
}

pub fn encode_alphanumeric(
    ec: ErrorCorrectLv,
    version: u8,
    string: &str,
) -> Result<Vec<u8>, EncodeError> {
    AlphanumericEncoder::new(ec, Version::new(version)?).encode(string)
}

pub fn encode_bytes(
    ec: ErrorCorrectLv,
    version: u8,
    string: &str,
) -> Result<Vec<u8>, EncodeError> {
    BytesEncoder::new(ec, Version::new(version)?).encode(string)
}

/// Encodes `string` in the densest mode that accepts it.
pub fn encode_best(
    ec: ErrorCorrectLv,
    version: u8,
    string: &str,
) -> Result<Vec<u8>, EncodeError> {
    BestEncoder::new(ec, Version::new(version)?).encode(string)
}

#[cfg(test)]
fn count_field(
    widths: CountWidths,
    version: u8,
    count: usize,
) -> Result<(usize, Vec<u8>), EncodeError> {
    let mut w = BitsWriter::new();
    encode_count(&mut w, widths, Version::new(version)?, count)?;
    Ok((w.bit_len(), w.finish()))
}

#[test]
fn test_count_band_edges() {
    let numeric = Mode::Numeric.count_widths();

    assert_eq!(count_field(numeric, 1, 7).map(|f| f.0), Ok(10));
    assert_eq!(count_field(numeric, 9, 7).map(|f| f.0), Ok(10));
    assert_eq!(count_field(numeric, 10, 7).map(|f| f.0), Ok(12));
    assert_eq!(count_field(numeric, 26, 7).map(|f| f.0), Ok(12));
    assert_eq!(count_field(numeric, 27, 7).map(|f| f.0), Ok(14));
    assert_eq!(count_field(numeric, 40, 7).map(|f| f.0), Ok(14));

    assert_eq!(count_field(Mode::Bytes.count_widths(), 10, 1).map(|f| f.0), Ok(16));
    assert_eq!(count_field(Mode::Alphanumeric.count_widths(), 27, 1).map(|f| f.0), Ok(13));
}

#[test]
fn test_count_value() {
    let numeric = Mode::Numeric.count_widths();
    let bytes = Mode::Bytes.count_widths();

    assert_eq!(count_field(numeric, 1, 7), Ok((10, vec![0b0000_0001, 0b1100_0000])));
    assert_eq!(count_field(bytes, 40, 0xABCD), Ok((16, vec![0xAB, 0xCD])));
}

#[test]
fn test_count_errors() {
    let numeric = Mode::Numeric.count_widths();

    assert_eq!(count_field(numeric, 0, 1), Err(EncodeError::InvalidVersion(0)));
    assert_eq!(count_field(numeric, 41, 1), Err(EncodeError::InvalidVersion(41)));
    assert_eq!(
        count_field(Mode::Bytes.count_widths(), 1, 256),
        Err(EncodeError::CountOverflow { count: 256, width: 8 }),
    );
}

#[test]
fn test_invalid_version() {
    use ErrorCorrectLv::L;

    for v in [0, 41, 255] {
        assert_eq!(encode_numeric(L, v, "1"), Err(EncodeError::InvalidVersion(v)));
        assert_eq!(encode_alphanumeric(L, v, "A"), Err(EncodeError::InvalidVersion(v)));
        assert_eq!(encode_bytes(L, v, "a"), Err(EncodeError::InvalidVersion(v)));
        assert_eq!(encode_best(L, v, "a"), Err(EncodeError::InvalidVersion(v)));
    }
}

#[test]
fn test_dispatch() {
    use ErrorCorrectLv::*;
    let v1 = Version::MIN;

    assert_eq!(encode("12345", Mode::Numeric, v1, L), encode_numeric(L, 1, "12345"));
    assert_eq!(encode("AB", Mode::Alphanumeric, v1, M), encode_alphanumeric(M, 1, "AB"));
    assert_eq!(encode("ab", Mode::Bytes, v1, Q), encode_bytes(Q, 1, "ab"));
    assert_eq!(
        encode("ab", Mode::Kanji, v1, Q),
        Err(EncodeError::UnsupportedMode(Mode::Kanji)),
    );
}

#[test]
fn test_too_many_characters() {
    let digits = "1".repeat(42);
    assert_eq!(
        encode_numeric(ErrorCorrectLv::L, 1, &digits),
        Err(EncodeError::TooManyCharacters { mode: Mode::Numeric, count: 42, capacity: 41 }),
    );
    assert!(encode_numeric(ErrorCorrectLv::L, 1, &digits[1..]).is_ok());

    assert_eq!(
        encode_bytes(ErrorCorrectLv::H, 1, "abcdefgh"),
        Err(EncodeError::TooManyCharacters { mode: Mode::Bytes, count: 8, capacity: 7 }),
    );
}

#[test]
fn test_full_capacity_has_no_padding() {
    // 17 bytes at 1-L: 4 + 8 + 136 = 148 bits, leaving a 4-bit terminator
    let data = encode_bytes(ErrorCorrectLv::L, 1, "ABCDEFGHIJKLMNOPQ").unwrap();
    assert_eq!(data.len(), 19);
    assert_eq!(data[17], 0x05);
    assert_eq!(data[18], 0x10);
}
