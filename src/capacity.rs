//! Capacity tables indexed by `[error correction level][version - 1]`.
//!
//! The tables are generated by the build script from the ECC block layout of
//! each symbol.

use crate::{ErrorCorrectLv, Mode, Version};

pub type CapacityTable = [[u16; 40]; 4];

include!(concat!(env!("OUT_DIR"), "/capacity_tables.rs"));

pub fn lookup(table: &CapacityTable, ec: ErrorCorrectLv, version: Version) -> usize {
    usize::from(table[ec.ordinal()][version.index()])
}

/// Number of 8-bit data codewords in the symbol.
pub fn data_codewords(ec: ErrorCorrectLv, version: Version) -> usize {
    lookup(&DATA_CODEWORDS, ec, version)
}

/// Bit length every padded segment is filled to.
pub fn data_bits(ec: ErrorCorrectLv, version: Version) -> usize {
    data_codewords(ec, version) * 8
}

pub fn table(mode: Mode) -> &'static CapacityTable {
    match mode {
        Mode::Numeric => &NUMERIC_CAPACITY,
        Mode::Alphanumeric => &ALPHANUMERIC_CAPACITY,
        Mode::Bytes => &BYTES_CAPACITY,
        Mode::Kanji => &KANJI_CAPACITY,
    }
}

/// Maximum characters a single `mode` segment can hold.
pub fn character_capacity(mode: Mode, ec: ErrorCorrectLv, version: Version) -> usize {
    lookup(table(mode), ec, version)
}

#[cfg(test)]
fn v(n: u8) -> Version {
    Version::new(n).unwrap()
}

#[test]
fn test_table_shape() {
    let tables = [
        &DATA_CODEWORDS,
        &NUMERIC_CAPACITY,
        &ALPHANUMERIC_CAPACITY,
        &BYTES_CAPACITY,
        &KANJI_CAPACITY,
    ];
    for t in tables {
        assert_eq!(t.len(), 4);
        for row in t.iter() {
            assert_eq!(row.len(), 40);
        }
    }
}

#[test]
fn test_data_codewords() {
    use ErrorCorrectLv::*;

    assert_eq!(data_codewords(L, v(1)), 19);
    assert_eq!(data_codewords(H, v(1)), 9);
    assert_eq!(data_codewords(Q, v(5)), 62);
    assert_eq!(data_codewords(M, v(10)), 216);
    assert_eq!(data_codewords(L, v(40)), 2956);
    assert_eq!(data_codewords(H, v(40)), 1276);
    assert_eq!(data_bits(L, v(1)), 152);
}

#[test]
fn test_character_capacity() {
    use ErrorCorrectLv::*;

    let at = |mode, ec, n| character_capacity(mode, ec, v(n));
    let all = |ec, n| [
        at(Mode::Numeric, ec, n),
        at(Mode::Alphanumeric, ec, n),
        at(Mode::Bytes, ec, n),
        at(Mode::Kanji, ec, n),
    ];

    assert_eq!(all(L, 1), [41, 25, 17, 10]);
    assert_eq!(all(H, 1), [17, 10, 7, 4]);
    assert_eq!(all(L, 40), [7089, 4296, 2953, 1817]);
    assert_eq!(all(H, 40), [3057, 1852, 1273, 784]);

    // count field width steps up between versions 9 and 10
    assert_eq!(at(Mode::Numeric, L, 9), 552);
    assert_eq!(at(Mode::Numeric, L, 10), 652);
}

#[test]
fn test_capacity_grows_with_version() {
    for ec in ErrorCorrectLv::ALL {
        for mode in [Mode::Numeric, Mode::Alphanumeric, Mode::Bytes, Mode::Kanji] {
            let row = &table(mode)[ec.ordinal()];
            assert!(row.windows(2).all(|w| w[0] < w[1]), "{mode} {ec:?}");
        }
    }
}
