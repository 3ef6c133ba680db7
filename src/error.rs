//! Segment encoding errors.

use thiserror::Error;

use crate::Mode;

/// Errors produced while packing a data segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A character falls outside the mode's alphabet.
    #[error("character {ch:?} cannot be encoded in {mode} mode")]
    InvalidCharacterSet {
        /// Mode that rejected the input.
        mode: Mode,
        /// First offending character.
        ch: char,
    },

    /// Symbol version outside `1..=40`.
    #[error("invalid version {0}: expected 1 to 40")]
    InvalidVersion(u8),

    /// More bits requested than the source holds.
    #[error("bit count {requested} exceeds the {available} bits available")]
    OutOfRange {
        /// Bits requested.
        requested: usize,
        /// Bits present in the source.
        available: usize,
    },

    /// Character count does not fit the count indicator.
    #[error("character count {count} does not fit in a {width}-bit field")]
    CountOverflow {
        /// Characters to record.
        count: usize,
        /// Width of the count indicator.
        width: u8,
    },

    /// Input has more characters than the mode can carry at this level and version.
    #[error("{count} characters exceed the {mode} capacity of {capacity}")]
    TooManyCharacters {
        /// Mode in use.
        mode: Mode,
        /// Characters in the input.
        count: usize,
        /// Maximum characters allowed.
        capacity: usize,
    },

    /// Written data is longer than the segment's bit capacity.
    #[error("data length {bits} bits exceeds capacity of {capacity} bits")]
    DataOverCapacity {
        /// Bits written before padding.
        bits: usize,
        /// Data bits available.
        capacity: usize,
    },

    /// The mode has no encoder.
    #[error("{0} mode is not supported")]
    UnsupportedMode(Mode),

    /// Every candidate mode rejected the input.
    #[error("no mode can encode the input")]
    NoSuitableMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_error_display() {
        let err = EncodeError::InvalidCharacterSet { mode: Mode::Numeric, ch: 'a' };
        assert_eq!(err.to_string(), "character 'a' cannot be encoded in numeric mode");

        let err = EncodeError::InvalidVersion(41);
        assert_eq!(err.to_string(), "invalid version 41: expected 1 to 40");

        let err = EncodeError::OutOfRange { requested: 17, available: 16 };
        assert_eq!(err.to_string(), "bit count 17 exceeds the 16 bits available");

        let err = EncodeError::CountOverflow { count: 1024, width: 10 };
        assert_eq!(err.to_string(), "character count 1024 does not fit in a 10-bit field");

        let err = EncodeError::TooManyCharacters { mode: Mode::Bytes, count: 18, capacity: 17 };
        assert!(err.to_string().contains("bytes capacity of 17"));

        let err = EncodeError::DataOverCapacity { bits: 160, capacity: 152 };
        assert!(err.to_string().contains("152 bits"));

        assert_eq!(
            EncodeError::UnsupportedMode(Mode::Kanji).to_string(),
            "kanji mode is not supported",
        );
        assert_eq!(EncodeError::NoSuitableMode.to_string(), "no mode can encode the input");
    }
}
