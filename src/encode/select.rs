use tracing::trace;

use crate::*;

/// Tries each candidate encoder in order and keeps the first success.
///
/// A candidate rejecting the character set hands over to the next one; any
/// other error ends the search.
pub struct BestEncoder {
    candidates: Vec<Box<dyn Encoder + Send + Sync>>,
}

impl BestEncoder {
    /// Numeric, then alphanumeric, then bytes.
    pub fn new(ec: ErrorCorrectLv, version: Version) -> Self {
        Self::with_candidates(vec![
            Box::new(NumericEncoder::new(ec, version)),
            Box::new(AlphanumericEncoder::new(ec, version)),
            Box::new(BytesEncoder::new(ec, version)),
        ])
    }

    pub fn with_candidates(candidates: Vec<Box<dyn Encoder + Send + Sync>>) -> Self {
        Self { candidates }
    }
}

impl Encoder for BestEncoder {
    fn encode(&self, string: &str) -> Result<Vec<u8>, EncodeError> {
        for candidate in self.candidates.iter() {
            match candidate.encode(string) {
                Err(EncodeError::InvalidCharacterSet { mode, ch }) => {
                    trace!(%mode, ?ch, "mode rejected input");
                },
                result => return result,
            }
        }

        Err(EncodeError::NoSuitableMode)
    }
}

#[test]
fn test_prefers_numeric() {
    let best = encode_best(ErrorCorrectLv::L, 1, "12345");

    assert_eq!(best, encode_numeric(ErrorCorrectLv::L, 1, "12345"));
    assert_eq!(
        best,
        Ok(vec![
            0x10, 0x14, 0x7B, 0x5A, 0x00,
            0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
        ]),
    );
}

#[test]
fn test_falls_back_to_alphanumeric() {
    assert_eq!(
        encode_best(ErrorCorrectLv::Q, 2, "HELLO WORLD"),
        encode_alphanumeric(ErrorCorrectLv::Q, 2, "HELLO WORLD"),
    );
}

#[test]
fn test_falls_back_to_bytes() {
    let best = encode_best(ErrorCorrectLv::L, 1, "MoNeY!!!$$$");

    assert_eq!(best, encode_bytes(ErrorCorrectLv::L, 1, "MoNeY!!!$$$"));
    assert_eq!(
        best,
        Ok(vec![
            0x40, 0xB4, 0xD6, 0xF4, 0xE6, 0x55, 0x92, 0x12, 0x12, 0x12, 0x42, 0x42, 0x40,
            0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
        ]),
    );
}

#[test]
fn test_capacity_error_is_not_retried() {
    let digits = "7".repeat(42);
    assert_eq!(
        encode_best(ErrorCorrectLv::L, 1, &digits),
        Err(EncodeError::TooManyCharacters { mode: Mode::Numeric, count: 42, capacity: 41 }),
    );
}

#[test]
fn test_no_suitable_mode() {
    let v = Version::MIN;
    let selector = BestEncoder::with_candidates(vec![
        Box::new(NumericEncoder::new(ErrorCorrectLv::L, v)),
        Box::new(AlphanumericEncoder::new(ErrorCorrectLv::L, v)),
    ]);

    assert_eq!(selector.encode("hello"), Err(EncodeError::NoSuitableMode));
    assert!(selector.encode("HELLO").is_ok());

    let empty = BestEncoder::with_candidates(Vec::new());
    assert_eq!(empty.encode("1"), Err(EncodeError::NoSuitableMode));
}

#[test]
fn test_encoders_are_shareable() {
    let selector = std::sync::Arc::new(BestEncoder::new(ErrorCorrectLv::M, Version::MIN));

    let handles = (0..4)
        .map(|i| {
            let selector = selector.clone();
            std::thread::spawn(move || selector.encode(&i.to_string()))
        })
        .collect::<Vec<_>>();

    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), encode_numeric(ErrorCorrectLv::M, 1, &i.to_string()));
    }
}
