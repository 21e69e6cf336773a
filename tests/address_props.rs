//! Property tests for the address codec.
//!
//! The unit tests next to each module pin concrete fixtures; these cover
//! the universally quantified claims: round-tripping over arbitrary keys,
//! rejection of every wrong input size, detection of every single-bit
//! checksum corruption, and totality of the validator.

use proptest::prelude::*;
use wallet_address_codec::checksum::append_checksum;
use wallet_address_codec::{
    decode_address, encode_address, is_valid_address, AddressError, DecodedKey, ADDRESS_LEN,
    CHECKSUM_LEN_BYTES, KEY_LEN_BYTES,
};

proptest! {
    #[test]
    fn roundtrip_recovers_key(key in prop::array::uniform32(any::<u8>())) {
        let address = encode_address(&key).unwrap();
        let text = address.as_str().expect("a non-empty key encodes to text");

        prop_assert_eq!(text.len(), ADDRESS_LEN);
        prop_assert!(text.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        prop_assert!(is_valid_address(text));
        prop_assert_eq!(decode_address(text).unwrap(), DecodedKey::Bytes(key));
    }

    #[test]
    fn wrong_key_size_is_rejected(
        raw in prop::collection::vec(any::<u8>(), 1..=64)
            .prop_filter("size must differ from the key size", |v| v.len() != KEY_LEN_BYTES)
    ) {
        let rejected = matches!(
            encode_address(&raw),
            Err(AddressError::WrongKeyBytesLength { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn checksum_bit_flip_is_detected(
        key in prop::array::uniform32(any::<u8>()),
        bit in 0..CHECKSUM_LEN_BYTES * 8,
    ) {
        let mut payload = append_checksum(&key);
        payload[KEY_LEN_BYTES + bit / 8] ^= 1u8 << (bit % 8);

        let encoded = data_encoding::BASE32.encode(&payload);
        let tampered = encoded.trim_end_matches('=');

        prop_assert!(matches!(
            decode_address(tampered),
            Err(AddressError::WrongChecksum)
        ));
        prop_assert!(!is_valid_address(tampered));
    }

    #[test]
    fn key_bit_flip_changes_claimed_checksum(
        key in prop::array::uniform32(any::<u8>()),
        bit in 0..KEY_LEN_BYTES * 8,
    ) {
        // Flipping key bits leaves the claimed checksum stale; decoding must
        // not hand back the tampered key as if it were authentic
        let mut payload = append_checksum(&key);
        payload[bit / 8] ^= 1u8 << (bit % 8);

        let encoded = data_encoding::BASE32.encode(&payload);
        let tampered = encoded.trim_end_matches('=');

        prop_assert_ne!(decode_address(tampered).ok(), Some(DecodedKey::Bytes(key)));
    }

    #[test]
    fn wrong_text_length_never_validates(addr in "[A-Z2-7]{0,80}") {
        if addr.len() != ADDRESS_LEN {
            prop_assert!(!is_valid_address(&addr));
            let accepted = matches!(
                decode_address(&addr),
                Ok(DecodedKey::Empty) | Err(AddressError::WrongKeyLength { .. })
            );
            prop_assert!(accepted);
        }
    }

    #[test]
    fn validator_never_panics(candidate in ".*") {
        // Totality: any string at all, including unicode garbage
        let _ = is_valid_address(&candidate);
    }

    #[test]
    fn validator_never_panics_on_long_garbage(
        candidate in prop::collection::vec(any::<char>(), 0..512)
    ) {
        let s: String = candidate.into_iter().collect();
        let _ = is_valid_address(&s);
    }
}
