use crate::checksum::{append_checksum, verify_checksum, CHECKSUM_LEN_BYTES};
use crate::error::{AddressError, Result};
use data_encoding::BASE32;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// The number of bytes in a raw public key
pub const KEY_LEN_BYTES: usize = 32;

/// The unpadded base32 length of an encoded address
/// Covers `KEY_LEN_BYTES + CHECKSUM_LEN_BYTES` bytes of payload
pub const ADDRESS_LEN: usize = 58;

/// Base32 works on blocks of 8 characters; decoding needs padding restored
/// to a multiple of this
const BASE32_BLOCK_LEN: usize = 8;

/// The text form of an encoded address
///
/// `Empty` is the pass-through for empty key material: encoding no key
/// yields no address, and callers are expected to special-case it before
/// sharing anything. Only `Text` carries a shareable address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Address {
    /// Pass-through of an empty key
    Empty,
    /// An unpadded, uppercase base32 address
    Text(String),
}

impl Address {
    /// Get the address text, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Address::Empty => None,
            Address::Text(text) => Some(text),
        }
    }

    /// Check whether this is the empty pass-through
    pub fn is_empty(&self) -> bool {
        matches!(self, Address::Empty)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().unwrap_or(""))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Validated parse: accepts exactly the strings `is_valid_address` accepts
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match decode_address(value)? {
            DecodedKey::Bytes(_) => Ok(Address::Text(value.to_string())),
            DecodedKey::Empty => Err(AddressError::WrongKeyLength {
                expected: ADDRESS_LEN,
                actual: 0,
            }),
        }
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str().unwrap_or(""))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(Address::Empty);
        }
        text.parse().map_err(de::Error::custom)
    }
}

/// The binary form recovered from a decoded address
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedKey {
    /// Pass-through of an empty address string
    Empty,
    /// Raw public key bytes recovered from the address
    Bytes([u8; KEY_LEN_BYTES]),
}

impl DecodedKey {
    /// Get the raw key bytes, if any
    pub fn as_bytes(&self) -> Option<&[u8; KEY_LEN_BYTES]> {
        match self {
            DecodedKey::Empty => None,
            DecodedKey::Bytes(bytes) => Some(bytes),
        }
    }

    /// Check whether this is the empty pass-through
    pub fn is_empty(&self) -> bool {
        matches!(self, DecodedKey::Empty)
    }
}

/// Encode raw public key bytes into a base32 address with checksum
///
/// An empty key passes through unchanged as [`Address::Empty`]; any other
/// size than [`KEY_LEN_BYTES`] is rejected. The output is deterministic and
/// exactly [`ADDRESS_LEN`] uppercase base32 characters, padding stripped.
pub fn encode_address(key: &[u8]) -> Result<Address> {
    if key.is_empty() {
        return Ok(Address::Empty);
    }
    if key.len() != KEY_LEN_BYTES {
        return Err(AddressError::WrongKeyBytesLength {
            expected: KEY_LEN_BYTES,
            actual: key.len(),
        });
    }

    let payload = append_checksum(key);
    let encoded = BASE32.encode(&payload);
    Ok(Address::Text(strip_padding(&encoded).to_string()))
}

/// Decode a base32 address back into raw public key bytes
///
/// The length check runs against the unpadded input before padding is
/// restored, so a padded or truncated address is rejected up front. After
/// base32 decoding the trailing checksum is recomputed from the embedded
/// key and compared byte for byte.
pub fn decode_address(addr: &str) -> Result<DecodedKey> {
    if addr.is_empty() {
        return Ok(DecodedKey::Empty);
    }
    if addr.len() != ADDRESS_LEN {
        return Err(AddressError::WrongKeyLength {
            expected: ADDRESS_LEN,
            actual: addr.len(),
        });
    }

    let decoded = BASE32.decode(correct_padding(addr).as_bytes())?;
    let key_len = decoded.len() - CHECKSUM_LEN_BYTES;
    let (key, claimed_checksum) = decoded.split_at(key_len);

    if !verify_checksum(key, claimed_checksum) {
        return Err(AddressError::WrongChecksum);
    }

    let mut bytes = [0u8; KEY_LEN_BYTES];
    bytes.copy_from_slice(key);
    Ok(DecodedKey::Bytes(bytes))
}

/// Check whether a candidate string is a valid encoded address
///
/// Total counterpart to [`decode_address`]: every failure mode collapses to
/// `false` and nothing panics or propagates. An address that decodes to the
/// empty pass-through is not valid.
pub fn is_valid_address(candidate: &str) -> bool {
    if strip_padding(candidate).len() != ADDRESS_LEN {
        return false;
    }
    matches!(decode_address(candidate), Ok(DecodedKey::Bytes(_)))
}

/// Restore `=` padding until the length is a multiple of the base32 block
fn correct_padding(addr: &str) -> String {
    if addr.len() % BASE32_BLOCK_LEN == 0 {
        return addr.to_string();
    }
    let pad = BASE32_BLOCK_LEN - addr.len() % BASE32_BLOCK_LEN;
    format!("{}{}", addr, "=".repeat(pad))
}

/// Strip `=` padding for display
fn strip_padding(addr: &str) -> &str {
    addr.trim_matches('=')
}
