//! Wallet address encoding and validation.
//!
//! Turns a raw 32-byte public key into a human-shareable base32 address
//! carrying a SHA-512/256 derived checksum, and parses such addresses back
//! into raw key bytes with deterministic rejection of malformed or
//! corrupted input.
//!
//! Three layers build on each other:
//! - [`checksum`]: the truncated-digest checksum engine
//! - [`address`]: the encode/decode codec on top of it
//! - [`address::is_valid_address`]: a total validity predicate that never
//!   fails, for callers that only want a yes/no answer
//!
//! Every operation is a pure function over its arguments, so concurrent use
//! needs no coordination.

pub mod address;
pub mod checksum;
pub mod error;

pub use address::{
    decode_address, encode_address, is_valid_address, Address, DecodedKey, ADDRESS_LEN,
    KEY_LEN_BYTES,
};
pub use checksum::{compute_checksum, verify_checksum, CHECKSUM_LEN_BYTES};
pub use error::{AddressError, Result};
