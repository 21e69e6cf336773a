//! SHA-512/256 checksum calculation for wallet addresses.
//!
//! The tag is the low-order bytes of the digest, so it stays short while
//! still being derived from the full key material.

use sha2::{Digest, Sha512_256};

/// The number of bytes used for the checksum
/// This is included for applications that need to know it for encodings
pub const CHECKSUM_LEN_BYTES: usize = 4;

/// Compute the address checksum for a byte slice
///
/// Takes the last `CHECKSUM_LEN_BYTES` bytes of the SHA-512/256 digest.
pub fn compute_checksum(data: &[u8]) -> [u8; CHECKSUM_LEN_BYTES] {
    let digest = Sha512_256::digest(data);

    let mut checksum = [0u8; CHECKSUM_LEN_BYTES];
    checksum.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN_BYTES..]);
    checksum
}

/// Verify a claimed checksum against the data it authenticates
pub fn verify_checksum(data: &[u8], checksum: &[u8]) -> bool {
    compute_checksum(data) == checksum
}

/// Calculate and append the checksum to data
pub fn append_checksum(data: &[u8]) -> Vec<u8> {
    let mut result = data.to_vec();
    let checksum = compute_checksum(data);
    result.extend_from_slice(&checksum);
    result
}

/// Verify data with appended checksum
pub fn verify_data_with_checksum(data_with_checksum: &[u8]) -> bool {
    if data_with_checksum.len() < CHECKSUM_LEN_BYTES {
        return false;
    }

    let data_len = data_with_checksum.len() - CHECKSUM_LEN_BYTES;
    let data = &data_with_checksum[..data_len];
    let checksum = &data_with_checksum[data_len..];

    verify_checksum(data, checksum)
}
