use thiserror::Error;

/// Result type for address codec operations
pub type Result<T> = std::result::Result<T, AddressError>;

/// Error types for address encoding and decoding
#[derive(Error, Debug)]
pub enum AddressError {
    /// Raw key material passed to encode has the wrong size
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    WrongKeyBytesLength { expected: usize, actual: usize },

    /// Address text passed to decode has the wrong unpadded length
    #[error("Invalid address length: expected {expected} characters, got {actual}")]
    WrongKeyLength { expected: usize, actual: usize },

    /// Embedded checksum does not match the checksum of the embedded key
    #[error("Invalid address checksum")]
    WrongChecksum,

    /// Base32 decoding error
    #[error("Base32 decode error: {0}")]
    Base32(#[from] data_encoding::DecodeError),
}
