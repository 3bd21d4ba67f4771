use thiserror::Error;

/// Raised when a DER-encoded signature fails structural validation.
///
/// Every variant means "reject this signature"; no partial result is ever
/// produced and callers must not attempt repair. Encoding is total and has
/// no error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DerError {
    /// input shorter than the minimal SEQUENCE of two INTEGERs
    #[error("DER signature too short: {length} bytes (minimum is 8)")]
    TooShort { length: usize },

    /// unexpected ASN.1 header tag
    #[error("unexpected ASN.1 tag: expected {expected:#04x}, found {found:#04x}")]
    BadTag { expected: u8, found: u8 },

    /// declared lengths do not account for the input exactly
    #[error("declared DER lengths are inconsistent with the input")]
    LengthMismatch,

    /// INTEGER content empty or wider than the 32-byte scalar field
    #[error("DER INTEGER does not fit the 32-byte scalar field")]
    OutOfRange,
}
