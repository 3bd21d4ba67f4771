//! # quill-der
//!
//! A compact DER codec for fixed-width ECDSA signatures.
//!
//! Converts between the raw 64-byte signature form (two 32-byte big-endian
//! scalars `r || s`) and the ASN.1 wire form `SEQUENCE { INTEGER r, INTEGER s }`.
//! Decoding rejects anything that is not exactly the two-INTEGER sequence
//! grammar; encoding always produces the unique minimal encoding for the
//! given scalars.
//!
//! Both representations are plain value types and every operation is a pure,
//! stateless transform bounded by the fixed field widths.

mod de;
mod error;
mod misc;
mod ser;

pub use de::from_der;
pub use error::DerError;
pub use ser::to_der;

/// Length in bytes of a raw `r || s` signature.
pub const RAW_SIGNATURE_SIZE: usize = 64;

/// Length in bytes of each big-endian scalar field.
pub const FIELD_SIZE: usize = 32;

/// 2 (SEQUENCE header) + 2 * 2 (INTEGER headers) + 2 * 1 (one content byte each).
pub const MIN_DER_SIGNATURE_SIZE: usize = 8;

/// 2 (SEQUENCE header) + 2 * (2 + 33) for two sign-prefixed 32-byte scalars.
pub const MAX_DER_SIGNATURE_SIZE: usize = 72;

pub(crate) const TAG_SEQUENCE: u8 = 0x30;
pub(crate) const TAG_INTEGER: u8 = 0x02;

/// A fixed-width ECDSA signature: two 32-byte big-endian unsigned scalars,
/// R followed by S.
///
/// Scalar range validity is the signing engine's concern; this type only
/// carries bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSignature([u8; RAW_SIGNATURE_SIZE]);

impl RawSignature {
    pub fn from_scalars(r: [u8; FIELD_SIZE], s: [u8; FIELD_SIZE]) -> Self {
        let mut raw = [0u8; RAW_SIGNATURE_SIZE];
        raw[..FIELD_SIZE].copy_from_slice(&r);
        raw[FIELD_SIZE..].copy_from_slice(&s);
        Self(raw)
    }

    /// The R scalar, 32 bytes big-endian.
    pub fn r(&self) -> &[u8] {
        &self.0[..FIELD_SIZE]
    }

    /// The S scalar, 32 bytes big-endian.
    pub fn s(&self) -> &[u8] {
        &self.0[FIELD_SIZE..]
    }

    pub fn as_bytes(&self) -> &[u8; RAW_SIGNATURE_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; RAW_SIGNATURE_SIZE] {
        self.0
    }

    /// Serializes into the minimal DER wire form. See [`to_der`].
    pub fn to_der(&self) -> Vec<u8> {
        ser::to_der(self)
    }

    /// Parses from the DER wire form. See [`from_der`].
    pub fn from_der(der: &[u8]) -> Result<Self, DerError> {
        de::from_der(der)
    }
}

impl From<[u8; RAW_SIGNATURE_SIZE]> for RawSignature {
    fn from(raw: [u8; RAW_SIGNATURE_SIZE]) -> Self {
        Self(raw)
    }
}

impl TryFrom<&[u8]> for RawSignature {
    type Error = core::array::TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; RAW_SIGNATURE_SIZE]>::try_from(bytes).map(Self)
    }
}

impl AsRef<[u8]> for RawSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
