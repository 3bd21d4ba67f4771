//! Wrappers around secp256k1 key material providing an easy to use API

use k256::ecdsa::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::Zeroizing;

#[derive(Debug, Error)]
pub enum KeyError {
    /// EC error
    #[error("EC error: {context}")]
    EC { context: String },
}

/// Length in bytes of a secp256k1 secret scalar.
pub const SECRET_KEY_SIZE: usize = 32;

// We don't compress EC points by default to avoid potential
// interoperability issues with peers that assume uncompressed SEC1 points.
pub(crate) const COMPRESS_EC_POINT_BY_DEFAULT: bool = false;

/// A secp256k1 signing key.
///
/// The secret scalar lives inside the curve crate's key type and is zeroized
/// on drop; it only leaves through [`Self::to_bytes`].
#[derive(Debug, Clone)]
pub struct PrivateKey {
    key: SigningKey,
}

impl PrivateKey {
    pub fn generate() -> Self {
        Self {
            key: SigningKey::random(&mut OsRng),
        }
    }

    /// Loads a key from its 32-byte big-endian secret scalar.
    pub fn from_bytes<T: ?Sized + AsRef<[u8]>>(bytes: &T) -> Result<Self, KeyError> {
        let bytes = bytes.as_ref();
        if bytes.len() != SECRET_KEY_SIZE {
            return Err(KeyError::EC {
                context: format!(
                    "invalid secret scalar size: expected {} bytes, got {}",
                    SECRET_KEY_SIZE,
                    bytes.len()
                ),
            });
        }

        let key = SigningKey::from_slice(bytes).map_err(|_| KeyError::EC {
            context: "secret scalar is zero or not below the curve order".to_string(),
        })?;

        Ok(Self { key })
    }

    pub fn to_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_SIZE]> {
        let mut bytes = Zeroizing::new([0u8; SECRET_KEY_SIZE]);
        bytes.copy_from_slice(&self.key.to_bytes());
        bytes
    }

    pub fn to_public_key(&self) -> PublicKey {
        PublicKey {
            key: self.key.verifying_key().to_owned(),
        }
    }

    pub(crate) fn as_inner(&self) -> &SigningKey {
        &self.key
    }
}

/// A secp256k1 verifying key, held as a validated curve point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    key: VerifyingKey,
}

impl PublicKey {
    /// Loads a key from a SEC1-encoded point, compressed (33 bytes) or
    /// uncompressed (65 bytes). The identity point is rejected.
    pub fn from_sec1_bytes<T: ?Sized + AsRef<[u8]>>(bytes: &T) -> Result<Self, KeyError> {
        let key = VerifyingKey::from_sec1_bytes(bytes.as_ref()).map_err(|_| KeyError::EC {
            context: "invalid SEC1 point encoding".to_string(),
        })?;

        Ok(Self { key })
    }

    pub fn to_sec1_bytes(&self, compress: bool) -> Vec<u8> {
        self.key.to_encoded_point(compress).as_bytes().to_vec()
    }

    /// SEC1 point bytes in the default encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_sec1_bytes(COMPRESS_EC_POINT_BY_DEFAULT)
    }

    pub(crate) fn as_inner(&self) -> &VerifyingKey {
        &self.key
    }
}
