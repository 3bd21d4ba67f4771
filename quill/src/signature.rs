//! Signature production and verification at the DER wire boundary

use crate::hash::HashAlgorithm;
use crate::key::{PrivateKey, PublicKey};

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use quill_der::{DerError, RawSignature};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignatureError {
    /// DER signature codec error
    #[error("DER signature error: {source}")]
    Der {
        #[from]
        source: DerError,
    },

    /// EC error
    #[error("EC error: {context}")]
    Ec { context: String },

    /// invalid signature
    #[error("invalid signature")]
    BadSignature,
}

/// Supported signature algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SignatureAlgorithm {
    Ecdsa(HashAlgorithm),
}

impl SignatureAlgorithm {
    /// Signs `msg` and returns the signature in its DER wire form
    /// (8 to 72 bytes).
    pub fn sign(self, msg: &[u8], private_key: &PrivateKey) -> Result<Vec<u8>, SignatureError> {
        Ok(self.sign_raw(msg, private_key)?.to_der())
    }

    /// Signs `msg` and returns the raw fixed-width `r || s` signature.
    ///
    /// The message is digested with the algorithm's hash and the prehash is
    /// signed deterministically (RFC 6979), so signing the same message with
    /// the same key always yields the same signature.
    pub fn sign_raw(self, msg: &[u8], private_key: &PrivateKey) -> Result<RawSignature, SignatureError> {
        let Self::Ecdsa(hash_algorithm) = self;
        let digest = hash_algorithm.digest(msg);

        let signature: k256::ecdsa::Signature =
            private_key
                .as_inner()
                .sign_prehash(&digest)
                .map_err(|e| SignatureError::Ec {
                    context: format!("ECDSA signing failed: {e}"),
                })?;

        let mut raw = [0u8; quill_der::RAW_SIGNATURE_SIZE];
        raw.copy_from_slice(&signature.to_bytes());

        Ok(RawSignature::from(raw))
    }

    /// Verifies a DER-encoded signature over `msg`.
    ///
    /// The signature is DER-decoded first; any structural violation rejects
    /// it before a curve operation runs.
    pub fn verify(self, public_key: &PublicKey, msg: &[u8], der_sig: &[u8]) -> Result<(), SignatureError> {
        let raw = quill_der::from_der(der_sig)?;
        self.verify_raw(public_key, msg, &raw)
    }

    /// Verifies a raw fixed-width signature over `msg`.
    ///
    /// Signatures must be low-S normalized; the underlying implementation
    /// rejects non-normalized ones.
    pub fn verify_raw(
        self,
        public_key: &PublicKey,
        msg: &[u8],
        signature: &RawSignature,
    ) -> Result<(), SignatureError> {
        let Self::Ecdsa(hash_algorithm) = self;

        let signature = k256::ecdsa::Signature::from_slice(signature.as_bytes())
            .map_err(|_| SignatureError::BadSignature)?;

        let digest = hash_algorithm.digest(msg);
        public_key
            .as_inner()
            .verify_prehash(&digest, &signature)
            .map_err(|_| SignatureError::BadSignature)
    }
}
