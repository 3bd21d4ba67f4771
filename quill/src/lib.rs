//! # quill
//!
//! secp256k1 ECDSA signing and verification with a compact DER signature
//! codec.
//!
//! Signatures cross the wire in the ASN.1 DER form used by most
//! cryptographic protocols (`SEQUENCE { INTEGER r, INTEGER s }`); internally
//! every signature is the fixed 64-byte `r || s` form. The codec lives in
//! the [`quill_der`] crate and is re-exported here.
//!
//! ```
//! use quill::hash::HashAlgorithm;
//! use quill::key::PrivateKey;
//! use quill::signature::SignatureAlgorithm;
//!
//! let key = PrivateKey::generate();
//! let algorithm = SignatureAlgorithm::Ecdsa(HashAlgorithm::SHA2_256);
//!
//! let der_sig = algorithm.sign(b"signed payload", &key).unwrap();
//! algorithm
//!     .verify(&key.to_public_key(), b"signed payload", &der_sig)
//!     .unwrap();
//! ```

pub mod hash;
pub mod key;
pub mod signature;

pub use quill_der::{DerError, RawSignature};
