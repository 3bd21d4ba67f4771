//! Hash algorithms supported by quill

use digest::Digest;

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HashAlgorithm {
    SHA2_256,
    SHA2_384,
    SHA2_512,
}

impl HashAlgorithm {
    pub fn digest(self, msg: &[u8]) -> Vec<u8> {
        match self {
            Self::SHA2_256 => sha2::Sha256::digest(msg).as_slice().to_vec(),
            Self::SHA2_384 => sha2::Sha384::digest(msg).as_slice().to_vec(),
            Self::SHA2_512 => sha2::Sha512::digest(msg).as_slice().to_vec(),
        }
    }

    pub fn output_size(self) -> usize {
        match self {
            Self::SHA2_256 => 32,
            Self::SHA2_384 => 48,
            Self::SHA2_512 => 64,
        }
    }
}
