use crate::error::DerError;
use crate::misc::normalize_field;
use crate::{RawSignature, FIELD_SIZE, MIN_DER_SIGNATURE_SIZE, RAW_SIGNATURE_SIZE, TAG_INTEGER, TAG_SEQUENCE};

/// Parses a DER `SEQUENCE { INTEGER r, INTEGER s }` into a raw 64-byte
/// signature.
///
/// The input is treated as attacker-controlled: the declared lengths must
/// account for the buffer exactly (truncation, trailing garbage, slack or
/// overlap between the two INTEGERs are all rejected) and every index is
/// proven in range before it is dereferenced. The function fails closed at
/// the first structural violation.
///
/// Length arithmetic is validated exhaustively, but the source INTEGERs are
/// not re-checked for a superfluous sign byte of their own: a redundant
/// in-range leading zero is absorbed by normalization. Callers that need
/// strict canonical-DER rejection must layer that policy on top.
pub fn from_der(der: &[u8]) -> Result<RawSignature, DerError> {
    // 2 bytes SEQUENCE header, two 2-byte INTEGER headers, 1 content byte each
    if der.len() < MIN_DER_SIGNATURE_SIZE {
        return Err(DerError::TooShort { length: der.len() });
    }
    if der[0] != TAG_SEQUENCE {
        return Err(DerError::BadTag {
            expected: TAG_SEQUENCE,
            found: der[0],
        });
    }
    if der[2] != TAG_INTEGER {
        return Err(DerError::BadTag {
            expected: TAG_INTEGER,
            found: der[2],
        });
    }

    // The declared sequence length must cover the rest of the buffer exactly.
    let seq_len = usize::from(der[1]);
    if seq_len == 0 || seq_len + 2 != der.len() {
        return Err(DerError::LengthMismatch);
    }

    // R must leave room for S's 2-byte header and at least one content byte,
    // and S's INTEGER tag must sit immediately after R's content.
    // (seq_len >= 6 here since the buffer holds at least 8 bytes.)
    let r_len = usize::from(der[3]);
    if r_len < 1 || r_len > seq_len - 5 || der[4 + r_len] != TAG_INTEGER {
        return Err(DerError::LengthMismatch);
    }

    // S's declared length must consume the rest of the sequence exactly.
    let s_len = usize::from(der[5 + r_len]);
    if s_len < 1 || s_len != seq_len - 4 - r_len {
        return Err(DerError::LengthMismatch);
    }

    let mut raw = [0u8; RAW_SIGNATURE_SIZE];
    let (r_field, s_field) = raw.split_at_mut(FIELD_SIZE);
    normalize_field(&der[4..4 + r_len], r_field)?;
    normalize_field(&der[6 + r_len..6 + r_len + s_len], s_field)?;

    Ok(RawSignature::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn scalar(tail: &[u8]) -> [u8; 32] {
        let mut f = [0u8; 32];
        f[32 - tail.len()..].copy_from_slice(tail);
        f
    }

    #[test]
    fn minimal_signature() {
        let der = [0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01];
        let sig = from_der(&der).unwrap();
        assert_eq!(&scalar(&[0x01])[..], sig.r());
        assert_eq!(&scalar(&[0x01])[..], sig.s());
    }

    #[test]
    fn sign_disambiguation_byte_is_stripped() {
        let der = [0x30, 0x07, 0x02, 0x02, 0x00, 0x80, 0x02, 0x01, 0x7f];
        let sig = from_der(&der).unwrap();
        assert_eq!(&scalar(&[0x80])[..], sig.r());
        assert_eq!(&scalar(&[0x7f])[..], sig.s());
    }

    // Source canonicality is not re-checked: a redundant but in-range
    // leading zero is accepted and absorbed. Pinned so any policy change
    // is deliberate.
    #[test]
    fn redundant_leading_zero_is_accepted() {
        let der = [0x30, 0x07, 0x02, 0x02, 0x00, 0x7f, 0x02, 0x01, 0x01];
        let sig = from_der(&der).unwrap();
        assert_eq!(&scalar(&[0x7f])[..], sig.r());
    }

    #[test]
    fn zero_scalars() {
        let der = [0x30, 0x06, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00];
        let sig = from_der(&der).unwrap();
        assert_eq!([0u8; 64], sig.to_bytes());
    }

    #[test]
    fn full_width_signature() {
        let mut der = vec![0x30, 0x46, 0x02, 0x21, 0x00];
        der.extend_from_slice(&[0xff; 32]);
        der.extend_from_slice(&[0x02, 0x21, 0x00]);
        der.extend_from_slice(&[0xee; 32]);
        let sig = from_der(&der).unwrap();
        assert_eq!(&[0xff; 32][..], sig.r());
        assert_eq!(&[0xee; 32][..], sig.s());
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![0x30])]
    #[case(vec![0x30, 0x05, 0x02, 0x01, 0x01, 0x02, 0x01])]
    fn too_short(#[case] der: Vec<u8>) {
        assert_eq!(Err(DerError::TooShort { length: der.len() }), from_der(&der));
    }

    #[test]
    fn wrong_sequence_tag() {
        let der = [0x31, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01];
        assert_eq!(
            Err(DerError::BadTag {
                expected: 0x30,
                found: 0x31
            }),
            from_der(&der)
        );
    }

    #[test]
    fn wrong_first_integer_tag() {
        let der = [0x30, 0x06, 0x04, 0x01, 0x01, 0x02, 0x01, 0x01];
        assert_eq!(
            Err(DerError::BadTag {
                expected: 0x02,
                found: 0x04
            }),
            from_der(&der)
        );
    }

    #[rstest]
    // declared sequence length shorter than the buffer (trailing garbage)
    #[case(vec![0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0xaa])]
    // declared sequence length longer than the buffer (truncated)
    #[case(vec![0x30, 0x07, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01])]
    // zero sequence length
    #[case(vec![0x30, 0x00, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01])]
    // zero R length
    #[case(vec![0x30, 0x06, 0x02, 0x00, 0x01, 0x02, 0x01, 0x01])]
    // R overruns the room reserved for S's header and content
    #[case(vec![0x30, 0x06, 0x02, 0x02, 0x01, 0x01, 0x02, 0x01])]
    // S's INTEGER tag not immediately after R's content
    #[case(vec![0x30, 0x06, 0x02, 0x01, 0x01, 0x03, 0x01, 0x01])]
    // S length leaves slack inside the sequence
    #[case(vec![0x30, 0x07, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x01])]
    // zero S length
    #[case(vec![0x30, 0x08, 0x02, 0x03, 0x01, 0x01, 0x01, 0x02, 0x00, 0x01])]
    fn length_mismatch(#[case] der: Vec<u8>) {
        assert_eq!(Err(DerError::LengthMismatch), from_der(&der));
    }

    #[rstest]
    // 33 significant bytes of R cannot fit the 32-byte field
    #[case({
        let mut der = vec![0x30, 0x26, 0x02, 0x21];
        der.extend_from_slice(&[0x01; 33]);
        der.extend_from_slice(&[0x02, 0x01, 0x01]);
        der
    })]
    // same for S
    #[case({
        let mut der = vec![0x30, 0x26, 0x02, 0x01, 0x01, 0x02, 0x21];
        der.extend_from_slice(&[0x01; 33]);
        der
    })]
    fn out_of_range(#[case] der: Vec<u8>) {
        assert_eq!(Err(DerError::OutOfRange), from_der(&der));
    }

    #[test]
    fn removing_the_last_byte_of_a_valid_signature_fails() {
        let mut der = vec![0x30, 0x08, 0x02, 0x02, 0x01, 0xf0, 0x02, 0x02, 0x02, 0xe0];
        from_der(&der).unwrap();
        der.pop();
        assert_eq!(Err(DerError::LengthMismatch), from_der(&der));
    }
}
