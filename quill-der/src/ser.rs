use crate::{RawSignature, MAX_DER_SIGNATURE_SIZE, TAG_INTEGER, TAG_SEQUENCE};

/// Serializes a raw 64-byte signature as the minimal
/// `SEQUENCE { INTEGER r, INTEGER s }` encoding.
///
/// This is total and deterministic: every `RawSignature` has exactly one
/// minimal encoding, 8 to 72 bytes long. A fully-zero scalar is emitted as
/// the single content byte `00`; a scalar whose leading significant byte has
/// the high bit set gets one `00` sign-disambiguation byte so the INTEGER is
/// not read as negative.
pub fn to_der(sig: &RawSignature) -> Vec<u8> {
    let mut der = Vec::with_capacity(MAX_DER_SIGNATURE_SIZE);
    der.push(TAG_SEQUENCE);
    der.push(0); // patched below, single-byte length (at most 70)

    push_integer(&mut der, sig.r());
    push_integer(&mut der, sig.s());

    der[1] = (der.len() - 2) as u8;
    der
}

fn push_integer(der: &mut Vec<u8>, scalar: &[u8]) {
    // skip leading zeros, keeping one content byte for the zero value
    let mut start = 0;
    while start + 1 < scalar.len() && scalar[start] == 0 {
        start += 1;
    }
    let content = &scalar[start..];
    let sign_byte = content[0] >= 0x80;

    der.push(TAG_INTEGER);
    der.push((content.len() + usize::from(sign_byte)) as u8);
    if sign_byte {
        der.push(0x00);
    }
    der.extend_from_slice(content);
}
