use crate::error::DerError;

/// Normalizes a variable-length big-endian unsigned integer into the fixed
/// 32-byte `field` window.
///
/// Leading zero bytes are stripped, keeping one content byte when the source
/// is entirely zero. The remainder must hold 1 to 32 significant bytes and is
/// left-padded with zeros; an empty or wider source fails with
/// [`DerError::OutOfRange`]. Writes only into the caller's window, no
/// allocation.
pub(crate) fn normalize_field(src: &[u8], field: &mut [u8]) -> Result<(), DerError> {
    let mut start = 0;
    while start + 1 < src.len() && src[start] == 0 {
        start += 1;
    }
    let src = &src[start..];

    if src.is_empty() || src.len() > field.len() {
        return Err(DerError::OutOfRange);
    }

    let pad = field.len() - src.len();
    field[..pad].fill(0);
    field[pad..].copy_from_slice(src);

    Ok(())
}
