//! Byte-level locate-and-patch of the stored VBA password
//!
//! The password lives in a quote-delimited hex field introduced by the literal
//! `DPB="`. Nothing else in the surrounding blob is parsed or validated: the
//! legacy format keeps no checksum over this field, so splicing in the hash of
//! a known password is all it takes to unlock the project.

use std::ops::Range;

use memchr::memmem;

use crate::consts;
use crate::error::PatchError;

// The field is introduced by the literal `DPB="` and runs to the next double-quote
const FIELD_MARKER: &[u8] = b"DPB=\"";
const FIELD_TERMINATOR: u8 = b'"';

/// Replace the stored password hash in `blob` with the known-password sentinel
///
/// Will error if:
/// - The `DPB="` marker is nowhere in the blob
/// - The marker is present but the field is never closed by a double-quote
pub fn unlock_blob(blob: &[u8]) -> Result<Vec<u8>, PatchError> {
    let field = locate_field(blob)?;
    let replacement = build_replacement(field.len(), consts::KNOWN_PASSWORD_DPB);
    Ok(patch(blob, &field, &replacement))
}

/// Locate the password field, exclusive of its marker and closing quote
pub fn locate_field(blob: &[u8]) -> Result<Range<usize>, PatchError> {
    let marker = memmem::find(blob, FIELD_MARKER).ok_or(PatchError::MarkerNotFound)?;
    let start = marker + FIELD_MARKER.len();
    let length = memchr::memchr(FIELD_TERMINATOR, &blob[start..])
        .ok_or(PatchError::UnterminatedField(start))?;
    Ok(start..start + length)
}

/// Build the bytes to write into a field of `field_len` bytes
///
/// A sentinel shorter than the field is right-padded with ASCII zeros so the
/// blob keeps its length. A sentinel longer than the field is used whole,
/// growing the blob: the formats that carry this field locate it by scanning,
/// not by stored offset, so the growth is harmless and the full known hash is
/// always written
#[must_use]
pub fn build_replacement(field_len: usize, sentinel: &[u8]) -> Vec<u8> {
    let mut replacement = sentinel.to_vec();
    if replacement.len() < field_len {
        replacement.resize(field_len, b'0');
    }
    replacement
}

/// Splice `replacement` over `field`, leaving every byte outside the range untouched
#[must_use]
pub fn patch(blob: &[u8], field: &Range<usize>, replacement: &[u8]) -> Vec<u8> {
    let mut patched = Vec::with_capacity(blob.len() - field.len() + replacement.len());
    patched.extend_from_slice(&blob[..field.start]);
    patched.extend_from_slice(replacement);
    patched.extend_from_slice(&blob[field.end..]);
    patched
}
