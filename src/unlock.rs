//! Sequences the unlock of a single file
//!
//! Read the blob out of the container, patch the password field, write a new
//! container under a non-colliding `_unlocked` name and, when asked to work
//! in place, swap the new file over the original.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::container;
use crate::error::UnlockResult;
use crate::{consts, patch};

/// Unlock one file, returning the path now holding the unlocked contents
///
/// In in-place mode the original is deleted and the freshly written file
/// renamed over it. A failure during that swap is only logged: the unlocked
/// file exists and is intact by then, so the run counts as processed and the
/// surviving path is returned
pub fn unlock_one(filename: &Path, inplace: bool) -> UnlockResult<PathBuf> {
    let blob = container::read_blob(filename)?;
    let unlocked = patch::unlock_blob(&blob)?;

    let new_filename = unlock_filename(filename);
    container::write_container(filename, &new_filename, &unlocked)?;

    if inplace {
        if let Err(e) = swap(filename, &new_filename) {
            log::warn!(
                "could not swap {} over the original: {e}",
                new_filename.display()
            );
            return Ok(new_filename);
        }
        return Ok(filename.to_path_buf());
    }
    Ok(new_filename)
}

fn swap(original: &Path, unlocked: &Path) -> std::io::Result<()> {
    std::fs::remove_file(original)?;
    std::fs::rename(unlocked, original)
}

/// Derive a free sibling name for the unlocked copy
///
/// `Book1.xlsm` becomes `Book1_unlocked.xlsm`; if that is taken, counted
/// variants `Book1_unlocked (0).xlsm`, `Book1_unlocked (1).xlsm`, ... are
/// tried until one is free
#[must_use]
pub fn unlock_filename(source: &Path) -> PathBuf {
    let mut new = with_suffix(source, "");
    let mut i = 0;
    while new.exists() {
        new = with_suffix(source, &format!(" ({i})"));
        i += 1;
    }
    new
}

fn with_suffix(source: &Path, disambiguator: &str) -> PathBuf {
    let mut stem = source.file_stem().map_or_else(OsString::new, ToOwned::to_owned);
    stem.push(consts::UNLOCK_SUFFIX);
    stem.push(disambiguator);
    let mut new = PathBuf::from(source);
    new.set_file_name(stem);
    if let Some(ext) = source.extension() {
        new.set_extension(ext);
    }
    new
}
