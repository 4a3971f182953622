//! Format-specific extraction and repackaging of the VBA blob
//!
//! Two container families are handled. Access databases (`.mdb`, `.accdb`)
//! carry the blob as the whole file body. Everything else is assumed to be a
//! zip-structured Office file with the blob stored as the `xl/vbaProject.bin`
//! member. The variant is picked on file extension alone.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::consts;
use crate::error::{UnlockError, UnlockResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Container {
    FlatBlob,
    ArchiveMember,
}

impl Container {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some(ext) if consts::FLAT_BLOB_EXTENSIONS.contains(&ext) => Self::FlatBlob,
            _ => Self::ArchiveMember,
        }
    }
}

/// Pull the raw VBA project bytes out of the container at `path`
pub fn read_blob(path: &Path) -> UnlockResult<Vec<u8>> {
    match Container::from_path(path) {
        Container::FlatBlob => Ok(std::fs::read(path)?),
        Container::ArchiveMember => {
            let zipfile = File::open(path)?;
            let mut archive = ZipArchive::new(zipfile)?;
            let Ok(mut vba_file) = archive.by_name(consts::ZIP_VBA_PATH) else {
                return Err(UnlockError::NoVBAFile);
            };
            let mut buffer = Vec::with_capacity(1024);
            vba_file.read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write a new container at `output` holding `blob` as its VBA project
///
/// The flat-file variant becomes exactly the blob. The archive variant is a
/// clone of the original archive, save for the VBA member which is rewritten
/// from the blob: all other entries are copied raw (never recompressed, with
/// their metadata intact) and the archive comment is carried over
pub fn write_container(original: &Path, output: &Path, blob: &[u8]) -> UnlockResult<()> {
    match Container::from_path(original) {
        Container::FlatBlob => Ok(std::fs::write(output, blob)?),
        Container::ArchiveMember => {
            let zipfile = File::open(original)?;
            let mut archive = ZipArchive::new(zipfile)?;

            let new_file = File::create(output)?;
            let mut new_archive = ZipWriter::new(new_file);
            new_archive.set_raw_comment(archive.comment().to_vec());

            let target: &Path = consts::ZIP_VBA_PATH.as_ref();
            for i in 0..archive.len() {
                let file = archive.by_index_raw(i)?;
                match file.enclosed_name() {
                    Some(p) if p == target => {
                        new_archive.start_file(consts::ZIP_VBA_PATH, FileOptions::default())?;
                        new_archive.write_all(blob)?;
                        new_archive.flush()?;
                    }
                    _ => new_archive.raw_copy_file(file)?,
                }
            }
            new_archive.finish()?;
            Ok(())
        }
    }
}
