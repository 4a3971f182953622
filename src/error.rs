use std::{
    fmt::{Debug, Display},
    io,
};

pub type UnlockResult<T> = Result<T, UnlockError>;

#[allow(clippy::module_name_repetitions)]
pub enum UnlockError {
    Io(io::Error),
    Zip(zip::result::ZipError),
    NoVBAFile,
    Patch(PatchError),
    BadRegex(regex::Error),
    NoMatchingFiles,
}

impl From<io::Error> for UnlockError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<zip::result::ZipError> for UnlockError {
    fn from(value: zip::result::ZipError) -> Self {
        Self::Zip(value)
    }
}

impl From<PatchError> for UnlockError {
    fn from(value: PatchError) -> Self {
        Self::Patch(value)
    }
}

impl From<regex::Error> for UnlockError {
    fn from(value: regex::Error) -> Self {
        Self::BadRegex(value)
    }
}

impl Display for UnlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Zip(e) => write!(
                f,
                "Problem with the zip representation of the supplied file: {e}"
            ),
            Self::NoVBAFile => write!(
                f,
                "Could not find the 'xl/vbaProject.bin' file within the archive"
            ),
            Self::Patch(e) => write!(f, "{e}"),
            Self::BadRegex(e) => write!(f, "The supplied file pattern is not valid regex: {e}"),
            Self::NoMatchingFiles => write!(f, "Could not find file(s) that match the criteria"),
        }
    }
}

impl Debug for UnlockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, PartialEq, Eq)]
pub enum PatchError {
    MarkerNotFound,
    UnterminatedField(usize),
}

impl Display for PatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MarkerNotFound => write!(
                f,
                "Could not find the DPB=\" password marker in the VBA project. Either the project has no password or this is not a VBA project at all"
            ),
            Self::UnterminatedField(start) => write!(
                f,
                "The password field starting at byte {start} is never closed by a double-quote"
            ),
        }
    }
}
