use std::fs;
use std::path::Path;

use crate::result::Result;
use crate::StegError;

mod password;

pub use password::*;

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| StegError::ReadError { source })
}

pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|source| StegError::WriteError { source })
}

/// the base name of a file name, hidden names must never point outside the output folder
pub(crate) fn sanitize_file_name(name: &str) -> Result<&str> {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .ok_or(StegError::InvalidFileName)
}
