//! # Resume Export
//!
//! "Download CV": copy the profile's resume into the user's download folder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

/// Where exported files go: the platform download folder, else home.
pub fn download_dir() -> io::Result<PathBuf> {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no download or home directory"))
}

/// Copy `source` into `dest_dir` as `file_name`, returning the written path.
/// Directory parts of `file_name` are dropped so the copy stays in `dest_dir`.
///
/// An existing file with the same name is overwritten.
pub fn export(source: &Path, dest_dir: &Path, file_name: &str) -> io::Result<PathBuf> {
    if !source.is_file() {
        warn!("Resume not found at {}", source.display());
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("resume not found: {}", source.display()),
        ));
    }

    let Some(name) = Path::new(file_name).file_name() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid resume file name: {file_name}"),
        ));
    };

    fs::create_dir_all(dest_dir)?;
    let dest = dest_dir.join(name);
    fs::copy(source, &dest)?;
    info!("Exported resume {} -> {}", source.display(), dest.display());
    Ok(dest)
}
