//! Filesystem helpers for catalogue files, built on `cap-std` and `camino`.
//!
//! Paths arrive from the command line as UTF-8 strings. Each helper resolves
//! the containing directory with ambient authority once and then works
//! relative to that directory handle.
#![forbid(unsafe_code)]

use std::fs::File;
use std::io;
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open a catalogue file for reading.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_catalogue(path: &Utf8Path) -> io::Result<File> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority())?;
    Ok(file.into_std())
}

/// Create (or truncate) an output file, creating missing parent directories
/// first.
///
/// # Errors
/// Returns the underlying I/O error when a directory or the file cannot be
/// created, or when `path` has no file name.
pub fn create_output(path: &Utf8Path) -> io::Result<File> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    let file = dir.create(name.as_str())?;
    log::debug!("created output file {path}");
    Ok(file.into_std())
}

/// Whether `path` names an existing regular file.
///
/// A missing file or missing parent directory reports `false`.
///
/// # Errors
/// Returns other I/O errors, such as permission failures, unchanged.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let lookup = parent_dir_and_name(path)
        .and_then(|(dir, name)| dir.metadata(name.as_str()).map(|meta| meta.is_file()));
    match lookup {
        Ok(is_file) => Ok(is_file),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Returns the underlying I/O error when a directory cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }
    let (base, relative) = split_base(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split a directory path into an ambient base directory (root, drive
/// prefix, or the working directory) and the remainder relative to it.
fn split_base(parent: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_parent = parent.as_std_path();
    let (base, relative) = match std_parent.components().next() {
        // Windows drive or UNC prefix: anchor at the prefix's root directory
        // and strip it, falling back to the bare prefix for paths like `C:foo`.
        Some(Component::Prefix(prefix)) => {
            let prefix_str = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            let base = Utf8PathBuf::from(prefix_str).join(std::path::MAIN_SEPARATOR_STR);
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .or_else(|_| std_parent.strip_prefix(prefix.as_os_str()))
                .map_err(|_| io::Error::other("failed to strip prefix from parent path"))?
                .to_path_buf();
            (base, relative)
        }
        // Absolute path: anchor at the filesystem root.
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR_STR);
            let relative = std_parent
                .strip_prefix(base.as_std_path())
                .map_err(|_| io::Error::other("failed to strip root from absolute path"))?
                .to_path_buf();
            (base, relative)
        }
        // Relative path: anchor at the working directory and keep it whole.
        _ => (Utf8PathBuf::from("."), std_parent.to_path_buf()),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    let relative = Utf8PathBuf::from_path_buf(relative)
        .map_err(|_| io::Error::other("non-UTF-8 parent path"))?;
    Ok((dir, relative))
}
