//! UTF-8 path file helpers for the Wayfarer command line, built on `cap-std`
//! and `camino`.
//!
//! Every helper resolves the parent directory of its target with ambient
//! authority and then works relative to that capability.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open the directory containing `path` and return it with the file name.
pub fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("'{path}' does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Read a whole UTF-8 file, such as a request or catalog document.
pub fn read_utf8(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = open_parent(path)?;
    dir.read_to_string(name.as_str())
}

/// What, if anything, lives at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Nothing exists at the path, or its parent directory is missing.
    Missing,
    /// A regular file.
    File,
    /// A directory or any other non-file entry.
    Other,
}

/// Inspect `path` without following it into a directory listing.
pub fn entry_kind(path: &Utf8Path) -> io::Result<EntryKind> {
    let (dir, name) = match open_parent(path) {
        Ok(found) => found,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(EntryKind::Missing),
        Err(err) => return Err(err),
    };
    match dir.metadata(name.as_str()) {
        Ok(meta) if meta.is_file() => Ok(EntryKind::File),
        Ok(_) => Ok(EntryKind::Other),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(EntryKind::Missing),
        Err(err) => Err(err),
    }
}

/// Report whether `path` is an existing regular file.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    entry_kind(path).map(|kind| kind == EntryKind::File)
}

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_utf8(path: &Utf8Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_str().is_empty()) {
        fs_utf8::Dir::create_ambient_dir_all(parent, ambient_authority())?;
    }
    let (dir, name) = open_parent(path)?;
    dir.write(name.as_str(), contents)
}
