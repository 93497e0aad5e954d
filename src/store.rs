//! File-backed INI operations.
//!
//! Every call goes to disk: a [`Document`] is parsed fresh on each read and
//! nothing is cached between calls. Writes go to a temporary file in the
//! target's directory which is then renamed over the target, so an
//! interrupted write never leaves a truncated file behind.
//!
//! There is no locking. Two concurrent [`modify_key`] calls on the same file
//! can lose one of the updates.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::io::{ParseOptions, WriteOptions, parse_ini, write_ini};
use crate::{Document, Error};

#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    pub parse: ParseOptions,
    pub write: WriteOptions,
}

/// Read and parse the INI file at `path`.
///
/// Fails with [`Error::NotFound`] if the file does not exist.
pub fn read(path: &Path) -> Result<Document, Error> {
    read_with(path, &ParseOptions::default())
}

pub fn read_with(path: &Path, options: &ParseOptions) -> Result<Document, Error> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let doc = parse_ini(&text, options).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), sections = doc.len(), "read INI file");
    Ok(doc)
}

/// Replace the file at `path` with `doc`, creating it if needed.
///
/// A symlinked `path` is written through: the file it points to is replaced
/// and the link is left in place.
pub fn write(path: &Path, doc: &Document) -> Result<(), Error> {
    write_with(path, doc, &WriteOptions::default())
}

pub fn write_with(path: &Path, doc: &Document, options: &WriteOptions) -> Result<(), Error> {
    let text = write_ini(doc, options);
    let io_err = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(io_err)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(io_err(e)),
    };

    // Dropping `tmp` on any early return deletes the temporary file.
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(text.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    let permissions = match existing {
        Some(permissions) => tmp.as_file().set_permissions(permissions),
        None => set_new_file_permissions(tmp.as_file()),
    };
    permissions.map_err(io_err)?;
    tmp.persist(&target).map_err(|e| io_err(e.error))?;

    debug!(path = %path.display(), bytes = text.len(), "wrote INI file");
    Ok(())
}

/// Overwrite the value of an existing key and write the file back.
///
/// Returns the previous value. A missing section or key yields
/// [`Error::Lookup`] and leaves the file untouched.
pub fn modify_key(path: &Path, section: &str, key: &str, value: &str) -> Result<String, Error> {
    modify_key_with(path, section, key, value, &StoreOptions::default())
}

pub fn modify_key_with(
    path: &Path,
    section: &str,
    key: &str,
    value: &str,
    options: &StoreOptions,
) -> Result<String, Error> {
    let mut doc = read_with(path, &options.parse)?;
    let previous = doc.set_existing(section, key, value).inspect_err(|err| {
        debug!(path = %path.display(), "modify skipped: {err}");
    })?;
    write_with(path, &doc, &options.write)?;
    info!(
        path = %path.display(),
        section,
        key,
        old = %previous,
        new = value,
        "modified key"
    );
    Ok(previous)
}

/// Fetch the value of `section`/`key`.
///
/// A missing section or key yields [`Error::Lookup`]; use
/// [`try_get_value`] when absence is not an error for the caller.
pub fn get_value(path: &Path, section: &str, key: &str) -> Result<String, Error> {
    get_value_with(path, section, key, &ParseOptions::default())
}

pub fn get_value_with(
    path: &Path,
    section: &str,
    key: &str,
    options: &ParseOptions,
) -> Result<String, Error> {
    let doc = read_with(path, options)?;
    let value = doc.lookup(section, key).inspect_err(|err| {
        debug!(path = %path.display(), "lookup failed: {err}");
    })?;
    Ok(value.to_string())
}

/// Like [`get_value`], but a missing section or key is `Ok(None)`.
pub fn try_get_value(path: &Path, section: &str, key: &str) -> Result<Option<String>, Error> {
    match get_value(path, section, key) {
        Ok(value) => Ok(Some(value)),
        Err(Error::Lookup(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// The file a write to `path` should replace: `path` itself, or the file a
/// symlink at `path` points to. A dangling link resolves to its target path.
fn resolve_target(path: &Path) -> std::io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(target) => Ok(target),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let link = fs::read_link(path)?;
                Ok(match path.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                })
            }
            Err(e) => Err(e),
        },
        Ok(_) => Ok(path.to_path_buf()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn set_new_file_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    // NamedTempFile is created 0600; give new files the usual 0644.
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_new_file_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
