//! File guards
//!
//! Thin wrappers over filesystem metadata queries. Any failure of the
//! underlying call (permission denied, unreadable path) is conflated with
//! "does not exist": callers get one answer, not a platform error.

use std::path::Path;

use crate::core::error::{FileKind, GuardError, GuardResult};

/// Fails with [`File(NotFound)`] when the path does not point at a readable
/// file.
///
/// [`File(NotFound)`]: crate::core::error::FileKind::NotFound
pub fn exists(path: &Path, parameter: &str) -> GuardResult<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        _ => Err(GuardError::file(
            FileKind::NotFound,
            parameter,
            format!("`{parameter}` does not point at an existing file"),
        )),
    }
}

/// Fails with [`File(Empty)`] when the file exists but has zero length.
///
/// A missing or unreadable file fails with [`File(NotFound)`] instead.
///
/// [`File(Empty)`]: crate::core::error::FileKind::Empty
/// [`File(NotFound)`]: crate::core::error::FileKind::NotFound
pub fn not_empty_file(path: &Path, parameter: &str) -> GuardResult<()> {
    let meta = std::fs::metadata(path).map_err(|_| {
        GuardError::file(
            FileKind::NotFound,
            parameter,
            format!("`{parameter}` does not point at an existing file"),
        )
    })?;
    if meta.len() == 0 {
        return Err(GuardError::file(
            FileKind::Empty,
            parameter,
            format!("`{parameter}` must not be an empty file"),
        ));
    }
    Ok(())
}

/// Fails with [`File(WrongExtension)`] when the path's extension is not one
/// of `allowed`.
///
/// Extensions are compared without the leading dot, case-sensitively.
///
/// [`File(WrongExtension)`]: crate::core::error::FileKind::WrongExtension
pub fn extension(path: &Path, allowed: &[&str], parameter: &str) -> GuardResult<()> {
    let actual = path.extension().and_then(|ext| ext.to_str());
    if !actual.is_some_and(|ext| allowed.contains(&ext)) {
        return Err(GuardError::file(
            FileKind::WrongExtension,
            parameter,
            format!(
                "`{parameter}` must have one of these extensions: {}",
                allowed.join(", ")
            ),
        ));
    }
    Ok(())
}
