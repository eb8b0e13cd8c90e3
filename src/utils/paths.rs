// Path conversion between absolute native paths and relative Unix-style paths
//
// Every path that reaches a FileAnalysis or the synthesized document is relative
// to the repository root and uses `/` separators, so output does not depend on
// the host platform or on where the repository was checked out.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Convert an absolute path under `root` into a relative Unix-style path
///
/// Both paths are canonicalized when possible so symlinked roots
/// (`/var` -> `/private/var` on macOS) still compare equal.
///
/// ```text
/// to_relative_unix_style("/src/myrepo/internal/store/store.go", "/src/myrepo")
/// // => "internal/store/store.go"
/// ```
pub fn to_relative_unix_style(absolute: &Path, root: &Path) -> Result<String> {
    let (path, root) = match (absolute.canonicalize(), root.canonicalize()) {
        (Ok(path), Ok(root)) => (strip_verbatim_prefix(path), strip_verbatim_prefix(root)),
        _ => (absolute.to_path_buf(), root.to_path_buf()),
    };

    let relative = path.strip_prefix(&root).with_context(|| {
        format!(
            "File path '{}' is not within repository root '{}'",
            path.display(),
            root.display()
        )
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                parts.push(part.to_str().context("Path contains invalid UTF-8")?);
            }
            Component::CurDir => {}
            other => {
                anyhow::bail!(
                    "Unexpected path component {:?} in '{}'",
                    other,
                    relative.display()
                )
            }
        }
    }

    Ok(parts.join("/"))
}

/// Join a relative Unix-style path onto the repository root
///
/// `Path::join` accepts `/` on every platform.
pub fn to_absolute_native(relative_unix: &str, root: &Path) -> PathBuf {
    root.join(relative_unix)
}

/// Directory part of a relative Unix-style path, `.` for root-level files
pub fn unix_parent_dir(relative_unix: &str) -> &str {
    match relative_unix.rfind('/') {
        Some(index) if index > 0 => &relative_unix[..index],
        _ => ".",
    }
}

// Canonicalized Windows paths carry a `\\?\` prefix that plain paths lack
#[cfg(windows)]
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    let text = path.to_string_lossy();
    match text.strip_prefix(r"\\?\") {
        Some(stripped) => PathBuf::from(stripped),
        None => path,
    }
}

#[cfg(not(windows))]
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    path
}
