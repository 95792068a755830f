//! Lexical path normalization used to compare manifest destinations with
//! exclusion patterns.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves `relative` against `root` and returns a canonical form suitable
/// for component-wise prefix comparison.
///
/// The transformation is purely lexical: the filesystem is never consulted,
/// `\` is accepted as a separator, `.` segments are dropped, `..` pops the
/// previous segment and trailing separators are ignored, so `"a/b"` and
/// `"a/b/"` normalize to the same path.
///
/// # Errors
/// * `Error::PathError` if the input contains a NUL byte
pub fn normalize<P: AsRef<Path>>(root: P, relative: &str) -> Result<PathBuf> {
    if relative.contains('\0') {
        return Err(Error::PathError {
            path: relative.escape_default().to_string(),
            reason: "contains a NUL byte".to_string(),
        });
    }

    let unified = relative.replace('\\', "/");
    let joined = root.as_ref().join(unified.trim_end_matches('/'));

    Ok(clean(&joined))
}

/// Collapses `.` and `..` components without touching the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = match cleaned.components().next_back() {
                    Some(Component::Normal(_)) => cleaned.pop(),
                    // `..` above the filesystem root stays at the root
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => true,
                    _ => false,
                };
                if !popped {
                    cleaned.push("..");
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}
