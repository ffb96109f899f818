use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Returns `path` as an absolute path without `.` or `..` components, resolving relative paths
/// against the current directory.
///
/// # Errors
///
/// This function will fail if the current directory is needed and could not be obtained.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    Ok(absolute.clean())
}

/// Returns the path divided by forward slashes.
pub fn format_path(path: &Path) -> OsString {
    let mut formatted = OsString::new();
    let mut prev: &OsStr = OsStr::new("");
    for (i, p) in path.iter().enumerate() {
        if i != 0 && prev != "/" {
            // doing this to avoid placing a forward slash at the end or when the path before is a
            // forward slash
            formatted.push("/");
        }
        formatted.push(p);
        prev = p;
    }
    formatted
}

// Tests

#[cfg(test)]
mod tests {
    use std::env;
    use std::path::PathBuf;

    use crate::utils::path::{absolute_path, format_path};

    #[test]
    pub fn absolute_path_test() {
        let base = env::current_dir().expect("failed to get current dir");
        assert_eq!(
            base.join("src"),
            absolute_path(&PathBuf::from("./src/../src/")).expect("failed to clean path")
        );
        assert_eq!(
            PathBuf::from("/srv/data"),
            absolute_path(&PathBuf::from("/srv/cache/../data/.")).expect("failed to clean path")
        );
    }

    #[test]
    pub fn format_path_test() {
        let mut path = PathBuf::new();
        path.push("/");
        path.push("srv");
        path.push("repo");
        path.push("src");
        path.push("main.rs");
        let objective = "/srv/repo/src/main.rs";

        assert_eq!(objective, format_path(&path))
    }
}
