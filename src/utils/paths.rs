use std::borrow::Cow;
use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` component to `home`.
///
/// Paths that do not start with `~`, and any path when `home` is unknown, are returned as-is.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use codex_transcript::utils::expand_tilde;
///
/// let home = Path::new("/Users/alice");
/// assert_eq!(
///     expand_tilde(Path::new("~/.codex"), Some(home)),
///     PathBuf::from("/Users/alice/.codex")
/// );
/// assert_eq!(expand_tilde(Path::new("/tmp/x"), Some(home)), PathBuf::from("/tmp/x"));
/// ```
pub fn expand_tilde(path: &Path, home: Option<&Path>) -> PathBuf {
    let mut components = path.components();
    match (components.next(), home) {
        (Some(Component::Normal(first)), Some(home)) if first == "~" => {
            let rest = components.as_path();
            if rest.as_os_str().is_empty() { home.to_path_buf() } else { home.join(rest) }
        }
        _ => path.to_path_buf(),
    }
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use codex_transcript::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.codex");
/// // Returns "~/.codex" if the home directory is /Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir().as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
