//! Path utilities for the Zellij sandbox, where `~` is mounted at `/host`.

use std::path::PathBuf;

/// Returns the directory holding the widget's trace files.
///
/// Resolves to `/host/.local/share/zellij/askbar` inside the sandbox. `/host`
/// points at the cwd of the last focused terminal (or wherever Zellij was
/// started), which is usually the user's home directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("askbar")
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// Used for the `theme_file` option so users can write `~/themes/x.toml`.
///
/// ```
/// use askbar::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml"), "/host/themes/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_zellij_share() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/askbar")
        );
    }

    #[test]
    fn only_a_leading_tilde_expands() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("themes/~/x"), "themes/~/x");
    }
}
