//! Path utilities: base directory, `~` expansion and file resolution.

use std::env;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Directory holding the running executable, where roster and log files live.
pub fn exe_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve a user-supplied file name against `base`.
/// Absolute paths (after `~` expansion) are kept as they are.
pub fn resolve(base: &Path, file_name: &str) -> PathBuf {
    let p = expand_tilde(file_name.trim());
    if p.is_absolute() { p } else { base.join(p) }
}
