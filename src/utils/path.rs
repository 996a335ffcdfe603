//! Path utilities: expand ~, derive sibling file names.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `dir/base.ext` + `suffix` → `dir/base-suffix.ext`
pub fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let name = match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}-{}", stem, suffix),
    };

    path.with_file_name(name)
}
