//! Project path functions - single source of truth for data file paths.
//!
//! Chapter datasets are static siblings of `manifest.json` inside the data
//! directory (see `config::Settings`). Keys coming from the browser are
//! checked here before they are ever joined onto a path.

use std::path::{Path, PathBuf};

/// Manifest file name inside the data directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// Static assets directory served under `/static`
pub const STATIC_DIR: &str = "static";

/// Path of the chapter manifest
pub fn manifest_path(data_dir: &Path) -> PathBuf {
    data_dir.join(MANIFEST_FILE)
}

/// Path of a chapter dataset, or None when the key could escape the data
/// directory.
pub fn chapter_path(data_dir: &Path, file_key: &str) -> Option<PathBuf> {
    is_valid_file_key(file_key).then(|| data_dir.join(file_key))
}

/// A chapter key must be a plain file name: non-empty, no separators,
/// no parent references.
pub fn is_valid_file_key(file_key: &str) -> bool {
    !file_key.is_empty()
        && file_key != "."
        && !file_key.contains("..")
        && !file_key.contains('/')
        && !file_key.contains('\\')
        && !file_key.contains('\0')
}

// ==================== Tests ====================
