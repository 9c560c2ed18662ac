//! Errors raised while fetching the manifest or a chapter dataset.

/// The chapter manifest could not be loaded. Without it no chapter can be
/// selected, so this is fatal for the session.
#[derive(Debug)]
pub enum ManifestError {
    NotFound(String),
    IoError(String, String),
    ParseError(String, String),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::NotFound(path) => write!(f, "Manifest not found: {}", path),
            ManifestError::IoError(path, err) => write!(f, "IO error reading {}: {}", path, err),
            ManifestError::ParseError(path, err) => write!(f, "Parse error in {}: {}", path, err),
        }
    }
}

impl ManifestError {
    /// Returns a user-facing error message without exposing filesystem paths.
    pub fn user_message(&self) -> &'static str {
        match self {
            ManifestError::NotFound(_) => "The chapter list (manifest.json) was not found",
            ManifestError::IoError(_, _) => "The chapter list could not be read",
            ManifestError::ParseError(_, _) => "The chapter list is malformed",
        }
    }
}

impl std::error::Error for ManifestError {}

/// A chapter dataset could not be loaded. The session stays on whatever
/// chapter it showed before.
#[derive(Debug)]
pub enum LoadError {
    /// The chapter list is not loaded yet
    NoManifest,
    /// The key is not a plain file name
    InvalidKey(String),
    /// The deck itself could not be locked
    Unavailable,
    NotFound(String),
    IoError(String, String),
    ParseError(String, String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NoManifest => write!(f, "Cannot load a chapter before the manifest"),
            LoadError::InvalidKey(key) => write!(f, "Invalid chapter key: {:?}", key),
            LoadError::Unavailable => write!(f, "Deck unavailable"),
            LoadError::NotFound(path) => write!(f, "Chapter file not found: {}", path),
            LoadError::IoError(path, err) => write!(f, "IO error reading {}: {}", path, err),
            LoadError::ParseError(path, err) => write!(f, "Parse error in {}: {}", path, err),
        }
    }
}

impl LoadError {
    /// Returns a user-facing error message without exposing filesystem paths.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::NoManifest => "The chapter list is not available",
            LoadError::InvalidKey(_) => "Unknown chapter",
            LoadError::Unavailable => "The deck is unavailable, please reload the page",
            LoadError::NotFound(_) => "Chapter file not found",
            LoadError::IoError(_, _) => "Failed to read chapter file",
            LoadError::ParseError(_, _) => "Failed to parse chapter file",
        }
    }
}

impl std::error::Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_hide_paths() {
        let err = LoadError::IoError("/srv/data/112.json".into(), "denied".into());
        assert!(err.to_string().contains("/srv/data/112.json"));
        assert!(!err.user_message().contains("/srv"));

        let err = ManifestError::ParseError("/srv/data/manifest.json".into(), "eof".into());
        assert!(err.to_string().contains("eof"));
        assert!(!err.user_message().contains("/srv"));
    }

    #[test]
    fn test_invalid_key_display() {
        let err = LoadError::InvalidKey("../x".into());
        assert_eq!(err.to_string(), "Invalid chapter key: \"../x\"");
        assert_eq!(err.user_message(), "Unknown chapter");
    }
}
