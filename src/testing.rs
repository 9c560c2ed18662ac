//! Test utilities for data directory and deck setup.
//!
//! Provides temporary data directories laid out the way the server expects
//! them, plus an in-memory deck source for controller tests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::content::{DeckSource, LoadError, ManifestError};
use crate::domain::{Card, ChapterData, Face, Manifest};
use crate::paths;

/// Manifest with the single Al-Ikhlas entry
pub const IKHLAS_MANIFEST: &str =
    r#"{"surahs": [{"id": 112, "name_en": "Al-Ikhlas", "file": "112.json"}]}"#;

/// One-card dataset for Al-Ikhlas
pub const IKHLAS_DATASET: &str = r#"{"flashcards": [
    {"front": {"text": "قل", "language": "ar"}, "back": {"text": "Say", "language": "en"}}
]}"#;

/// Temporary data directory, removed when dropped.
pub struct DataDir {
    pub temp: TempDir,
}

impl DataDir {
    /// Directory with no files at all
    pub fn empty() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Directory with the Al-Ikhlas manifest and dataset
    pub fn ikhlas() -> Self {
        let dir = Self::empty();
        dir.write(paths::MANIFEST_FILE, IKHLAS_MANIFEST);
        dir.write("112.json", IKHLAS_DATASET);
        dir
    }

    /// Directory with two chapters: a three-card Al-Fatiha and Al-Ikhlas
    pub fn two_chapters() -> Self {
        let dir = Self::empty();
        dir.write(
            paths::MANIFEST_FILE,
            r#"{"surahs": [
                {"id": 1, "name_en": "Al-Fatiha", "name_ar": "الفاتحة", "file": "001.json"},
                {"id": 112, "name_en": "Al-Ikhlas", "file": "112.json"}
            ]}"#,
        );
        dir.write("001.json", &dataset_json(&["بسم", "الحمد", "الرحمن"]));
        dir.write("112.json", IKHLAS_DATASET);
        dir
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.temp.path().join(name), content).expect("Failed to write test file");
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}

/// Dataset JSON with one card per front text
pub fn dataset_json(fronts: &[&str]) -> String {
    let cards: Vec<String> = fronts
        .iter()
        .enumerate()
        .map(|(i, front)| {
            format!(
                r#"{{"front": {{"text": "{}", "language": "ar"}}, "back": {{"text": "Meaning {}", "language": "en-US"}}, "hint": {{"text": "Hint {}", "language": "en-US"}}}}"#,
                front, i, i
            )
        })
        .collect();
    format!(r#"{{"flashcards": [{}]}}"#, cards.join(","))
}

/// Cards whose front texts are the given strings
pub fn cards(fronts: &[&str]) -> Vec<Card> {
    fronts
        .iter()
        .map(|front| {
            Card::new(
                Face::new(*front, "ar"),
                Face::new(format!("{} (back)", front), "en-US"),
                Face::new("", "en-US"),
            )
        })
        .collect()
}

/// In-memory deck source keyed by file name.
#[derive(Debug, Default)]
pub struct MemorySource {
    pub manifest: Option<Manifest>,
    pub chapters: HashMap<String, ChapterData>,
}

impl MemorySource {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest: Some(manifest),
            chapters: HashMap::new(),
        }
    }

    pub fn with_chapter(mut self, file: &str, fronts: &[&str]) -> Self {
        self.chapters.insert(
            file.to_string(),
            ChapterData {
                surah: None,
                cards: cards(fronts),
            },
        );
        self
    }
}

impl DeckSource for MemorySource {
    async fn manifest(&self) -> Result<Manifest, ManifestError> {
        self.manifest
            .clone()
            .ok_or_else(|| ManifestError::NotFound("memory".to_string()))
    }

    async fn chapter(&self, file_key: &str) -> Result<ChapterData, LoadError> {
        self.chapters
            .get(file_key)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(file_key.to_string()))
    }
}
