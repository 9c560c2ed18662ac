use serde::Deserialize;

/// One selectable chapter as listed in `manifest.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChapterEntry {
  pub id: u32,
  pub name_en: String,
  #[serde(default)]
  pub name_ar: Option<String>,
  /// Dataset file name, also the chapter's selection key
  pub file: String,
}

impl ChapterEntry {
  /// Arabic name, treating an empty string as absent
  pub fn arabic_name(&self) -> Option<&str> {
    self.name_ar.as_deref().filter(|s| !s.is_empty())
  }

  /// Dropdown label: "112 — Al-Ikhlas (الإخلاص)"
  pub fn label(&self) -> String {
    match self.arabic_name() {
      Some(ar) => format!("{} — {} ({})", pad3(self.id), self.name_en, ar),
      None => format!("{} — {}", pad3(self.id), self.name_en),
    }
  }
}

/// Ordered chapter list. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
  pub surahs: Vec<ChapterEntry>,
}

impl Manifest {
  /// Parse `manifest.json`. Unlike chapter datasets, a manifest with missing
  /// or mistyped fields is rejected.
  pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(content)
  }

  pub fn find(&self, file: &str) -> Option<&ChapterEntry> {
    self.surahs.iter().find(|s| s.file == file)
  }

  pub fn contains(&self, file: &str) -> bool {
    self.find(file).is_some()
  }

  /// Default selection when nothing usable was persisted
  pub fn first_key(&self) -> Option<&str> {
    self.surahs.first().map(|s| s.file.as_str())
  }

  /// Header line for a loaded chapter: "112 — Al-Ikhlas · الإخلاص".
  ///
  /// Files absent from the manifest fall back to the dataset's own title.
  pub fn chapter_title(&self, file: &str, dataset_title: Option<&str>) -> String {
    match self.find(file) {
      Some(entry) => match entry.arabic_name() {
        Some(ar) => format!("{} — {} · {}", pad3(entry.id), entry.name_en, ar),
        None => format!("{} — {}", pad3(entry.id), entry.name_en),
      },
      // The dash is not run through pad3, so this reads "— Title" rather than "00— Title"
      None => format!("— {}", dataset_title.unwrap_or_default())
        .trim_end()
        .to_string(),
    }
  }
}

/// Zero-pad a chapter number to three digits
fn pad3(id: u32) -> String {
  format!("{:03}", id)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Manifest {
    Manifest::from_json(
      r#"{"surahs": [
        {"id": 1, "name_en": "Al-Fatiha", "name_ar": "الفاتحة", "file": "001.json"},
        {"id": 112, "name_en": "Al-Ikhlas", "file": "112.json"},
        {"id": 113, "name_en": "Al-Falaq", "name_ar": "", "file": "113.json"}
      ]}"#,
    )
    .unwrap()
  }

  #[test]
  fn test_parse_manifest() {
    let manifest = sample();
    assert_eq!(manifest.surahs.len(), 3);
    assert_eq!(manifest.surahs[1].id, 112);
    assert!(manifest.surahs[1].name_ar.is_none());
  }

  #[test]
  fn test_malformed_manifest_is_error() {
    assert!(Manifest::from_json("[]").is_err());
    assert!(Manifest::from_json(r#"{"surahs": [{"id": 1}]}"#).is_err());
    assert!(Manifest::from_json("not json").is_err());
  }

  #[test]
  fn test_labels() {
    let manifest = sample();
    assert_eq!(manifest.surahs[0].label(), "001 — Al-Fatiha (الفاتحة)");
    assert_eq!(manifest.surahs[1].label(), "112 — Al-Ikhlas");
    // Empty Arabic name is treated as missing
    assert_eq!(manifest.surahs[2].label(), "113 — Al-Falaq");
  }

  #[test]
  fn test_find_and_first_key() {
    let manifest = sample();
    assert!(manifest.contains("112.json"));
    assert!(!manifest.contains("114.json"));
    assert_eq!(manifest.first_key(), Some("001.json"));
    assert_eq!(Manifest::default().first_key(), None);
  }

  #[test]
  fn test_chapter_title_from_manifest() {
    let manifest = sample();
    assert_eq!(
      manifest.chapter_title("001.json", Some("ignored")),
      "001 — Al-Fatiha · الفاتحة"
    );
    assert_eq!(manifest.chapter_title("112.json", None), "112 — Al-Ikhlas");
  }

  #[test]
  fn test_chapter_title_falls_back_to_dataset() {
    let manifest = sample();
    assert_eq!(manifest.chapter_title("extra.json", Some("An-Nas")), "— An-Nas");
    assert_eq!(manifest.chapter_title("extra.json", None), "—");
  }

  #[test]
  fn test_pad3() {
    assert_eq!(pad3(1), "001");
    assert_eq!(pad3(112), "112");
    assert_eq!(pad3(1000), "1000");
  }
}
