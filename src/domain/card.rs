use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::config;

/// Which side of a card a face belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
  Front,
  Back,
  Hint,
}

impl FaceKind {
  /// Language tag used when a dataset leaves it out
  pub fn fallback_language(&self) -> &'static str {
    match self {
      Self::Front => config::FRONT_FALLBACK_LANGUAGE,
      Self::Back => config::BACK_FALLBACK_LANGUAGE,
      Self::Hint => config::HINT_FALLBACK_LANGUAGE,
    }
  }
}

/// One side of a card: the text plus its language tag (e.g. "ar", "en-US")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
  pub text: String,
  pub language: String,
}

impl Face {
  pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      language: language.into(),
    }
  }

  /// Empty face carrying the fallback language for its side
  pub fn empty(kind: FaceKind) -> Self {
    Self::new("", kind.fallback_language())
  }

  /// Short display tag: upper-cased, at most two characters ("en-US" -> "EN")
  pub fn language_tag(&self) -> String {
    self.language.to_uppercase().chars().take(2).collect()
  }

  fn from_raw(raw: Option<RawFace>, kind: FaceKind) -> Self {
    match raw {
      Some(raw) => Self {
        text: raw.text.unwrap_or_default(),
        language: raw
          .language
          .unwrap_or_else(|| kind.fallback_language().to_string()),
      },
      None => Self::empty(kind),
    }
  }
}

/// A normalized flashcard. Every face is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
  pub front: Face,
  pub back: Face,
  pub hint: Face,
}

impl Card {
  pub fn new(front: Face, back: Face, hint: Face) -> Self {
    Self { front, back, hint }
  }

  fn from_raw(raw: RawCard) -> Self {
    Self {
      front: Face::from_raw(raw.front, FaceKind::Front),
      back: Face::from_raw(raw.back, FaceKind::Back),
      hint: Face::from_raw(raw.hint, FaceKind::Hint),
    }
  }
}

/// A chapter dataset after normalization at the load boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterData {
  /// Title carried inside the dataset, used when the manifest has no entry
  pub surah: Option<String>,
  pub cards: Vec<Card>,
}

impl ChapterData {
  /// Parse a dataset file. Only invalid JSON is an error; missing or
  /// mistyped fields fall back to their defaults.
  pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
    let raw: RawChapter = serde_json::from_str(content)?;
    Ok(Self {
      surah: raw.surah,
      cards: raw.flashcards.into_iter().map(Card::from_raw).collect(),
    })
  }
}

// ==================== Wire Format ====================

#[derive(Debug, Default, Deserialize)]
struct RawChapter {
  #[serde(default, deserialize_with = "lenient")]
  surah: Option<String>,
  #[serde(default, deserialize_with = "lenient_cards")]
  flashcards: Vec<RawCard>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCard {
  #[serde(default, deserialize_with = "lenient")]
  front: Option<RawFace>,
  #[serde(default, deserialize_with = "lenient")]
  back: Option<RawFace>,
  #[serde(default, deserialize_with = "lenient")]
  hint: Option<RawFace>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFace {
  #[serde(default, deserialize_with = "lenient")]
  text: Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  language: Option<String>,
}

/// Accept any JSON value; anything that doesn't fit `T` becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  let value = Value::deserialize(deserializer)?;
  if value.is_null() {
    return Ok(None);
  }
  Ok(serde_json::from_value(value).ok())
}

/// A non-array `flashcards` is an empty deck; a non-object entry is a card
/// with every face defaulted.
fn lenient_cards<'de, D>(deserializer: D) -> Result<Vec<RawCard>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(match value {
    Value::Array(items) => items
      .into_iter()
      .map(|item| serde_json::from_value(item).unwrap_or_default())
      .collect(),
    _ => Vec::new(),
  })
}
