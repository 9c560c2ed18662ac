//! Chapter content loading.
//!
//! The data directory holds one `manifest.json` listing the chapters and one
//! dataset file per chapter:
//!
//! ```text
//! data/
//!   manifest.json   {"surahs": [{"id", "name_en", "name_ar"?, "file"}]}
//!   112.json        {"surah"?, "flashcards": [{"front", "back", "hint"?}]}
//! ```
//!
//! The manifest is parsed strictly. Datasets are normalized leniently at
//! this boundary (see `domain::card`), so the rest of the crate only ever
//! sees complete cards.

pub mod error;
pub mod source;

pub use error::{LoadError, ManifestError};
pub use source::{DeckSource, DirSource};
