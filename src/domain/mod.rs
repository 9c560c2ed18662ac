pub mod card;
pub mod manifest;

pub use card::{Card, ChapterData, Face, FaceKind};
pub use manifest::Manifest;
