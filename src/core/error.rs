use thiserror::Error;

/// Everything that can go wrong in the tour. None of these are fatal; the
/// wiring layer logs them and degrades the affected feature only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    #[error("no content found for hotspot target `{0}`")]
    ContentNotFound(String),
    #[error("resource reference missing on document button")]
    ResourceUnavailable,
    #[error("panorama image failed to load")]
    ImageFailed,
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidSetting { key: &'static str, value: String },
}
