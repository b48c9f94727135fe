/// Load state of the panorama image. `Failed` is terminal for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl ImageStatus {
    /// Classify an image that may have finished before handlers were attached.
    pub fn classify(complete: bool, natural_width: u32) -> Self {
        match (complete, natural_width) {
            (false, _) => ImageStatus::Pending,
            (true, 0) => ImageStatus::Failed,
            (true, _) => ImageStatus::Loaded,
        }
    }

    /// Apply a `load` event.
    pub fn on_load(&mut self) -> LoadOutcome {
        match self {
            ImageStatus::Pending => {
                *self = ImageStatus::Loaded;
                LoadOutcome::First
            }
            // e.g. a srcset swap: sizes may change, the user's pan stays
            ImageStatus::Loaded => LoadOutcome::Repeat,
            ImageStatus::Failed => LoadOutcome::Ignored,
        }
    }

    /// Apply an `error` event. Returns true the first time only, so the
    /// placeholder is substituted once.
    pub fn on_error(&mut self) -> bool {
        if *self == ImageStatus::Failed {
            return false;
        }
        *self = ImageStatus::Failed;
        true
    }
}

/// What a `load` event means for the panorama.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Measure and move to the configured start position.
    First,
    /// Re-measure only.
    Repeat,
    /// Failure already substituted a placeholder.
    Ignored,
}
