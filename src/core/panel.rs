use super::error::TourError;

/// Where pre-authored panel content comes from. The browser looks blocks up
/// by element id; tests use a map.
pub trait ContentSource {
    fn content_for(&self, target_id: &str) -> Option<String>;
}

impl ContentSource for std::collections::HashMap<String, String> {
    fn content_for(&self, target_id: &str) -> Option<String> {
        self.get(target_id).cloned()
    }
}

/// What is currently on screen in the info panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Shown {
    pub target_id: String,
    pub html: String,
}

/// Open/closed state of the single info panel and its backdrop overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoPanel {
    shown: Option<Shown>,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.shown.is_some()
    }

    pub fn shown(&self) -> Option<&Shown> {
        self.shown.as_ref()
    }

    /// Show the content for `target_id`. Opening while already open replaces
    /// what is displayed. A missing target leaves the state untouched.
    pub fn open(
        &mut self,
        target_id: &str,
        source: &impl ContentSource,
    ) -> Result<&Shown, TourError> {
        let html = source
            .content_for(target_id)
            .ok_or_else(|| TourError::ContentNotFound(target_id.to_string()))?;
        Ok(self.shown.insert(Shown {
            target_id: target_id.to_string(),
            html,
        }))
    }

    /// Returns true if the panel was open.
    pub fn close(&mut self) -> bool {
        self.shown.take().is_some()
    }

    /// Keyboard handling. Returns true when the key closed the panel.
    pub fn handle_key(&mut self, key: &str) -> bool {
        is_close_key(key) && self.close()
    }
}

#[inline]
pub fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Validate the reference carried by an "open document" button.
pub fn resolve_resource(reference: Option<&str>) -> Result<&str, TourError> {
    match reference.map(str::trim) {
        Some(r) if !r.is_empty() => Ok(r),
        _ => Err(TourError::ResourceUnavailable),
    }
}
