use super::constants::{CURSOR_GRAB, CURSOR_GRABBING};
use super::params::StartPosition;

/// A pointer sample, tagged by the device that produced it. Both kinds pan
/// identically; only the source of the coordinate differs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Mouse { page_x: f64 },
    /// First active touch point.
    Touch { page_x: f64 },
}

impl PointerInput {
    /// Horizontal coordinate relative to the container's left edge.
    #[inline]
    pub fn container_x(&self, container_left: f64) -> f64 {
        let page_x = match *self {
            PointerInput::Mouse { page_x } | PointerInput::Touch { page_x } => page_x,
        };
        page_x - container_left
    }
}

/// Why a drag ended. All variants leave the panner in the same state; the
/// reason only feeds diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    Release,
    Leave,
    Cancel,
}

/// Measured extent of the pannable strip against its viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub total_width: f64,
    pub viewport_width: f64,
}

impl Surface {
    pub fn new(total_width: f64, viewport_width: f64) -> Self {
        let sane = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            total_width: sane(total_width),
            viewport_width: sane(viewport_width),
        }
    }

    /// Largest valid offset; zero when the strip fits in the viewport.
    #[inline]
    pub fn max_offset(&self) -> f64 {
        (self.total_width - self.viewport_width).max(0.0)
    }

    #[inline]
    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Offset as a percentage of the pannable range (0 when nothing pans).
    #[inline]
    pub fn scroll_percentage(&self, offset: f64) -> f64 {
        let max = self.max_offset();
        if max <= 0.0 {
            0.0
        } else {
            self.clamp(offset) / max * 100.0
        }
    }

    pub fn start_offset(&self, start: StartPosition) -> f64 {
        match start {
            StartPosition::Start => 0.0,
            StartPosition::Center => self.max_offset() / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin_x: f64,
    pub start_offset: f64,
}

/// Drag-to-pan state machine. Owns the current offset; rendering it is the
/// caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Panner {
    surface: Surface,
    offset: f64,
    sensitivity: f64,
    session: Option<DragSession>,
}

impl Panner {
    pub fn new(surface: Surface, sensitivity: f64) -> Self {
        Self {
            surface,
            offset: 0.0,
            sensitivity,
            session: None,
        }
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    #[cfg(test)]
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Adopt an offset that changed outside of a drag (native scrolling).
    /// Ignored mid-drag; the session owns the offset until it ends.
    pub fn sync_offset(&mut self, offset: f64) -> f64 {
        if self.session.is_none() {
            self.offset = self.surface.clamp(offset);
        }
        self.offset
    }

    #[inline]
    pub fn scroll_percentage(&self) -> f64 {
        self.surface.scroll_percentage(self.offset)
    }

    /// Cursor the container should show right now.
    #[inline]
    pub fn cursor(&self) -> &'static str {
        if self.is_dragging() {
            CURSOR_GRABBING
        } else {
            CURSOR_GRAB
        }
    }

    /// Start a session at `pointer_x`. Returns true when a stale session was
    /// overwritten.
    pub fn begin_drag(&mut self, pointer_x: f64) -> bool {
        self.session
            .replace(DragSession {
                origin_x: pointer_x,
                start_offset: self.offset,
            })
            .is_some()
    }

    /// Move the active session to `pointer_x`. Returns the new clamped
    /// offset, or `None` when no drag is in progress.
    pub fn continue_drag(&mut self, pointer_x: f64) -> Option<f64> {
        let session = self.session?;
        let delta = (pointer_x - session.origin_x) * self.sensitivity;
        self.offset = self.surface.clamp(session.start_offset - delta);
        Some(self.offset)
    }

    /// Clear the session. Returns the session that was active, if any.
    pub fn end_drag(&mut self, _reason: DragEnd) -> Option<DragSession> {
        self.session.take()
    }

    /// Replace the measured surface and re-clamp the offset.
    pub fn set_surface(&mut self, surface: Surface) -> f64 {
        self.surface = surface;
        self.offset = surface.clamp(self.offset);
        self.offset
    }

    /// Jump straight to a start position, outside of any gesture.
    pub fn jump_to(&mut self, start: StartPosition) -> f64 {
        self.offset = self.surface.clamp(self.surface.start_offset(start));
        self.offset
    }
}
