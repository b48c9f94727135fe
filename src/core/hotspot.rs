use super::constants::HOTSPOT_RING;

/// Displayed position of a hotspot after panning by `scroll_pct`. Positions
/// wrap around the ring instead of drifting off either edge.
#[inline]
pub fn wrap_position(original: f64, scroll_pct: f64) -> f64 {
    (original - scroll_pct + HOTSPOT_RING).rem_euclid(HOTSPOT_RING)
}

/// Parse a CSS `left` value given in percent (`"25%"`). Pixel and other
/// units yield `None` since they cannot be wrapped.
pub fn parse_percent(value: &str) -> Option<f64> {
    let v = value.trim();
    let number = v.strip_suffix('%')?.trim();
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[inline]
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Original positions of every hotspot, captured once. Repositioning always
/// starts from these, never from the last displayed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotspotLayout {
    originals: Vec<Option<f64>>,
}

impl HotspotLayout {
    pub fn from_styles<I, S>(lefts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            originals: lefts
                .into_iter()
                .map(|s| parse_percent(s.as_ref()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.originals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// Number of hotspots positioned in percent.
    pub fn wrappable(&self) -> usize {
        self.originals.iter().filter(|o| o.is_some()).count()
    }

    /// Displayed position for each hotspot, index-aligned with the input.
    /// `None` entries keep whatever position the markup gave them.
    pub fn displayed(&self, scroll_pct: f64) -> Vec<Option<f64>> {
        self.originals
            .iter()
            .map(|o| o.map(|left| wrap_position(left, scroll_pct)))
            .collect()
    }
}
