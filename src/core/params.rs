use super::constants::{
    HOTSPOT_WRAP_ATTR, PAN_MODE_ATTR, SCROLL_SENSITIVITY, SENSITIVITY_ATTR, SENSITIVITY_MAX,
    SENSITIVITY_MIN, START_ATTR, TRANSFORM_SENSITIVITY,
};
use super::error::TourError;
use std::str::FromStr;

/// How the panorama offset is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanMode {
    /// `translateX(-Npx)` on the panorama image.
    Transform,
    /// Native `scrollLeft` on the container.
    Scroll,
}

impl FromStr for PanMode {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transform" => Ok(PanMode::Transform),
            "scroll" => Ok(PanMode::Scroll),
            _ => Err(TourError::InvalidSetting {
                key: PAN_MODE_ATTR,
                value: s.to_string(),
            }),
        }
    }
}

/// Where the panorama sits once the image has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPosition {
    Start,
    Center,
}

impl FromStr for StartPosition {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "left" => Ok(StartPosition::Start),
            "center" | "centre" => Ok(StartPosition::Center),
            _ => Err(TourError::InvalidSetting {
                key: START_ATTR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourParams {
    pub pan_mode: PanMode,
    pub sensitivity: f64,
    pub wrap_hotspots: bool,
    pub start: StartPosition,
}

impl Default for TourParams {
    fn default() -> Self {
        Self::for_mode(PanMode::Transform)
    }
}

impl TourParams {
    /// Defaults for a pan mode. Scroll mode pans slower and leaves hotspots
    /// to scroll with the content.
    pub fn for_mode(pan_mode: PanMode) -> Self {
        match pan_mode {
            PanMode::Transform => Self {
                pan_mode,
                sensitivity: TRANSFORM_SENSITIVITY,
                wrap_hotspots: true,
                start: StartPosition::Start,
            },
            PanMode::Scroll => Self {
                pan_mode,
                sensitivity: SCROLL_SENSITIVITY,
                wrap_hotspots: false,
                start: StartPosition::Start,
            },
        }
    }

    /// Build parameters from `data-*` attributes. `attr` returns the raw
    /// attribute value if present. Invalid values are reported through
    /// `on_invalid` and the mode default is kept.
    pub fn from_attributes(
        attr: impl Fn(&str) -> Option<String>,
        mut on_invalid: impl FnMut(TourError),
    ) -> Self {
        let pan_mode = match attr(PAN_MODE_ATTR).map(|v| v.parse::<PanMode>()) {
            Some(Ok(m)) => m,
            Some(Err(e)) => {
                on_invalid(e);
                PanMode::Transform
            }
            None => PanMode::Transform,
        };
        let mut params = Self::for_mode(pan_mode);

        if let Some(raw) = attr(SENSITIVITY_ATTR) {
            match parse_sensitivity(&raw) {
                Ok(s) => params.sensitivity = s,
                Err(e) => on_invalid(e),
            }
        }
        if let Some(raw) = attr(HOTSPOT_WRAP_ATTR) {
            match parse_flag(&raw) {
                Some(b) => params.wrap_hotspots = b,
                None => on_invalid(TourError::InvalidSetting {
                    key: HOTSPOT_WRAP_ATTR,
                    value: raw,
                }),
            }
        }
        if let Some(raw) = attr(START_ATTR) {
            match raw.parse::<StartPosition>() {
                Ok(s) => params.start = s,
                Err(e) => on_invalid(e),
            }
        }
        params
    }
}

fn parse_sensitivity(raw: &str) -> Result<f64, TourError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && (SENSITIVITY_MIN..=SENSITIVITY_MAX).contains(&v) => Ok(v),
        _ => Err(TourError::InvalidSetting {
            key: SENSITIVITY_ATTR,
            value: raw.to_string(),
        }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
