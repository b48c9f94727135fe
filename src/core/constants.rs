// Markup contract and tuning defaults for the tour widget.
//
// Selectors and class names mirror the host page; changing the markup means
// changing these and nothing else.

// Structural selectors
pub const CONTAINER_SELECTOR: &str = ".panorama-container";
pub const PANORAMA_ID: &str = "panorama";
pub const HOTSPOT_SELECTOR: &str = ".hotspot";
pub const INFO_PANEL_ID: &str = "infoPanel";
pub const INFO_CONTENT_ID: &str = "infoContent";
pub const CLOSE_BUTTON_ID: &str = "closeBtn";
pub const OVERLAY_CLASS: &str = "overlay";
pub const RESOURCE_BUTTON_SELECTOR: &str = ".pdf-btn";

// Attributes
pub const TARGET_ATTR: &str = "data-target";
pub const RESOURCE_ATTR: &str = "data-pdf";
pub const PAN_MODE_ATTR: &str = "data-pan-mode";
pub const SENSITIVITY_ATTR: &str = "data-sensitivity";
pub const HOTSPOT_WRAP_ATTR: &str = "data-hotspot-wrap";
pub const START_ATTR: &str = "data-start";

// State classes toggled on panel and overlay
pub const ACTIVE_CLASS: &str = "active";
pub const NOTICE_CLASS: &str = "resource-notice";
pub const PLACEHOLDER_CLASS: &str = "panorama-placeholder";

// Cursor affordances
pub const CURSOR_GRAB: &str = "grab";
pub const CURSOR_GRABBING: &str = "grabbing";

// Pan sensitivity: pixels of offset per pixel of pointer travel
pub const TRANSFORM_SENSITIVITY: f64 = 3.0;
pub const SCROLL_SENSITIVITY: f64 = 2.0;
pub const SENSITIVITY_MIN: f64 = 0.1;
pub const SENSITIVITY_MAX: f64 = 10.0;

// Hotspot positions live in a 0..100 percentage ring
pub const HOTSPOT_RING: f64 = 100.0;

// Transform mode stretches the image so there is always something to pan
pub const TRANSFORM_MIN_WIDTH: &str = "200%";

pub const RESOURCE_TARGET: &str = "_blank";
pub const RESOURCE_UNAVAILABLE_TEXT: &str = "This document is not available.";
pub const IMAGE_UNAVAILABLE_TEXT: &str = "Panorama image could not be loaded.";
pub const PLACEHOLDER_STYLE: &str = "display:flex;align-items:center;justify-content:center;\
width:100%;height:100%;min-height:300px;background:#1f2430;color:#cfd6e4;\
font:15px system-ui;";
