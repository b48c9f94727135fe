// Browser-independent tour logic. Nothing in here touches web-sys so the
// host test suite can include these files directly.
pub mod constants;
pub mod error;
pub mod hotspot;
pub mod image;
pub mod pan;
pub mod panel;
pub mod params;
pub mod schedule;

pub use error::TourError;
pub use hotspot::HotspotLayout;
pub use image::{ImageStatus, LoadOutcome};
pub use pan::{DragEnd, Panner, PointerInput, Surface};
pub use panel::{resolve_resource, ContentSource, InfoPanel};
pub use params::{PanMode, StartPosition, TourParams};
pub use schedule::FrameSlot;
