//! Band input: an editable text region with an adjoining trigger button.

pub mod band_component;
pub mod region;
pub mod state;

pub use band_component::{BAND_HEIGHT, BUTTON_WIDTH, BandEvent, BandInput};
pub use region::{BandRegions, RegionLocator, RegionStyle, RegionSurface};
pub use state::TextBufferState;
