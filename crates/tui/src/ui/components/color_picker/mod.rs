//! Color picker: a band input whose button or text region shows the selected color.

pub mod color_picker_component;
pub mod properties;
pub mod state;
pub mod style_sync;

pub use color_picker_component::ColorPickerComponent;
pub use properties::{PropertyError, PropertyValue, apply_config, apply_property};
pub use state::{DEFAULT_SWATCHES, Swatch, SwatchListState};
pub use style_sync::{ColorPickerState, StyleSynchronizer};
