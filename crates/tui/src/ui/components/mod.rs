//! UI components: band input and the color picker built on it.

pub mod band;
pub mod color_picker;
pub mod component;

pub use color_picker::ColorPickerComponent;
pub use component::*;
