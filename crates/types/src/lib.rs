//! Shared value types for the tintband workspace.
//!
//! These types travel between the color picker core, the band widget that
//! hosts it, configuration loading, and the runtime. They carry no rendering
//! logic of their own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque color representation handed to the rendering layer untouched.
///
/// Accepted spellings depend entirely on the renderer (`"#ff0000"`, `"red"`,
/// an indexed color, ...). No validation happens at this level.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifies one of the two visual parts of a band widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// The trigger button adjoining the editable area.
    Button,
    /// The editable text area.
    Text,
}

impl RegionKind {
    /// The region on the other side of the band.
    pub fn other(self) -> Self {
        match self {
            RegionKind::Button => RegionKind::Text,
            RegionKind::Text => RegionKind::Button,
        }
    }
}

/// Background override applied to a region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Background {
    /// No value was ever assigned (or an explicit null was).
    #[default]
    Unset,
    /// The sentinel "inherit": drop any override and use the default look.
    Inherit,
    /// Paint the region with the given color.
    Color(ColorValue),
}

impl Background {
    /// The color carried by this override, if any.
    pub fn color(&self) -> Option<&ColorValue> {
        match self {
            Background::Color(value) => Some(value),
            Background::Unset | Background::Inherit => None,
        }
    }
}

impl From<Option<ColorValue>> for Background {
    fn from(value: Option<ColorValue>) -> Self {
        value.map_or(Background::Unset, Background::Color)
    }
}

/// Side effects reported by components back to the hosting application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// The selected color changed (None means "no color").
    ColorChanged(Option<ColorValue>),
    /// The display mode flag changed.
    DisplayModeChanged(bool),
    /// The band popup opened or closed.
    PopupToggled(bool),
    /// Leave the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_maps_to_unset_background() {
        assert_eq!(Background::from(None), Background::Unset);
        assert_eq!(
            Background::from(Some(ColorValue::from("#ff0000"))),
            Background::Color(ColorValue::from("#ff0000"))
        );
    }

    #[test]
    fn other_region_flips() {
        assert_eq!(RegionKind::Button.other(), RegionKind::Text);
        assert_eq!(RegionKind::Text.other(), RegionKind::Button);
    }

    #[test]
    fn color_value_serializes_as_plain_string() {
        let json = serde_json::to_string(&ColorValue::from("red")).expect("serialize");
        assert_eq!(json, "\"red\"");
        let back: Option<ColorValue> = serde_json::from_str("null").expect("deserialize");
        assert!(back.is_none());
    }
}
