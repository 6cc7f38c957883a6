//! Property adapter for the color picker.
//!
//! Hosts that configure widgets by property name (layout files, config
//! documents, scripting bridges) assign `selectedColor` and `showAsText`
//! through [`apply_property`]; each assignment lands on the matching setter.

use thiserror::Error;
use tintband_types::ColorValue;
use tintband_util::PickerConfig;
use tracing::debug;

use super::ColorPickerComponent;

/// Canonical name of the color property.
pub const SELECTED_COLOR: &str = "selectedColor";
/// Canonical name of the display-mode property.
pub const SHOW_AS_TEXT: &str = "showAsText";

/// Loosely typed value assigned from outside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyValue {
    Null,
    Text(String),
    Bool(bool),
}

impl PropertyValue {
    fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Text(_) => "text",
            PropertyValue::Bool(_) => "bool",
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<Option<ColorValue>> for PropertyValue {
    fn from(value: Option<ColorValue>) -> Self {
        value.map_or(PropertyValue::Null, |color| PropertyValue::Text(color.into_inner()))
    }
}

/// Error surfaced when a property assignment cannot be routed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("unknown color picker property '{0}'")]
    UnknownProperty(String),
    #[error("property '{property}' expects {expected}, got {actual}")]
    TypeMismatch {
        property: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Assign a property by name.
///
/// Names match case-insensitively and accept snake_case spellings.
pub fn apply_property(picker: &mut ColorPickerComponent, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
    let normalized: String = name.chars().filter(|c| *c != '_').collect::<String>().to_ascii_lowercase();
    debug!(property = name, ?value, "Assigning color picker property");
    match normalized.as_str() {
        "selectedcolor" => match value {
            PropertyValue::Null => picker.set_selected_color(None),
            PropertyValue::Text(text) => picker.set_selected_color(Some(ColorValue::new(text))),
            other => {
                return Err(PropertyError::TypeMismatch {
                    property: SELECTED_COLOR,
                    expected: "text or null",
                    actual: other.kind(),
                });
            }
        },
        "showastext" => match value {
            PropertyValue::Null => picker.set_show_as_text(false),
            PropertyValue::Bool(flag) => picker.set_show_as_text(flag),
            other => {
                return Err(PropertyError::TypeMismatch {
                    property: SHOW_AS_TEXT,
                    expected: "bool or null",
                    actual: other.kind(),
                });
            }
        },
        _ => return Err(PropertyError::UnknownProperty(name.to_string())),
    }
    Ok(())
}

/// Apply every configured property, color first.
pub fn apply_config(picker: &mut ColorPickerComponent, config: &PickerConfig) {
    picker.set_selected_color(config.selected_color.clone());
    picker.set_show_as_text(config.show_as_text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::band::RegionStyle;
    use ratatui::layout::Rect;
    use tintband_types::{Background, RegionKind};

    #[test]
    fn routes_names_to_setters() {
        let mut picker = ColorPickerComponent::new();
        apply_property(&mut picker, "selectedColor", "#ff0000".into()).unwrap();
        apply_property(&mut picker, "show_as_text", true.into()).unwrap();
        assert_eq!(picker.selected_color(), Some(&ColorValue::from("#ff0000")));
        assert!(picker.show_as_text());

        apply_property(&mut picker, "SELECTEDCOLOR", PropertyValue::Null).unwrap();
        apply_property(&mut picker, "showAsText", PropertyValue::Null).unwrap();
        assert_eq!(picker.selected_color(), None);
        assert!(!picker.show_as_text());
    }

    #[test]
    fn rejects_unknown_names_and_mismatched_types() {
        let mut picker = ColorPickerComponent::new();
        assert_eq!(
            apply_property(&mut picker, "opacity", "0.5".into()),
            Err(PropertyError::UnknownProperty("opacity".to_string()))
        );
        let err = apply_property(&mut picker, "showAsText", "yes".into()).unwrap_err();
        assert_eq!(err.to_string(), "property 'showAsText' expects bool or null, got text");
        assert!(matches!(
            apply_property(&mut picker, "selectedColor", false.into()),
            Err(PropertyError::TypeMismatch { .. })
        ));
        assert_eq!(picker.selected_color(), None);
    }

    #[test]
    fn attached_picker_repaints_on_assignment() {
        let mut picker = ColorPickerComponent::new();
        picker.attach(Rect::new(0, 0, 30, 10));
        apply_property(&mut picker, "selectedColor", "red".into()).unwrap();
        let regions = picker.band().regions().expect("attached");
        assert_eq!(regions.get(RegionKind::Button).background(), &Background::Color(ColorValue::from("red")));
        assert_eq!(regions.get(RegionKind::Text).background(), &Background::Inherit);
    }

    #[test]
    fn config_is_applied_before_activation() {
        let config = PickerConfig {
            selected_color: Some(ColorValue::from("#00ff00")),
            show_as_text: true,
        };
        let mut picker = ColorPickerComponent::new();
        apply_config(&mut picker, &config);
        picker.attach(Rect::new(0, 0, 30, 10));

        let regions = picker.band().regions().expect("attached");
        assert_eq!(regions.text.background(), &Background::Color(ColorValue::from("#00ff00")));
        assert_eq!(regions.button.background(), &Background::Inherit);
    }
}
