use tintband_types::ColorValue;

/// A named entry offered in the picker popup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub label: &'static str,
    /// `None` clears the selection.
    pub value: Option<&'static str>,
}

impl Swatch {
    const fn new(label: &'static str, value: Option<&'static str>) -> Self {
        Self { label, value }
    }

    pub fn color_value(&self) -> Option<ColorValue> {
        self.value.map(ColorValue::from)
    }
}

/// Entries shown in the popup, in display order.
pub const DEFAULT_SWATCHES: &[Swatch] = &[
    Swatch::new("None", None),
    Swatch::new("Red", Some("#ff5555")),
    Swatch::new("Orange", Some("#ffb86c")),
    Swatch::new("Yellow", Some("#f1fa8c")),
    Swatch::new("Green", Some("#50fa7b")),
    Swatch::new("Cyan", Some("#8be9fd")),
    Swatch::new("Blue", Some("#6272a4")),
    Swatch::new("Purple", Some("#bd93f9")),
    Swatch::new("Pink", Some("#ff79c6")),
    Swatch::new("White", Some("white")),
    Swatch::new("Black", Some("black")),
];

/// UI state for the swatch list inside the popup.
#[derive(Debug, Clone)]
pub struct SwatchListState {
    options: &'static [Swatch],
    pub selected_index: usize,
}

impl Default for SwatchListState {
    fn default() -> Self {
        Self::new(DEFAULT_SWATCHES)
    }
}

impl SwatchListState {
    pub fn new(options: &'static [Swatch]) -> Self {
        Self {
            options,
            selected_index: 0,
        }
    }

    pub fn options(&self) -> &'static [Swatch] {
        self.options
    }

    pub fn selected_option(&self) -> Option<&'static Swatch> {
        self.options.get(self.selected_index)
    }

    /// Move selection to the next option, wrapping at the end.
    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.options.len();
    }

    /// Move selection to the previous option, wrapping to the end.
    pub fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.options.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Position the selection on `value` so reopening the popup reflects the current color.
    pub fn set_active(&mut self, value: Option<&ColorValue>) {
        let wanted = value.map(ColorValue::as_str);
        if let Some(idx) = self.options.iter().position(|swatch| match (swatch.value, wanted) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => true,
            _ => false,
        }) {
            self.selected_index = idx;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = SwatchListState::default();
        state.select_previous();
        assert_eq!(state.selected_index, DEFAULT_SWATCHES.len() - 1);
        state.select_next();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_option().and_then(Swatch::color_value), None);
    }

    #[test]
    fn set_active_finds_matching_swatch() {
        let mut state = SwatchListState::default();
        state.set_active(Some(&ColorValue::from("#FF79C6")));
        assert_eq!(state.selected_option().map(|s| s.label), Some("Pink"));

        // Unknown values keep the current selection.
        state.set_active(Some(&ColorValue::from("chartreuse")));
        assert_eq!(state.selected_option().map(|s| s.label), Some("Pink"));

        state.set_active(None);
        assert_eq!(state.selected_index, 0);
    }
}
