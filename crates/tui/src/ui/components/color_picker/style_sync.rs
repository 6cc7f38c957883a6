//! Keeps a band's two regions in step with the picker's color and display mode.
//!
//! The region selected by `show_as_text` carries the selected color; the
//! other region is reset to the "inherit" sentinel. Every change repaints
//! both regions in full.

use tintband_types::{Background, ColorValue, RegionKind};
use tracing::{debug, trace};

use crate::ui::components::band::RegionLocator;

/// Selected color plus the flag choosing which region displays it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorPickerState {
    selected_color: Option<ColorValue>,
    show_as_text: bool,
}

impl ColorPickerState {
    pub fn selected_color(&self) -> Option<&ColorValue> {
        self.selected_color.as_ref()
    }

    pub fn show_as_text(&self) -> bool {
        self.show_as_text
    }

    /// Region that displays the selected color.
    pub fn primary_region(&self) -> RegionKind {
        if self.show_as_text { RegionKind::Text } else { RegionKind::Button }
    }
}

/// Owns [`ColorPickerState`] and paints it onto a [`RegionLocator`].
#[derive(Debug, Default)]
pub struct StyleSynchronizer {
    state: ColorPickerState,
}

impl StyleSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ColorPickerState {
        &self.state
    }

    pub fn set_selected_color<H: RegionLocator + ?Sized>(&mut self, value: Option<ColorValue>, host: &mut H) {
        self.state.selected_color = value;
        self.synchronize(host);
    }

    pub fn set_show_as_text<H: RegionLocator + ?Sized>(&mut self, flag: bool, host: &mut H) {
        self.state.show_as_text = flag;
        self.synchronize(host);
    }

    /// Repaint both regions from the current state.
    ///
    /// Regions the host cannot locate are skipped; attaching the host later
    /// and synchronizing again brings them up to date.
    pub fn synchronize<H: RegionLocator + ?Sized>(&self, host: &mut H) {
        let primary = self.state.primary_region();
        debug!(
            ?primary,
            color = ?self.state.selected_color,
            "Synchronizing band region backgrounds"
        );
        paint(host, primary, Background::from(self.state.selected_color.clone()));
        paint(host, primary.other(), Background::Inherit);
    }
}

fn paint<H: RegionLocator + ?Sized>(host: &mut H, kind: RegionKind, background: Background) {
    match host.locate_region(kind) {
        Some(region) => region.set_background(background),
        None => trace!(?kind, "Region not rendered; skipping"),
    }
}
