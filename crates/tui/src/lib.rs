//! # Tintband TUI
//!
//! A terminal color picker built on a composite "band" input: an editable
//! text region with a trigger button beside it. The picker tints exactly one
//! of the two regions with the selected color and resets the other.
//!
//! ## Architecture
//!
//! - `ui::components::band` is the base widget: editing, popup flag, region
//!   layout, rendering, and the region lookup capability.
//! - `ui::components::color_picker` composes a band with a
//!   [`StyleSynchronizer`] that repaints both regions whenever the color or
//!   display mode changes, and once when the picker is first attached.
//! - `ui::runtime` owns the terminal and the event loop.

mod app;
mod ui;

use anyhow::Result;
use tintband_util::PickerConfig;
use tracing::debug;

pub use ui::components::band::{
    BAND_HEIGHT, BUTTON_WIDTH, BandEvent, BandInput, BandRegions, RegionLocator, RegionStyle, RegionSurface,
    TextBufferState,
};
pub use ui::components::color_picker::{
    ColorPickerComponent, ColorPickerState, PropertyError, PropertyValue, StyleSynchronizer, apply_config,
    apply_property,
};
pub use ui::components::Component;
pub use ui::theme::{DraculaTheme, Theme};

/// Runs the TUI with a single picker seeded from `config`.
///
/// Configured properties are assigned before the picker is attached, so the
/// first frame already shows them.
///
/// # Errors
///
/// Terminal setup failures (raw mode, alternate screen) and I/O errors while
/// drawing.
pub async fn run(config: &PickerConfig) -> Result<()> {
    let mut picker = ColorPickerComponent::new();
    apply_config(&mut picker, config);
    debug!(?config, "Starting picker");
    ui::runtime::run_app(ui::main_component::MainView::new(picker)).await
}
