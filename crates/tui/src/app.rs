//! Application state for the tintband TUI.
//!
//! The `App` owns cross-cutting state (theme, status line, exit flag) and
//! applies the `Effect`s reported by components. Component-local state lives
//! in the components themselves.

use tintband_types::Effect;
use tracing::info;

use crate::ui::theme::{DraculaTheme, Theme};

#[derive(Debug)]
pub struct App {
    /// Active theme used by every component.
    pub theme: Box<dyn Theme>,
    /// One-line summary of the most recent change.
    pub status: String,
    /// Set once a `Quit` effect was processed.
    pub should_quit: bool,
    /// Whether the next loop iteration has to redraw.
    pub dirty: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            theme: Box::new(DraculaTheme::new()),
            status: String::from("Type a color and press Enter, or press F4 for swatches."),
            should_quit: false,
            dirty: true,
        }
    }

    /// Apply effects reported by components.
    pub fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ColorChanged(value) => {
                info!(color = ?value, "Selected color changed");
                self.status = match value {
                    Some(color) => format!("Selected color: {color}"),
                    None => String::from("Selected color cleared"),
                };
            }
            Effect::DisplayModeChanged(show_as_text) => {
                info!(show_as_text, "Display mode changed");
                let region = if show_as_text { "text area" } else { "button" };
                self.status = format!("Color shown in the {region}");
            }
            Effect::PopupToggled(_) => {}
            Effect::Quit => self.should_quit = true,
        }
        self.dirty = true;
    }
}
