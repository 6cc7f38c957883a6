//! Component system for the tintband TUI.
//!
//! Components are self-contained UI elements that own their local state,
//! handle the input routed to them, and render themselves into a provided
//! `Rect`, reporting side effects back to the application as `Effect`s.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use tintband_types::Effect;

use crate::ui::theme::Theme;

/// A UI component with its own state and behavior.
///
/// # Component Lifecycle
///
/// 1. **Mounting**: `mount()` gives the component its screen area before each
///    frame; the first call activates it
/// 2. **Event Handling**: input arrives through `handle_key_events()` and
///    `handle_mouse_events()`
/// 3. **Rendering**: `render()` draws the component into the mounted area
pub trait Component {
    /// Assign the component its screen area.
    ///
    /// Called before every frame. The first call is the activation point;
    /// later calls only move the component when the area changed.
    fn mount(&mut self, _area: Rect) {}

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events inside the component.
    fn handle_mouse_events(&mut self, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and cursor placement.
    fn render(&mut self, frame: &mut Frame, rect: Rect, theme: &dyn Theme);

    /// Key hints shown in the footer while this component has focus.
    fn get_hint_spans<'a>(&self, _theme: &dyn Theme) -> Vec<Span<'a>> {
        Vec::new()
    }
}
