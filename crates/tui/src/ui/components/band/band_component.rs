use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use tintband_types::RegionKind;
use tracing::trace;
use unicode_width::UnicodeWidthStr;

use super::region::{BandRegions, RegionLocator, RegionStyle};
use super::state::TextBufferState;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers as th;

/// Columns reserved for the trigger button, borders included.
pub const BUTTON_WIDTH: u16 = 5;
/// Rows occupied by a band: one line of text plus top and bottom borders.
pub const BAND_HEIGHT: u16 = 3;

/// Outcome of routing an input event through the band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandEvent {
    /// The band did not consume the event.
    Ignored,
    /// Buffer contents changed.
    Edited,
    /// Cursor moved without changing the buffer.
    CursorMoved,
    /// Enter was pressed in the text region.
    Committed,
    /// The popup opened (`true`) or closed (`false`).
    PopupToggled(bool),
}

/// Composite input: an editable text region with a trigger button on its right.
///
/// The band owns its rendered regions only between [`BandInput::attach`] and
/// [`BandInput::detach`]. Outside that window region lookups find nothing.
#[derive(Debug, Default)]
pub struct BandInput {
    buffer: TextBufferState,
    regions: Option<BandRegions>,
    area: Option<Rect>,
    popup_open: bool,
}

impl BandInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out both regions inside `area` and start tracking them.
    ///
    /// Attaching an already attached band behaves like [`BandInput::relayout`].
    pub fn attach(&mut self, area: Rect) {
        if self.regions.is_some() {
            self.relayout(area);
            return;
        }
        let (text, button) = split_regions(area);
        trace!(?text, ?button, "Attaching band");
        self.regions = Some(BandRegions::new(text, button));
        self.area = Some(area);
    }

    /// Move the regions to a new area, keeping their backgrounds.
    pub fn relayout(&mut self, area: Rect) {
        let Some(regions) = self.regions.as_mut() else {
            return;
        };
        if self.area == Some(area) {
            return;
        }
        let (text, button) = split_regions(area);
        regions.text.area = text;
        regions.button.area = button;
        self.area = Some(area);
    }

    /// Drop the rendered regions; subsequent lookups find nothing.
    pub fn detach(&mut self) {
        self.regions = None;
        self.area = None;
        self.popup_open = false;
    }

    pub fn is_attached(&self) -> bool {
        self.regions.is_some()
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn regions(&self) -> Option<&BandRegions> {
        self.regions.as_ref()
    }

    /// Combined change counter of both regions, zero when detached.
    pub fn revision(&self) -> u64 {
        self.regions.as_ref().map_or(0, BandRegions::revision)
    }

    pub fn buffer(&self) -> &TextBufferState {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBufferState {
        &mut self.buffer
    }

    /// The text region owns the cursor unless the popup has taken over
    /// navigation keys.
    pub fn text_has_focus(&self) -> bool {
        !self.popup_open
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup_open
    }

    pub fn set_popup_open(&mut self, open: bool) -> BandEvent {
        if self.popup_open == open {
            return BandEvent::Ignored;
        }
        self.popup_open = open;
        BandEvent::PopupToggled(open)
    }

    pub fn toggle_popup(&mut self) -> BandEvent {
        self.set_popup_open(!self.popup_open)
    }

    /// Area directly below the band for popup content of `rows` rows,
    /// clipped to `bounds`.
    pub fn popup_area(&self, rows: u16, bounds: Rect) -> Option<Rect> {
        let band = self.area?;
        let top = band.bottom();
        let available = bounds.bottom().saturating_sub(top);
        let height = rows.min(available);
        if height == 0 {
            return None;
        }
        Some(Rect::new(band.x, top, band.width, height))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> BandEvent {
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::F(4) => self.toggle_popup(),
            KeyCode::Down if alt => self.toggle_popup(),
            KeyCode::Up if alt => self.set_popup_open(false),
            KeyCode::Esc if self.popup_open => self.set_popup_open(false),
            KeyCode::Enter => BandEvent::Committed,
            KeyCode::Char(c) if !control && !alt => {
                self.buffer.insert_char(c);
                BandEvent::Edited
            }
            KeyCode::Backspace => edited(self.buffer.backspace()),
            KeyCode::Delete => edited(self.buffer.delete()),
            KeyCode::Left => {
                self.buffer.move_left();
                BandEvent::CursorMoved
            }
            KeyCode::Right => {
                self.buffer.move_right();
                BandEvent::CursorMoved
            }
            KeyCode::Home => {
                self.buffer.move_home();
                BandEvent::CursorMoved
            }
            KeyCode::End => {
                self.buffer.move_end();
                BandEvent::CursorMoved
            }
            _ => BandEvent::Ignored,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> BandEvent {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return BandEvent::Ignored;
        }
        let Some(regions) = self.regions.as_ref() else {
            return BandEvent::Ignored;
        };
        let position = Position::new(mouse.column, mouse.row);
        if regions.button.area.contains(position) {
            self.toggle_popup()
        } else if regions.text.area.contains(position) {
            self.set_popup_open(false)
        } else {
            BandEvent::Ignored
        }
    }

    /// Draw both regions. Does nothing while detached.
    pub fn render(&self, frame: &mut Frame, theme: &dyn Theme) {
        let Some(regions) = self.regions.as_ref() else {
            return;
        };
        let focused = self.text_has_focus();

        let text_style = th::apply_background(th::input_style(theme, focused), regions.text.background());
        let text_block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM | Borders::LEFT)
            .border_style(theme.border_style(focused))
            .style(text_style);
        let inner = text_block.inner(regions.text.area);
        frame.render_widget(
            Paragraph::new(self.buffer.input()).style(text_style).block(text_block),
            regions.text.area,
        );

        let button_style = th::apply_background(th::button_style(theme, self.popup_open), regions.button.background());
        let glyph = if self.popup_open { "▲" } else { "▼" };
        let button = Paragraph::new(glyph).alignment(Alignment::Center).style(button_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(self.popup_open))
                .style(button_style),
        );
        frame.render_widget(button, regions.button.area);

        if focused && inner.width > 0 && inner.height > 0 {
            let offset = u16::try_from(self.buffer.before_cursor().width()).unwrap_or(u16::MAX);
            let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
            frame.set_cursor_position((x, inner.y));
        }
    }
}

impl RegionLocator for BandInput {
    fn locate_region(&mut self, kind: RegionKind) -> Option<&mut dyn RegionStyle> {
        let regions = self.regions.as_mut()?;
        let surface: &mut dyn RegionStyle = regions.get_mut(kind);
        Some(surface)
    }
}

fn edited(changed: bool) -> BandEvent {
    if changed { BandEvent::Edited } else { BandEvent::Ignored }
}

fn split_regions(area: Rect) -> (Rect, Rect) {
    let button_width = BUTTON_WIDTH.min(area.width);
    let text = Rect {
        width: area.width - button_width,
        ..area
    };
    let button = Rect {
        x: area.x + text.width,
        width: button_width,
        ..area
    };
    (text, button)
}
