use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tintband_types::Effect;

use super::components::{ColorPickerComponent, Component};
use super::theme::theme_helpers as th;
use crate::app::App;

/// Widest the picker is allowed to grow.
const PICKER_MAX_WIDTH: u16 = 40;

/// Root view: a titled panel hosting one color picker, hints, and a status line.
#[derive(Debug, Default)]
pub struct MainView {
    pub picker: ColorPickerComponent,
}

impl MainView {
    pub fn new(picker: ColorPickerComponent) -> Self {
        Self { picker }
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Esc && !self.picker.band().is_popup_open() {
            return vec![Effect::Quit];
        }
        self.picker.handle_key_events(key)
    }

    pub fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Vec<Effect> {
        self.picker.handle_mouse_events(mouse)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.theme;
        let block = th::block(theme, Some(" tintband "), true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body, hints, status] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        let picker_area = Rect {
            width: body.width.min(PICKER_MAX_WIDTH),
            ..body
        };
        self.picker.mount(picker_area);
        self.picker.render(frame, picker_area, theme);

        frame.render_widget(Paragraph::new(Line::from(self.picker.get_hint_spans(theme))), hints);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(app.status.as_str(), theme.text_secondary_style()))),
            status,
        );
    }
}
