use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, List, ListItem, ListState};
use tintband_types::{ColorValue, Effect};
use tracing::debug;

use super::state::{Swatch, SwatchListState};
use super::style_sync::{ColorPickerState, StyleSynchronizer};
use crate::ui::components::Component;
use crate::ui::components::band::{BAND_HEIGHT, BandEvent, BandInput};
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers as th;

/// Color picker built on a [`BandInput`].
///
/// Exactly one band region shows the selected color: the text region when
/// `show_as_text` is set, otherwise the trigger button. The popup lists
/// swatches to pick from; Enter in the text region commits whatever was typed.
#[derive(Debug)]
pub struct ColorPickerComponent {
    band: BandInput,
    styles: StyleSynchronizer,
    swatches: SwatchListState,
}

impl Default for ColorPickerComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorPickerComponent {
    pub fn new() -> Self {
        Self {
            band: BandInput::new(),
            styles: StyleSynchronizer::new(),
            swatches: SwatchListState::default(),
        }
    }

    pub fn state(&self) -> &ColorPickerState {
        self.styles.state()
    }

    pub fn selected_color(&self) -> Option<&ColorValue> {
        self.styles.state().selected_color()
    }

    pub fn show_as_text(&self) -> bool {
        self.styles.state().show_as_text()
    }

    pub fn band(&self) -> &BandInput {
        &self.band
    }

    /// Store a new color, mirror it into the text buffer, and repaint.
    pub fn set_selected_color(&mut self, value: Option<ColorValue>) {
        match value.as_ref() {
            Some(color) => {
                if th::resolve_color(color.as_str()).is_none() {
                    debug!(value = color.as_str(), "Renderer rejects color value; regions keep the default background");
                }
                self.band.buffer_mut().set_input(color.as_str())
            }
            None => self.band.buffer_mut().clear(),
        }
        self.swatches.set_active(value.as_ref());
        self.styles.set_selected_color(value, &mut self.band);
    }

    pub fn set_show_as_text(&mut self, flag: bool) {
        self.styles.set_show_as_text(flag, &mut self.band);
    }

    /// Activation: the band lays out its regions first, then the current
    /// state is painted onto them once.
    pub fn attach(&mut self, area: Rect) {
        self.band.attach(band_area(area));
        self.styles.synchronize(&mut self.band);
    }

    pub fn detach(&mut self) {
        self.band.detach();
    }

    pub fn is_attached(&self) -> bool {
        self.band.is_attached()
    }

    /// Changes whenever a region background changes.
    pub fn revision(&self) -> u64 {
        self.band.revision()
    }

    fn toggle_display_mode(&mut self) -> Vec<Effect> {
        let flag = !self.show_as_text();
        self.set_show_as_text(flag);
        vec![Effect::DisplayModeChanged(flag)]
    }

    fn commit_buffer(&mut self) -> Vec<Effect> {
        let typed = self.band.buffer().input().trim();
        let value = if typed.is_empty() { None } else { Some(ColorValue::new(typed)) };
        self.set_selected_color(value.clone());
        vec![Effect::ColorChanged(value)]
    }

    fn choose_swatch(&mut self) -> Vec<Effect> {
        let Some(swatch) = self.swatches.selected_option() else {
            return Vec::new();
        };
        let value = swatch.color_value();
        self.set_selected_color(value.clone());
        let mut effects = vec![Effect::ColorChanged(value)];
        if let BandEvent::PopupToggled(open) = self.band.set_popup_open(false) {
            effects.push(Effect::PopupToggled(open));
        }
        effects
    }

    fn effects_for(&mut self, event: BandEvent) -> Vec<Effect> {
        match event {
            BandEvent::Committed => self.commit_buffer(),
            BandEvent::PopupToggled(open) => {
                if open {
                    self.swatches.set_active(self.styles.state().selected_color());
                }
                vec![Effect::PopupToggled(open)]
            }
            BandEvent::Edited | BandEvent::CursorMoved | BandEvent::Ignored => Vec::new(),
        }
    }

    fn swatch_item<'a>(swatch: &Swatch, is_selected: bool, theme: &dyn Theme) -> ListItem<'a> {
        let prefix = if is_selected { "> " } else { "  " };
        let chip_style = swatch
            .value
            .and_then(th::resolve_color)
            .map_or_else(|| theme.text_muted_style(), |color| Style::default().bg(color));
        let chip = if swatch.value.is_some() { "   " } else { " ∅ " };
        let mut label_style = theme.text_primary_style();
        if is_selected {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        ListItem::new(Line::from(vec![
            Span::styled(prefix, theme.text_secondary_style()),
            Span::styled(chip, chip_style),
            Span::raw(" "),
            Span::styled(swatch.label, label_style),
        ]))
    }

    fn render_popup(&self, frame: &mut Frame, bounds: Rect, theme: &dyn Theme) {
        let rows = u16::try_from(self.swatches.options().len()).unwrap_or(u16::MAX).saturating_add(2);
        let Some(area) = self.band.popup_area(rows, bounds) else {
            return;
        };
        frame.render_widget(Clear, area);

        let items: Vec<ListItem> = self
            .swatches
            .options()
            .iter()
            .enumerate()
            .map(|(idx, swatch)| Self::swatch_item(swatch, idx == self.swatches.selected_index, theme))
            .collect();
        let mut list_state = ListState::default();
        list_state.select(Some(self.swatches.selected_index));
        let list = List::new(items)
            .highlight_style(theme.selection_style())
            .block(th::block(theme, Some("Colors"), true).style(theme.popup_background_style()));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

impl Component for ColorPickerComponent {
    fn mount(&mut self, area: Rect) {
        if self.band.is_attached() {
            self.band.relayout(band_area(area));
        } else {
            self.attach(area);
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Char('t') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.toggle_display_mode();
        }
        if self.band.is_popup_open() && !key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Up => {
                    self.swatches.select_previous();
                    return Vec::new();
                }
                KeyCode::Down => {
                    self.swatches.select_next();
                    return Vec::new();
                }
                KeyCode::Enter => return self.choose_swatch(),
                _ => {}
            }
        }
        let event = self.band.handle_key(key);
        self.effects_for(event)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Vec<Effect> {
        let event = self.band.handle_mouse(mouse);
        self.effects_for(event)
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, theme: &dyn Theme) {
        self.band.render(frame, theme);
        if self.band.is_popup_open() {
            self.render_popup(frame, rect, theme);
        }
    }

    fn get_hint_spans<'a>(&self, theme: &dyn Theme) -> Vec<Span<'a>> {
        if self.band.is_popup_open() {
            th::build_hint_spans(theme, &[(" ↑/↓", " Navigate  "), (" Enter", " Pick  "), (" Esc", " Close ")])
        } else {
            th::build_hint_spans(
                theme,
                &[
                    (" Enter", " Apply  "),
                    (" F4", " Swatches  "),
                    (" Ctrl+T", " Swap region  "),
                    (" Esc", " Quit "),
                ],
            )
        }
    }
}

/// The band occupies the top rows of the picker's area.
fn band_area(area: Rect) -> Rect {
    Rect {
        height: BAND_HEIGHT.min(area.height),
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::band::RegionStyle;
    use tintband_types::{Background, RegionKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn background(picker: &ColorPickerComponent, kind: RegionKind) -> Background {
        picker.band().regions().expect("attached").get(kind).background().clone()
    }

    #[test]
    fn starts_unset_and_unattached() {
        let picker = ColorPickerComponent::new();
        assert_eq!(picker.selected_color(), None);
        assert!(!picker.show_as_text());
        assert!(!picker.is_attached());
        assert_eq!(picker.revision(), 0);
    }

    #[test]
    fn setters_before_attach_are_applied_on_attach() {
        let mut picker = ColorPickerComponent::new();
        picker.set_selected_color(Some(ColorValue::from("#00ff00")));
        picker.set_show_as_text(true);
        assert!(picker.band().regions().is_none());

        picker.attach(Rect::new(0, 0, 30, 12));

        assert_eq!(background(&picker, RegionKind::Text), Background::Color(ColorValue::from("#00ff00")));
        assert_eq!(background(&picker, RegionKind::Button), Background::Inherit);
        let regions = picker.band().regions().expect("attached");
        assert_eq!(regions.text.revision(), 1);
        assert_eq!(regions.button.revision(), 1);
    }

    #[test]
    fn setting_color_mirrors_buffer() {
        let mut picker = ColorPickerComponent::new();
        picker.set_selected_color(Some(ColorValue::from("red")));
        assert_eq!(picker.band().buffer().input(), "red");
        picker.set_selected_color(None);
        assert!(picker.band().buffer().is_empty());
    }

    #[test]
    fn unrenderable_color_is_stored_untouched() {
        let mut picker = ColorPickerComponent::new();
        picker.attach(Rect::new(0, 0, 30, 10));
        picker.set_selected_color(Some(ColorValue::from("not-a-color")));
        assert_eq!(picker.selected_color(), Some(&ColorValue::from("not-a-color")));
        assert_eq!(
            background(&picker, RegionKind::Button),
            Background::Color(ColorValue::from("not-a-color"))
        );
        assert!(th::resolve_color("not-a-color").is_none());
    }

    #[test]
    fn typing_and_enter_commits_color() {
        let mut picker = ColorPickerComponent::new();
        picker.mount(Rect::new(0, 0, 30, 12));
        for c in "#abcdef".chars() {
            assert!(picker.handle_key_events(key(KeyCode::Char(c))).is_empty());
        }
        let effects = picker.handle_key_events(key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::ColorChanged(Some(ColorValue::from("#abcdef")))]);
        assert_eq!(background(&picker, RegionKind::Button), Background::Color(ColorValue::from("#abcdef")));
        assert_eq!(background(&picker, RegionKind::Text), Background::Inherit);
    }

    #[test]
    fn committing_empty_buffer_clears_color() {
        let mut picker = ColorPickerComponent::new();
        picker.set_selected_color(Some(ColorValue::from("red")));
        picker.mount(Rect::new(0, 0, 30, 12));
        picker.band.buffer_mut().clear();
        let effects = picker.handle_key_events(key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::ColorChanged(None)]);
        assert_eq!(background(&picker, RegionKind::Button), Background::Unset);
    }

    #[test]
    fn ctrl_t_swaps_tinted_region() {
        let mut picker = ColorPickerComponent::new();
        picker.set_selected_color(Some(ColorValue::from("blue")));
        picker.mount(Rect::new(0, 0, 30, 12));

        assert_eq!(picker.handle_key_events(ctrl('t')), vec![Effect::DisplayModeChanged(true)]);
        assert_eq!(background(&picker, RegionKind::Text), Background::Color(ColorValue::from("blue")));
        assert_eq!(background(&picker, RegionKind::Button), Background::Inherit);

        assert_eq!(picker.handle_key_events(ctrl('t')), vec![Effect::DisplayModeChanged(false)]);
        assert_eq!(background(&picker, RegionKind::Button), Background::Color(ColorValue::from("blue")));
        assert_eq!(background(&picker, RegionKind::Text), Background::Inherit);
    }

    #[test]
    fn popup_swatch_selection_sets_color_and_closes() {
        let mut picker = ColorPickerComponent::new();
        picker.mount(Rect::new(0, 0, 30, 16));

        assert_eq!(picker.handle_key_events(key(KeyCode::F(4))), vec![Effect::PopupToggled(true)]);
        picker.handle_key_events(key(KeyCode::Down));
        let effects = picker.handle_key_events(key(KeyCode::Enter));

        let expected = ColorValue::from("#ff5555");
        assert_eq!(
            effects,
            vec![Effect::ColorChanged(Some(expected.clone())), Effect::PopupToggled(false)]
        );
        assert!(!picker.band().is_popup_open());
        assert_eq!(picker.band().buffer().input(), "#ff5555");
        assert_eq!(background(&picker, RegionKind::Button), Background::Color(expected));
    }

    #[test]
    fn mount_moves_regions_without_resync() {
        let mut picker = ColorPickerComponent::new();
        picker.set_selected_color(Some(ColorValue::from("red")));
        picker.mount(Rect::new(0, 0, 30, 12));
        let revision = picker.revision();

        picker.mount(Rect::new(0, 2, 50, 12));
        assert_eq!(picker.revision(), revision);
        let regions = picker.band().regions().expect("attached");
        assert_eq!(regions.text.area, Rect::new(0, 2, 45, BAND_HEIGHT));
    }

    #[test]
    fn detached_picker_still_tracks_state() {
        let mut picker = ColorPickerComponent::new();
        picker.mount(Rect::new(0, 0, 30, 12));
        picker.detach();
        picker.set_selected_color(Some(ColorValue::from("red")));
        picker.set_show_as_text(true);
        assert!(picker.band().regions().is_none());
        assert_eq!(picker.state().primary_region(), RegionKind::Text);
    }
}
