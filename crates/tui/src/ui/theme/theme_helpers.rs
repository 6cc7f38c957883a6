use std::str::FromStr;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};
use tintband_types::Background;

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for the band's editable area before any background override.
pub fn input_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    let mut style = Style::default().bg(surface).fg(text);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Style for the band's trigger button before any background override.
pub fn button_style<T: Theme + ?Sized>(theme: &T, popup_open: bool) -> Style {
    let ThemeRoles {
        surface_muted,
        accent_primary,
        accent_secondary,
        ..
    } = *theme.roles();
    let fg = if popup_open { accent_secondary } else { accent_primary };
    Style::default().bg(surface_muted).fg(fg).add_modifier(Modifier::BOLD)
}

/// Hand a color value to ratatui's parser.
///
/// Returns `None` when the renderer does not understand the value. Called on
/// every frame, so it stays silent; callers log rejections when a value is
/// assigned.
pub fn resolve_color(value: &str) -> Option<Color> {
    Color::from_str(value.trim()).ok()
}

/// Layer a region background override on top of its default style.
///
/// `Unset` and `Inherit` both leave the default untouched.
pub fn apply_background(base: Style, background: &Background) -> Style {
    match background.color().and_then(|value| resolve_color(value.as_str())) {
        Some(color) => base.bg(color),
        None => base,
    }
}

/// Build key hint spans, e.g. `[("Enter", " Apply  ")]`.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;
    use tintband_types::ColorValue;

    #[test]
    fn hex_and_named_colors_resolve() {
        assert_eq!(resolve_color("#ff0000"), Some(Color::Rgb(0xff, 0, 0)));
        assert_eq!(resolve_color("red"), Some(Color::Red));
        assert_eq!(resolve_color("definitely not a color"), None);
    }

    #[test]
    fn inherit_and_unset_keep_default_background() {
        let theme = DraculaTheme::new();
        let base = input_style(&theme, false);
        assert_eq!(apply_background(base, &Background::Inherit), base);
        assert_eq!(apply_background(base, &Background::Unset), base);
    }

    #[test]
    fn color_override_replaces_background_only() {
        let theme = DraculaTheme::new();
        let base = input_style(&theme, false);
        let styled = apply_background(base, &Background::Color(ColorValue::from("#00ff00")));
        assert_eq!(styled.bg, Some(Color::Rgb(0, 0xff, 0)));
        assert_eq!(styled.fg, base.fg);
    }

    #[test]
    fn unparseable_override_falls_back_to_default() {
        let theme = DraculaTheme::new();
        let base = button_style(&theme, false);
        assert_eq!(apply_background(base, &Background::Color(ColorValue::from("#zzz"))), base);
    }
}
