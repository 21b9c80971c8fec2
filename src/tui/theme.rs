use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{ThemeMode, UiConfig};

/// Parsed color palette for one theme mode
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub header: Color,
    pub input_bg: Color,
    pub input_text: Color,
    pub placeholder: Color,
    pub item_bg: Color,
    pub item_text: Color,
    /// Text of completed tasks (also rendered crossed out)
    pub completed: Color,
    /// Add button and modal buttons
    pub accent: Color,
    pub check: Color,
    pub edit_icon: Color,
    pub delete_icon: Color,
    pub mode_icon: Color,
    pub modal_bg: Color,
    pub modal_text: Color,
    pub modal_border: Color,
    pub selection_bg: Color,
    pub dim: Color,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF5, 0xF5, 0xF5),
            header: Color::Rgb(0x33, 0x33, 0x33),
            input_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
            input_text: Color::Rgb(0x33, 0x33, 0x33),
            placeholder: Color::Rgb(0xAA, 0xAA, 0xAA),
            item_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
            item_text: Color::Rgb(0x33, 0x33, 0x33),
            completed: Color::Rgb(0xAA, 0xAA, 0xAA),
            accent: Color::Rgb(0x4A, 0x90, 0xE2),
            check: Color::Rgb(0x4C, 0xAF, 0x50),
            edit_icon: Color::Rgb(0x33, 0x33, 0x33),
            delete_icon: Color::Rgb(0x33, 0x33, 0x33),
            mode_icon: Color::Rgb(0x33, 0x33, 0x33),
            modal_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
            modal_text: Color::Rgb(0x00, 0x00, 0x00),
            modal_border: Color::Rgb(0xCC, 0xCC, 0xCC),
            selection_bg: Color::Rgb(0xDD, 0xE8, 0xF6),
            dim: Color::Rgb(0x88, 0x88, 0x88),
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x12, 0x12, 0x12),
            header: Color::Rgb(0xFF, 0xFF, 0xFF),
            input_bg: Color::Rgb(0x33, 0x33, 0x33),
            input_text: Color::Rgb(0xFF, 0xFF, 0xFF),
            placeholder: Color::Rgb(0xCC, 0xCC, 0xCC),
            item_bg: Color::Rgb(0x1E, 0x1E, 0x1E),
            item_text: Color::Rgb(0xFF, 0xFF, 0xFF),
            completed: Color::Rgb(0xAA, 0xAA, 0xAA),
            accent: Color::Rgb(0x4A, 0x90, 0xE2),
            check: Color::Rgb(0x4C, 0xAF, 0x50),
            edit_icon: Color::Rgb(0xFF, 0x98, 0x00),
            delete_icon: Color::Rgb(0xF4, 0x43, 0x36),
            mode_icon: Color::Rgb(0xFF, 0xD7, 0x00),
            modal_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
            modal_text: Color::Rgb(0x00, 0x00, 0x00),
            modal_border: Color::Rgb(0xCC, 0xCC, 0xCC),
            selection_bg: Color::Rgb(0x2C, 0x3E, 0x55),
            dim: Color::Rgb(0x99, 0x99, 0x99),
        }
    }

    /// Apply `[ui.light]` / `[ui.dark]` hex overrides. Unknown slots and
    /// malformed colors are skipped.
    fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        for (key, value) in overrides {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut self.background,
                "header" => &mut self.header,
                "input_bg" => &mut self.input_bg,
                "input_text" => &mut self.input_text,
                "placeholder" => &mut self.placeholder,
                "item_bg" => &mut self.item_bg,
                "item_text" => &mut self.item_text,
                "completed" => &mut self.completed,
                "accent" => &mut self.accent,
                "check" => &mut self.check,
                "edit_icon" => &mut self.edit_icon,
                "delete_icon" => &mut self.delete_icon,
                "mode_icon" => &mut self.mode_icon,
                "modal_bg" => &mut self.modal_bg,
                "modal_text" => &mut self.modal_text,
                "modal_border" => &mut self.modal_border,
                "selection_bg" => &mut self.selection_bg,
                "dim" => &mut self.dim,
                _ => continue,
            };
            *slot = color;
        }
        self
    }
}

/// Both palettes, resolved once at startup
#[derive(Debug, Clone)]
pub struct Themes {
    pub light: Theme,
    pub dark: Theme,
}

impl Default for Themes {
    fn default() -> Self {
        Themes {
            light: Theme::light(),
            dark: Theme::dark(),
        }
    }
}

impl Themes {
    /// Create both palettes from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        Themes {
            light: Theme::light().with_overrides(&ui.light),
            dark: Theme::dark().with_overrides(&ui.dark),
        }
    }

    pub fn get(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Parse a hex color string like "#FF4444" (or the short "#F44") into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 0x11);
            Some(Color::Rgb(short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("#333"), Some(Color::Rgb(0x33, 0x33, 0x33)));
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(0xFF, 0xFF, 0xFF)));
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // wrong length
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.dark.insert("background".into(), "#000000".into());
        ui.dark.insert("accent".into(), "not-a-color".into());
        ui.dark.insert("no_such_slot".into(), "#123456".into());
        ui.light.insert("item_text".into(), "#010203".into());

        let themes = Themes::from_config(&ui);
        assert_eq!(themes.dark.background, Color::Rgb(0, 0, 0));
        assert_eq!(themes.dark.accent, Theme::dark().accent);
        assert_eq!(themes.light.item_text, Color::Rgb(1, 2, 3));
        assert_eq!(themes.light.background, Theme::light().background);
    }

    #[test]
    fn test_get_by_mode() {
        let themes = Themes::default();
        assert_eq!(themes.get(ThemeMode::Light), &Theme::light());
        assert_eq!(themes.get(ThemeMode::Dark), &Theme::dark());
    }
}
