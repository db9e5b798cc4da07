use ratatui::style::Color;

use crate::model::{Priority, Status, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub purple: Color,
    pub selection_bg: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            purple: Color::Rgb(0xCC, 0x66, 0xFF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            border: Color::Rgb(0x5A, 0x55, 0x80),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Black and white with saturated accents
    pub fn high_contrast() -> Self {
        Theme {
            background: Color::Rgb(0x00, 0x00, 0x00),
            text: Color::Rgb(0xFF, 0xFF, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFF, 0xFF, 0x00),
            dim: Color::Rgb(0xD0, 0xD0, 0xD0),
            red: Color::Rgb(0xFF, 0x30, 0x30),
            yellow: Color::Rgb(0xFF, 0xFF, 0x00),
            green: Color::Rgb(0x00, 0xFF, 0x00),
            cyan: Color::Rgb(0x00, 0xFF, 0xFF),
            purple: Color::Rgb(0xFF, 0x00, 0xFF),
            selection_bg: Color::Rgb(0x00, 0x00, 0xA0),
            border: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    /// Greys everywhere except priority badges
    pub fn focus() -> Self {
        let grey = Color::Rgb(0x80, 0x80, 0x88);
        Theme {
            background: Color::Rgb(0x16, 0x16, 0x18),
            text: Color::Rgb(0xB8, 0xB8, 0xC0),
            text_bright: Color::Rgb(0xE0, 0xE0, 0xE4),
            highlight: Color::Rgb(0xC8, 0xC8, 0xD0),
            dim: Color::Rgb(0x6A, 0x6A, 0x72),
            red: Color::Rgb(0xC0, 0x70, 0x70),
            yellow: Color::Rgb(0xB8, 0xA8, 0x70),
            green: Color::Rgb(0x80, 0xA8, 0x88),
            cyan: grey,
            purple: grey,
            selection_bg: Color::Rgb(0x2A, 0x2A, 0x30),
            border: Color::Rgb(0x40, 0x40, 0x46),
        }
    }

    /// Create a theme from UI config, falling back to defaults.
    /// High contrast wins over the focus palette.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = if ui.high_contrast {
            Theme::high_contrast()
        } else if ui.focus_theme {
            Theme::focus()
        } else {
            Theme::default()
        };

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" | "high" => theme.red = color,
                    "yellow" | "medium" => theme.yellow = color,
                    "green" | "low" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "purple" => theme.purple = color,
                    "selection_bg" => theme.selection_bg = color,
                    "border" => theme.border = color,
                    _ => {}
                }
            }
        }

        theme
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.red,
            Priority::Medium => self.yellow,
            Priority::Low => self.green,
        }
    }

    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Todo => self.cyan,
            Status::Progress => self.highlight,
            Status::Done => self.green,
        }
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
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("high".into(), "#112233".into());
        ui.colors.insert("bogus".into(), "#445566".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.priority_color(Priority::High), Color::Rgb(0x11, 0x22, 0x33));
        // Unchanged defaults still present
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn test_high_contrast_base() {
        let ui = UiConfig {
            high_contrast: true,
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&ui), Theme::high_contrast());
        assert_ne!(Theme::high_contrast(), Theme::default());
    }

    #[test]
    fn test_focus_theme_base() {
        let ui = UiConfig {
            focus_theme: true,
            ..Default::default()
        };
        let theme = Theme::from_config(&ui);
        assert_eq!(theme, Theme::focus());
        // Status accents collapse to one muted tone
        assert_eq!(theme.status_color(Status::Todo), theme.cyan);
        assert_eq!(theme.cyan, theme.purple);
        assert_ne!(theme.priority_color(Priority::High), theme.priority_color(Priority::Low));

        let both = UiConfig {
            focus_theme: true,
            high_contrast: true,
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&both), Theme::high_contrast());
    }

    #[test]
    fn test_priority_and_status_colors() {
        let theme = Theme::default();
        assert_eq!(theme.priority_color(Priority::Medium), theme.yellow);
        assert_eq!(theme.priority_color(Priority::Low), theme.green);
        assert_eq!(theme.status_color(Status::Progress), theme.highlight);
    }
}
