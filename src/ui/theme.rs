//! Colour palette passed explicitly to every render function.

use std::str::FromStr;

use ratatui::style::Color;

use crate::config::ThemeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub ok: Color,
    pub error: Color,
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0xda, 0x77, 0x56),
            border: Color::Rgb(0x40, 0x40, 0x40),
            text: Color::Rgb(0xe5, 0xe5, 0xe5),
            muted: Color::Rgb(0x6b, 0x72, 0x80),
            ok: Color::Rgb(0x22, 0xc5, 0x5e),
            error: Color::Rgb(0xef, 0x44, 0x44),
            highlight: Color::Rgb(0x26, 0x26, 0x26),
        }
    }
}

impl Theme {
    /// Build a theme from config, naming the first field that fails to parse.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, String> {
        Ok(Self {
            accent: parse_color("theme.accent", &config.accent)?,
            border: parse_color("theme.border", &config.border)?,
            text: parse_color("theme.text", &config.text)?,
            muted: parse_color("theme.muted", &config.muted)?,
            ok: parse_color("theme.ok", &config.ok)?,
            error: parse_color("theme.error", &config.error)?,
            highlight: parse_color("theme.highlight", &config.highlight)?,
        })
    }

    /// Colour for a tag label; the tag's own colour when it parses.
    pub fn tag_color(&self, color: Option<&str>) -> Color {
        color
            .and_then(|c| Color::from_str(c.trim()).ok())
            .unwrap_or(self.accent)
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, String> {
    Color::from_str(value.trim()).map_err(|_| format!("{}: invalid colour '{}'", field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_default_theme() {
        let theme = Theme::from_config(&ThemeConfig::default()).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn tag_color_falls_back_to_accent() {
        let theme = Theme::default();
        assert_eq!(theme.tag_color(Some("#ff0000")), Color::Rgb(0xff, 0, 0));
        assert_eq!(theme.tag_color(Some("bogus")), theme.accent);
        assert_eq!(theme.tag_color(None), theme.accent);
    }
}
