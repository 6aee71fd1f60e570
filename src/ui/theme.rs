use std::str::FromStr;

use log::warn;
use ratatui::style::Color;

use crate::engine::ThemeConfig;

/// Midnight theme colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub anchor: Color,
    pub dimmed: Color,
    pub heading: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            text: Color::Rgb(169, 177, 214),    // #A9B1D6
            anchor: Color::Rgb(247, 118, 142),  // #F7768E
            dimmed: Color::Rgb(100, 110, 150),  // #646E96
            heading: Color::Rgb(42, 157, 143),  // #2A9D8F
        }
    }

    /// Builds a theme from configured color strings. Entries that fail to
    /// parse keep the midnight color.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let base = Self::midnight();
        Self {
            background: parse_color(&config.background_color, base.background),
            text: parse_color(&config.text_color, base.text),
            anchor: parse_color(&config.anchor_color, base.anchor),
            dimmed: parse_color(&config.dimmed_color, base.dimmed),
            heading: parse_color(&config.heading_color, base.heading),
        }
    }
}

fn parse_color(value: &str, fallback: Color) -> Color {
    Color::from_str(value.trim()).unwrap_or_else(|_| {
        warn!("invalid theme color {:?}, using default", value);
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_midnight() {
        assert_eq!(Theme::from_config(&ThemeConfig::default()), Theme::midnight());
    }

    #[test]
    fn test_custom_and_invalid_colors() {
        let config = ThemeConfig {
            anchor_color: "#FF0000".to_string(),
            text_color: "not-a-color".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.anchor, Color::Rgb(255, 0, 0));
        assert_eq!(theme.text, Theme::midnight().text);
    }
}
