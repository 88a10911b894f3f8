//! Theme colors, loaded from the Omarchy system theme when present.

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;

use crate::strength::ScoreColor;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,   // Active borders, highlights
    pub danger: Color,   // Red band (scores 0-1)
    pub warning: Color,  // Orange band (score 2)
    pub success: Color,  // Green band (scores 3-4)
    pub text: Color,     // Primary text
    pub text_dim: Color, // Dimmed text
    pub inactive: Color, // Inactive borders
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin-inspired fallbacks
        Self {
            accent: Color::Rgb(250, 179, 135),
            danger: Color::Rgb(243, 139, 168),
            warning: Color::Rgb(250, 179, 135),
            success: Color::Rgb(166, 218, 149),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            inactive: Color::Rgb(88, 91, 112),
        }
    }
}

impl Theme {
    pub fn load() -> Self {
        Self::load_omarchy_theme().unwrap_or_default()
    }

    /// Color for a score band. The policy itself (red/orange/green) is fixed;
    /// the theme only picks the concrete hue.
    pub fn score_color(&self, color: ScoreColor) -> Color {
        match color {
            ScoreColor::Red => self.danger,
            ScoreColor::Orange => self.warning,
            ScoreColor::Green => self.success,
        }
    }

    /// Load colors from the Omarchy kitty.conf theme file
    fn load_omarchy_theme() -> Option<Self> {
        let home = dirs::home_dir()?;
        let theme_path = home.join(".config/omarchy/current/theme/kitty.conf");

        let content = fs::read_to_string(&theme_path).ok()?;
        let colors = Self::parse_kitty_conf(&content);
        if colors.is_empty() {
            return None;
        }

        let fallback = Theme::default();
        let pick = |keys: &[&str], fb: Color| {
            keys.iter()
                .find_map(|k| colors.get(*k).copied())
                .unwrap_or(fb)
        };

        Some(Self {
            accent: pick(&["color2", "color10"], fallback.accent),
            danger: pick(&["color1", "color9"], fallback.danger),
            warning: pick(&["color3", "color11"], fallback.warning),
            success: pick(&["color2", "color10"], fallback.success),
            text: pick(&["foreground"], fallback.text),
            text_dim: pick(&["color8"], fallback.text_dim),
            inactive: pick(&["inactive_border_color", "color8"], fallback.inactive),
        })
    }

    /// Parse kitty.conf format: `key #hexcolor`
    fn parse_kitty_conf(content: &str) -> HashMap<String, Color> {
        let mut colors = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.splitn(2, char::is_whitespace).collect();
            if parts.len() == 2 {
                if let Some(color) = Self::parse_hex_color(parts[1].trim()) {
                    colors.insert(parts[0].trim().to_string(), color);
                }
            }
        }

        colors
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}
