use std::collections::HashMap;
use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::calendar::Highlight;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme built from the config. Only the first call wins.
pub fn init(config: &ThemeConfig) {
    let _ = THEME.set(config.clone().into_theme());
}

/// Get the active theme, falling back to the default when `init` never ran.
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

const FALLBACK_CATEGORY_COLOR: Color = Color::Gray;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub today: Style,
    pub tomorrow: Style,
    pub weekend: Style,
    pub selected: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub toast_success: Style,
    pub toast_error: Style,
    pub categories: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Palette {
            name: "default",
            fg: Color::White,
            dim: Color::DarkGray,
            border: Color::Gray,
            bar: Color::DarkGray,
            today: Color::Yellow,
            tomorrow: Color::LightBlue,
            weekend: Color::LightMagenta,
            selected: Color::Cyan,
        }
        .into_theme()
    }
}

/// The handful of colours a preset is made from.
struct Palette {
    name: &'static str,
    fg: Color,
    dim: Color,
    border: Color,
    bar: Color,
    today: Color,
    tomorrow: Color,
    weekend: Color,
    selected: Color,
}

impl Palette {
    fn into_theme(self) -> Theme {
        Theme {
            name: self.name.to_string(),
            today: Style::new().fg(self.today).add_modifier(Modifier::BOLD),
            tomorrow: Style::new().fg(self.tomorrow).add_modifier(Modifier::BOLD),
            weekend: Style::new().fg(self.weekend),
            selected: Style::new().fg(Color::Black).bg(self.selected),
            header: Style::new().fg(self.fg).add_modifier(Modifier::BOLD),
            dim: Style::new().fg(self.dim),
            border: Style::new().fg(self.border),
            status: Style::new().fg(self.fg).bg(self.bar),
            toast_success: Style::new().fg(Color::Black).bg(Color::Green),
            toast_error: Style::new().fg(Color::White).bg(Color::Red),
            categories: default_category_colors(),
        }
    }
}

fn default_category_colors() -> HashMap<String, Color> {
    [
        ("family", Color::Magenta),
        ("work", Color::Blue),
        ("school", Color::Yellow),
        ("sports", Color::Green),
        ("health", Color::Red),
        ("social", Color::Cyan),
        ("other", Color::Gray),
    ]
    .into_iter()
    .map(|(key, color)| (key.to_string(), color))
    .collect()
}

impl Theme {
    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Palette {
                name: "dracula",
                fg: Color::Rgb(248, 248, 242),
                dim: Color::Rgb(98, 114, 164),
                border: Color::Rgb(68, 71, 90),
                bar: Color::Rgb(68, 71, 90),
                today: Color::Rgb(241, 250, 140),
                tomorrow: Color::Rgb(139, 233, 253),
                weekend: Color::Rgb(255, 121, 198),
                selected: Color::Rgb(189, 147, 249),
            }
            .into_theme(),
            "gruvbox" => Palette {
                name: "gruvbox",
                fg: Color::Rgb(235, 219, 178),
                dim: Color::Rgb(146, 131, 116),
                border: Color::Rgb(102, 92, 84),
                bar: Color::Rgb(80, 73, 69),
                today: Color::Rgb(250, 189, 47),
                tomorrow: Color::Rgb(131, 165, 152),
                weekend: Color::Rgb(211, 134, 155),
                selected: Color::Rgb(142, 192, 124),
            }
            .into_theme(),
            "nord" => Palette {
                name: "nord",
                fg: Color::Rgb(229, 233, 240),
                dim: Color::Rgb(76, 86, 106),
                border: Color::Rgb(67, 76, 94),
                bar: Color::Rgb(67, 76, 94),
                today: Color::Rgb(235, 203, 139),
                tomorrow: Color::Rgb(136, 192, 208),
                weekend: Color::Rgb(180, 142, 173),
                selected: Color::Rgb(143, 188, 187),
            }
            .into_theme(),
            _ => Self::default(),
        }
    }

    pub fn category_color(&self, key: &str) -> Color {
        self.categories
            .get(key)
            .copied()
            .unwrap_or(FALLBACK_CATEGORY_COLOR)
    }

    /// Style for an event's name given its highlight.
    pub fn highlight(&self, highlight: Highlight) -> Style {
        match highlight {
            Highlight::Today => self.today,
            Highlight::Tomorrow => self.tomorrow,
            Highlight::Weekend => self.weekend,
            Highlight::None => Style::default(),
        }
    }
}

/// `[theme]` table of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub today_fg: Option<String>,
    pub tomorrow_fg: Option<String>,
    pub weekend_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub header_fg: Option<String>,
    pub dim_fg: Option<String>,
    pub border_fg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
    /// Category key (lowercase) to colour.
    pub categories: HashMap<String, String>,
}

impl ThemeConfig {
    pub fn into_theme(self) -> Theme {
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        override_style(&mut theme.today, &self.today_fg, |s, c| s.fg(c));
        override_style(&mut theme.tomorrow, &self.tomorrow_fg, |s, c| s.fg(c));
        override_style(&mut theme.weekend, &self.weekend_fg, |s, c| s.fg(c));
        override_style(&mut theme.selected, &self.selected_bg, |s, c| s.bg(c));
        override_style(&mut theme.header, &self.header_fg, |s, c| s.fg(c));
        override_style(&mut theme.dim, &self.dim_fg, |s, c| s.fg(c));
        override_style(&mut theme.border, &self.border_fg, |s, c| s.fg(c));
        override_style(&mut theme.status, &self.status_fg, |s, c| s.fg(c));
        override_style(&mut theme.status, &self.status_bg, |s, c| s.bg(c));

        for (key, value) in &self.categories {
            if let Some(color) = parse_color(value) {
                theme.categories.insert(key.to_lowercase(), color);
            }
        }

        theme
    }
}

fn override_style(style: &mut Style, value: &Option<String>, apply: fn(Style, Color) -> Style) {
    if let Some(color) = value.as_deref().and_then(parse_color) {
        *style = apply(*style, color);
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(parse_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_color(" Grey "), Some(Color::Gray));
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn config_overrides_preset_and_categories() {
        let config = ThemeConfig {
            preset: Some("nord".into()),
            today_fg: Some("red".into()),
            categories: [("Chores".to_string(), "#010203".to_string())].into(),
            ..Default::default()
        };
        let theme = config.into_theme();

        assert_eq!(theme.name, "nord");
        assert_eq!(theme.today.fg, Some(Color::Red));
        assert_eq!(theme.category_color("chores"), Color::Rgb(1, 2, 3));
        assert_eq!(theme.category_color("family"), Color::Magenta);
        assert_eq!(theme.category_color("unknown"), Color::Gray);
    }

    #[test]
    fn unknown_preset_is_default() {
        assert_eq!(Theme::preset("solarized").name, "default");
    }
}
