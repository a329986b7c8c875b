//! Timeline styling: color tokens, icon glyphs and shared text styles.

use ratatui::style::{Color, Modifier, Style};

/// Secondary text (subtitles, durations, hints).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Category headers in the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Vertical connector lines.
pub const CONNECTOR: Style = Style::new().fg(Color::DarkGray);

/// Selected row title.
pub const SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Marker glyph for a top-level entry with an unknown icon token.
pub const DEFAULT_MARKER: &str = "●";

/// Marker glyph for a sub-entry with an unknown icon token.
pub const DEFAULT_SUB_MARKER: &str = "○";

/// Vertical line between top-level markers.
pub const CONNECTOR_GLYPH: &str = "│";

/// Vertical line between sub-entry markers.
pub const SUB_CONNECTOR_GLYPH: &str = "┆";

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Whether styles may use color.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ===== Tokens =====

/// Resolve an entry color token: a named color or `#rrggbb`.
pub fn parse_color(token: &str) -> Option<Color> {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }
    let color = match token.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        "orange" => Color::LightRed,
        _ => return None,
    };
    Some(color)
}

/// Single-cell glyph for an icon token.
pub fn icon_glyph(token: &str) -> Option<&'static str> {
    let glyph = match token {
        "flag" => "⚑",
        "finish" => "◼",
        "pin" => "◉",
        "route" => "◇",
        "dot" => "•",
        "tram" | "train" => "⊟",
        "walk" => "›",
        "food" => "∗",
        "star" => "★",
        _ => return None,
    };
    Some(glyph)
}

/// Styles for one render pass, honoring [`ColorConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineStyles {
    colors: ColorConfig,
}

impl TimelineStyles {
    /// Styles honoring `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// Marker style for an entry color token; unknown tokens render uncolored.
    pub fn marker(&self, color_token: &str) -> Style {
        match parse_color(color_token) {
            Some(color) if self.colors.colors_enabled() => Style::new().fg(color),
            _ => Style::new(),
        }
    }

    /// Bold title, reversed when `selected`.
    pub fn title(&self, selected: bool) -> Style {
        let base = Style::new().add_modifier(Modifier::BOLD);
        if selected {
            base.patch(SELECTED)
        } else {
            base
        }
    }

    /// Secondary text (descriptions, durations).
    pub fn muted(&self) -> Style {
        if self.colors.colors_enabled() {
            MUTED_TEXT
        } else {
            Style::new()
        }
    }

    /// Connector line style.
    pub fn connector(&self) -> Style {
        if self.colors.colors_enabled() {
            CONNECTOR
        } else {
            Style::new()
        }
    }
}
