//! ANSI color support for the console destination.
//!
//! Color identifiers in a level map are either palette names ("green",
//! "magenta") or `#RRGGBB` hex strings; both resolve to 24-bit truecolor
//! escapes for terminal rendering. HTML output bypasses this module and
//! emits identifiers verbatim, since CSS understands both forms natively.

use std::fmt;

/// A dedicated type keeps raw u8 triples from being mixed up and documents
/// color intent at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// `const` so the built-in palette can live in compile-time constants.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` hex identifier. Falls back to white on malformed
    /// input so a typo in a color binding degrades the rendering instead of
    /// failing the log call.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Self::white();
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        Self { r, g, b }
    }

    /// Palette lookup for named color identifiers, case-insensitive.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "white" => Some(Self::white()),
            "red" => Some(Self::red()),
            "green" => Some(Self::green()),
            "yellow" => Some(Self::yellow()),
            "blue" => Some(Self::blue()),
            "cyan" => Some(Self::cyan()),
            "magenta" => Some(Self::magenta()),
            "purple" => Some(Self::purple()),
            "orange" => Some(Self::orange()),
            _ => None,
        }
    }

    /// Resolves a color identifier: `#`-prefixed strings parse as hex,
    /// anything else is a palette name, unknown names render white.
    #[must_use]
    pub fn resolve(id: &str) -> Self {
        if id.starts_with('#') {
            Self::from_hex(id)
        } else {
            Self::named(id).unwrap_or_else(Self::white)
        }
    }

    /// Terminals need the raw `\x1b[38;2;R;G;Bm` escape; callers shouldn't
    /// hand-build it.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Terminates any active SGR styling so subsequent text returns to the
    /// terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::new(222, 70, 62)
    }

    #[must_use]
    pub const fn green() -> Self {
        Self::new(73, 190, 105)
    }

    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(235, 185, 60)
    }

    #[must_use]
    pub const fn blue() -> Self {
        Self::new(66, 133, 244)
    }

    #[must_use]
    pub const fn cyan() -> Self {
        Self::new(58, 184, 196)
    }

    #[must_use]
    pub const fn magenta() -> Self {
        Self::new(196, 77, 188)
    }

    #[must_use]
    pub const fn purple() -> Self {
        Self::new(146, 94, 216)
    }

    #[must_use]
    pub const fn orange() -> Self {
        Self::new(238, 145, 52)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Most callers just want "make this text colored" without managing reset
/// sequences.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}

/// Dim rendering for low-priority line elements like timestamps.
#[must_use]
pub fn dim(text: &str) -> String {
    format!("\x1b[2m{text}\x1b[0m")
}
