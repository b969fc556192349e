//! Color parsing and formatting for chart series.
//!
//! Colors arrive either from the color picker as `#RRGGBB` or from the
//! defaults as CSS functional notation. They are always emitted as
//! `rgba(r,g,b,a)`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use eframe::egui::Color32;
use regex::Regex;
use thiserror::Error;

/// Matches `rgb(r, g, b)` and `rgba(r, g, b, a)`
static FUNCTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("Invalid regex pattern")
});

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while parsing a color string
#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("Color string is empty")]
    Empty,

    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    #[error("Color component out of range in: {0}")]
    ComponentOutOfRange(String),

    #[error("Unrecognized color format: {0}")]
    Unrecognized(String),
}

// ============================================================================
// Rgba
// ============================================================================

/// An sRGB color with straight (non-premultiplied) alpha in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// `#RRGGBB` (alpha dropped), as a color picker expects it
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn rgb_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_color32(&self) -> Color32 {
        let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }

    fn parse_hex(digits: &str, original: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(original.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..i + 1].repeat(2));
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    fn parse_functional(s: &str) -> Result<Self, ColorError> {
        let caps = FUNCTIONAL_REGEX
            .captures(s)
            .ok_or_else(|| ColorError::Unrecognized(s.to_string()))?;

        let out_of_range = || ColorError::ComponentOutOfRange(s.to_string());
        let component = |i: usize| -> Result<u8, ColorError> {
            caps[i].parse::<u8>().map_err(|_| out_of_range())
        };
        let (r, g, b) = (component(1)?, component(2)?, component(3)?);

        let a = match caps.get(4) {
            Some(m) => {
                let a: f32 = m.as_str().parse().map_err(|_| out_of_range())?;
                if !(0.0..=1.0).contains(&a) {
                    return Err(out_of_range());
                }
                a
            }
            None => 1.0,
        };
        Ok(Self::new(r, g, b, a))
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        if let Some(digits) = s.strip_prefix('#') {
            return Self::parse_hex(digits, s);
        }
        Self::parse_functional(&s.to_ascii_lowercase())
    }
}

/// Formats as `rgba(r,g,b,a)` with the shortest alpha representation
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}
