//! Card sizing configuration
//!
//! These constants are a contract with the stylesheet that renders the lyric
//! card: `horizontal_padding` must match the card's left+right padding and
//! `font` must match its font declaration. Keep them in sync by hand.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Font used to measure the card text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FontDescriptor {
    /// CSS font-style (`normal`, `italic`, `oblique`)
    pub style: String,

    /// CSS font-weight (100-900)
    pub weight: u16,

    /// Font size in pixels
    pub size_px: f32,

    /// CSS font-family list
    pub family: String,
}

impl FontDescriptor {
    /// CSS `font` shorthand, as accepted by `CanvasRenderingContext2D.font`
    pub fn css(&self) -> String {
        format!("{} {} {}px {}", self.style, self.weight, self.size_px, self.family)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            style: "oblique".to_string(),
            weight: 700,
            size_px: 36.0,
            family: "Helvetica, Inter, sans-serif".to_string(),
        }
    }
}

/// Maximum card width policy
///
/// Serialized as either a pixel number or the string `"uncapped"`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(try_from = "MaxWidthRepr", into = "MaxWidthRepr")]
pub enum MaxWidth {
    /// Card grows with the text
    #[default]
    Uncapped,

    /// Card never exceeds this many pixels; long lines wrap
    Capped(u32),
}

impl MaxWidth {
    /// Apply the policy to a computed width
    pub fn apply(self, width: u32) -> u32 {
        match self {
            MaxWidth::Uncapped => width,
            MaxWidth::Capped(max) => width.min(max),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum MaxWidthRepr {
    Pixels(u32),
    Keyword(String),
}

impl TryFrom<MaxWidthRepr> for MaxWidth {
    type Error = ConfigError;

    fn try_from(repr: MaxWidthRepr) -> Result<Self, Self::Error> {
        match repr {
            MaxWidthRepr::Pixels(px) => Ok(MaxWidth::Capped(px)),
            MaxWidthRepr::Keyword(word) if word == "uncapped" => Ok(MaxWidth::Uncapped),
            MaxWidthRepr::Keyword(word) => Err(ConfigError::InvalidMaxWidth(word)),
        }
    }
}

impl From<MaxWidth> for MaxWidthRepr {
    fn from(max: MaxWidth) -> Self {
        match max {
            MaxWidth::Uncapped => MaxWidthRepr::Keyword("uncapped".to_string()),
            MaxWidth::Capped(px) => MaxWidthRepr::Pixels(px),
        }
    }
}

/// Configuration for the lyric card width calculation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CardConfig {
    /// Font the card text is rendered in
    pub font: FontDescriptor,

    /// Left + right padding of the card (pixels)
    pub horizontal_padding: f64,

    /// Extra slack so the last glyph never clips (pixels)
    pub buffer: f64,

    /// Cap policy
    pub max_width: MaxWidth,

    /// Width used when no text measurer is available (pixels)
    pub fallback_width: u32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            font: FontDescriptor::default(),
            horizontal_padding: 22.0,
            buffer: 20.0,
            max_width: MaxWidth::Uncapped,
            fallback_width: 600,
        }
    }
}

impl CardConfig {
    /// Reject values that cannot describe a real layout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizontal_padding.is_nan() || self.horizontal_padding < 0.0 {
            return Err(ConfigError::InvalidConstant {
                name: "horizontalPadding",
                value: self.horizontal_padding,
            });
        }
        if self.buffer.is_nan() || self.buffer < 0.0 {
            return Err(ConfigError::InvalidConstant {
                name: "buffer",
                value: self.buffer,
            });
        }
        if self.font.size_px.is_nan() || self.font.size_px <= 0.0 {
            return Err(ConfigError::InvalidConstant {
                name: "font.sizePx",
                value: f64::from(self.font.size_px),
            });
        }
        Ok(())
    }
}
