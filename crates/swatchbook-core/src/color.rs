//! Color model: hex, RGB and HSL conversions plus linear-light mixing.

use palette::encoding::Srgb as SrgbSpace;
use palette::{FromColor, LinSrgb, Mix, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing color input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// An opaque sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL representation. Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (case-insensitive). The leading `#` is required.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        if !is_valid_hex(input) {
            return Err(ColorError::InvalidHex(input.to_string()));
        }
        let digits = &input[1..];
        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHex(input.to_string()))
        };
        if digits.len() == 3 {
            let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
        } else {
            Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ))
        }
    }

    /// Build a color from free-form integer channel input, clamping each to `0..=255`.
    pub fn from_rgb_input(r: i64, g: i64, b: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Build a color from HSL. Hue wraps, saturation and lightness are clamped.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = if h.is_finite() { h.rem_euclid(360.0) } else { 0.0 };
        let s = if s.is_finite() { s.clamp(0.0, 1.0) } else { 0.0 };
        let l = if l.is_finite() { l.clamp(0.0, 1.0) } else { 0.0 };

        let hsl = palette::Hsl::<SrgbSpace, f64>::new(h, s, l);
        Self::from_srgb(Srgb::<f64>::from_color(hsl))
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Convert to HSL. Achromatic colors report a hue of 0.
    pub fn to_hsl(self) -> Hsl {
        let hsl = palette::Hsl::<SrgbSpace, f64>::from_color(self.to_srgb());
        let h = if hsl.saturation == 0.0 { 0.0 } else { hsl.hue.into_positive_degrees() };
        Hsl { h, s: hsl.saturation, l: hsl.lightness }
    }

    fn to_srgb(self) -> Srgb<f64> {
        Srgb::<u8>::new(self.r, self.g, self.b).into_format()
    }

    fn from_srgb(rgb: Srgb<f64>) -> Self {
        Self::new(to_channel(rgb.red), to_channel(rgb.green), to_channel(rgb.blue))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB`, as shown to users and written to Figma tokens.
    pub fn to_hex_upper(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to `0..=1`, rounded to three decimals.
    pub fn unit_components(self) -> [f64; 3] {
        let unit = |v: u8| (v as f64 / 255.0 * 1000.0).round() / 1000.0;
        [unit(self.r), unit(self.g), unit(self.b)]
    }
}

impl Hsl {
    pub fn to_color(self) -> Color {
        Color::from_hsl(self.h, self.s, self.l)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_color()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(&normalize_hex_input(s))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// `#` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex(input: &str) -> bool {
    match input.strip_prefix('#') {
        Some(digits) => {
            (digits.len() == 3 || digits.len() == 6)
                && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Prefix a bare hex string with `#`. Empty input stays empty.
pub fn normalize_hex_input(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    }
}

/// Interpolate between two colors in linear-light sRGB. `t` is clamped to `[0, 1]`.
pub fn mix(a: Color, b: Color, t: f64) -> Color {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    let a: LinSrgb<f64> = a.to_srgb().into_linear();
    let b: LinSrgb<f64> = b.to_srgb().into_linear();
    Color::from_srgb(Srgb::<f64>::from_linear(a.mix(b, t)))
}

/// Leading-integer parse: optional whitespace and sign, then digits. Trailing text is ignored.
pub(crate) fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
