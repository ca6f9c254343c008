//! Semantic scale categories, shades and the lightness ladder generator.

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Saturation forced onto the neutral scale.
pub const NEUTRAL_SATURATION: f64 = 0.03;

/// Saturation ceiling for every non-neutral scale.
pub const MAX_SATURATION: f64 = 0.85;

/// Standard shade labels and their target lightness, lightest first.
pub const SHADE_LADDER: [(u32, f64); 9] = [
    (100, 0.95),
    (200, 0.85),
    (300, 0.75),
    (400, 0.65),
    (500, 0.50),
    (600, 0.40),
    (700, 0.30),
    (800, 0.20),
    (900, 0.10),
];

/// A semantic color category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleCategory {
    Brand,
    Neutral,
    Success,
    Warning,
    Error,
    Info,
}

impl ScaleCategory {
    /// Canonical order used by every export.
    pub const ALL: [ScaleCategory; 6] = [
        ScaleCategory::Brand,
        ScaleCategory::Neutral,
        ScaleCategory::Success,
        ScaleCategory::Warning,
        ScaleCategory::Error,
        ScaleCategory::Info,
    ];

    /// Order of the scale cards on screen.
    pub const DISPLAY_ORDER: [ScaleCategory; 6] = [
        ScaleCategory::Brand,
        ScaleCategory::Neutral,
        ScaleCategory::Success,
        ScaleCategory::Info,
        ScaleCategory::Warning,
        ScaleCategory::Error,
    ];

    /// Machine key used in CSS variables and JSON objects.
    pub fn key(self) -> &'static str {
        match self {
            ScaleCategory::Brand => "brand",
            ScaleCategory::Neutral => "neutral",
            ScaleCategory::Success => "success",
            ScaleCategory::Warning => "warning",
            ScaleCategory::Error => "error",
            ScaleCategory::Info => "info",
        }
    }

    /// Scale name, used in export comments.
    pub fn name(self) -> &'static str {
        match self {
            ScaleCategory::Brand => "Brand",
            ScaleCategory::Neutral => "Neutral",
            ScaleCategory::Success => "Success",
            ScaleCategory::Warning => "Warning",
            ScaleCategory::Error => "Error",
            ScaleCategory::Info => "Info",
        }
    }

    /// Card header label.
    pub fn display_label(self) -> &'static str {
        match self {
            ScaleCategory::Error => "Danger",
            other => other.name(),
        }
    }

    pub fn default_base_color(self) -> Color {
        match self {
            ScaleCategory::Brand => Color::new(0xEA, 0x58, 0x0C),
            ScaleCategory::Neutral => Color::new(0x6B, 0x72, 0x80),
            ScaleCategory::Success => Color::new(0x22, 0xC5, 0x5E),
            ScaleCategory::Warning => Color::new(0xF5, 0x9E, 0x0B),
            ScaleCategory::Error => Color::new(0xEF, 0x44, 0x44),
            ScaleCategory::Info => Color::new(0x3B, 0x82, 0xF6),
        }
    }

    /// Index into [`ScaleCategory::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ScaleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScaleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "danger" => Ok(ScaleCategory::Error),
            _ => ScaleCategory::ALL
                .into_iter()
                .find(|c| c.key() == lower)
                .ok_or_else(|| format!("Unknown scale category: {s}")),
        }
    }
}

/// A shade label such as `500` or a custom `550`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShadeLabel(pub u32);

impl ShadeLabel {
    pub fn value(self) -> u32 {
        self.0
    }

    /// Rounded arithmetic midpoint of two labels.
    pub fn midpoint(self, other: ShadeLabel) -> ShadeLabel {
        ShadeLabel(((self.0 as f64 + other.0 as f64) / 2.0).round() as u32)
    }
}

impl fmt::Display for ShadeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ShadeLabel {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// One swatch of a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shade {
    pub label: ShadeLabel,
    pub color: Color,
    #[serde(default)]
    pub is_custom: bool,
}

impl Shade {
    pub fn standard(label: u32, color: Color) -> Self {
        Self { label: ShadeLabel(label), color, is_custom: false }
    }

    pub fn custom(label: u32, color: Color) -> Self {
        Self { label: ShadeLabel(label), color, is_custom: true }
    }

    /// Export key: `custom-<label>` for custom shades, the bare label otherwise.
    pub fn key(&self) -> String {
        if self.is_custom {
            format!("custom-{}", self.label)
        } else {
            self.label.to_string()
        }
    }
}

/// A resolved scale, ready for display or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScale {
    pub category: ScaleCategory,
    pub name: &'static str,
    pub shades: Vec<Shade>,
}

/// Derive the standard 9-step ladder for a category from its base color.
pub fn generate_scale(base: Color, category: ScaleCategory) -> Vec<Shade> {
    let hsl = base.to_hsl();
    let saturation = match category {
        ScaleCategory::Neutral => NEUTRAL_SATURATION,
        _ => hsl.s.min(MAX_SATURATION),
    };

    SHADE_LADDER
        .iter()
        .map(|&(label, lightness)| {
            Shade::standard(label, Color::from_hsl(hsl.h, saturation, lightness))
        })
        .collect()
}

/// Merge two shade lists and sort ascending by label.
pub fn merge_shades(generated: &[Shade], custom: &[Shade]) -> Vec<Shade> {
    let mut all: Vec<Shade> = generated.iter().chain(custom).copied().collect();
    all.sort_by_key(|s| s.label);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bases() -> Vec<Color> {
        let mut bases = Vec::new();
        for r in (0..=255).step_by(51) {
            for g in (0..=255).step_by(85) {
                for b in (0..=255).step_by(85) {
                    bases.push(Color::new(r as u8, g as u8, b as u8));
                }
            }
        }
        bases
    }

    #[test]
    fn test_nine_fixed_labels() {
        let shades = generate_scale(ScaleCategory::Brand.default_base_color(), ScaleCategory::Brand);
        let labels: Vec<u32> = shades.iter().map(|s| s.label.value()).collect();
        assert_eq!(labels, vec![100, 200, 300, 400, 500, 600, 700, 800, 900]);
        assert!(shades.iter().all(|s| !s.is_custom));
    }

    #[test]
    fn test_generation_is_deterministic() {
        for category in ScaleCategory::ALL {
            let base = category.default_base_color();
            assert_eq!(generate_scale(base, category), generate_scale(base, category));
        }
    }

    #[test]
    fn test_darkest_shade_darker_than_lightest() {
        for base in sample_bases() {
            for category in ScaleCategory::ALL {
                if category == ScaleCategory::Neutral {
                    continue;
                }
                let shades = generate_scale(base, category);
                let first = shades[0].color.to_hsl().l;
                let last = shades[8].color.to_hsl().l;
                assert!(last < first, "{category} from {base}: {last} !< {first}");
            }
        }
    }

    #[test]
    fn test_neutral_saturation_stays_low() {
        for base in sample_bases() {
            for shade in generate_scale(base, ScaleCategory::Neutral) {
                // Rounding to 8-bit channels inflates saturation at the extremes.
                assert!(shade.color.to_hsl().s <= 0.1, "{base} -> {}", shade.color);
            }
        }
    }

    #[test]
    fn test_saturation_capped() {
        let vivid = Color::new(255, 0, 0);
        let shade_500 = generate_scale(vivid, ScaleCategory::Error)[4];
        assert_eq!(shade_500.color, Color::from_hsl(0.0, MAX_SATURATION, 0.5));
    }

    #[test]
    fn test_brand_default_ladder_midpoint() {
        let shades = generate_scale(ScaleCategory::Brand.default_base_color(), ScaleCategory::Brand);
        let hsl = ScaleCategory::Brand.default_base_color().to_hsl();
        let expected = Color::from_hsl(hsl.h, hsl.s.min(MAX_SATURATION), 0.5);
        assert_eq!(shades[4].color, expected);
    }

    #[test]
    fn test_shade_keys() {
        assert_eq!(Shade::standard(500, Color::BLACK).key(), "500");
        assert_eq!(Shade::custom(550, Color::BLACK).key(), "custom-550");
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Brand".parse::<ScaleCategory>(), Ok(ScaleCategory::Brand));
        assert_eq!("danger".parse::<ScaleCategory>(), Ok(ScaleCategory::Error));
        assert!("purple".parse::<ScaleCategory>().is_err());
        assert_eq!(ScaleCategory::Error.display_label(), "Danger");
        assert_eq!(ScaleCategory::Error.name(), "Error");
    }

    #[test]
    fn test_merge_sorts_by_label() {
        let generated = generate_scale(Color::new(10, 120, 200), ScaleCategory::Info);
        let custom = [Shade::custom(850, Color::BLACK), Shade::custom(150, Color::WHITE)];
        let merged = merge_shades(&generated, &custom);
        assert_eq!(merged.len(), 11);
        assert!(merged.windows(2).all(|w| w[0].label < w[1].label));
        assert_eq!(merged[1].label, ShadeLabel(150));
        assert!(merged[1].is_custom);
    }

    #[test]
    fn test_midpoint_rounds() {
        assert_eq!(ShadeLabel(100).midpoint(ShadeLabel(200)), ShadeLabel(150));
        assert_eq!(ShadeLabel(100).midpoint(ShadeLabel(101)), ShadeLabel(101));
    }
}
