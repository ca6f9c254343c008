//! Palette export: CSS custom properties, generic JSON and DTCG-style Figma tokens.

use crate::color::Color;
use crate::palette::Palette;
use crate::scale::{ScaleCategory, Shade};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No tokens selected for export")]
    NothingSelected,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Malformed export: {0}")]
    Malformed(String),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Palette export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteExport {
    Css,
    Json,
    Figma,
}

impl PaletteExport {
    pub const ALL: [PaletteExport; 3] = [PaletteExport::Css, PaletteExport::Json, PaletteExport::Figma];

    /// Default download filename.
    pub fn filename(self) -> &'static str {
        match self {
            PaletteExport::Css => "tokens.css",
            PaletteExport::Json => "tokens.json",
            PaletteExport::Figma => "figma-tokens.json",
        }
    }

    /// Human-readable format name.
    pub fn label(self) -> &'static str {
        match self {
            PaletteExport::Css => "CSS",
            PaletteExport::Json => "JSON",
            PaletteExport::Figma => "Figma Tokens",
        }
    }

    pub fn render(self, palette: &Palette) -> ExportResult<String> {
        let scales = resolve(palette);
        match self {
            PaletteExport::Css => Ok(render_css(&scales)),
            PaletteExport::Json => render_json(&scales),
            PaletteExport::Figma => render_figma(&scales),
        }
    }
}

/// Merged, sorted shades per category, in canonical order.
fn resolve(palette: &Palette) -> Vec<(ScaleCategory, Vec<Shade>)> {
    ScaleCategory::ALL
        .iter()
        .map(|&category| (category, palette.shades(category)))
        .collect()
}

fn render_css(scales: &[(ScaleCategory, Vec<Shade>)]) -> String {
    let mut css = String::from(":root {\n");
    for (category, shades) in scales {
        css.push_str(&format!("  /* {} */\n", category.name()));
        for shade in shades {
            css.push_str(&format!("  --{}-{}: {};\n", category.key(), shade.key(), shade.color));
        }
        css.push('\n');
    }
    css.push('}');
    css
}

fn render_json(scales: &[(ScaleCategory, Vec<Shade>)]) -> ExportResult<String> {
    let document: IndexMap<&str, IndexMap<String, String>> = scales
        .iter()
        .map(|(category, shades)| {
            let entries: IndexMap<String, String> =
                shades.iter().map(|s| (s.key(), s.color.to_hex())).collect();
            (category.key(), entries)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&document)?)
}

#[derive(Serialize)]
struct FigmaDocument {
    color: IndexMap<&'static str, IndexMap<String, FigmaColorToken>>,
}

#[derive(Serialize)]
struct FigmaColorToken {
    #[serde(rename = "$type")]
    kind: &'static str,
    #[serde(rename = "$value")]
    value: FigmaColorValue,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FigmaColorValue {
    color_space: &'static str,
    components: [f64; 3],
    alpha: u8,
    hex: String,
}

impl From<Color> for FigmaColorToken {
    fn from(color: Color) -> Self {
        Self {
            kind: "color",
            value: FigmaColorValue {
                color_space: "srgb",
                components: color.unit_components(),
                alpha: 1,
                hex: color.to_hex_upper(),
            },
        }
    }
}

fn render_figma(scales: &[(ScaleCategory, Vec<Shade>)]) -> ExportResult<String> {
    let document = FigmaDocument {
        color: scales
            .iter()
            .map(|(category, shades)| {
                let entries: IndexMap<String, FigmaColorToken> =
                    shades.iter().map(|s| (s.key(), s.color.into())).collect();
                (category.key(), entries)
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Read a generic JSON export back into `category -> key -> color`.
pub fn parse_generic_json(json: &str) -> ExportResult<HashMap<ScaleCategory, HashMap<String, Color>>> {
    let raw: HashMap<String, HashMap<String, Color>> =
        serde_json::from_str(json).map_err(|e| ExportError::Malformed(e.to_string()))?;
    raw.into_iter()
        .map(|(key, shades)| {
            let category = key.parse::<ScaleCategory>().map_err(ExportError::Malformed)?;
            Ok((category, shades))
        })
        .collect()
}
