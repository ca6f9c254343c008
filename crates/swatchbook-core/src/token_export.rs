//! Export of saved tokens in generic and Figma shapes.

use crate::export::{ExportError, ExportResult};
use crate::library::SavedToken;
use indexmap::IndexMap;
use serde::Serialize;

/// Token library export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenExport {
    Generic,
    Figma,
}

impl TokenExport {
    pub const ALL: [TokenExport; 2] = [TokenExport::Generic, TokenExport::Figma];

    pub fn filename(self) -> &'static str {
        match self {
            TokenExport::Generic => "tokens-generic.json",
            TokenExport::Figma => "tokens-figma.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TokenExport::Generic => "Generic JSON",
            TokenExport::Figma => "Figma Tokens",
        }
    }

    /// Render the selected tokens. Repeated names keep their first position and last value.
    pub fn render(self, tokens: &[SavedToken]) -> ExportResult<String> {
        if tokens.is_empty() {
            return Err(ExportError::NothingSelected);
        }
        // IndexMap::insert keeps a repeated key in place and replaces its value.
        let json = match self {
            TokenExport::Generic => {
                let document: IndexMap<String, GenericToken> =
                    tokens.iter().map(|t| (t.name.clone(), GenericToken::from(t))).collect();
                serde_json::to_string_pretty(&document)?
            }
            TokenExport::Figma => {
                let document: IndexMap<String, FigmaToken> = tokens
                    .iter()
                    .map(|t| (t.name.replace('-', "/"), FigmaToken::from(t)))
                    .collect();
                serde_json::to_string_pretty(&document)?
            }
        };
        log::debug!("Rendered {} token(s) as {}", tokens.len(), self.label());
        Ok(json)
    }
}

#[derive(Serialize)]
struct GenericToken {
    value: String,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl From<&SavedToken> for GenericToken {
    fn from(token: &SavedToken) -> Self {
        Self {
            value: token.value.clone().unwrap_or_default(),
            kind: token.value_type.map(|v| v.as_str()).unwrap_or("other"),
        }
    }
}

#[derive(Serialize)]
struct FigmaToken {
    #[serde(rename = "type")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl From<&SavedToken> for FigmaToken {
    fn from(token: &SavedToken) -> Self {
        Self {
            kind: token
                .value_type
                .map(|v| v.as_str().to_uppercase())
                .unwrap_or_else(|| "OTHER".to_string()),
            value: token.value.clone().filter(|v| !v.is_empty()),
        }
    }
}
