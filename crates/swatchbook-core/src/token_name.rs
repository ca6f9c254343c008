//! Five-part design token names with configurable separator and case style.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suggested values for each token part.
pub const COMPONENT_PRESETS: [&str; 8] =
    ["button", "input", "card", "modal", "avatar", "badge", "tooltip", "dropdown"];
pub const PROPERTY_PRESETS: [&str; 8] =
    ["color", "spacing", "radius", "shadow", "size", "opacity", "duration", "font"];
pub const ELEMENT_PRESETS: [&str; 8] =
    ["background", "border", "text", "icon", "container", "label", "placeholder", "ring"];
pub const VARIANT_PRESETS: [&str; 8] =
    ["primary", "secondary", "destructive", "outline", "ghost", "muted", "accent", "success"];
pub const STATE_PRESETS: [&str; 8] =
    ["default", "hover", "active", "focus", "disabled", "loading", "selected", "error"];

/// Character placed between token parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Separator {
    #[default]
    #[serde(rename = "-")]
    Hyphen,
    #[serde(rename = "_")]
    Underscore,
    #[serde(rename = ".")]
    Dot,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Hyphen => '-',
            Separator::Underscore => '_',
            Separator::Dot => '.',
        }
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" | "hyphen" => Ok(Separator::Hyphen),
            "_" | "underscore" => Ok(Separator::Underscore),
            "." | "dot" => Ok(Separator::Dot),
            other => Err(format!("Unknown separator: {other}")),
        }
    }
}

/// Case style applied to the joined name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    #[default]
    Kebab,
    Snake,
    Camel,
    Pascal,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 4] = [CaseStyle::Kebab, CaseStyle::Snake, CaseStyle::Camel, CaseStyle::Pascal];

    pub fn as_str(self) -> &'static str {
        match self {
            CaseStyle::Kebab => "kebab",
            CaseStyle::Snake => "snake",
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
        }
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kebab" => Ok(CaseStyle::Kebab),
            "snake" => Ok(CaseStyle::Snake),
            "camel" => Ok(CaseStyle::Camel),
            "pascal" => Ok(CaseStyle::Pascal),
            other => Err(format!("Unknown case style: {other}")),
        }
    }
}

/// Identifies one of the five parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPart {
    Component,
    Property,
    Element,
    Variant,
    State,
}

impl TokenPart {
    pub const ALL: [TokenPart; 5] = [
        TokenPart::Component,
        TokenPart::Property,
        TokenPart::Element,
        TokenPart::Variant,
        TokenPart::State,
    ];

    /// Preset chips offered for this part.
    pub fn presets(self) -> &'static [&'static str] {
        match self {
            TokenPart::Component => &COMPONENT_PRESETS,
            TokenPart::Property => &PROPERTY_PRESETS,
            TokenPart::Element => &ELEMENT_PRESETS,
            TokenPart::Variant => &VARIANT_PRESETS,
            TokenPart::State => &STATE_PRESETS,
        }
    }
}

/// The five ordered parts of a token name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenParts {
    pub component: String,
    pub property: String,
    pub element: String,
    pub variant: String,
    pub state: String,
}

impl TokenParts {
    pub fn get(&self, part: TokenPart) -> &str {
        match part {
            TokenPart::Component => &self.component,
            TokenPart::Property => &self.property,
            TokenPart::Element => &self.element,
            TokenPart::Variant => &self.variant,
            TokenPart::State => &self.state,
        }
    }

    pub fn set(&mut self, part: TokenPart, value: impl Into<String>) {
        let slot = match part {
            TokenPart::Component => &mut self.component,
            TokenPart::Property => &mut self.property,
            TokenPart::Element => &mut self.element,
            TokenPart::Variant => &mut self.variant,
            TokenPart::State => &mut self.state,
        };
        *slot = value.into();
    }

    fn joined(&self) -> String {
        TokenPart::ALL
            .iter()
            .map(|&p| self.get(p))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Quick category presets. Each sets property and element together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryPreset {
    Colors,
    Typography,
    Duration,
    Shadows,
    Border,
    Size,
    Gradients,
    Icon,
}

impl CategoryPreset {
    pub const ALL: [CategoryPreset; 8] = [
        CategoryPreset::Colors,
        CategoryPreset::Typography,
        CategoryPreset::Duration,
        CategoryPreset::Shadows,
        CategoryPreset::Border,
        CategoryPreset::Size,
        CategoryPreset::Gradients,
        CategoryPreset::Icon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryPreset::Colors => "Colors",
            CategoryPreset::Typography => "Typography",
            CategoryPreset::Duration => "Duration",
            CategoryPreset::Shadows => "Shadows",
            CategoryPreset::Border => "Border",
            CategoryPreset::Size => "Size",
            CategoryPreset::Gradients => "Gradients",
            CategoryPreset::Icon => "Icon",
        }
    }

    /// `(property, element)` applied by this preset.
    pub fn fields(self) -> (&'static str, &'static str) {
        match self {
            CategoryPreset::Colors => ("color", "background"),
            CategoryPreset::Typography => ("font", "text"),
            CategoryPreset::Duration => ("duration", "transition"),
            CategoryPreset::Shadows => ("shadow", "container"),
            CategoryPreset::Border => ("border", "ring"),
            CategoryPreset::Size => ("size", "container"),
            CategoryPreset::Gradients => ("gradient", "background"),
            CategoryPreset::Icon => ("color", "icon"),
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Builds a token name from its parts and formatting settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenNameComposer {
    pub parts: TokenParts,
    pub separator: Separator,
    pub case: CaseStyle,
}

impl TokenNameComposer {
    pub fn new(parts: TokenParts) -> Self {
        Self { parts, ..Self::default() }
    }

    /// The starting state of the builder: `button-color-background-primary-default`.
    pub fn with_defaults() -> Self {
        Self::new(TokenParts {
            component: "button".into(),
            property: "color".into(),
            element: "background".into(),
            variant: "primary".into(),
            state: "default".into(),
        })
    }

    pub fn set_part(&mut self, part: TokenPart, value: impl Into<String>) {
        self.parts.set(part, value);
    }

    pub fn apply_preset(&mut self, preset: CategoryPreset) {
        let (property, element) = preset.fields();
        self.parts.property = property.to_string();
        self.parts.element = element.to_string();
        log::debug!("Applied {} preset", preset.label());
    }

    /// The composed name, derived entirely from the current parts and settings.
    pub fn compose(&self) -> String {
        let cased = apply_case(&self.parts.joined(), self.case);
        let sep = self.separator.as_char();
        match self.case {
            CaseStyle::Kebab => cased.replace('-', &sep.to_string()),
            CaseStyle::Camel | CaseStyle::Pascal => cased.replace('-', ""),
            CaseStyle::Snake => cased.replace('_', &sep.to_string()),
        }
    }
}

impl fmt::Display for TokenNameComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compose())
    }
}

fn apply_case(raw: &str, case: CaseStyle) -> String {
    match case {
        CaseStyle::Kebab => raw.to_string(),
        CaseStyle::Snake => raw.replace('-', "_"),
        CaseStyle::Camel => capitalize_after_hyphen(raw, false),
        CaseStyle::Pascal => capitalize_after_hyphen(raw, true),
    }
}

/// Uppercase each lowercase ASCII letter that follows a `-` (and the first one if `leading`),
/// dropping that hyphen. Other hyphens are kept.
fn capitalize_after_hyphen(raw: &str, leading: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut at_start = true;
    while let Some(c) = chars.next() {
        if at_start && leading && c.is_ascii_lowercase() {
            out.push(c.to_ascii_uppercase());
        } else if c == '-' && chars.peek().is_some_and(|n| n.is_ascii_lowercase()) {
            if let Some(next) = chars.next() {
                out.push(next.to_ascii_uppercase());
            }
        } else {
            out.push(c);
        }
        at_start = false;
    }
    out
}
