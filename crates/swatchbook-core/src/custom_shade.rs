//! Suggestion and validation of custom shades inserted between two existing ones.

use crate::color::{Color, is_valid_hex, mix, normalize_hex_input, parse_int_prefix};
use crate::scale::{ScaleCategory, Shade, ShadeLabel};
use thiserror::Error;

/// Reasons a custom shade cannot be inserted. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShadeError {
    #[error("No slot available after shade {0}")]
    NoSlotAvailable(ShadeLabel),
    #[error("Shade number must be between {after} and {before}")]
    InvalidLabel { after: ShadeLabel, before: ShadeLabel },
    #[error("Please enter a valid hex color")]
    InvalidColor,
    #[error("A shade with this number already exists")]
    DuplicateLabel(ShadeLabel),
}

/// The gap between two adjacent shades, with a suggested fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomShadeSlot {
    pub category: ScaleCategory,
    pub after: ShadeLabel,
    pub before: ShadeLabel,
    pub suggested_label: ShadeLabel,
    pub suggested_color: Color,
}

impl CustomShadeSlot {
    /// Open the slot following `after` in a merged, label-sorted shade list.
    pub fn open(
        category: ScaleCategory,
        shades: &[Shade],
        after: ShadeLabel,
    ) -> Result<Self, ShadeError> {
        let index = shades
            .iter()
            .position(|s| s.label == after)
            .ok_or(ShadeError::NoSlotAvailable(after))?;
        let lower = shades[index];
        let upper = *shades.get(index + 1).ok_or(ShadeError::NoSlotAvailable(after))?;

        Ok(Self {
            category,
            after: lower.label,
            before: upper.label,
            suggested_label: lower.label.midpoint(upper.label),
            suggested_color: mix(lower.color, upper.color, 0.5),
        })
    }

    /// Validate user input against this slot and the scale's current shades.
    ///
    /// Checks run in order: label bounds, color, then duplicates.
    pub fn confirm(
        &self,
        label_input: &str,
        color_input: &str,
        shades: &[Shade],
    ) -> Result<Shade, ShadeError> {
        let bounds_error = ShadeError::InvalidLabel { after: self.after, before: self.before };
        let value = parse_int_prefix(label_input.trim()).ok_or(bounds_error.clone())?;
        if value <= self.after.value() as i64 || value >= self.before.value() as i64 {
            return Err(bounds_error);
        }
        let label = ShadeLabel(value as u32);

        let color_input = normalize_hex_input(color_input);
        if !is_valid_hex(&color_input) {
            return Err(ShadeError::InvalidColor);
        }
        let color = Color::from_hex(&color_input).map_err(|_| ShadeError::InvalidColor)?;

        if shades.iter().any(|s| s.label == label) {
            return Err(ShadeError::DuplicateLabel(label));
        }

        Ok(Shade::custom(label.value(), color))
    }

    /// Suggested label formatted for a text field.
    pub fn suggested_label_text(&self) -> String {
        self.suggested_label.to_string()
    }

    /// Suggested color formatted for a text field.
    pub fn suggested_color_text(&self) -> String {
        self.suggested_color.to_hex()
    }
}
