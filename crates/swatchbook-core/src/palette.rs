//! Palette state: base colors, generated ladders and custom shades per category.

use crate::color::{Color, ColorError, normalize_hex_input};
use crate::custom_shade::{CustomShadeSlot, ShadeError};
use crate::scale::{ColorScale, ScaleCategory, Shade, ShadeLabel, generate_scale, merge_shades};
use std::collections::HashMap;

/// State of one category.
#[derive(Debug, Clone, PartialEq)]
struct ScaleState {
    base: Color,
    generated: Vec<Shade>,
    custom: Vec<Shade>,
}

impl ScaleState {
    fn new(category: ScaleCategory, base: Color) -> Self {
        Self {
            base,
            generated: generate_scale(base, category),
            custom: Vec::new(),
        }
    }
}

/// Six semantic scales. Every mutation touches exactly one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    scales: [ScaleState; 6],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Create a palette from the built-in default base colors.
    pub fn new() -> Self {
        Self::with_base_colors(&HashMap::new())
    }

    /// Create a palette, overriding the default base color of any category in `bases`.
    pub fn with_base_colors(bases: &HashMap<ScaleCategory, Color>) -> Self {
        let scales = ScaleCategory::ALL.map(|category| {
            let base = bases
                .get(&category)
                .copied()
                .unwrap_or_else(|| category.default_base_color());
            ScaleState::new(category, base)
        });
        Self { scales }
    }

    fn state(&self, category: ScaleCategory) -> &ScaleState {
        &self.scales[category.index()]
    }

    fn state_mut(&mut self, category: ScaleCategory) -> &mut ScaleState {
        &mut self.scales[category.index()]
    }

    pub fn base_color(&self, category: ScaleCategory) -> Color {
        self.state(category).base
    }

    /// Parse and apply a new base color. Invalid input leaves the palette unchanged.
    pub fn set_base_color(&mut self, category: ScaleCategory, input: &str) -> Result<(), ColorError> {
        let color = Color::from_hex(&normalize_hex_input(input)).inspect_err(|e| {
            log::warn!("Ignoring base color for {}: {}", category, e);
        })?;
        self.set_base(category, color);
        Ok(())
    }

    /// Replace a category's base color and regenerate only its ladder.
    pub fn set_base(&mut self, category: ScaleCategory, color: Color) {
        let state = self.state_mut(category);
        state.base = color;
        state.generated = generate_scale(color, category);
        log::debug!("Regenerated {} scale from {}", category, color);
    }

    /// Merged generated and custom shades, ascending by label.
    pub fn shades(&self, category: ScaleCategory) -> Vec<Shade> {
        let state = self.state(category);
        merge_shades(&state.generated, &state.custom)
    }

    pub fn custom_shades(&self, category: ScaleCategory) -> &[Shade] {
        &self.state(category).custom
    }

    pub fn scale(&self, category: ScaleCategory) -> ColorScale {
        ColorScale {
            category,
            name: category.name(),
            shades: self.shades(category),
        }
    }

    /// All scales in canonical export order.
    pub fn scales(&self) -> Vec<ColorScale> {
        ScaleCategory::ALL.iter().map(|&c| self.scale(c)).collect()
    }

    /// Open the insertion slot that follows `after` in a category.
    pub fn open_custom_slot(
        &self,
        category: ScaleCategory,
        after: ShadeLabel,
    ) -> Result<CustomShadeSlot, ShadeError> {
        CustomShadeSlot::open(category, &self.shades(category), after)
    }

    /// Validate user input for a slot and append the shade on success.
    pub fn confirm_custom_shade(
        &mut self,
        slot: &CustomShadeSlot,
        label_input: &str,
        color_input: &str,
    ) -> Result<Shade, ShadeError> {
        let shade = slot
            .confirm(label_input, color_input, &self.shades(slot.category))
            .inspect_err(|e| log::warn!("Rejected custom {} shade: {}", slot.category, e))?;
        self.state_mut(slot.category).custom.push(shade);
        log::debug!("Added custom {} shade {} ({})", slot.category, shade.label, shade.color);
        Ok(shade)
    }

    /// Append a known custom shade, checking only for a duplicate label.
    pub fn add_custom_shade(
        &mut self,
        category: ScaleCategory,
        label: ShadeLabel,
        color: Color,
    ) -> Result<(), ShadeError> {
        if self.shades(category).iter().any(|s| s.label == label) {
            return Err(ShadeError::DuplicateLabel(label));
        }
        self.state_mut(category).custom.push(Shade::custom(label.value(), color));
        log::debug!("Added custom {} shade {} ({})", category, label, color);
        Ok(())
    }

    /// Remove a custom shade. Returns false when no custom shade has that label.
    pub fn remove_custom_shade(&mut self, category: ScaleCategory, label: ShadeLabel) -> bool {
        let custom = &mut self.state_mut(category).custom;
        let before = custom.len();
        custom.retain(|s| s.label != label);
        let removed = custom.len() != before;
        if removed {
            log::debug!("Removed custom {} shade {}", category, label);
        }
        removed
    }
}
