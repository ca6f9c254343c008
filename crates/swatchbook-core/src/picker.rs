//! Color picker model: a saturation/brightness square, a hue strip and text inputs.
//!
//! Geometry is supplied by the host through [`PickerLayout`]. The picker never reads the
//! screen itself; it turns pointer events into colors and tells the host, through
//! [`ColorPicker::captures_pointer`], when global move/up listeners are needed.

use crate::color::{normalize_hex_input, parse_int_prefix, Color};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Pointer event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

/// Screen areas of the two interactive regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerLayout {
    pub saturation_brightness: Rect,
    pub hue_strip: Rect,
}

/// Which gesture, if any, currently owns the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingSaturationBrightness,
    DraggingHue,
}

impl DragState {
    pub fn is_dragging(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl std::str::FromStr for RgbChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Self::Red),
            "g" | "green" => Ok(Self::Green),
            "b" | "blue" => Ok(Self::Blue),
            other => Err(format!("Unknown channel: {other}")),
        }
    }
}

/// Picker state. Brightness is used as HSL lightness.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPicker {
    /// Degrees, `0..=360`.
    hue: f64,
    /// Percent, `0..=100`.
    saturation: f64,
    /// Percent, `0..=100`.
    brightness: f64,
    hex_input: String,
    rgb_input: [u8; 3],
    drag: DragState,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 100.0,
            brightness: 50.0,
            hex_input: String::new(),
            rgb_input: [0, 0, 0],
            drag: DragState::Idle,
        }
    }
}

impl ColorPicker {
    pub fn new(value: Color) -> Self {
        let mut picker = Self::default();
        picker.sync_from(value);
        picker
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn hex_input(&self) -> &str {
        &self.hex_input
    }

    pub fn rgb_input(&self) -> [u8; 3] {
        self.rgb_input
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Re-read every field from an externally supplied value.
    pub fn sync_from(&mut self, value: Color) {
        let hsl = value.to_hsl();
        self.hue = hsl.h;
        self.saturation = hsl.s * 100.0;
        self.brightness = hsl.l * 100.0;
        self.hex_input = value.to_hex();
        self.rgb_input = [value.r, value.g, value.b];
    }

    /// The color described by the current hue, saturation and brightness.
    pub fn current_color(&self) -> Color {
        Color::from_hsl(self.hue, self.saturation / 100.0, self.brightness / 100.0)
    }

    /// Whether the host must route global pointer move/up events to this picker.
    pub fn captures_pointer(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Feed a pointer event. Returns the new color when the event changed it.
    pub fn handle_pointer(&mut self, event: PointerEvent, layout: &PickerLayout) -> Option<Color> {
        match event {
            PointerEvent::Down { position } => {
                if layout.saturation_brightness.contains(position) {
                    self.transition(DragState::DraggingSaturationBrightness);
                    Some(self.apply_saturation_brightness(position, layout.saturation_brightness))
                } else if layout.hue_strip.contains(position) {
                    self.transition(DragState::DraggingHue);
                    Some(self.apply_hue(position, layout.hue_strip))
                } else {
                    None
                }
            }
            PointerEvent::Move { position } => match self.drag {
                DragState::Idle => None,
                DragState::DraggingSaturationBrightness => {
                    Some(self.apply_saturation_brightness(position, layout.saturation_brightness))
                }
                DragState::DraggingHue => Some(self.apply_hue(position, layout.hue_strip)),
            },
            PointerEvent::Up { .. } => {
                self.transition(DragState::Idle);
                None
            }
        }
    }

    /// Abandon any drag, e.g. when the picker is closed mid-gesture.
    pub fn cancel(&mut self) {
        self.transition(DragState::Idle);
    }

    /// Hex text edit. Emits only complete, valid values.
    pub fn set_hex_input(&mut self, input: &str) -> Option<Color> {
        self.hex_input = normalize_hex_input(input);
        Color::from_hex(&self.hex_input).ok()
    }

    /// RGB text edit. Non-numeric input reads as 0; always emits.
    pub fn set_rgb_channel(&mut self, channel: RgbChannel, input: &str) -> Color {
        let value = parse_int_prefix(input).unwrap_or(0).clamp(0, 255) as u8;
        let index = match channel {
            RgbChannel::Red => 0,
            RgbChannel::Green => 1,
            RgbChannel::Blue => 2,
        };
        self.rgb_input[index] = value;
        let [r, g, b] = self.rgb_input;
        Color::new(r, g, b)
    }

    /// Marker position inside the saturation/brightness square.
    pub fn saturation_brightness_marker(&self, layout: &PickerLayout) -> Point {
        let area = layout.saturation_brightness;
        Point::new(
            area.x0 + area.width() * self.saturation / 100.0,
            area.y0 + area.height() * (1.0 - self.brightness / 100.0),
        )
    }

    /// Marker position on the hue strip, vertically centered.
    pub fn hue_marker(&self, layout: &PickerLayout) -> Point {
        let area = layout.hue_strip;
        Point::new(area.x0 + area.width() * self.hue / 360.0, area.center().y)
    }

    fn transition(&mut self, next: DragState) {
        if self.drag != next {
            log::trace!("Picker drag {:?} -> {:?}", self.drag, next);
            self.drag = next;
        }
    }

    fn apply_saturation_brightness(&mut self, position: Point, area: Rect) -> Color {
        let (x, y) = unit_position(position, area);
        self.saturation = x * 100.0;
        self.brightness = (1.0 - y) * 100.0;
        self.current_color()
    }

    fn apply_hue(&mut self, position: Point, area: Rect) -> Color {
        let (x, _) = unit_position(position, area);
        self.hue = x * 360.0;
        self.current_color()
    }
}

/// Position relative to `area`, clamped to `[0, 1]` on both axes.
fn unit_position(position: Point, area: Rect) -> (f64, f64) {
    let axis = |v: f64, origin: f64, extent: f64| {
        if extent > 0.0 {
            ((v - origin) / extent).clamp(0.0, 1.0)
        } else {
            0.0
        }
    };
    (
        axis(position.x, area.x0, area.width()),
        axis(position.y, area.y0, area.height()),
    )
}
