use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::tools::Tool;

/// Canvas background. Clearing refills with this, and the eraser strokes in
/// it; exported images are never transparent.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Preset swatches shown in the colors section, in display order.
pub const PRESET_COLORS: [Color32; 4] = [
    Color32::BLACK,
    Color32::from_rgb(224, 49, 49),
    Color32::from_rgb(47, 158, 68),
    Color32::from_rgb(25, 113, 194),
];

/// Which palette slot is currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Swatch {
    Preset(usize),
    Custom,
}

/// All user-facing editor settings, owned by the app and persisted across
/// runs. The stroke in flight lives in [`crate::CanvasController`], not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorState {
    pub tool: Tool,
    pub color: Color32,
    pub brush_width: f32,
    /// Whether shape tools draw filled figures instead of outlines.
    pub fill_shapes: bool,
    pub locale: Locale,
    pub swatch: Swatch,
    /// Color of the custom swatch, set from the color picker.
    pub custom_color: Color32,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color: Color32::BLACK,
            brush_width: 5.0,
            fill_shapes: false,
            locale: Locale::default(),
            swatch: Swatch::Preset(0),
            custom_color: Color32::from_rgb(76, 110, 245),
        }
    }
}

impl EditorState {
    /// Select a palette slot. Exactly one slot is selected at a time, and the
    /// current color always mirrors it.
    pub fn select_swatch(&mut self, swatch: Swatch) {
        self.swatch = swatch;
        self.color = match swatch {
            Swatch::Preset(i) => PRESET_COLORS.get(i).copied().unwrap_or(self.color),
            Swatch::Custom => self.custom_color,
        };
    }

    /// Apply a color from the picker to the custom swatch, then select it
    /// through the same path as a normal swatch click.
    pub fn pick_custom_color(&mut self, color: Color32) {
        self.custom_color = color;
        self.select_swatch(Swatch::Custom);
    }

    /// Color strokes are drawn with. The eraser always strokes in the canvas
    /// background, whatever swatch is selected.
    pub fn stroke_color(&self) -> Color32 {
        if self.tool == Tool::Eraser {
            BACKGROUND
        } else {
            self.color
        }
    }
}
