use serde::{Deserialize, Serialize};

/// The drawing tools the user can pick from the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    Brush,
    Eraser,
    Rectangle,
    Circle,
    Triangle,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
    ];

    /// Key of this tool's button label in the language tables.
    pub fn label_key(self) -> &'static str {
        match self {
            Tool::Brush => "brush",
            Tool::Eraser => "eraser",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Triangle => "triangle",
        }
    }

    /// Icon shown next to the button label.
    pub fn icon(self) -> &'static str {
        match self {
            Tool::Brush => "🖌",
            Tool::Eraser => "⌫",
            Tool::Rectangle => "◻",
            Tool::Circle => "○",
            Tool::Triangle => "△",
        }
    }

    /// Shape tools preview a single geometric figure per pointer move;
    /// brush and eraser accumulate a freehand path instead.
    pub fn is_shape(self) -> bool {
        matches!(self, Tool::Rectangle | Tool::Circle | Tool::Triangle)
    }
}
