use egui::Pos2;

use crate::shape::Shape;
use crate::state::EditorState;
use crate::surface::{Paint, Snapshot, Surface};
use crate::tools::Tool;

/// The stroke currently in flight.
struct StrokeSession {
    origin: Pos2,
    /// Pointer path accumulated across moves; brush and eraser re-stroke it
    /// in full after every snapshot restore.
    path: Vec<Pos2>,
    snapshot: Snapshot,
}

/// Drives the Idle -> Active -> Idle stroke lifecycle over a surface.
///
/// Pointer-down begins a session and captures a snapshot; every pointer-move
/// restores that snapshot and renders exactly one figure for the current
/// tool; pointer-up commits whatever the last move rendered.
#[derive(Default)]
pub struct CanvasController {
    session: Option<StrokeSession>,
}

impl CanvasController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.session.is_some()
    }

    pub fn pointer_down(&mut self, pos: Pos2, surface: &dyn Surface) {
        self.session = Some(StrokeSession {
            origin: pos,
            path: vec![pos],
            snapshot: surface.snapshot(),
        });
    }

    /// No-op while idle, so nothing is ever drawn outside a stroke.
    pub fn pointer_move(&mut self, pos: Pos2, state: &EditorState, surface: &mut dyn Surface) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        surface.restore(&session.snapshot);
        match state.tool {
            Tool::Brush | Tool::Eraser => {
                session.path.push(pos);
                surface.stroke_polyline(&session.path, state.stroke_color(), state.brush_width);
            }
            Tool::Rectangle => {
                surface.draw_shape(&Shape::rect(session.origin, pos), &shape_paint(state));
            }
            Tool::Circle => {
                surface.draw_shape(&Shape::circle(session.origin, pos), &shape_paint(state));
            }
            Tool::Triangle => {
                surface.draw_shape(&Shape::triangle(session.origin, pos), &shape_paint(state));
            }
        }
    }

    /// Ends the session wherever the pointer is; the last rendered frame
    /// stays committed.
    pub fn pointer_up(&mut self) {
        self.session = None;
    }
}

fn shape_paint(state: &EditorState) -> Paint {
    Paint {
        color: state.color,
        width: state.brush_width,
        fill: state.fill_shapes,
    }
}
