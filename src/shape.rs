use egui::{Pos2, pos2};

/// Geometry of one previewed figure, derived from the stroke origin and the
/// current pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Anchored at the current pointer position; `width` and `height` are
    /// signed extents pointing back toward the origin.
    Rect {
        anchor: Pos2,
        width: f32,
        height: f32,
    },
    /// Centered at the stroke origin, not at the pointer.
    Circle { center: Pos2, radius: f32 },
    Triangle { a: Pos2, b: Pos2, c: Pos2 },
}

impl Shape {
    pub fn rect(origin: Pos2, current: Pos2) -> Self {
        Self::Rect {
            anchor: current,
            width: origin.x - current.x,
            height: origin.y - current.y,
        }
    }

    pub fn circle(origin: Pos2, current: Pos2) -> Self {
        Self::Circle {
            center: origin,
            radius: origin.distance(current),
        }
    }

    /// Isosceles triangle: origin, current point, and the current point's x
    /// reflected across the origin.
    pub fn triangle(origin: Pos2, current: Pos2) -> Self {
        Self::Triangle {
            a: origin,
            b: current,
            c: pos2(2.0 * origin.x - current.x, current.y),
        }
    }
}
