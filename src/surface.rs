use egui::{Color32, ColorImage, Pos2, pos2};

use crate::shape::Shape;

/// Brush settings applied to a shape or polyline.
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    pub color: Color32,
    pub width: f32,
    pub fill: bool,
}

/// A full copy of the pixel buffer, captured at stroke start and restored
/// before every preview frame.
#[derive(Clone)]
pub struct Snapshot {
    pixels: Vec<Color32>,
}

/// Immediate-mode raster surface the stroke controller draws on.
///
/// The surface tracks pixels, not shapes; live preview works by snapshotting
/// at stroke start and restoring before each re-render.
pub trait Surface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn snapshot(&self) -> Snapshot;
    fn restore(&mut self, snapshot: &Snapshot);
    /// Fill the whole buffer with one opaque color.
    fn fill(&mut self, color: Color32);
    /// Stroke a connected polyline with round caps.
    fn stroke_polyline(&mut self, points: &[Pos2], color: Color32, width: f32);
    fn draw_shape(&mut self, shape: &Shape, paint: &Paint);
    fn pixels(&self) -> &[Color32];
}

/// CPU raster surface; pixels are opaque sRGB values uploaded to an egui
/// texture for display.
pub struct PixelSurface {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
}

impl PixelSurface {
    pub fn new(width: usize, height: usize, background: Color32) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage {
            size: [self.width, self.height],
            pixels: self.pixels.clone(),
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    fn put(&mut self, x: i64, y: i64, color: Color32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = color;
    }

    fn stamp_disc(&mut self, center: Pos2, radius: f32, color: Color32) {
        let r = radius.max(0.5);
        let (x0, x1) = ((center.x - r).floor() as i64, (center.x + r).ceil() as i64);
        let (y0, y1) = ((center.y - r).floor() as i64, (center.y + r).ceil() as i64);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r * r {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        // Stamp discs at roughly 1px intervals along the segment.
        let steps = from.distance(to).ceil().max(1.0) as i64;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_disc(from.lerp(to, t), width / 2.0, color);
        }
    }

    fn fill_rect(&mut self, min: Pos2, max: Pos2, color: Color32) {
        let (x0, x1) = (min.x.floor() as i64, max.x.ceil() as i64);
        let (y0, y1) = (min.y.floor() as i64, max.y.ceil() as i64);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    fn outline_rect(&mut self, min: Pos2, max: Pos2, color: Color32, width: f32) {
        let corners = [min, pos2(max.x, min.y), max, pos2(min.x, max.y)];
        for i in 0..4 {
            self.line(corners[i], corners[(i + 1) % 4], color, width);
        }
    }

    fn outline_circle(&mut self, center: Pos2, radius: f32, color: Color32, width: f32) {
        let half = (width / 2.0).max(0.5);
        let outer = radius + half;
        let (x0, x1) = ((center.x - outer).floor() as i64, (center.x + outer).ceil() as i64);
        let (y0, y1) = ((center.y - outer).floor() as i64, (center.y + outer).ceil() as i64);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let d = (dx * dx + dy * dy).sqrt();
                if (d - radius).abs() <= half {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn fill_triangle(&mut self, a: Pos2, b: Pos2, c: Pos2, color: Color32) {
        fn edge(a: Pos2, b: Pos2, p: Pos2) -> f32 {
            (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
        }
        let (x0, x1) = (a.x.min(b.x).min(c.x).floor() as i64, a.x.max(b.x).max(c.x).ceil() as i64);
        let (y0, y1) = (a.y.min(b.y).min(c.y).floor() as i64, a.y.max(b.y).max(c.y).ceil() as i64);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = pos2(x as f32 + 0.5, y as f32 + 0.5);
                let (e0, e1, e2) = (edge(a, b, p), edge(b, c, p), edge(c, a, p));
                let inside = (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0)
                    || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0);
                if inside {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn outline_triangle(&mut self, a: Pos2, b: Pos2, c: Pos2, color: Color32, width: f32) {
        self.line(a, b, color, width);
        self.line(b, c, color, width);
        self.line(c, a, color, width);
    }
}

/// Normalize signed extents into min/max corners.
fn rect_corners(anchor: Pos2, width: f32, height: f32) -> (Pos2, Pos2) {
    let x0 = anchor.x.min(anchor.x + width);
    let x1 = anchor.x.max(anchor.x + width);
    let y0 = anchor.y.min(anchor.y + height);
    let y1 = anchor.y.max(anchor.y + height);
    (pos2(x0, y0), pos2(x1, y1))
}

impl Surface for PixelSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            pixels: self.pixels.clone(),
        }
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        if snapshot.pixels.len() == self.pixels.len() {
            self.pixels.copy_from_slice(&snapshot.pixels);
        }
    }

    fn fill(&mut self, color: Color32) {
        self.pixels.fill(color);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], color: Color32, width: f32) {
        if points.is_empty() {
            return;
        }
        if points.len() == 1 {
            self.stamp_disc(points[0], width / 2.0, color);
            return;
        }
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color, width);
        }
    }

    fn draw_shape(&mut self, shape: &Shape, paint: &Paint) {
        match *shape {
            Shape::Rect {
                anchor,
                width,
                height,
            } => {
                let (min, max) = rect_corners(anchor, width, height);
                if paint.fill {
                    self.fill_rect(min, max, paint.color);
                } else {
                    self.outline_rect(min, max, paint.color, paint.width);
                }
            }
            Shape::Circle { center, radius } => {
                if paint.fill {
                    self.stamp_disc(center, radius, paint.color);
                } else {
                    self.outline_circle(center, radius, paint.color, paint.width);
                }
            }
            Shape::Triangle { a, b, c } => {
                if paint.fill {
                    self.fill_triangle(a, b, c, paint.color);
                } else {
                    self.outline_triangle(a, b, c, paint.color, paint.width);
                }
            }
        }
    }

    fn pixels(&self) -> &[Color32] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_covers_every_pixel() {
        let mut surface = PixelSurface::new(8, 8, Color32::WHITE);
        surface.fill(Color32::RED);
        assert!(surface.pixels().iter().all(|&c| c == Color32::RED));
    }

    #[test]
    fn snapshot_restore_round_trips() {
        let mut surface = PixelSurface::new(16, 16, Color32::WHITE);
        let snapshot = surface.snapshot();
        surface.fill(Color32::BLACK);
        surface.restore(&snapshot);
        assert!(surface.pixels().iter().all(|&c| c == Color32::WHITE));
    }

    #[test]
    fn negative_extents_are_normalized() {
        let mut surface = PixelSurface::new(32, 32, Color32::WHITE);
        // Anchored bottom-right, extending back up and left.
        let shape = Shape::Rect {
            anchor: pos2(20.0, 20.0),
            width: -10.0,
            height: -10.0,
        };
        let paint = Paint {
            color: Color32::BLACK,
            width: 2.0,
            fill: true,
        };
        surface.draw_shape(&shape, &paint);
        assert_eq!(surface.pixel(15, 15), Some(Color32::BLACK));
        assert_eq!(surface.pixel(25, 25), Some(Color32::WHITE));
    }
}
