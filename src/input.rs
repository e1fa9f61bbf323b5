use egui::{Context, PointerButton, Pos2, Rect};

/// Where a pointer event landed.
#[derive(Debug, Clone, Copy)]
pub struct PointerLocation {
    /// The position in screen coordinates.
    pub position: Pos2,
    /// Whether this position is within the canvas bounds.
    pub on_canvas: bool,
}

/// Domain-level pointer events. Strokes may only begin on the canvas but can
/// end anywhere, so `Up` carries a location mostly for logging.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    Down(PointerLocation),
    Move(PointerLocation),
    Up(PointerLocation),
}

/// Converts raw egui pointer input into [`PointerEvent`]s, primary button
/// only.
pub struct PointerTracker {
    canvas_rect: Rect,
    last_pos: Option<Pos2>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl PointerTracker {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. after layout).
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn locate(&self, pos: Pos2) -> PointerLocation {
        PointerLocation {
            position: pos,
            on_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process this frame's raw input and generate our pointer events.
    pub fn poll(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            match input.pointer.hover_pos() {
                Some(pos) => {
                    if input.pointer.button_pressed(PointerButton::Primary) {
                        events.push(PointerEvent::Down(self.locate(pos)));
                    }
                    if Some(pos) != self.last_pos {
                        events.push(PointerEvent::Move(self.locate(pos)));
                    }
                    if input.pointer.button_released(PointerButton::Primary) {
                        events.push(PointerEvent::Up(self.locate(pos)));
                    }
                    self.last_pos = Some(pos);
                }
                None => {
                    // A release while outside the window still ends a stroke.
                    if input.pointer.button_released(PointerButton::Primary) {
                        if let Some(last) = self.last_pos {
                            events.push(PointerEvent::Up(self.locate(last)));
                        }
                    }
                    self.last_pos = None;
                }
            }
        });

        events
    }
}
