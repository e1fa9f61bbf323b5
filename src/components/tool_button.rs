use eframe::egui;

use crate::tools::Tool;
use crate::util::time;

/// How long the click feedback shake runs before it clears itself, so a
/// repeated click on the same button retriggers it.
pub const SHAKE_DURATION: f32 = 0.2;

/// A selectable tool button with a brief shake on click.
pub struct ToolButton<'a> {
    pub tool: Tool,
    pub label: &'a str,
    pub selected: bool,
    /// When this button's shake feedback started, if it is running.
    pub shake_started: Option<f32>,
}

impl ToolButton<'_> {
    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(ui.available_width(), 26.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let rect = rect.translate(egui::vec2(self.shake_offset(), 0.0));
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(60)
            } else {
                egui::Color32::from_gray(40)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };
            ui.painter().text(
                egui::pos2(rect.left() + 8.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                format!("{} {}", self.tool.icon(), self.label),
                egui::FontId::proportional(15.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }

    /// Horizontal jitter while the shake is live; zero once it expires.
    fn shake_offset(&self) -> f32 {
        let Some(started) = self.shake_started else {
            return 0.0;
        };
        let elapsed = time::current_time() - started;
        if !(0.0..SHAKE_DURATION).contains(&elapsed) {
            return 0.0;
        }
        (elapsed * 70.0).sin() * 2.0
    }
}
