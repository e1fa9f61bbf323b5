use std::path::PathBuf;

use eframe::egui;

use crate::components::tool_button;
use crate::controller::CanvasController;
use crate::input::{PointerEvent, PointerTracker};
use crate::state::{BACKGROUND, EditorState};
use crate::surface::{PixelSurface, Surface};
use crate::tools::Tool;
use crate::trail::CursorTrail;
use crate::util::time;
use crate::{export, i18n, panels};

/// Top-level application: owns the editor state, the raster surface, and the
/// stroke controller. We derive Deserialize/Serialize so user preferences
/// persist across runs; the canvas pixels themselves do not.
#[derive(serde::Deserialize, serde::Serialize, Default)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EaselApp {
    pub(crate) state: EditorState,
    #[serde(skip)]
    pub(crate) surface: Option<PixelSurface>,
    #[serde(skip)]
    pub(crate) texture: Option<egui::TextureHandle>,
    #[serde(skip)]
    pub(crate) canvas_dirty: bool,
    #[serde(skip)]
    pub(crate) controller: CanvasController,
    #[serde(skip)]
    pub(crate) tracker: PointerTracker,
    #[serde(skip)]
    pub(crate) trail: CursorTrail,
    /// Which tool button is shaking and since when.
    #[serde(skip)]
    pub(crate) shake: Option<(Tool, f32)>,
}

impl EaselApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value::<EaselApp>(storage, eframe::APP_KEY) {
                return app;
            }
        }
        Self::default()
    }

    pub(crate) fn select_tool(&mut self, tool: Tool) {
        self.state.tool = tool;
        self.shake = Some((tool, time::current_time()));
        log::info!("tool selected: {tool:?}");
    }

    pub(crate) fn clear_canvas(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.fill(BACKGROUND);
            self.canvas_dirty = true;
            log::info!("canvas cleared");
        }
    }

    pub(crate) fn save_canvas(&mut self) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        match export::export_to_dir(surface, &dir) {
            Ok(path) => log::info!("canvas exported to {}", path.display()),
            Err(err) => log::error!("canvas export failed: {err}"),
        }
    }

    pub(crate) fn handle_pointer_event(&mut self, event: PointerEvent, canvas_rect: egui::Rect) {
        match event {
            PointerEvent::Down(location) if location.on_canvas => {
                if let Some(surface) = self.surface.as_ref() {
                    let local = (location.position - canvas_rect.min).to_pos2();
                    self.controller.pointer_down(local, surface);
                }
            }
            PointerEvent::Down(_) => {}
            PointerEvent::Move(location) => {
                self.trail.push(location.position, time::current_time());
                if let Some(surface) = self.surface.as_mut() {
                    if self.controller.is_drawing() {
                        let local = (location.position - canvas_rect.min).to_pos2();
                        self.controller.pointer_move(local, &self.state, surface);
                        self.canvas_dirty = true;
                    }
                }
            }
            PointerEvent::Up(_) => self.controller.pointer_up(),
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Easel");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let menu_label = format!("🌐 {}", self.state.locale.native_name());
                    ui.menu_button(menu_label, |ui| {
                        for locale in i18n::Locale::ALL {
                            let selected = self.state.locale == locale;
                            if ui.selectable_label(selected, locale.native_name()).clicked() {
                                self.state.locale = locale;
                                log::info!("locale switched to {}", locale.tag());
                                ui.close_menu();
                            }
                        }
                    });
                });
            });
        });
    }

    fn paint_trail(&self, ctx: &egui::Context, now: f32) {
        if self.trail.is_empty() {
            return;
        }
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("cursor_trail"),
        ));
        for (pos, age) in self.trail.dots(now) {
            let fade = 1.0 - age;
            let radius = 1.0 + 4.0 * fade;
            let color = egui::Color32::from_rgba_unmultiplied(100, 181, 246, (fade * 160.0) as u8);
            painter.circle_filled(pos, radius, color);
        }
    }
}

impl eframe::App for EaselApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = time::current_time();

        self.top_bar(ctx);
        panels::tools_panel::tools_panel(self, ctx);
        panels::canvas_panel::canvas_panel(self, ctx);

        self.trail.prune(now);
        self.paint_trail(ctx, now);

        if self
            .shake
            .is_some_and(|(_, started)| now - started > tool_button::SHAKE_DURATION)
        {
            self.shake = None;
        }
        // Keep animating while the shake or the trail is live.
        if self.shake.is_some() || !self.trail.is_empty() {
            ctx.request_repaint();
        }
    }
}
