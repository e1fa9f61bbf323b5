use eframe::egui;

use crate::app::EaselApp;
use crate::input::PointerEvent;
use crate::state::BACKGROUND;
use crate::surface::PixelSurface;

pub fn canvas_panel(app: &mut EaselApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, egui::Sense::drag());
        let rect = response.rect;

        // The surface is sized to the first laid-out rect and never resized
        // afterwards; resizing the window leaves the buffer untouched.
        if app.surface.is_none() {
            let width = rect.width().max(1.0) as usize;
            let height = rect.height().max(1.0) as usize;
            app.surface = Some(PixelSurface::new(width, height, BACKGROUND));
            app.canvas_dirty = true;
            log::info!("canvas surface initialized at {width}x{height}");
        }

        app.tracker.set_canvas_rect(rect);
        // hovered() is layer-aware, so a press on a popup floating above the
        // canvas does not start a stroke.
        let canvas_hovered = response.hovered();
        for event in app.tracker.poll(ctx) {
            if matches!(event, PointerEvent::Down(_)) && !canvas_hovered {
                continue;
            }
            app.handle_pointer_event(event, rect);
        }
        // A release the tracker never saw (e.g. focus loss mid-drag) still
        // ends the stroke.
        let primary_down = ctx.input(|input| input.pointer.primary_down());
        if app.controller.is_drawing() && !primary_down {
            app.controller.pointer_up();
        }

        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }

        if let Some(surface) = app.surface.as_ref() {
            if app.canvas_dirty || app.texture.is_none() {
                let image = surface.to_color_image();
                match app.texture.as_mut() {
                    Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
                    None => {
                        app.texture =
                            Some(ctx.load_texture("canvas", image, egui::TextureOptions::NEAREST));
                    }
                }
                app.canvas_dirty = false;
            }
        }

        if let Some(texture) = app.texture.as_ref() {
            painter.image(
                texture.id(),
                egui::Rect::from_min_size(rect.min, texture.size_vec2()),
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
    });
}
