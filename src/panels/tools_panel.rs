use eframe::egui;

use crate::app::EaselApp;
use crate::components::tool_button::ToolButton;
use crate::i18n;
use crate::state::{PRESET_COLORS, Swatch};
use crate::tools::Tool;

pub fn tools_panel(app: &mut EaselApp, ctx: &egui::Context) {
    let locale = app.state.locale;
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(190.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);

            ui.heading(i18n::label(locale, "shapes"));
            for tool in Tool::ALL.into_iter().filter(|tool| tool.is_shape()) {
                tool_row(app, ui, tool);
            }
            ui.checkbox(&mut app.state.fill_shapes, i18n::label(locale, "fillColor"));

            ui.separator();
            ui.heading(i18n::label(locale, "options"));
            for tool in Tool::ALL.into_iter().filter(|tool| !tool.is_shape()) {
                tool_row(app, ui, tool);
            }
            ui.add(egui::Slider::new(&mut app.state.brush_width, 1.0..=30.0));

            ui.separator();
            ui.heading(i18n::label(locale, "colors"));
            swatch_row(app, ui);

            ui.separator();
            let button_size = [ui.available_width(), 28.0];
            if ui
                .add_sized(button_size, egui::Button::new(i18n::label(locale, "clear")))
                .clicked()
            {
                app.clear_canvas();
            }
            if ui
                .add_sized(button_size, egui::Button::new(i18n::label(locale, "save")))
                .clicked()
            {
                app.save_canvas();
            }
        });
}

fn tool_row(app: &mut EaselApp, ui: &mut egui::Ui, tool: Tool) {
    let shake_started = app
        .shake
        .and_then(|(shaking, started)| (shaking == tool).then_some(started));
    let button = ToolButton {
        tool,
        label: i18n::label(app.state.locale, tool.label_key()),
        selected: app.state.tool == tool,
        shake_started,
    };
    if button.show(ui).clicked() {
        app.select_tool(tool);
    }
    ui.add_space(2.0);
}

fn swatch_row(app: &mut EaselApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        for (i, color) in PRESET_COLORS.iter().enumerate() {
            let selected = app.state.swatch == Swatch::Preset(i);
            if swatch(ui, *color, selected).clicked() {
                app.state.select_swatch(Swatch::Preset(i));
                log::info!("color selected: {:?}", app.state.color);
            }
        }

        // The custom swatch doubles as the picker; picking a color selects it
        // through the same path as a preset click.
        let mut custom = app.state.custom_color;
        let response = egui::color_picker::color_edit_button_srgba(
            ui,
            &mut custom,
            egui::color_picker::Alpha::Opaque,
        );
        if response.changed() {
            app.state.pick_custom_color(custom);
            log::info!("custom color picked: {:?}", custom);
        }
        if app.state.swatch == Swatch::Custom {
            ui.painter().rect_stroke(
                response.rect.expand(2.0),
                3.0,
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
            );
        }
    });
}

fn swatch(ui: &mut egui::Ui, color: egui::Color32, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(22.0, 22.0), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let center = rect.center();
        ui.painter().circle_filled(center, 9.0, color);
        if selected {
            ui.painter()
                .circle_stroke(center, 9.0, egui::Stroke::new(2.0, egui::Color32::WHITE));
            ui.painter().circle_stroke(
                center,
                11.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
            );
        } else if response.hovered() {
            ui.painter().circle_stroke(
                center,
                10.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(160)),
            );
        }
    }
    response
}
