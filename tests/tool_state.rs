use easel::state::{BACKGROUND, EditorState, PRESET_COLORS, Swatch};
use easel::tools::Tool;
use egui::Color32;

#[test]
fn tool_selection_is_mutually_exclusive() {
    let mut state = EditorState::default();
    // Repeat clicks included on purpose.
    for tool in [
        Tool::Rectangle,
        Tool::Eraser,
        Tool::Eraser,
        Tool::Circle,
        Tool::Triangle,
        Tool::Brush,
    ] {
        state.tool = tool;
        let active: Vec<Tool> = Tool::ALL.into_iter().filter(|&t| state.tool == t).collect();
        assert_eq!(active, vec![tool]);
    }
}

#[test]
fn swatch_selection_mirrors_the_current_color() {
    let mut state = EditorState::default();
    for (i, &color) in PRESET_COLORS.iter().enumerate() {
        state.select_swatch(Swatch::Preset(i));
        assert_eq!(state.swatch, Swatch::Preset(i));
        assert_eq!(state.color, color);
    }
}

#[test]
fn picker_routes_through_swatch_selection() {
    let mut state = EditorState::default();
    state.select_swatch(Swatch::Preset(1));

    let teal = Color32::from_rgb(0, 128, 128);
    state.pick_custom_color(teal);

    assert_eq!(state.swatch, Swatch::Custom);
    assert_eq!(state.color, teal);
    assert_eq!(state.custom_color, teal);
}

#[test]
fn eraser_forces_the_background_stroke_color() {
    let mut state = EditorState::default();
    state.color = Color32::RED;

    state.tool = Tool::Eraser;
    assert_eq!(state.stroke_color(), BACKGROUND);

    state.tool = Tool::Brush;
    assert_eq!(state.stroke_color(), Color32::RED);
}
