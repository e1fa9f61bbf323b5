use easel::controller::CanvasController;
use easel::state::{BACKGROUND, EditorState};
use easel::surface::{PixelSurface, Surface};
use easel::tools::Tool;
use egui::{Color32, pos2};

fn blank_surface() -> PixelSurface {
    PixelSurface::new(64, 64, BACKGROUND)
}

fn marked_pixels(surface: &PixelSurface) -> usize {
    surface.pixels().iter().filter(|&&c| c != BACKGROUND).count()
}

#[test]
fn move_without_pointer_down_draws_nothing() {
    let mut surface = blank_surface();
    let mut controller = CanvasController::new();
    let state = EditorState::default();

    controller.pointer_move(pos2(10.0, 10.0), &state, &mut surface);
    controller.pointer_move(pos2(40.0, 40.0), &state, &mut surface);

    assert_eq!(marked_pixels(&surface), 0);
}

#[test]
fn shape_preview_does_not_smear() {
    // Dragging through intermediate points must leave the same pixels as a
    // single move straight to the release point.
    for tool in [Tool::Rectangle, Tool::Circle, Tool::Triangle] {
        let mut state = EditorState::default();
        state.tool = tool;

        let mut dragged = blank_surface();
        let mut controller = CanvasController::new();
        controller.pointer_down(pos2(8.0, 8.0), &dragged);
        for point in [pos2(20.0, 12.0), pos2(44.0, 50.0), pos2(31.0, 25.0)] {
            controller.pointer_move(point, &state, &mut dragged);
        }
        controller.pointer_up();

        let mut direct = blank_surface();
        let mut one_shot = CanvasController::new();
        one_shot.pointer_down(pos2(8.0, 8.0), &direct);
        one_shot.pointer_move(pos2(31.0, 25.0), &state, &mut direct);
        one_shot.pointer_up();

        assert_eq!(dragged.pixels(), direct.pixels(), "smearing with {tool:?}");
    }
}

#[test]
fn brush_path_accumulates_across_moves() {
    let mut surface = blank_surface();
    let mut controller = CanvasController::new();
    let state = EditorState::default();

    controller.pointer_down(pos2(10.0, 32.0), &surface);
    controller.pointer_move(pos2(30.0, 32.0), &state, &mut surface);
    let after_first = marked_pixels(&surface);
    controller.pointer_move(pos2(50.0, 32.0), &state, &mut surface);
    controller.pointer_up();

    // The earlier segment survives the snapshot restore of the second move.
    assert!(after_first > 0);
    assert!(marked_pixels(&surface) > after_first);
    assert_ne!(surface.pixel(20, 32), Some(BACKGROUND));
    assert_ne!(surface.pixel(40, 32), Some(BACKGROUND));
}

#[test]
fn eraser_strokes_in_the_background_color() {
    let mut surface = blank_surface();
    let mut controller = CanvasController::new();
    let mut state = EditorState::default();
    state.color = Color32::RED;

    controller.pointer_down(pos2(10.0, 32.0), &surface);
    controller.pointer_move(pos2(50.0, 32.0), &state, &mut surface);
    controller.pointer_up();
    assert!(marked_pixels(&surface) > 0);

    // Erase over the same path; the selected color must be ignored.
    state.tool = Tool::Eraser;
    state.brush_width = 12.0;
    controller.pointer_down(pos2(8.0, 32.0), &surface);
    controller.pointer_move(pos2(52.0, 32.0), &state, &mut surface);
    controller.pointer_up();

    assert_eq!(marked_pixels(&surface), 0);
}

#[test]
fn pointer_up_ends_the_session_wherever_it_occurs() {
    let mut surface = blank_surface();
    let mut controller = CanvasController::new();
    let state = EditorState::default();

    controller.pointer_down(pos2(10.0, 10.0), &surface);
    controller.pointer_move(pos2(30.0, 30.0), &state, &mut surface);
    assert!(controller.is_drawing());

    // Release happens off-canvas; the committed pixels stay put.
    controller.pointer_up();
    assert!(!controller.is_drawing());
    let committed = marked_pixels(&surface);

    controller.pointer_move(pos2(55.0, 55.0), &state, &mut surface);
    assert_eq!(marked_pixels(&surface), committed);
}
