use easel::shape::Shape;
use egui::pos2;

#[test]
fn rectangle_is_anchored_at_the_current_point() {
    let shape = Shape::rect(pos2(10.0, 10.0), pos2(50.0, 40.0));
    match shape {
        Shape::Rect {
            anchor,
            width,
            height,
        } => {
            assert_eq!(anchor, pos2(50.0, 40.0));
            assert_eq!(width, -40.0);
            assert_eq!(height, -30.0);
        }
        other => panic!("expected a rectangle, got {other:?}"),
    }
}

#[test]
fn circle_is_centered_at_the_origin() {
    let shape = Shape::circle(pos2(0.0, 0.0), pos2(3.0, 4.0));
    match shape {
        Shape::Circle { center, radius } => {
            assert_eq!(center, pos2(0.0, 0.0));
            assert_eq!(radius, 5.0);
        }
        other => panic!("expected a circle, got {other:?}"),
    }
}

#[test]
fn triangle_reflects_the_current_point_across_the_origin() {
    let shape = Shape::triangle(pos2(20.0, 20.0), pos2(50.0, 60.0));
    match shape {
        Shape::Triangle { a, b, c } => {
            assert_eq!(a, pos2(20.0, 20.0));
            assert_eq!(b, pos2(50.0, 60.0));
            assert_eq!(c, pos2(-10.0, 60.0));
        }
        other => panic!("expected a triangle, got {other:?}"),
    }
}
