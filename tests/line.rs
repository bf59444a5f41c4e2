use egui::Pos2;
use line_grapher::line::{apply_intercept_change, apply_slope_change, recompute_from_points, Slope};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn diagonal_through_origin() {
    let line = recompute_from_points(Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0));
    assert_eq!(line.slope, Slope::Defined(1.0));
    assert_eq!(line.intercept, Some(0.0));
}

#[test]
fn negative_slope_and_offset() {
    let line = recompute_from_points(Pos2::new(-2.0, 7.0), Pos2::new(2.0, -1.0));
    assert_eq!(line.slope_value(), Some(-2.0));
    assert_eq!(line.intercept, Some(3.0));
}

#[test]
fn equal_x_is_vertical() {
    let line = recompute_from_points(Pos2::new(2.0, 0.0), Pos2::new(2.0, 5.0));
    assert!(line.is_vertical());
    assert_eq!(line.slope_value(), None);
    assert_eq!(line.intercept, None);
}

#[test]
fn identical_points_are_vertical() {
    let line = recompute_from_points(Pos2::new(4.0, 4.0), Pos2::new(4.0, 4.0));
    assert!(line.is_vertical());
}

#[test]
fn slope_change_to_zero_keeps_distance() {
    let p2 = apply_slope_change(0.0, Pos2::new(3.0, 4.0));
    assert_eq!(p2, Pos2::new(5.0, 0.0));
}

#[test]
fn slope_change_rotates_about_origin() {
    let p2 = apply_slope_change(1.0, Pos2::new(5.0, 0.0));
    assert!(approx(p2.x, 5.0 / 2f32.sqrt()));
    assert!(approx(p2.y, 5.0 / 2f32.sqrt()));
    assert!(approx(p2.x.hypot(p2.y), 5.0));
}

#[test]
fn slope_change_lands_in_right_half_plane() {
    let p2 = apply_slope_change(-2.0, Pos2::new(-3.0, 4.0));
    assert!(p2.x > 0.0);
    assert!(p2.y < 0.0);
    assert!(approx(p2.y / p2.x, -2.0));
}

#[test]
fn slope_change_at_origin_stays_at_origin() {
    let p2 = apply_slope_change(3.0, Pos2::new(0.0, 0.0));
    assert_eq!(p2, Pos2::new(0.0, 0.0));
}

#[test]
fn intercept_change_translates_both_points() {
    let (p1, p2) = apply_intercept_change(1.0, Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0));
    assert_eq!(p1, Pos2::new(0.0, 1.0));
    assert_eq!(p2, Pos2::new(5.0, 6.0));
    let line = recompute_from_points(p1, p2);
    assert_eq!(line.slope, Slope::Defined(1.0));
    assert_eq!(line.intercept, Some(1.0));
}
