use egui::Pos2;
use image::Rgba;
use line_grapher::config::{rgba, GraphConfig};
use line_grapher::point::PointId;
use line_grapher::raster::TRANSPARENT;
use line_grapher::renderer::Renderer;
use line_grapher::state::GraphState;

fn panel() -> Rgba<u8> {
    rgba(GraphConfig::default().palette.panel)
}

fn grid() -> Rgba<u8> {
    rgba(GraphConfig::default().palette.grid)
}

#[test]
fn background_has_panel_grid_and_rounded_corners() {
    let mut renderer = Renderer::new(&GraphConfig::default());
    renderer.draw_background(500, 500);
    let surface = renderer.surface();

    assert_eq!(surface.pixel(0, 0), TRANSPARENT);
    assert_eq!(surface.pixel(499, 499), TRANSPARENT);
    assert_eq!(surface.pixel(75, 75), panel());
    assert_eq!(surface.pixel(100, 75), grid());
    assert_eq!(surface.pixel(103, 75), panel());
    assert_eq!(surface.pixel(75, 100), grid());
}

#[test]
fn axes_are_drawn_wider_than_grid_lines() {
    let mut renderer = Renderer::new(&GraphConfig::default());
    renderer.draw_background(500, 500);
    let surface = renderer.surface();

    // 5px axis at x = 250 against a 2px line at x = 200
    assert_eq!(surface.pixel(251, 75), grid());
    assert_eq!(surface.pixel(75, 251), grid());
    assert_eq!(surface.pixel(201, 75), panel());
    assert_eq!(surface.pixel(75, 201), panel());
}

#[test]
fn drawing_background_twice_is_identical() {
    let mut renderer = Renderer::new(&GraphConfig::default());
    renderer.draw_background(500, 500);
    let once = renderer.surface().clone();
    renderer.draw_background(500, 500);
    assert_eq!(renderer.surface(), &once);
}

#[test]
fn background_wipes_previous_drawing() {
    let config = GraphConfig::default();
    let state = GraphState::new(&config);
    let mut renderer = Renderer::new(&config);
    renderer.draw_background(500, 500);
    let bare = renderer.surface().clone();

    renderer.snapshot_background();
    renderer.render(&state, None);
    assert_ne!(renderer.surface(), &bare);

    renderer.draw_background(500, 500);
    assert_eq!(renderer.surface(), &bare);
}

#[test]
fn snapshot_matches_freshly_drawn_background() {
    let mut renderer = Renderer::new(&GraphConfig::default());
    assert!(renderer.snapshot().is_none());
    renderer.draw_background(500, 500);
    renderer.snapshot_background();
    assert_eq!(renderer.snapshot(), Some(renderer.surface()));
}

#[test]
fn resizing_drops_the_snapshot() {
    let mut renderer = Renderer::new(&GraphConfig::default());
    renderer.draw_background(500, 500);
    renderer.snapshot_background();
    renderer.draw_background(600, 400);
    assert!(renderer.snapshot().is_none());
    assert_eq!(renderer.surface().width(), 600);
    assert_eq!(renderer.surface().height(), 400);
}

#[test]
fn render_draws_points_over_the_line() {
    let config = GraphConfig::default();
    let state = GraphState::new(&config);
    let mut renderer = Renderer::new(&config);
    renderer.relayout(&state);

    let surface = renderer.surface();
    assert_eq!(surface.pixel(250, 250), rgba(config.palette.first_point));
    assert_eq!(surface.pixel(375, 166), rgba(config.palette.second_point));

    // Halfway between the two points, away from both discs.
    assert_eq!(surface.pixel(312, 208), rgba(config.palette.line));
}

#[test]
fn moving_a_point_leaves_no_ghost() {
    let config = GraphConfig::default();
    let mut state = GraphState::new(&config);
    let mut renderer = Renderer::new(&config);
    renderer.relayout(&state);

    state.move_point(PointId::First, Pos2::new(100.0, 400.0));
    renderer.render(&state, Some(PointId::First));

    let snapshot = renderer.snapshot().cloned().expect("snapshot after relayout");
    let surface = renderer.surface();
    // Old spot of the first point, off the new line.
    assert_eq!(surface.pixel(240, 260), snapshot.pixel(240, 260));
    assert_eq!(surface.pixel(100, 400), rgba(config.palette.first_point));
}

#[test]
fn focused_point_is_drawn_underneath() {
    let config = GraphConfig::default();
    let mut state = GraphState::new(&config);
    let mut renderer = Renderer::new(&config);
    renderer.relayout(&state);

    state.move_point(PointId::Second, Pos2::new(260.0, 250.0));
    renderer.render(&state, Some(PointId::Second));
    assert_eq!(
        renderer.surface().pixel(255, 250),
        rgba(config.palette.first_point)
    );

    renderer.render(&state, Some(PointId::First));
    assert_eq!(
        renderer.surface().pixel(255, 250),
        rgba(config.palette.second_point)
    );
}

#[test]
fn erase_point_restores_the_square_from_the_snapshot() {
    let config = GraphConfig::default();
    let state = GraphState::new(&config);
    let mut renderer = Renderer::new(&config);
    renderer.relayout(&state);

    renderer.erase_point(Pos2::new(250.0, 250.0), 20.0);
    let snapshot = renderer.snapshot().cloned().expect("snapshot after relayout");
    for (x, y) in [(231, 231), (250, 250), (268, 268)] {
        assert_eq!(renderer.surface().pixel(x, y), snapshot.pixel(x, y));
    }
    // Second point is outside the square and stays drawn.
    assert_eq!(
        renderer.surface().pixel(375, 166),
        rgba(config.palette.second_point)
    );
}

#[test]
fn points_dragged_off_surface_are_clipped() {
    let config = GraphConfig::default();
    let mut state = GraphState::new(&config);
    let mut renderer = Renderer::new(&config);
    renderer.relayout(&state);

    state.move_point(PointId::Second, Pos2::new(900.0, -300.0));
    renderer.render(&state, Some(PointId::Second));
    assert_eq!(renderer.surface().width(), 500);
    assert_eq!(
        renderer.surface().pixel(250, 250),
        rgba(config.palette.first_point)
    );
}

#[test]
fn dirty_flag_tracks_redraws() {
    let config = GraphConfig::default();
    let state = GraphState::new(&config);
    let mut renderer = Renderer::new(&config);
    renderer.relayout(&state);
    assert!(renderer.take_dirty());
    assert!(!renderer.take_dirty());
    renderer.render(&state, None);
    assert!(renderer.take_dirty());
}
