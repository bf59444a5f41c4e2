use crate::config::{rgba, GraphConfig};
use crate::grid::Grid;
use crate::point::{ControlPoint, PointId};
use crate::raster::Raster;
use crate::state::GraphState;
use egui::{Pos2, Rect, Vec2};
use image::Rgba;

const PANEL_CORNER_RADIUS: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgba<u8>,
    pub width: f32,
}

/// Draws the graph onto a [`Raster`] and keeps a snapshot of the bare grid so
/// that moving a point only needs the snapshot copied back, not a new grid.
pub struct Renderer {
    surface: Raster,
    snapshot: Option<Raster>,
    grid: Grid,
    panel_color: Rgba<u8>,
    grid_color: Rgba<u8>,
    line_style: LineStyle,
    // Where each point was last drawn, as (center, radius).
    drawn: [Option<(Pos2, f32)>; 2],
    dirty: bool,
}

impl Renderer {
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            surface: Raster::new(config.surface_width, config.surface_height),
            snapshot: None,
            grid: Grid::new(config.grid_spacing),
            panel_color: rgba(config.palette.panel),
            grid_color: rgba(config.palette.grid),
            line_style: LineStyle {
                color: rgba(config.palette.line),
                width: config.line_width,
            },
            drawn: [None; 2],
            dirty: true,
        }
    }

    pub fn surface(&self) -> &Raster {
        &self.surface
    }

    pub fn snapshot(&self) -> Option<&Raster> {
        self.snapshot.as_ref()
    }

    /// Whether the surface changed since the last [`Renderer::take_dirty`].
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Draws the rounded panel and the grid, replacing whatever was on the
    /// surface. Recreates the surface when the size changed, which also drops
    /// the snapshot.
    pub fn draw_background(&mut self, width: u32, height: u32) {
        if self.surface.width() != width || self.surface.height() != height {
            self.surface = Raster::new(width, height);
            self.snapshot = None;
        }
        self.surface.clear();
        self.drawn = [None; 2];

        let (w, h) = (width as f32, height as f32);
        let panel = Rect::from_min_size(Pos2::ZERO, Vec2::new(w, h));
        self.surface.fill_rounded_rect(panel, PANEL_CORNER_RADIUS, self.panel_color);

        for line in self.grid.lines(h) {
            let width = self.grid.width_for(&line);
            self.surface.stroke_line(
                Pos2::new(0.0, line.offset),
                Pos2::new(w, line.offset),
                width,
                self.grid_color,
            );
        }
        for line in self.grid.lines(w) {
            let width = self.grid.width_for(&line);
            self.surface.stroke_line(
                Pos2::new(line.offset, 0.0),
                Pos2::new(line.offset, h),
                width,
                self.grid_color,
            );
        }
        self.dirty = true;
    }

    pub fn snapshot_background(&mut self) {
        self.snapshot = Some(self.surface.clone());
    }

    /// Clears the square a point of `radius` covers at `center` and copies the
    /// snapshot back into it.
    pub fn erase_point(&mut self, center: Pos2, radius: f32) {
        let region = Rect::from_center_size(center, Vec2::splat(radius * 2.0));
        self.surface.clear_rect(region);
        if let Some(snapshot) = &self.snapshot {
            self.surface.copy_rect_from(snapshot, region);
        }
        self.dirty = true;
    }

    pub fn restore_background(&mut self) {
        if let Some(snapshot) = &self.snapshot {
            self.surface.copy_from(snapshot);
        }
        self.dirty = true;
    }

    pub fn draw_point(&mut self, point: &ControlPoint) {
        self.surface.fill_circle(point.position, point.radius, point.color);
        self.drawn[point.id.index()] = Some((point.position, point.radius));
        self.dirty = true;
    }

    pub fn draw_line_segment(&mut self, from: Pos2, to: Pos2, style: LineStyle) {
        self.surface.stroke_line(from, to, style.width, style.color);
        self.dirty = true;
    }

    /// Full redraw of the grid, snapshot and graph, used on first paint and
    /// whenever the surface is laid out again.
    pub fn relayout(&mut self, state: &GraphState) {
        let (width, height) = state.mapper().canvas_size();
        self.draw_background(width.round() as u32, height.round() as u32);
        self.snapshot_background();
        self.render(state, None);
    }

    /// Redraws the line and both points over the snapshot. `focus`, when
    /// given, is drawn first so the other point lands on top of it.
    pub fn render(&mut self, state: &GraphState, focus: Option<PointId>) {
        if self.snapshot.is_none() {
            let (width, height) = state.mapper().canvas_size();
            self.draw_background(width.round() as u32, height.round() as u32);
            self.snapshot_background();
        }

        let stale: Vec<_> = self.drawn.iter_mut().filter_map(Option::take).collect();
        for (center, radius) in stale {
            self.erase_point(center, radius);
        }
        self.restore_background();

        let first = state.point(PointId::First);
        let second = state.point(PointId::Second);
        self.draw_line_segment(first.position, second.position, self.line_style);

        let lead = focus.unwrap_or(PointId::First);
        self.draw_point(state.point(lead));
        self.draw_point(state.point(lead.other()));
    }
}
