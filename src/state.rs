use crate::config::{rgba, GraphConfig};
use crate::coordinate::CoordinateMapper;
use crate::line::{self, Line, Slope};
use crate::point::{ControlPoint, PointId};
use egui::Pos2;

/// Everything the widget knows about the graph: the mapper, both control
/// points and the line derived from them.
///
/// Every mutation goes through a method here so that pixel position, math
/// coordinates and the line stay in sync.
#[derive(Debug, Clone)]
pub struct GraphState {
    mapper: CoordinateMapper,
    points: [ControlPoint; 2],
    line: Line,
}

impl GraphState {
    pub fn new(config: &GraphConfig) -> Self {
        let (width, height) = config.surface_size();
        let mapper = CoordinateMapper::new(width, height, config.pixels_per_unit);
        let [first, second] = default_positions(width, height);
        let points = [
            ControlPoint::new(
                PointId::First,
                first,
                config.point_radius,
                rgba(config.palette.first_point),
                &mapper,
            ),
            ControlPoint::new(
                PointId::Second,
                second,
                config.point_radius,
                rgba(config.palette.second_point),
                &mapper,
            ),
        ];
        let mut state = Self {
            mapper,
            points,
            line: Line::vertical(),
        };
        state.recompute();
        state
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn point(&self, id: PointId) -> &ControlPoint {
        &self.points[id.index()]
    }

    pub fn points(&self) -> &[ControlPoint; 2] {
        &self.points
    }

    pub fn line(&self) -> Line {
        self.line
    }

    /// First point wins when the pointer is over both.
    pub fn hit_test(&self, pixel: Pos2) -> Option<PointId> {
        self.points
            .iter()
            .find(|point| point.contains(pixel))
            .map(|point| point.id)
    }

    pub fn dragging(&self) -> Option<PointId> {
        self.points
            .iter()
            .find(|point| point.dragging)
            .map(|point| point.id)
    }

    pub fn set_dragging(&mut self, id: Option<PointId>) {
        for point in &mut self.points {
            point.dragging = Some(point.id) == id;
        }
    }

    /// Moves a point to a pixel position. No clamping to the surface.
    pub fn move_point(&mut self, id: PointId, pixel: Pos2) {
        self.points[id.index()].set_position(pixel, &self.mapper);
        self.recompute();
    }

    /// Moves a point to a math position.
    pub fn place_point(&mut self, id: PointId, math: Pos2) {
        self.points[id.index()].set_system_position(math, &self.mapper);
        self.recompute();
    }

    /// Rotates the second point about the origin onto `new_slope`.
    pub fn set_slope(&mut self, new_slope: f32) {
        let second = self.point(PointId::Second).system_position;
        let rotated = line::apply_slope_change(new_slope, second);
        self.place_point(PointId::Second, rotated);
    }

    /// Adds `delta` to the current slope. Returns `false` and leaves the
    /// points alone while the line is vertical.
    pub fn adjust_slope(&mut self, delta: f32) -> bool {
        match self.line.slope {
            Slope::Defined(m) => {
                self.set_slope(m + delta);
                true
            }
            Slope::Vertical => false,
        }
    }

    pub fn adjust_intercept(&mut self, delta: f32) {
        let (first, second) = line::apply_intercept_change(
            delta,
            self.point(PointId::First).system_position,
            self.point(PointId::Second).system_position,
        );
        self.points[0].set_system_position(first, &self.mapper);
        self.points[1].set_system_position(second, &self.mapper);
        self.recompute();
    }

    /// Adopts a new surface size. Points keep their math coordinates.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.mapper.canvas_size() == (width, height) {
            return;
        }
        self.mapper.update_canvas_size(width, height);
        for point in &mut self.points {
            let math = point.system_position;
            point.set_system_position(math, &self.mapper);
        }
        self.recompute();
    }

    /// Puts both points back where they start on launch.
    pub fn reset(&mut self) {
        let (width, height) = self.mapper.canvas_size();
        let positions = default_positions(width, height);
        for (point, position) in self.points.iter_mut().zip(positions) {
            point.set_position(position, &self.mapper);
            point.dragging = false;
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.line = line::recompute_from_points(
            self.points[0].system_position,
            self.points[1].system_position,
        );
    }
}

fn default_positions(width: f32, height: f32) -> [Pos2; 2] {
    [
        Pos2::new(width / 2.0, height / 2.0),
        Pos2::new(width * 0.75, height / 3.0),
    ]
}
