use crate::coordinate::CoordinateMapper;
use egui::Pos2;
use image::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointId {
    First,
    Second,
}

impl PointId {
    pub const ALL: [PointId; 2] = [PointId::First, PointId::Second];

    pub fn index(self) -> usize {
        match self {
            PointId::First => 0,
            PointId::Second => 1,
        }
    }

    pub fn other(self) -> PointId {
        match self {
            PointId::First => PointId::Second,
            PointId::Second => PointId::First,
        }
    }
}

/// One of the two draggable points the line runs through.
#[derive(Debug, Clone)]
pub struct ControlPoint {
    pub id: PointId,
    pub position: Pos2,        // Position in surface pixels
    pub system_position: Pos2, // Position in math coordinates
    pub radius: f32,
    pub color: Rgba<u8>,
    pub dragging: bool,
}

impl ControlPoint {
    pub fn new(
        id: PointId,
        position: Pos2,
        radius: f32,
        color: Rgba<u8>,
        mapper: &CoordinateMapper,
    ) -> Self {
        Self {
            id,
            position,
            system_position: mapper.to_math(position),
            radius,
            color,
            dragging: false,
        }
    }

    /// Moves the point in pixel space and resyncs its math coordinates.
    pub fn set_position(&mut self, position: Pos2, mapper: &CoordinateMapper) {
        self.position = position;
        self.system_position = mapper.to_math(position);
    }

    /// Moves the point in math space and resyncs its pixel position.
    pub fn set_system_position(&mut self, system_position: Pos2, mapper: &CoordinateMapper) {
        self.system_position = system_position;
        self.position = mapper.to_pixel(system_position);
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        (pos.x - self.position.x).abs() <= self.radius
            && (pos.y - self.position.y).abs() <= self.radius
    }
}
