//! Slope/intercept form of the line through the two control points.
//!
//! All values here are in math coordinates. A run of zero between the two
//! points is reported as [`Slope::Vertical`] instead of an infinite slope.

use egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    Defined(f32),
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub slope: Slope,
    /// `None` exactly when the slope is vertical.
    pub intercept: Option<f32>,
}

impl Line {
    pub fn vertical() -> Self {
        Self {
            slope: Slope::Vertical,
            intercept: None,
        }
    }

    pub fn slope_value(&self) -> Option<f32> {
        match self.slope {
            Slope::Defined(m) => Some(m),
            Slope::Vertical => None,
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.slope == Slope::Vertical
    }
}

/// m = (p2.y - p1.y) / (p2.x - p1.x), b = p2.y - m * p2.x
pub fn recompute_from_points(p1: Pos2, p2: Pos2) -> Line {
    let run = p2.x - p1.x;
    if run.abs() < f32::EPSILON {
        return Line::vertical();
    }
    let m = (p2.y - p1.y) / run;
    Line {
        slope: Slope::Defined(m),
        intercept: Some(p2.y - m * p2.x),
    }
}

/// Rotates `p2` about the math origin onto the direction of `new_slope`,
/// keeping its distance from the origin.
///
/// The pivot is the origin, not the first point, so the resulting line only
/// has slope `new_slope` when the first point sits at the origin.
pub fn apply_slope_change(new_slope: f32, p2: Pos2) -> Pos2 {
    let distance = p2.x.hypot(p2.y);
    let norm = (1.0 + new_slope * new_slope).sqrt();
    Pos2::new(distance / norm, distance * new_slope / norm)
}

/// Translates both points vertically by `delta`, leaving the slope unchanged.
pub fn apply_intercept_change(delta: f32, p1: Pos2, p2: Pos2) -> (Pos2, Pos2) {
    (Pos2::new(p1.x, p1.y + delta), Pos2::new(p2.x, p2.y + delta))
}
