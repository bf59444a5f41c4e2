use crate::line::{Line, Slope};
use crate::point::PointId;
use crate::state::GraphState;
use egui::Pos2;

pub const UNDEFINED: &str = "undefined";

/// The text fields shown next to the graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labels {
    pub slope: String,
    pub intercept: String,
    pub coordinates: [String; 2],
    pub equation: String,
}

impl Labels {
    pub fn from_state(state: &GraphState) -> Self {
        let mut labels = Self::default();
        labels.update(state);
        labels
    }

    pub fn update(&mut self, state: &GraphState) {
        let line = state.line();
        self.slope = format_slope(&line);
        self.intercept = format_intercept(&line);
        for id in PointId::ALL {
            self.coordinates[id.index()] = format_coordinates(state.point(id).system_position);
        }
        self.equation = format_equation(&line, state.point(PointId::First).system_position);
    }

    pub fn coordinates(&self, id: PointId) -> &str {
        &self.coordinates[id.index()]
    }
}

pub fn format_slope(line: &Line) -> String {
    match line.slope {
        Slope::Defined(m) => format!("{:.1}", round_tenths(m)),
        Slope::Vertical => UNDEFINED.to_string(),
    }
}

pub fn format_intercept(line: &Line) -> String {
    match line.intercept {
        Some(b) => format!("{:.1}", round_tenths(b)),
        None => UNDEFINED.to_string(),
    }
}

/// `(x, y)`, one decimal at most.
pub fn format_coordinates(point: Pos2) -> String {
    format!("({}, {})", format_number(point.x), format_number(point.y))
}

/// `y = mx + b`, or `x = c` for a vertical line through `anchor`.
pub fn format_equation(line: &Line, anchor: Pos2) -> String {
    match (line.slope, line.intercept) {
        (Slope::Defined(m), Some(b)) => {
            let b = round_tenths(b);
            let sign = if b < 0.0 { '-' } else { '+' };
            format!("y = {:.1}x {} {:.1}", round_tenths(m), sign, b.abs())
        }
        _ => format!("x = {}", format_number(anchor.x)),
    }
}

fn format_number(value: f32) -> String {
    let rounded = round_tenths(value);
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

// Rounded to one decimal, with -0.0 folded into 0.0.
fn round_tenths(value: f32) -> f32 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
