#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub offset: f32,
    pub is_axis: bool,
}

pub struct Grid {
    spacing: f32,
    line_width: f32,
    axis_width: f32,
}

impl Grid {
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing,
            line_width: 2.0,
            axis_width: 5.0,
        }
    }

    pub fn width_for(&self, line: &GridLine) -> f32 {
        if line.is_axis {
            self.axis_width
        } else {
            self.line_width
        }
    }

    /// Grid lines strictly inside `0..extent`, one spacing in from each edge.
    /// The line nearest `extent / 2` is flagged as the axis.
    pub fn lines(&self, extent: f32) -> Vec<GridLine> {
        if !(self.spacing.is_finite() && self.spacing > 0.0 && extent.is_finite()) {
            return Vec::new();
        }
        let count = ((extent / self.spacing).floor() as usize).saturating_sub(1);
        let offsets: Vec<f32> = (1..=count).map(|i| i as f32 * self.spacing).collect();

        let center = extent / 2.0;
        let axis = offsets
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - center).abs().total_cmp(&(*b - center).abs()))
            .map(|(i, _)| i);

        offsets
            .into_iter()
            .enumerate()
            .map(|(i, offset)| GridLine {
                offset,
                is_axis: Some(i) == axis,
            })
            .collect()
    }
}
