use egui::Pos2;

/// Converts between surface pixels and the math coordinates shown to the user.
///
/// The math origin sits at the surface center and y grows upwards. With the
/// default 500x500 surface and 10 pixels per unit the visible range is -25..25
/// on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    canvas_width: f32,
    canvas_height: f32,
    pixels_per_unit: f32,
}

impl CoordinateMapper {
    pub fn new(canvas_width: f32, canvas_height: f32, pixels_per_unit: f32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            pixels_per_unit,
        }
    }

    pub fn update_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        (self.canvas_width, self.canvas_height)
    }

    fn half_range(&self) -> (f32, f32) {
        (
            self.canvas_width / self.pixels_per_unit / 2.0,
            self.canvas_height / self.pixels_per_unit / 2.0,
        )
    }

    /// Pixel position to math coordinates, rounded to the nearest whole unit.
    pub fn to_math(&self, pixel: Pos2) -> Pos2 {
        let (half_x, half_y) = self.half_range();
        let x = round_half_up(pixel.x / self.pixels_per_unit - half_x);
        let y = -round_half_up(pixel.y / self.pixels_per_unit - half_y);
        // `+ 0.0` folds -0.0 into 0.0
        Pos2::new(x + 0.0, y + 0.0)
    }

    /// Math coordinates to pixel position. Exact, no rounding.
    pub fn to_pixel(&self, math: Pos2) -> Pos2 {
        let (half_x, half_y) = self.half_range();
        Pos2::new(
            (math.x + half_x) * self.pixels_per_unit,
            (-math.y + half_y) * self.pixels_per_unit,
        )
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(500.0, 500.0, 10.0)
    }
}

// Halves round towards positive infinity on both axes.
fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}
