use egui::{Pos2, Rect, Vec2};

/// Places the fixed-size drawing surface inside whatever screen area the
/// panel offers, scaled to fit and centered.
pub struct Canvas {
    width: f32,
    height: f32,
    view_rect: Rect,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            view_rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(width, height)),
        }
    }

    pub fn get_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Records the panel area. Returns `true` when it differs from the last
    /// one, which is the cue for the graph to be laid out again.
    pub fn set_view_rect(&mut self, view_rect: Rect) -> bool {
        let changed = self.view_rect != view_rect;
        self.view_rect = view_rect;
        changed
    }

    pub fn get_zoom(&self) -> f32 {
        let zoom = (self.view_rect.width() / self.width).min(self.view_rect.height() / self.height);
        if zoom.is_finite() && zoom > 0.0 {
            zoom
        } else {
            1.0
        }
    }

    pub fn get_screen_rect(&self) -> Rect {
        let half_size = Vec2::new(self.width, self.height) * 0.5 * self.get_zoom();
        Rect::from_center_size(self.view_rect.center(), half_size * 2.0)
    }

    pub fn screen_to_canvas_pos(&self, screen_pos: Pos2) -> Pos2 {
        let screen_rect = self.get_screen_rect();
        let normalized_pos = (screen_pos - screen_rect.min) / self.get_zoom();
        Pos2::new(normalized_pos.x, normalized_pos.y)
    }

    pub fn canvas_to_screen_pos(&self, canvas_pos: Pos2) -> Pos2 {
        self.get_screen_rect().min + canvas_pos.to_vec2() * self.get_zoom()
    }
}
