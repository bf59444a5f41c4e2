// Drawing primitives over an RGBA image.
//
// Pixels are sampled at their centers and every write is clipped to the
// image, so shapes may extend past the edges.

use egui::{Pos2, Rect, Vec2};
use image::{Rgba, RgbaImage};

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    image: RgbaImage,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = TRANSPARENT;
        }
    }

    pub fn clear_rect(&mut self, rect: Rect) {
        self.for_each_in(rect, |image, x, y| image.put_pixel(x, y, TRANSPARENT));
    }

    /// Copies the whole of `source` over this raster. Sizes must match.
    pub fn copy_from(&mut self, source: &Raster) {
        debug_assert_eq!(self.image.dimensions(), source.image.dimensions());
        self.image.clone_from(&source.image);
    }

    pub fn copy_rect_from(&mut self, source: &Raster, rect: Rect) {
        let (width, height) = source.image.dimensions();
        self.for_each_in(rect, |image, x, y| {
            if x < width && y < height {
                image.put_pixel(x, y, *source.image.get_pixel(x, y));
            }
        });
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Rgba<u8>) {
        let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
        let inner = rect.shrink(radius);
        self.for_each_in(rect, |image, x, y| {
            let center = pixel_center(x, y);
            let nearest = center.clamp(inner.min, inner.max);
            if (center - nearest).length() <= radius {
                image.put_pixel(x, y, color);
            }
        });
    }

    pub fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Rgba<u8>) {
        let half = width / 2.0;
        let bounds = Rect::from_two_pos(from, to).expand(half);
        self.for_each_in(bounds, |image, x, y| {
            if distance_to_segment(pixel_center(x, y), from, to) <= half {
                image.put_pixel(x, y, color);
            }
        });
    }

    pub fn fill_circle(&mut self, center: Pos2, radius: f32, color: Rgba<u8>) {
        let bounds = Rect::from_center_size(center, Vec2::splat(radius * 2.0));
        self.for_each_in(bounds, |image, x, y| {
            if (pixel_center(x, y) - center).length() <= radius {
                image.put_pixel(x, y, color);
            }
        });
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        let size = [self.image.width() as usize, self.image.height() as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, self.image.as_raw())
    }

    fn for_each_in(&mut self, rect: Rect, mut f: impl FnMut(&mut RgbaImage, u32, u32)) {
        let Some((x0, y0, x1, y1)) = self.pixel_span(rect) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                f(&mut self.image, x, y);
            }
        }
    }

    // Half-open pixel bounds of `rect`, clipped to the image.
    fn pixel_span(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        if !(rect.min.x.is_finite()
            && rect.min.y.is_finite()
            && rect.max.x.is_finite()
            && rect.max.y.is_finite())
        {
            return None;
        }
        let (width, height) = (self.image.width() as f32, self.image.height() as f32);
        let x0 = rect.min.x.floor().clamp(0.0, width);
        let y0 = rect.min.y.floor().clamp(0.0, height);
        let x1 = rect.max.x.ceil().clamp(0.0, width);
        let y1 = rect.max.y.ceil().clamp(0.0, height);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

fn pixel_center(x: u32, y: u32) -> Pos2 {
    Pos2::new(x as f32 + 0.5, y as f32 + 0.5)
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq == 0.0 {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}
