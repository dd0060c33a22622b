//! Rasterization of the two shapes an icon is made of: the rounded-square
//! silhouette and the "play" triangle.
//!
//! A pixel belongs to a shape when its center, `(x + 0.5, y + 0.5)`, lies
//! inside it. Edges are hard; there is no anti-aliasing, so masks only ever
//! hold 0 or 255.

use image::{GrayImage, Luma, Rgba, RgbaImage};

pub const MASK_EXCLUDE: Luma<u8> = Luma([0]);
pub const MASK_INCLUDE: Luma<u8> = Luma([255]);

/// Corner radius actually drawn: never more than half the shorter side.
pub fn clamp_radius(width: u32, height: u32, radius: u32) -> u32 {
    radius.min(width.min(height) / 2)
}

/// Whether pixel `(x, y)` lies inside the `width` x `height` rounded rectangle
/// with the given corner radius.
///
/// The radius is clamped with [`clamp_radius`].
pub fn contains_rounded_rect(x: u32, y: u32, width: u32, height: u32, radius: u32) -> bool {
    inside_rounded_rect(x, y, width, height, clamp_radius(width, height, radius))
}

/// Single-channel mask covering the whole canvas: 255 inside the rounded
/// rectangle, 0 outside.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let radius = clamp_radius(width, height, radius);
    GrayImage::from_fn(width, height, |x, y| {
        if inside_rounded_rect(x, y, width, height, radius) {
            MASK_INCLUDE
        } else {
            MASK_EXCLUDE
        }
    })
}

// `radius` must already be clamped, or the corner-center clamp below panics
fn inside_rounded_rect(x: u32, y: u32, width: u32, height: u32, radius: u32) -> bool {
    if x >= width || y >= height {
        return false;
    }
    if radius == 0 {
        return true;
    }

    let radius = radius as f32;
    let px = x as f32 + 0.5;
    let py = y as f32 + 0.5;

    // Nearest point on the inner rectangle spanned by the corner circle centers
    let cx = px.clamp(radius, width as f32 - radius);
    let cy = py.clamp(radius, height as f32 - radius);

    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= radius * radius
}

/// Pixel coordinates of the four extreme corners of a canvas, clockwise from
/// the top-left.
pub fn silhouette_corners(width: u32, height: u32) -> [(u32, u32); 4] {
    let right = width.saturating_sub(1);
    let bottom = height.saturating_sub(1);
    [(0, 0), (right, 0), (right, bottom), (0, bottom)]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: (f32, f32),
    pub b: (f32, f32),
    pub c: (f32, f32),
}

impl Triangle {
    /// Play glyph centered on `(cx, cy)`: tip at `(cx + r, cy)`, the other two
    /// vertices at `(cx - r/2, cy +- 0.866 r)`.
    pub fn play(cx: f32, cy: f32, r: f32) -> Self {
        Self {
            a: (cx + r, cy),
            b: (cx - r * 0.5, cy + r * 0.866),
            c: (cx - r * 0.5, cy - r * 0.866),
        }
    }

    /// Point-in-triangle test; points on an edge count as inside. Works for
    /// either vertex winding.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let sign = |(x1, y1): (f32, f32), (x2, y2): (f32, f32)| {
            (px - x2) * (y1 - y2) - (x1 - x2) * (py - y2)
        };

        let d1 = sign(self.a, self.b);
        let d2 = sign(self.b, self.c);
        let d3 = sign(self.c, self.a);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    /// Paints every pixel whose center falls inside the triangle.
    pub fn fill(&self, canvas: &mut RgbaImage, color: Rgba<u8>) {
        let (width, height) = canvas.dimensions();
        let (min_x, max_x, min_y, max_y) = self.pixel_bounds(width, height);

        for y in min_y..max_y {
            for x in min_x..max_x {
                if self.contains(x as f32 + 0.5, y as f32 + 0.5) {
                    canvas.put_pixel(x, y, color);
                }
            }
        }
    }

    // Bounding box clipped to the canvas, as half-open pixel ranges
    fn pixel_bounds(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let xs = [self.a.0, self.b.0, self.c.0];
        let ys = [self.a.1, self.b.1, self.c.1];

        let clip = |v: f32, limit: u32| v.max(0.0).min(limit as f32) as u32;
        let min_x = clip(xs.iter().copied().fold(f32::INFINITY, f32::min).floor(), width);
        let max_x = clip(xs.iter().copied().fold(f32::NEG_INFINITY, f32::max).ceil(), width);
        let min_y = clip(ys.iter().copied().fold(f32::INFINITY, f32::min).floor(), height);
        let max_y = clip(ys.iter().copied().fold(f32::NEG_INFINITY, f32::max).ceil(), height);

        (min_x, max_x, min_y, max_y)
    }
}
