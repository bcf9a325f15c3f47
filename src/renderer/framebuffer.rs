//! Software rasterizer over a raw BGRA pixel buffer
//!
//! Nothing outside this module writes pixels. All primitives clip to the
//! buffer: coordinates are valid in `[0, width) × [0, height)`.

use super::pixel::Bgra;
use crate::Color;
use crate::sim::{GameObject, Shape};

/// Fixed-size CPU framebuffer
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Bgra>,
}

impl FrameBuffer {
    /// Allocate a zeroed (transparent black) buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Bgra::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Bgra] {
        &self.pixels
    }

    /// Raw interleaved B, G, R, A bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<Bgra> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Pack every pixel as `0xAARRGGBB` into `out`, reusing its allocation
    pub fn write_argb(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(self.pixels.iter().map(|px| px.to_argb_u32()));
    }

    /// Fill the whole buffer
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.into());
    }

    /// Fill `[x, x+w) × [y, y+h)`, clipped to the buffer
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let (x0, x1) = clip_span(x as i64, x as i64 + w as i64, self.width);
        let (y0, y1) = clip_span(y as i64, y as i64 + h as i64, self.height);
        if x0 >= x1 {
            return;
        }

        let px = Bgra::from(color);
        for row in y0..y1 {
            let start = row * self.width;
            self.pixels[start + x0..start + x1].fill(px);
        }
    }

    /// Fill every pixel of the square `[cx-r, cx+r) × [cy-r, cy+r)` whose
    /// distance to `(cx, cy)` is strictly less than `radius`
    pub fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if !(radius > 0.0) {
            return;
        }

        let (x0, x1) = clip_span(
            (cx - radius).floor() as i64,
            (cx + radius).ceil() as i64,
            self.width,
        );
        let (y0, y1) = clip_span(
            (cy - radius).floor() as i64,
            (cy + radius).ceil() as i64,
            self.height,
        );

        let px = Bgra::from(color);
        for y in y0..y1 {
            let fy = y as f32;
            if fy < cy - radius || fy >= cy + radius {
                continue;
            }
            let dy = fy - cy;
            for x in x0..x1 {
                let fx = x as f32;
                if fx < cx - radius || fx >= cx + radius {
                    continue;
                }
                let dx = fx - cx;
                if (dx * dx + dy * dy).sqrt() < radius {
                    self.pixels[y * self.width + x] = px;
                }
            }
        }
    }

    /// Draw an entity: rectangles fill their box, circles are inscribed in it
    pub fn draw_object(&mut self, obj: &GameObject) {
        if obj.is_destroyed() {
            return;
        }
        match obj.shape {
            Shape::Rectangle => self.draw_rect(
                obj.position.x as i32,
                obj.position.y as i32,
                obj.width as i32,
                obj.height as i32,
                obj.color,
            ),
            Shape::Circle => {
                let center = obj.center();
                self.draw_circle(center.x, center.y, obj.width / 2.0, obj.color);
            }
        }
    }
}

/// Intersect `[start, end)` with `[0, limit)`
#[inline]
fn clip_span(start: i64, end: i64, limit: usize) -> (usize, usize) {
    let limit = limit as i64;
    let lo = start.clamp(0, limit);
    let hi = end.clamp(0, limit);
    (lo as usize, hi.max(lo) as usize)
}
