//! Drawing surfaces.
//!
//! [`Surface`] is the small immediate-mode drawing interface the star renderer
//! draws through: a current fill color, filled circles, and a full clear.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::render::primitives::draw_point;

/// Immediate-mode drawing target.
pub trait Surface {
    /// Create a surface of the given size in pixels.
    fn create_surface(width: u32, height: u32) -> Result<Self>
    where
        Self: Sized;

    /// Surface size in pixels as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Set the color used by subsequent fills.
    fn set_fill_color(&mut self, color: Rgba);

    /// Draw a filled circle centered on `(x, y)` in the current fill color.
    fn draw_filled_circle(&mut self, x: f64, y: f64, diameter: f64);

    /// Fill the whole surface with `color`.
    fn clear_surface(&mut self, color: Rgba);
}

/// A [`Surface`] rasterizing into a [`Framebuffer`].
#[derive(Debug, Clone)]
pub struct Canvas {
    framebuffer: Framebuffer,
    fill: Rgba,
}

impl Canvas {
    /// Borrow the backing framebuffer.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Current fill color.
    #[must_use]
    pub fn fill_color(&self) -> Rgba {
        self.fill
    }
}

impl Surface for Canvas {
    fn create_surface(width: u32, height: u32) -> Result<Self> {
        Ok(Self { framebuffer: Framebuffer::new(width, height)?, fill: Rgba::WHITE })
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.framebuffer.width(), self.framebuffer.height())
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn draw_filled_circle(&mut self, x: f64, y: f64, diameter: f64) {
        draw_point(&mut self.framebuffer, x, y, diameter, self.fill);
    }

    fn clear_surface(&mut self, color: Rgba) {
        self.framebuffer.clear(color);
    }
}

/// A single call made against a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    /// `clear_surface(color)`.
    Clear(Rgba),
    /// A filled circle with the fill color active at the time of the call.
    Circle {
        /// Center x.
        x: f64,
        /// Center y.
        y: f64,
        /// Diameter in pixels.
        diameter: f64,
        /// Active fill color.
        color: Rgba,
    },
}

/// A [`Surface`] that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    fill: Rgba,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// All recorded calls in order.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Only the circle calls, in order.
    pub fn circles(&self) -> impl Iterator<Item = &DrawCall> + '_ {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Circle { .. }))
    }
}

impl Surface for RecordingSurface {
    fn create_surface(width: u32, height: u32) -> Result<Self> {
        Ok(Self { width, height, ..Self::default() })
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn draw_filled_circle(&mut self, x: f64, y: f64, diameter: f64) {
        self.calls.push(DrawCall::Circle { x, y, diameter, color: self.fill });
    }

    fn clear_surface(&mut self, color: Rgba) {
        self.calls.push(DrawCall::Clear(color));
    }
}
