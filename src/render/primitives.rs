//! Primitive rendering functions.
//!
//! Rasterization for filled circles: the midpoint algorithm for integer
//! radii, and pixel-center coverage for star markers of any diameter.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Draw a filled circle using the midpoint algorithm.
///
/// # Arguments
///
/// * `fb` - Target framebuffer
/// * `cx`, `cy` - Center coordinates
/// * `radius` - Circle radius in pixels
/// * `color` - Fill color
pub fn draw_circle(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius <= 0 {
        if radius == 0 && cx >= 0 && cy >= 0 {
            fb.set_pixel(cx as u32, cy as u32, color);
        }
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        // One scan line per octant pair
        fb.fill_span(cx - x, cx + x, cy + y, color);
        fb.fill_span(cx - x, cx + x, cy - y, color);
        fb.fill_span(cx - y, cx + y, cy + x, color);
        fb.fill_span(cx - y, cx + y, cy - x, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Draw a filled disc of `diameter` pixels centered on `(x, y)`.
///
/// A pixel is covered when its center lies inside the disc, so a disc centered
/// on a pixel corner is exactly `diameter` pixels across. A disc too small to
/// cover any pixel center paints the pixel under `(x, y)`. Non-finite input
/// and non-positive diameters draw nothing.
pub fn draw_point(fb: &mut Framebuffer, x: f64, y: f64, diameter: f64, color: Rgba) {
    if !(x.is_finite() && y.is_finite() && diameter.is_finite()) || diameter <= 0.0 {
        return;
    }

    let radius = diameter / 2.0;
    let top = ((y - radius - 0.5).ceil() as i32).max(0);
    let bottom = ((y + radius - 0.5).floor() as i32).min(fb.height() as i32 - 1);

    let mut painted = false;
    for row in top..=bottom {
        let dy = f64::from(row) + 0.5 - y;
        let reach = radius * radius - dy * dy;
        if reach < 0.0 {
            continue;
        }
        let half = reach.sqrt();
        let x0 = (x - half - 0.5).ceil() as i32;
        let x1 = (x + half - 0.5).floor() as i32;
        if x0 <= x1 {
            fb.fill_span(x0, x1, row, color);
            painted = true;
        }
    }

    if !painted {
        let (px, py) = (x.floor() as i32, y.floor() as i32);
        fb.fill_span(px, px, py, color);
    }
}
