//! Rendering backends and rasterization.
//!
//! # Algorithms
//!
//! - **Midpoint Circle**: filled circle rendering as horizontal scan lines
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

mod cursor;
mod primitives;
mod surface;

pub use cursor::{Batch, RenderCursor};
pub use primitives::{draw_circle, draw_point};
pub use surface::{Canvas, DrawCall, RecordingSurface, Surface};
