//! High-level plot types.
//!
//! Provides ready-to-use visualization types with builder APIs.

mod starfield;

pub use starfield::{
    Projection, RenderSummary, StarMap, StarMarker, DEFAULT_BATCH_SIZE, DEFAULT_CANVAS_SIZE,
    DEFAULT_POINT_DIAMETER, DEFAULT_TICK,
};
