//! # Starfield-Viz
//!
//! Streams a delimited star catalog over HTTP, parses it incrementally and
//! renders it as a colored star map.
//!
//! Bytes arrive in chunks of arbitrary size. They are split into complete
//! lines, the first line becomes the column schema, and every later line
//! becomes a record. Per-column minimum and maximum are kept current as
//! records arrive, so the map can be scaled the moment ingestion ends. The
//! renderer then draws one disc per record in fixed-size batches on a timer
//! tick, colored by spectral class.
//!
//! ## Quick Start
//!
//! ```rust
//! use starfield_viz::prelude::*;
//!
//! let mut session = Session::new();
//! session.feed(b"x,z,spect\n0,0,G5\n10,10,M2\n");
//!
//! let canvas = StarMap::new().dimensions(100, 100).to_canvas(&session)?;
//! assert_eq!(canvas.framebuffer().get_pixel(2, 2), Some(SpectralClass::G.color()));
//! # Ok::<(), starfield_viz::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - [`ingest::fetch_catalog`]: HTTP GET, body as a chunk stream
//! - [`ingest::Session`]: line splitting, header/record parsing, running statistics
//! - [`plots::StarMap`]: projection and batched drawing onto a [`render::Surface`]
//! - [`output::PngEncoder`]: PNG output
//! - [`app::run`]: all of the above driven by a [`config::Config`]

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives.
pub mod geometry;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

/// Spectral class to color mapping.
pub mod spectral;

// ============================================================================
// Data Modules
// ============================================================================

/// Schema, records and column statistics.
pub mod catalog;

/// Chunked stream ingestion.
pub mod ingest;

/// Progress reporting.
pub mod status;

// ============================================================================
// Visualization and Rendering Modules
// ============================================================================

/// High-level plot types.
pub mod plots;

/// Rendering surfaces and rasterization.
pub mod render;

/// Output encoders.
pub mod output;

// ============================================================================
// Application
// ============================================================================

/// YAML configuration.
pub mod config;

/// Fetch, ingest, render, write.
pub mod app;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for starfield-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use starfield_viz::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::catalog::{ColumnStats, Extent, Record, RecordStore, Schema, Value};
    pub use crate::color::Rgba;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Point;
    pub use crate::ingest::{fetch_catalog, IngestSummary, LineSplitter, Session};
    pub use crate::output::PngEncoder;
    pub use crate::plots::{RenderSummary, StarMap};
    pub use crate::render::{Canvas, RecordingSurface, Surface};
    pub use crate::scale::{LinearScale, Scale};
    pub use crate::spectral::SpectralClass;
    pub use crate::status::{RecordingStatus, StatusSink, TracingStatus};
}
