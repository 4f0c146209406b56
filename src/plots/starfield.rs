//! Star map: one colored disc per catalog record.
//!
//! Two numeric columns are scaled onto the canvas using the running
//! statistics collected during ingestion, and the spectral column picks the
//! fill color. Records are drawn in fixed-size batches on a timer tick so a
//! large catalog appears progressively.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};

use crate::catalog::{ColumnStats, Extent, Record, Schema};
use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Point;
use crate::ingest::Session;
use crate::render::{Canvas, RenderCursor, Surface};
use crate::scale::LinearScale;
use crate::spectral;

/// Default canvas edge in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 700;
/// Default records per batch.
pub const DEFAULT_BATCH_SIZE: usize = 1000;
/// Default interval between batches.
pub const DEFAULT_TICK: Duration = Duration::from_millis(20);
/// Default marker diameter in pixels.
pub const DEFAULT_POINT_DIAMETER: f64 = 10.0;

const MIN_TICK: Duration = Duration::from_millis(1);

/// Builder and batch renderer for star maps.
#[derive(Debug, Clone)]
pub struct StarMap {
    width: u32,
    height: u32,
    point_diameter: f64,
    batch_size: usize,
    tick: Duration,
    x_column: String,
    y_column: String,
    color_column: String,
    background: Rgba,
}

impl Default for StarMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Where and in what color one record is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarMarker {
    /// Disc center in canvas coordinates.
    pub position: Point,
    /// Fill color.
    pub color: Rgba,
}

/// Totals for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    /// Records drawn.
    pub drawn: usize,
    /// Batches issued.
    pub batches: usize,
}

/// Column positions and scales resolved against one schema and statistics snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    x_index: Option<usize>,
    y_index: Option<usize>,
    color_index: Option<usize>,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl Projection {
    /// Position and color for `record`.
    ///
    /// Missing or non-numeric coordinates, and degenerate column ranges, land on
    /// the middle of that axis.
    #[must_use]
    pub fn marker(&self, record: &Record) -> StarMarker {
        let coord = |index: Option<usize>| index.and_then(|i| record.value(i)?.as_f64());
        let position = Point::new(
            self.x_scale.scale_or_mid(coord(self.x_index)),
            self.y_scale.scale_or_mid(coord(self.y_index)),
        );
        let color = spectral::color_for(self.color_index.and_then(|i| record.value(i)));
        StarMarker { position, color }
    }
}

impl StarMap {
    /// Create a star map with the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            point_diameter: DEFAULT_POINT_DIAMETER,
            batch_size: DEFAULT_BATCH_SIZE,
            tick: DEFAULT_TICK,
            x_column: "x".to_string(),
            y_column: "z".to_string(),
            color_column: "spect".to_string(),
            background: Rgba::BLACK,
        }
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the marker diameter in pixels.
    #[must_use]
    pub fn point_diameter(mut self, diameter: f64) -> Self {
        self.point_diameter = diameter;
        self
    }

    /// Set the number of records drawn per tick. Zero is treated as one.
    #[must_use]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the interval between batches. Anything below one millisecond is treated as one.
    #[must_use]
    pub fn tick(mut self, tick: Duration) -> Self {
        self.tick = tick.max(MIN_TICK);
        self
    }

    /// Choose the horizontal, vertical and color columns.
    #[must_use]
    pub fn columns(
        mut self,
        x: impl Into<String>,
        y: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        self.x_column = x.into();
        self.y_column = y.into();
        self.color_column = color.into();
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Output dimensions as `(width, height)`.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resolve columns and scales for a `width` x `height` surface.
    ///
    /// Without a schema every record lands in the center in the fallback color.
    #[must_use]
    pub fn projection(
        &self,
        schema: Option<&Schema>,
        stats: Option<&ColumnStats>,
        width: u32,
        height: u32,
    ) -> Projection {
        let index = |column: &str| schema.and_then(|s| s.index_of(column));
        let domain = |i: Option<usize>| {
            i.and_then(|i| stats?.extent(i)).copied().unwrap_or(Extent::EMPTY).as_tuple()
        };

        let x_index = index(&self.x_column);
        let y_index = index(&self.y_column);
        Projection {
            x_index,
            y_index,
            color_index: index(&self.color_column),
            x_scale: LinearScale::new(domain(x_index), (0.0, f64::from(width))),
            y_scale: LinearScale::new(domain(y_index), (0.0, f64::from(height))),
        }
    }

    /// Draw one batch of records.
    pub fn draw_batch<S: Surface>(&self, projection: &Projection, records: &[Record], surface: &mut S) {
        for record in records {
            let marker = projection.marker(record);
            surface.set_fill_color(marker.color);
            surface.draw_filled_circle(marker.position.x, marker.position.y, self.point_diameter);
        }
    }

    /// Clear `surface` and draw every record of `session` in batches, one batch per tick.
    ///
    /// The surface is cleared immediately and the first batch is drawn one tick
    /// later. The number of records is fixed when the pass starts. The timer
    /// stops after the last, possibly shorter, batch.
    pub async fn render<S: Surface>(&self, session: &Session, surface: &mut S) -> RenderSummary {
        let (width, height) = surface.dimensions();
        let projection = self.projection(session.schema(), session.stats(), width, height);
        let records = session.records();
        let cursor = RenderCursor::new(records.len(), self.batch_size);

        tracing::info!(records = records.len(), batch_size = self.batch_size, "rendering started");
        surface.clear_surface(self.background);

        let mut ticker = tokio::time::interval_at(Instant::now() + self.tick, self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut summary = RenderSummary::default();
        for batch in cursor {
            ticker.tick().await;
            let slice = records.slice(batch);
            self.draw_batch(&projection, slice, surface);
            summary.drawn += slice.len();
            summary.batches += 1;
            tracing::debug!(drawn = summary.drawn, total = records.len(), "batch drawn");
        }

        tracing::info!(drawn = summary.drawn, batches = summary.batches, "rendering finished");
        summary
    }

    /// Draw every record immediately, without the timer.
    pub fn render_now<S: Surface>(&self, session: &Session, surface: &mut S) -> RenderSummary {
        let (width, height) = surface.dimensions();
        let projection = self.projection(session.schema(), session.stats(), width, height);
        let records = session.records();

        surface.clear_surface(self.background);
        let mut summary = RenderSummary::default();
        for batch in RenderCursor::new(records.len(), self.batch_size) {
            let slice = records.slice(batch);
            self.draw_batch(&projection, slice, surface);
            summary.drawn += slice.len();
            summary.batches += 1;
        }
        summary
    }

    /// Render to a new canvas of this map's dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero.
    pub fn to_canvas(&self, session: &Session) -> Result<Canvas> {
        let mut canvas = Canvas::create_surface(self.width, self.height)?;
        self.render_now(session, &mut canvas);
        Ok(canvas)
    }
}

impl batuta_common::display::WithDimensions for StarMap {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
