//! Incremental ingestion of a delimited catalog from a chunked byte stream.
//!
//! [`LineSplitter`] turns chunks into complete lines, [`Session`] turns lines
//! into records while keeping per-column statistics current, and
//! [`fetch_catalog`] opens the HTTP byte stream that feeds it.

mod session;
mod source;
mod splitter;

pub use session::{IngestSummary, Session, DEFAULT_DELIMITER, DEFAULT_READ_DELAY};
pub use source::{fetch_catalog, ChunkStream, HYG_DATABASE_URL};
pub use splitter::LineSplitter;
