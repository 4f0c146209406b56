//! In-memory catalog: schema, records and running column statistics.
//!
//! Records are stored positionally against the [`Schema`]; lookups by column
//! name go through the schema's name index.

mod schema;
mod stats;
mod store;
mod value;

pub use schema::Schema;
pub use stats::{ColumnStats, Extent};
pub use store::RecordStore;
pub use value::{Record, Value};
