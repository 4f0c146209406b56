use crate::catalog::{Record, Schema, Value};

/// Running minimum and maximum of one column.
///
/// Starts inverted at `(+∞, −∞)` so the first observation sets both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Smallest value seen, `+∞` before any observation.
    pub min: f64,
    /// Largest value seen, `−∞` before any observation.
    pub max: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Extent {
    /// Extent with no observations.
    pub const EMPTY: Self = Self { min: f64::INFINITY, max: f64::NEG_INFINITY };

    /// Widen the extent to include `value`. Non-finite values are ignored.
    pub fn observe(&mut self, value: f64) {
        if value.is_finite() {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
    }

    /// Whether at least one value has been observed.
    #[must_use]
    pub fn is_observed(&self) -> bool {
        self.min <= self.max
    }

    /// Whether `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// `(min, max)` as a tuple, e.g. for a [`LinearScale`](crate::scale::LinearScale) domain.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// Per-column running statistics, positionally aligned with a [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    extents: Vec<Extent>,
}

impl ColumnStats {
    /// Statistics for every column of `schema`, all unobserved.
    #[must_use]
    pub fn new(schema: &Schema) -> Self {
        Self { extents: vec![Extent::EMPTY; schema.len()] }
    }

    /// Fold the numeric fields of `record` into the running extents.
    ///
    /// Text fields and missing trailing fields leave their column untouched.
    pub fn update(&mut self, record: &Record) {
        for (extent, value) in self.extents.iter_mut().zip(record.values()) {
            match value {
                Value::Numeric(n) => extent.observe(*n),
                Value::Text(_) => {}
            }
        }
    }

    /// Extent at a column position.
    #[must_use]
    pub fn extent(&self, index: usize) -> Option<&Extent> {
        self.extents.get(index)
    }

    /// Extent of a named column.
    #[must_use]
    pub fn get(&self, schema: &Schema, column: &str) -> Option<&Extent> {
        schema.index_of(column).and_then(|i| self.extent(i))
    }

    /// All extents in column order.
    #[must_use]
    pub fn extents(&self) -> &[Extent] {
        &self.extents
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> impl Strategy<Value = String> {
        prop_oneof![
            (-1e9f64..1e9).prop_map(|v| v.to_string()),
            "[A-Z]{0,3}",
            Just(String::new()),
        ]
    }

    proptest! {
        /// min <= v <= max for every numeric value observed.
        #[test]
        fn prop_extents_bound_every_numeric_value(
            rows in prop::collection::vec(prop::collection::vec(field(), 0..5), 1..200)
        ) {
            let schema = Schema::from_header("a,b,c,d", ",");
            let mut stats = ColumnStats::new(&schema);
            let records: Vec<Record> = rows
                .iter()
                .map(|fields| Record::parse(&fields.join(","), ",", &schema))
                .collect();

            for record in &records {
                stats.update(record);
            }

            for record in &records {
                for (i, value) in record.values().iter().enumerate() {
                    if let Some(v) = value.as_f64() {
                        let extent = stats.extent(i).copied().unwrap_or_default();
                        prop_assert!(extent.contains(v), "{v} outside {extent:?}");
                    }
                }
            }
            for extent in stats.extents() {
                prop_assert!(!extent.min.is_nan() && !extent.max.is_nan());
            }
        }
    }
}
