use std::fmt;

use crate::catalog::Schema;

/// A single catalog field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Field text parsed as a finite number.
    Numeric(f64),
    /// Any other field, kept verbatim (spectral codes, names, empty fields).
    Text(String),
}

impl Value {
    /// Classify raw field text.
    ///
    /// Surrounding whitespace is ignored for the numeric parse, but text
    /// values keep the original field unchanged. `NaN` and infinities stay text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Numeric(n),
            _ => Self::Text(raw.to_owned()),
        }
    }

    /// Numeric value, if any.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Text value, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Numeric(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One parsed data line, positionally aligned with the [`Schema`].
///
/// A line with fewer fields than the schema leaves the trailing columns
/// missing; extra fields are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<Value>,
}

impl Record {
    /// Split `line` on `delimiter` and parse at most `schema.len()` fields.
    #[must_use]
    pub fn parse(line: &str, delimiter: &str, schema: &Schema) -> Self {
        let values = line.split(delimiter).take(schema.len()).map(Value::parse).collect();
        Self { values }
    }

    /// Build a record from already parsed values.
    #[must_use]
    pub fn from_values(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Value at a column position.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Value of a named column.
    #[must_use]
    pub fn get(&self, schema: &Schema, column: &str) -> Option<&Value> {
        schema.index_of(column).and_then(|i| self.value(i))
    }

    /// Numeric value of a named column.
    #[must_use]
    pub fn get_f64(&self, schema: &Schema, column: &str) -> Option<f64> {
        self.get(schema, column).and_then(Value::as_f64)
    }

    /// Parsed values in column order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
