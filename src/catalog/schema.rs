use std::collections::HashMap;

/// Ordered column names taken from the header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Build a schema by splitting a header line on `delimiter`.
    ///
    /// Duplicate names resolve to their last position.
    #[must_use]
    pub fn from_header(line: &str, delimiter: &str) -> Self {
        Self::from_columns(line.split(delimiter).map(str::to_owned).collect())
    }

    /// Build a schema from column names.
    #[must_use]
    pub fn from_columns(columns: Vec<String>) -> Self {
        let index = columns.iter().enumerate().map(|(i, name)| (name.clone(), i)).collect();
        Self { columns, index }
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns. A header line always yields at least one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in header order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}
