//! A minimal in-memory table: rows × named columns.
//!
//! Cells are [`serde_json::Value`]s, which gives tabular mode the loose
//! typing the batch contract needs — a cell can be a string, a number, or
//! null, and anything that is not a string simply fails the script gate.
//!
//! Column-major storage with one invariant: every column has the same
//! length. [`Table::push_column`] enforces it, along with unique column
//! names, so a constructed `Table` is always rectangular.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ---------------------------------------------------------------------------
// TableError
// ---------------------------------------------------------------------------

/// Errors raised while building a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The pushed column's length differs from the table's row count.
    #[error("column {name:?} has {got} rows, expected {expected}")]
    RaggedColumn {
        /// Name of the offending column.
        name: String,
        /// Row count of the table.
        expected: usize,
        /// Length of the pushed column.
        got: usize,
    },

    /// A column with this name already exists.
    #[error("duplicate column name {0:?}")]
    DuplicateColumn(String),
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Rows × named columns, column-major.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table (no columns, no rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a single string column.
    ///
    /// ```
    /// use telugu_to_latin::pipeline::Table;
    ///
    /// let table = Table::from_strings("telugu_word", ["నమస్కారం", "xyz"]);
    /// assert_eq!(table.n_rows(), 2);
    /// ```
    pub fn from_strings<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<Value> = values
            .into_iter()
            .map(|s| Value::String(s.into()))
            .collect();
        let mut table = Self::new();
        // A single column can never be ragged or a duplicate.
        table
            .push_column(name, values)
            .expect("first column is always valid");
        table
    }

    /// Append a named column.
    ///
    /// # Errors
    ///
    /// - [`TableError::RaggedColumn`] when `values.len()` differs from the
    ///   current row count (unless the table has no columns yet).
    /// - [`TableError::DuplicateColumn`] when `name` is already taken.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Value>,
    ) -> Result<(), TableError> {
        let name = name.into();
        if self.names.iter().any(|n| *n == name) {
            return Err(TableError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && values.len() != self.n_rows() {
            return Err(TableError::RaggedColumn {
                name,
                expected: self.n_rows(),
                got: values.len(),
            });
        }
        self.names.push(name);
        self.columns.push(values);
        Ok(())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        let idx = self.names.iter().position(|n| n == name)?;
        Some(&self.columns[idx])
    }

    /// All column names, in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of rows (0 for a table with no columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` when the table holds no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate rows as slices of cell references, in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Value>> + '_ {
        (0..self.n_rows()).map(move |r| self.columns.iter().map(|col| &col[r]).collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
