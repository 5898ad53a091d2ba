//! One decoded record and its 1-based position in the source.

use crate::cell::Cell;

/// A single row read from a delimited file.
///
/// Column addressing is 1-based throughout: `cell_at(1)` is the first field.
/// The field count is fixed at construction; indices outside
/// `1..=field_count()` yield invalid cells rather than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    number: u64,
    values: Vec<String>,
}

impl Row {
    /// Builds a row from a 1-based row number and its fields.
    ///
    /// Sessions construct rows for you; this is exposed for building tables by
    /// hand and for tests.
    pub fn new(number: u64, values: Vec<String>) -> Self {
        Self { number, values }
    }

    /// 1-based ordinal position in the source (a header line counts as row 1).
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Number of fields in this row.
    pub fn field_count(&self) -> usize {
        self.values.len()
    }

    /// The row's fields, in order.
    pub fn fields(&self) -> &[String] {
        &self.values
    }

    /// `true` iff the concatenation of all fields is the empty string.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_empty())
    }

    /// Reads the cell at a 1-based column index.
    ///
    /// Index `0` is normalized to `1`. An index beyond the field count yields
    /// an invalid [`Cell`] with an empty value rather than an error.
    pub fn cell_at(&self, index: usize) -> Cell {
        let index = index.max(1);
        match self.values.get(index - 1) {
            Some(value) => Cell::new(self.number, index, value),
            None => Cell::invalid(self.number, index),
        }
    }

    /// Writes a cell's current value back into the row.
    ///
    /// No-op for invalid cells.
    pub fn write_back(&mut self, cell: &Cell) {
        if !cell.is_valid() {
            return;
        }
        if let Some(slot) = self.values.get_mut(cell.column() - 1) {
            *slot = cell.as_str().to_string();
        }
    }

    /// Evaluates a caller-supplied predicate over the whole row.
    ///
    /// The closure receives the row itself, so "does any/every column satisfy
    /// X" can be expressed with state captured across row iterations.
    pub fn for_all<F>(&self, f: F) -> bool
    where
        F: FnOnce(&Row) -> bool,
    {
        f(self)
    }

    /// Applies `f` in place to the fields at the given 1-based positions.
    ///
    /// An empty index set means every field. Duplicate and unsorted indices
    /// are tolerated; out-of-range indices are ignored.
    pub fn transform_columns<F>(&mut self, mut f: F, indices: &[usize])
    where
        F: FnMut(&str) -> String,
    {
        if indices.is_empty() {
            for value in &mut self.values {
                *value = f(value);
            }
            return;
        }

        let mut wanted = indices.to_vec();
        wanted.sort_unstable();
        wanted.dedup();
        for (i, value) in self.values.iter_mut().enumerate() {
            if wanted.binary_search(&(i + 1)).is_ok() {
                *value = f(value);
            }
        }
    }

    /// Returns the row's fields as a plain record, for accumulation into a
    /// table or for writing.
    pub fn to_record(&self) -> Vec<String> {
        self.values.clone()
    }
}
