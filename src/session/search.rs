//! Whole-file search over an open session.
//!
//! Every search resets the session to the start and scans from row 1, so the
//! prior read position is discarded. Matching is case-insensitive, against the
//! trimmed field value: *fuzzy* means substring containment, non-fuzzy means
//! exact equality.

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::row::Row;

use super::Session;

/// A single search hit: the coordinate of the matching field plus the full
/// row's fields at the moment of the match.
///
/// Keeping the fields lets the caller re-derive a [`Cell`] for any column of
/// the matched row without re-scanning the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    row_number: u64,
    column: usize,
    fields: Vec<String>,
}

impl Match {
    /// 1-based row number of the match.
    pub fn row_number(&self) -> u64 {
        self.row_number
    }

    /// 1-based column position of the match.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The matched row's fields, in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Rebuilds the matched [`Row`].
    pub fn row(&self) -> Row {
        Row::new(self.row_number, self.fields.clone())
    }

    /// Derives the cell at a 1-based column index of the matched row.
    pub fn cell(&self, index: usize) -> Cell {
        self.row().cell_at(index)
    }

    /// Derives the matching cell itself.
    pub fn matched_cell(&self) -> Cell {
        self.cell(self.column)
    }
}

impl Session {
    /// Scans the whole file for `pattern`, in row-major order.
    ///
    /// The session is reset before scanning. Fails with
    /// [`Error::InvalidPattern`] when `pattern` is empty after trimming. With
    /// `stop_at_first`, returns as soon as the first match is found; otherwise
    /// every match across the file is accumulated in scan order.
    pub fn find(&mut self, pattern: &str, fuzzy: bool, stop_at_first: bool) -> Result<Vec<Match>> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            let err = Error::InvalidPattern;
            self.report_failure(&err);
            return Err(err);
        }
        let needle = pattern.to_lowercase();

        self.reset()?;
        let mut matches = Vec::new();
        while let Some(row) = self.next_row()? {
            for (i, field) in row.fields().iter().enumerate() {
                let hay = field.trim().to_lowercase();
                let hit = if fuzzy {
                    hay.contains(&needle)
                } else {
                    hay == needle
                };
                if hit {
                    matches.push(Match {
                        row_number: row.number(),
                        column: i + 1,
                        fields: row.to_record(),
                    });
                    if stop_at_first {
                        return Ok(matches);
                    }
                }
            }
        }
        Ok(matches)
    }

    /// Returns every match for `pattern`, in scan order.
    pub fn find_all(&mut self, pattern: &str, fuzzy: bool) -> Result<Vec<Match>> {
        self.find(pattern, fuzzy, false)
    }

    /// Returns the first match in scan order, or [`Error::NotFound`].
    pub fn find_first(&mut self, pattern: &str, fuzzy: bool) -> Result<Match> {
        let mut matches = self.find(pattern, fuzzy, true)?;
        match matches.pop() {
            Some(m) => Ok(m),
            None => {
                let err = Error::NotFound {
                    pattern: pattern.trim().to_string(),
                };
                self.report_failure(&err);
                Err(err)
            }
        }
    }

    /// Returns the last match in scan order, or [`Error::NotFound`].
    ///
    /// The whole file is scanned; this cannot stop early.
    pub fn find_last(&mut self, pattern: &str, fuzzy: bool) -> Result<Match> {
        let mut matches = self.find(pattern, fuzzy, false)?;
        match matches.pop() {
            Some(m) => Ok(m),
            None => {
                let err = Error::NotFound {
                    pattern: pattern.trim().to_string(),
                };
                self.report_failure(&err);
                Err(err)
            }
        }
    }
}
