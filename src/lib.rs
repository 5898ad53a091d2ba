//! `rowcsv` is a small row/column convenience layer over delimited-text files
//! (CSV/TSV/PSV): open a [`session::Session`], iterate rows, address cells by
//! 1-based index with lazy typed conversion, mutate fields in place, search
//! the whole file, and write tables back out.
//!
//! The field delimiter is chosen from the file extension: `.tsv` → tab,
//! `.psv` → pipe, anything else → comma. A UTF-8 byte-order mark is skipped,
//! and ragged rows (inconsistent field counts) are tolerated by default.
//!
//! ## Quick example: read and convert
//!
//! ```no_run
//! use rowcsv::Session;
//!
//! # fn main() -> Result<(), rowcsv::Error> {
//! let mut session = Session::open("people.csv")?;
//! while let Some(row) = session.next_row()? {
//!     // Header line is row 1.
//!     if row.number() == 1 {
//!         continue;
//!     }
//!     let name = row.cell_at(1).trim().into_string();
//!     let age = row.cell_at(2).to_i64(Some("0"))?;
//!     println!("{name}: {age}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Cells: lazy typed access with chainable transforms
//!
//! A [`cell::Cell`] keeps the original field value alongside a working value
//! that `trim`/`transform` rewrite; typed accessors parse on demand and strip
//! thousands separators first:
//!
//! ```rust
//! use rowcsv::Row;
//!
//! let row = Row::new(2, vec!["  Ada  ".to_string(), "1,234".to_string()]);
//!
//! let name = row.cell_at(1).trim();
//! assert_eq!(name.as_str(), "Ada");
//! assert_eq!(row.cell_at(2).to_i64(None).unwrap(), 1234);
//!
//! // Out-of-range indices yield an invalid cell, not an error.
//! assert!(!row.cell_at(5).is_valid());
//! assert_eq!(row.cell_at(5).as_str(), "");
//! ```
//!
//! ## Search
//!
//! Search always rescans the whole file from row 1 (the session is reset
//! first). *Fuzzy* is case-insensitive substring containment; non-fuzzy is
//! case-insensitive exact equality against the trimmed field:
//!
//! ```no_run
//! use rowcsv::Session;
//!
//! # fn main() -> Result<(), rowcsv::Error> {
//! let mut session = Session::open("people.csv")?;
//! let hit = session.find_first("li", true)?;
//! println!(
//!     "row {} column {}: {}",
//!     hit.row_number(),
//!     hit.column(),
//!     hit.matched_cell().as_str()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Write-back
//!
//! Rows accumulate into a plain `Vec<Vec<String>>` table, which
//! [`session::write_table`] serializes with the delimiter implied by the
//! destination extension (parent directories are created as needed):
//!
//! ```no_run
//! use rowcsv::{write_table, Session};
//!
//! # fn main() -> Result<(), rowcsv::Error> {
//! let mut session = Session::open("people.csv")?;
//! let mut table = Vec::new();
//! while let Some(mut row) = session.next_row()? {
//!     row.transform_columns(|s| s.trim().to_string(), &[]);
//!     table.push(row.to_record());
//! }
//! write_table("out/people.tsv", &table)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`session`]: file lifecycle (open/next_row/reset/close), search, and
//!   table writing, plus decode options and observability hooks
//! - [`row`]: one decoded record with 1-based cell addressing and in-place
//!   mutation
//! - [`cell`]: single-field access with lazy typed conversion
//! - [`error`]: the crate-wide error type

pub mod cell;
pub mod error;
pub mod row;
pub mod session;

pub use cell::Cell;
pub use error::{Error, Result};
pub use row::Row;
pub use session::{write_table, Match, Session, SessionObserver, SessionOptions, Severity};
