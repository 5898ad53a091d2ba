//! Stateful reader bound to one open delimited-text file.
//!
//! A [`Session`] owns the file handle and the decoder, advances row-by-row via
//! [`Session::next_row`], can [`Session::reset`] back to the first row, and
//! can scan the whole file with the search operations in [`search`].
//!
//! Sessions are single-threaded: the file handle, decoder state, and row
//! counter are mutable state with no internal locking. Callers needing
//! concurrent access must serialize externally (one session per worker, or an
//! external mutex).

pub mod observability;
pub mod options;
pub mod search;
pub mod writer;

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::row::Row;

use observability::severity_for_error;

pub use observability::{
    CompositeObserver, FileObserver, PassStats, SessionContext, SessionObserver, Severity,
    StdErrObserver,
};
pub use options::{delimiter_for_path, SessionOptions};
pub use search::Match;
pub use writer::write_table;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Debug)]
struct Inner {
    reader: csv::Reader<File>,
    row_number: u64,
    exhausted: bool,
}

/// A stateful reader over one delimited-text file.
///
/// The field delimiter is selected from the file extension (`.tsv` → tab,
/// `.psv` → pipe, otherwise comma) unless overridden in [`SessionOptions`].
/// Rows with inconsistent field counts are tolerated by default, and a UTF-8
/// byte-order mark is skipped if present.
#[derive(Debug)]
pub struct Session {
    ctx: SessionContext,
    options: SessionOptions,
    data_start: u64,
    state: Option<Inner>,
}

impl Session {
    /// Opens `path` with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, SessionOptions::default())
    }

    /// Opens `path` with explicit options.
    ///
    /// Fails with [`Error::Io`] when the file is missing or unreadable. When
    /// an observer is configured, the failure is reported to it before
    /// returning.
    pub fn open_with(path: impl AsRef<Path>, options: SessionOptions) -> Result<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let delimiter = options.delimiter.unwrap_or_else(|| delimiter_for_path(&path));
        let ctx = SessionContext {
            path: path.clone(),
            delimiter,
        };

        let mut file = match File::open(&path) {
            Ok(f) => f,
            Err(e) => {
                let err = Error::Io(e);
                report_failure(&ctx, &options, &err);
                return Err(err);
            }
        };
        let data_start = match skip_bom(&mut file) {
            Ok(offset) => offset,
            Err(e) => {
                let err = Error::Io(e);
                report_failure(&ctx, &options, &err);
                return Err(err);
            }
        };

        let reader = build_reader(file, delimiter, &options);
        if let Some(obs) = options.observer.as_ref() {
            obs.on_open(&ctx);
        }

        Ok(Self {
            ctx,
            options,
            data_start,
            state: Some(Inner {
                reader,
                row_number: 0,
                exhausted: false,
            }),
        })
    }

    /// The file this session is bound to.
    pub fn path(&self) -> &Path {
        &self.ctx.path
    }

    /// The field delimiter in effect.
    pub fn delimiter(&self) -> u8 {
        self.ctx.delimiter
    }

    /// Whether the file handle is still held (i.e. [`Session::close`] has not
    /// been called).
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// 1-based number of the last row returned, or 0 when none has been read
    /// since open/reset.
    pub fn current_row_number(&self) -> u64 {
        self.state.as_ref().map_or(0, |s| s.row_number)
    }

    /// Reads the next row.
    ///
    /// Returns `Ok(None)` on end-of-input. On a malformed record the error is
    /// surfaced and the decoder position is undefined for further reads; the
    /// caller should treat it as fatal for this pass and [`Session::reset`] to
    /// retry.
    pub fn next_row(&mut self) -> Result<Option<Row>> {
        let inner = match self.state.as_mut() {
            Some(inner) => inner,
            None => {
                let err = Error::NotOpen;
                report_failure(&self.ctx, &self.options, &err);
                return Err(err);
            }
        };

        let mut record = csv::StringRecord::new();
        match inner.reader.read_record(&mut record) {
            Ok(true) => {
                inner.row_number += 1;
                let values = record.iter().map(str::to_string).collect();
                Ok(Some(Row::new(inner.row_number, values)))
            }
            Ok(false) => {
                if !inner.exhausted {
                    inner.exhausted = true;
                    if let Some(obs) = self.options.observer.as_ref() {
                        obs.on_exhausted(
                            &self.ctx,
                            PassStats {
                                rows: inner.row_number,
                            },
                        );
                    }
                }
                Ok(None)
            }
            Err(e) => {
                let err = Error::Csv(e);
                report_failure(&self.ctx, &self.options, &err);
                Err(err)
            }
        }
    }

    /// Seeks back to the first row and rebuilds the decoder with the same
    /// options, resetting the row counter to 0.
    ///
    /// Fails with [`Error::NotOpen`] after [`Session::close`].
    pub fn reset(&mut self) -> Result<()> {
        let inner = match self.state.take() {
            Some(inner) => inner,
            None => {
                let err = Error::NotOpen;
                report_failure(&self.ctx, &self.options, &err);
                return Err(err);
            }
        };

        let mut file = inner.reader.into_inner();
        let seek = file.seek(SeekFrom::Start(self.data_start));
        self.state = Some(Inner {
            reader: build_reader(file, self.ctx.delimiter, &self.options),
            row_number: 0,
            exhausted: false,
        });
        match seek {
            Ok(_) => Ok(()),
            Err(e) => {
                let err = Error::Io(e);
                report_failure(&self.ctx, &self.options, &err);
                Err(err)
            }
        }
    }

    /// Releases the file handle. Idempotent: a second close is a no-op.
    pub fn close(&mut self) {
        self.state = None;
    }

    /// Writes an in-memory table to `path`, reporting the outcome to the
    /// configured observer.
    ///
    /// The delimiter is inferred from the destination extension and parent
    /// directories are created as needed. A failed write may leave a partial
    /// file; nothing is rolled back.
    pub fn save_as(&self, path: impl AsRef<Path>, rows: &[Vec<String>]) -> Result<()> {
        let path = path.as_ref();
        match writer::write_table(path, rows) {
            Ok(()) => {
                if let Some(obs) = self.options.observer.as_ref() {
                    let ctx = SessionContext {
                        path: path.to_path_buf(),
                        delimiter: delimiter_for_path(path),
                    };
                    obs.on_write(
                        &ctx,
                        PassStats {
                            rows: rows.len() as u64,
                        },
                    );
                }
                Ok(())
            }
            Err(err) => {
                report_failure(&self.ctx, &self.options, &err);
                Err(err)
            }
        }
    }

    pub(crate) fn report_failure(&self, err: &Error) {
        report_failure(&self.ctx, &self.options, err);
    }
}

fn report_failure(ctx: &SessionContext, options: &SessionOptions, err: &Error) {
    if let Some(obs) = options.observer.as_ref() {
        let sev = severity_for_error(err);
        obs.on_failure(ctx, sev, err);
        if sev >= options.alert_at_or_above {
            obs.on_alert(ctx, sev, err);
        }
    }
}

fn build_reader(file: File, delimiter: u8, options: &SessionOptions) -> csv::Reader<File> {
    let trim = if options.trim_fields {
        csv::Trim::All
    } else {
        csv::Trim::None
    };
    csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(options.flexible)
        .quoting(options.quoting)
        .comment(options.comment)
        .trim(trim)
        .from_reader(file)
}

/// Positions `file` just past a UTF-8 byte-order mark, if one is present, and
/// returns that offset so resets can seek back to it.
fn skip_bom(file: &mut File) -> std::io::Result<u64> {
    let mut prefix = [0u8; 3];
    let mut read = 0;
    while read < prefix.len() {
        match file.read(&mut prefix[read..]) {
            Ok(0) => break,
            Ok(n) => read += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    let offset = if read == 3 && prefix == UTF8_BOM { 3 } else { 0 };
    file.seek(SeekFrom::Start(offset))?;
    Ok(offset)
}
