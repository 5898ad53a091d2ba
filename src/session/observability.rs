use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Error;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Context about the session an event belongs to.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// The file the session is bound to.
    pub path: PathBuf,
    /// The field delimiter in effect.
    pub delimiter: u8,
}

/// Stats reported when a pass over the file completes or a table is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    /// Number of rows read or written.
    pub rows: u64,
}

/// Observer interface for session outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait SessionObserver: Send + Sync {
    /// Called when a file is successfully opened.
    fn on_open(&self, _ctx: &SessionContext) {}

    /// Called when a read pass reaches end-of-input.
    fn on_exhausted(&self, _ctx: &SessionContext, _stats: PassStats) {}

    /// Called when a table write completes.
    fn on_write(&self, _ctx: &SessionContext, _stats: PassStats) {}

    /// Called when an operation fails.
    fn on_failure(&self, _ctx: &SessionContext, _severity: Severity, _error: &Error) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &SessionContext, severity: Severity, error: &Error) {
        self.on_failure(ctx, severity, error)
    }
}

/// Classifies an error for observer callbacks. I/O failures (direct, or
/// wrapped inside a decode error) are Critical; everything else is Error.
pub(crate) fn severity_for_error(e: &Error) -> Severity {
    match e {
        Error::Io(_) => Severity::Critical,
        Error::Csv(err) => match err.kind() {
            csv::ErrorKind::Io(_) => Severity::Critical,
            _ => Severity::Error,
        },
        _ => Severity::Error,
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn SessionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl SessionObserver for CompositeObserver {
    fn on_open(&self, ctx: &SessionContext) {
        for o in &self.observers {
            o.on_open(ctx);
        }
    }

    fn on_exhausted(&self, ctx: &SessionContext, stats: PassStats) {
        for o in &self.observers {
            o.on_exhausted(ctx, stats);
        }
    }

    fn on_write(&self, ctx: &SessionContext, stats: PassStats) {
        for o in &self.observers {
            o.on_write(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &SessionContext, severity: Severity, error: &Error) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &SessionContext, severity: Severity, error: &Error) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs session events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl SessionObserver for StdErrObserver {
    fn on_open(&self, ctx: &SessionContext) {
        eprintln!("[session][open] path={}", ctx.path.display());
    }

    fn on_exhausted(&self, ctx: &SessionContext, stats: PassStats) {
        eprintln!(
            "[session][eof] path={} rows={}",
            ctx.path.display(),
            stats.rows
        );
    }

    fn on_write(&self, ctx: &SessionContext, stats: PassStats) {
        eprintln!(
            "[session][write] path={} rows={}",
            ctx.path.display(),
            stats.rows
        );
    }

    fn on_failure(&self, ctx: &SessionContext, severity: Severity, error: &Error) {
        eprintln!(
            "[session][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &SessionContext, severity: Severity, error: &Error) {
        eprintln!(
            "[ALERT][session][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }
}

/// Appends session events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl SessionObserver for FileObserver {
    fn on_open(&self, ctx: &SessionContext) {
        self.append_line(&format!("{} open path={}", unix_ts(), ctx.path.display()));
    }

    fn on_exhausted(&self, ctx: &SessionContext, stats: PassStats) {
        self.append_line(&format!(
            "{} eof path={} rows={}",
            unix_ts(),
            ctx.path.display(),
            stats.rows
        ));
    }

    fn on_write(&self, ctx: &SessionContext, stats: PassStats) {
        self.append_line(&format!(
            "{} write path={} rows={}",
            unix_ts(),
            ctx.path.display(),
            stats.rows
        ));
    }

    fn on_failure(&self, ctx: &SessionContext, severity: Severity, error: &Error) {
        self.append_line(&format!(
            "{} fail severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &SessionContext, severity: Severity, error: &Error) {
        self.append_line(&format!(
            "{} ALERT severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
