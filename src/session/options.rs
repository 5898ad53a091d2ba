//! Decode options carried by a session across resets.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::observability::{SessionObserver, Severity};

/// Returns the field delimiter implied by a path's extension.
///
/// `.tsv` selects tab, `.psv` selects pipe, anything else (including no
/// extension) selects comma. Matching is case-insensitive.
pub fn delimiter_for_path(path: &Path) -> u8 {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("tsv") => b'\t',
        Some("psv") => b'|',
        _ => b',',
    }
}

/// Options controlling how a [`super::Session`] decodes its file.
///
/// Use [`Default`] for common cases. The same options are reapplied when the
/// session is [`super::Session::reset`].
#[derive(Clone)]
pub struct SessionOptions {
    /// Field delimiter. If `None`, inferred from the file extension via
    /// [`delimiter_for_path`].
    pub delimiter: Option<u8>,
    /// Lines starting with this byte are skipped entirely.
    pub comment: Option<u8>,
    /// Tolerate rows with inconsistent field counts (on by default).
    pub flexible: bool,
    /// Interpret RFC 4180 quoting (on by default). Turn off to read quotes as
    /// literal field bytes.
    pub quoting: bool,
    /// Trim leading/trailing whitespace from every field as it is decoded.
    pub trim_fields: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn SessionObserver>>,
    /// Severity threshold at or above which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl fmt::Debug for SessionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionOptions")
            .field("delimiter", &self.delimiter)
            .field("comment", &self.comment)
            .field("flexible", &self.flexible)
            .field("quoting", &self.quoting)
            .field("trim_fields", &self.trim_fields)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            comment: None,
            flexible: true,
            quoting: true,
            trim_fields: false,
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }
}
