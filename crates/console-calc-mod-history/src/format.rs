//! Rendering options for the undo log.
use std::fmt::Write;

use chrono::SecondsFormat;
use console_calc_config::config::DEFAULT_TIMESTAMP_FORMAT;
use console_calc_config::AppConfig;
use console_calc_core::Operation;

/// Heading printed above a non-empty undo log.
pub const LOG_HEADING: &str = "History (most recent first):";

/// Controls how `History::render_undo_log` lays out entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFormat {
    /// strftime pattern for entry timestamps (UTC). `None` hides timestamps.
    pub timestamp_format: Option<String>,
    /// Max entries to print. 0 = all.
    pub max_entries: usize,
}

impl Default for LogFormat {
    fn default() -> Self {
        Self {
            timestamp_format: Some(DEFAULT_TIMESTAMP_FORMAT.to_string()),
            max_entries: 0,
        }
    }
}

impl From<&AppConfig> for LogFormat {
    fn from(config: &AppConfig) -> Self {
        Self {
            timestamp_format: config
                .show_timestamps
                .then(|| config.timestamp_format.clone()),
            max_entries: config.max_history_display,
        }
    }
}

impl LogFormat {
    /// Appends one `- <label> [<timestamp>]` line for `op` to `out`.
    pub(crate) fn write_entry(&self, out: &mut String, op: &Operation) {
        out.push_str("- ");
        out.push_str(op.label());
        if let Some(pattern) = &self.timestamp_format {
            let mut stamp = String::new();
            // chrono reports bad patterns as a fmt::Error while writing
            if write!(stamp, "{}", op.timestamp().format(pattern)).is_err() {
                stamp = op.timestamp().to_rfc3339_opts(SecondsFormat::Millis, true);
            }
            out.push_str(" [");
            out.push_str(&stamp);
            out.push(']');
        }
        out.push('\n');
    }
}
