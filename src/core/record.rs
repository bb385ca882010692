//! Log record structure and line rendering

use super::caller::CallSite;
use super::level::Level;
use super::value::LogValue;
use chrono::Local;

/// Dim prefix wrapping the `[time file:line]` header.
pub const FORMAT_PREFIX: &str = "\x1b[1;30m";
/// Reset sequence terminating any open color.
pub const FORMAT_OFF: &str = "\x1b[0m";
/// Wall-clock display format, second precision.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Immutable snapshot of one admitted logging call.
///
/// The timestamp is rendered at capture time, before the record enters the
/// hand-off queue, so records carry true call-order time even when the
/// consumer is slow to drain them. Rendering of the full line is deferred
/// until delivery.
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    pub values: Vec<LogValue>,
    pub site: CallSite,
    pub timestamp: String,
    pub color: &'static str,
}

impl Record {
    #[must_use]
    pub fn new(level: Level, values: Vec<LogValue>, site: CallSite) -> Self {
        Self {
            level,
            values,
            site,
            timestamp: Local::now().format(TIME_FORMAT).to_string(),
            color: level.color_format(),
        }
    }

    /// Render the record as one newline-terminated display line:
    ///
    /// ```text
    /// ESC[1;30m[<time> <file>:<line>] ESC[0m<levelColor><message>ESC[0m\n
    /// ```
    ///
    /// Never fails; zero values yield an empty message body.
    #[must_use]
    pub fn format_line(&self) -> String {
        let message = self
            .values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "{}[{} {}:{}] {}{}{}{}\n",
            FORMAT_PREFIX,
            self.timestamp,
            self.site.file,
            self.site.line,
            FORMAT_OFF,
            self.color,
            message,
            FORMAT_OFF,
        )
    }
}
