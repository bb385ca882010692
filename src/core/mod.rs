//! Core logger types and traits

pub mod caller;
pub mod error;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod sink;
pub mod value;

pub use caller::CallSite;
pub use error::{LoggerError, Result};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use record::{Record, FORMAT_OFF, FORMAT_PREFIX, TIME_FORMAT};
pub use sink::Sink;
pub use value::{Capture, CaptureFallback, LogValue};
