//! # Logpipe
//!
//! A leveled, colorized logging facility that decouples many concurrent
//! call sites from a single serialized output sink.
//!
//! ## Features
//!
//! - **Serialized Output**: one consumer thread per logger drains a
//!   synchronous hand-off queue, so lines are never torn or interleaved
//! - **Leveled Gating**: one ordinal threshold silences all less-urgent
//!   levels in a single assignment
//! - **Heterogeneous Arguments**: logging calls accept any mix of
//!   argument types; rendering never fails
//! - **Console and File Destinations**: optional append-or-create log
//!   file tee'd with the console

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, Capture, CaptureFallback, Level, LogValue, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, Record, Result, Sink, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::core::{
    CallSite, Capture, CaptureFallback, Level, LogValue, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, Record, Result, Sink, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use crate::sinks::{ConsoleSink, FileSink};
