//! Sink trait for log output destinations
//!
//! A sink accepts fully rendered lines and persists or displays each one
//! exactly once, in the order received. Sinks are owned by the single
//! consumer thread, so they need `Send` but no internal locking.

use super::error::Result;

pub trait Sink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
