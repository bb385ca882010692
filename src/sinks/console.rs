//! Console sink implementation
//!
//! Lines arrive fully rendered, escape sequences included, so this sink
//! writes bytes straight through to stdout.

use crate::core::{Result, Sink};
use std::io::Write;

pub struct ConsoleSink;

impl ConsoleSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
