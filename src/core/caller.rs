//! Call-site capture
//!
//! Entry points are `#[track_caller]`, so the compiler threads the
//! originating location through to [`CallSite::here`] instead of the
//! logger walking the stack at runtime.

use std::panic::Location;
use std::path::Path;

/// The file base name and line number of an originating logging call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Capture the caller of the nearest non-`#[track_caller]` frame.
    ///
    /// The full path is stripped down to its final segment for display.
    #[track_caller]
    pub fn here() -> Self {
        let location: &'static Location<'static> = Location::caller();
        let path: &'static str = location.file();
        match Path::new(path).file_name().and_then(|n| n.to_str()) {
            Some(file) => CallSite {
                file,
                line: location.line(),
            },
            None => CallSite::unknown(),
        }
    }

    /// Sentinel for a call site that could not be resolved.
    pub fn unknown() -> Self {
        CallSite {
            file: "unknown",
            line: 0,
        }
    }
}
