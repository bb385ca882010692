//! Variadic leveled logging macros
//!
//! Each macro takes a logger and an arbitrarily-typed argument list.
//! Arguments are captured into [`LogValue`](crate::LogValue)s at the call
//! site; anything without a dedicated renderable kind falls back to its
//! `(<type-name>) <debug-repr>` rendering, so no argument type ever fails.
//!
//! # Examples
//!
//! ```
//! use logpipe::{info, warning, Logger};
//!
//! let logger = Logger::console();
//!
//! info!(logger, "user", 7, "logged in");
//! warning!(logger, "disk usage", 93.5, b"percent");
//! ```

/// Capture an argument list into a `Vec<LogValue>`.
///
/// Known kinds (numerics, strings, byte sequences) take their dedicated
/// capture; everything else resolves to the `Debug` fallback.
#[macro_export]
macro_rules! log_args {
    () => {
        ::std::vec::Vec::<$crate::LogValue>::new()
    };
    ($($arg:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::core::value::CaptureFallback as _;
        ::std::vec![$($crate::core::value::Capture(&$arg).capture()),+]
    }};
}

/// Log at an explicit level.
///
/// ```
/// # use logpipe::{log, Level, Logger};
/// # let logger = Logger::console();
/// log!(logger, Level::Error, "exit code", 1);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $crate::log_args!($($arg),*))
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Fatal $(, $arg)*)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Error $(, $arg)*)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Warning $(, $arg)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Info $(, $arg)*)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Notice $(, $arg)*)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Debug $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, LogValue, Logger};

    #[test]
    fn test_log_args_kinds() {
        let args = log_args!("hi", 42, 3.14, b"yo");
        assert_eq!(
            args,
            vec![
                LogValue::Str("hi".into()),
                LogValue::Int(42),
                LogValue::Float(3.14),
                LogValue::Bytes(b"yo".to_vec()),
            ]
        );
    }

    #[test]
    fn test_log_args_empty() {
        assert!(log_args!().is_empty());
    }

    #[test]
    fn test_log_args_fallback() {
        #[derive(Debug)]
        struct Marker;

        let args = log_args!(Marker);
        assert_eq!(args.len(), 1);
        assert!(args[0].to_string().ends_with("Marker) Marker"));
    }

    #[test]
    fn test_log_macro() {
        let logger = Logger::console();
        log!(logger, Level::Info, "message", 1);
        log!(logger, Level::Error);
    }

    #[test]
    fn test_level_macros() {
        let logger = Logger::console();
        fatal!(logger, "fatal");
        error!(logger, "error", 500);
        warning!(logger, "warning");
        info!(logger, "info", "extra");
        notice!(logger, "notice");
        debug!(logger, "debug", 2.5);
    }
}
