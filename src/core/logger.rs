//! The serializing pipeline: producers, hand-off queue, consumer thread

use super::{
    caller::CallSite,
    error::Result,
    level::Level,
    metrics::LoggerMetrics,
    record::Record,
    sink::Sink,
    value::LogValue,
};
use crate::sinks::{ConsoleSink, FileSink};
use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default shutdown timeout used when the logger is dropped without an
/// explicit `shutdown()` call.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// A leveled logger that serializes arbitrarily many producer threads
/// into one consumer thread via a synchronous hand-off queue.
///
/// The queue is a rendezvous point, not a buffer: an admitted call blocks
/// until the consumer takes that exact record, so producers self-throttle
/// to the consumer's write speed. Exactly one thread ever touches the
/// sinks, which is what makes concurrent logging safe without a sink lock.
pub struct Logger {
    threshold: RwLock<Level>,
    sender: Option<Sender<Record>>,
    consumer: Option<thread::JoinHandle<()>>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a logger writing to the console only.
    #[must_use]
    pub fn console() -> Self {
        Self::start(Level::Debug, vec![Box::new(ConsoleSink::new())])
    }

    /// Create a logger from an optional destination descriptor.
    ///
    /// Absent or empty → console only. A path → missing parent directories
    /// are created, the file is opened append-or-create, and output is
    /// tee'd to the file and the console.
    pub fn with_destination<P: AsRef<Path>>(destination: Option<P>) -> Result<Self> {
        match destination {
            Some(path) if !path.as_ref().as_os_str().is_empty() => {
                Self::builder().destination(path.as_ref()).build()
            }
            _ => Ok(Self::console()),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn start(threshold: Level, sinks: Vec<Box<dyn Sink>>) -> Self {
        let (sender, receiver) = bounded::<Record>(0);
        let metrics = Arc::new(LoggerMetrics::new());
        let metrics_clone = Arc::clone(&metrics);

        let consumer = thread::spawn(move || {
            Self::run_consumer(receiver, sinks, &metrics_clone);
        });

        Self {
            threshold: RwLock::new(threshold),
            sender: Some(sender),
            consumer: Some(consumer),
            metrics,
        }
    }

    /// The single consumer loop: receive one record, render it, write the
    /// line to every sink in order, repeat until the channel closes.
    ///
    /// A failed sink write is reported on the process error stream and
    /// counted; it never panics the consumer and never reaches the
    /// producer, whose call has already returned.
    fn run_consumer(
        receiver: Receiver<Record>,
        mut sinks: Vec<Box<dyn Sink>>,
        metrics: &LoggerMetrics,
    ) {
        for record in receiver.iter() {
            let line = record.format_line();

            for sink in sinks.iter_mut() {
                if let Err(e) = sink.write_line(&line) {
                    metrics.record_write_failure();
                    eprintln!("[LOGPIPE ERROR] sink '{}' write failed: {}", sink.name(), e);
                }
            }

            metrics.record_delivered();
        }

        // Channel closed: flush everything before the thread exits
        for sink in sinks.iter_mut() {
            if let Err(e) = sink.flush() {
                eprintln!("[LOGPIPE ERROR] sink '{}' flush failed: {}", sink.name(), e);
            }
        }
    }

    /// Change the admission threshold. Safe to call from any thread.
    pub fn set_level(&self, level: Level) {
        *self.threshold.write() = level;
    }

    /// Read the current admission threshold.
    #[must_use]
    pub fn level(&self) -> Level {
        *self.threshold.read()
    }

    /// Gate, capture, and hand off one logging call.
    ///
    /// Rejected calls return immediately with no side effect. Admitted
    /// calls capture the timestamp and call site up front, then block on
    /// the rendezvous send until the consumer takes the record. After
    /// shutdown the send observes a closed channel and is ignored.
    #[track_caller]
    pub fn log(&self, level: Level, values: Vec<LogValue>) {
        if !self.threshold.read().admits(level) {
            return;
        }

        let record = Record::new(level, values, CallSite::here());

        if let Some(ref sender) = self.sender {
            let _ = sender.send(record);
        }
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, values: Vec<LogValue>) {
        self.log(Level::Fatal, values);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, values: Vec<LogValue>) {
        self.log(Level::Error, values);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, values: Vec<LogValue>) {
        self.log(Level::Warning, values);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, values: Vec<LogValue>) {
        self.log(Level::Info, values);
    }

    #[inline]
    #[track_caller]
    pub fn notice(&self, values: Vec<LogValue>) {
        self.log(Level::Notice, values);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, values: Vec<LogValue>) {
        self.log(Level::Debug, values);
    }

    /// Consumer-side delivery counters.
    #[must_use]
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Close the queue and join the consumer with a bounded wait.
    ///
    /// Records already rendezvoused are written and the sinks flushed
    /// before the consumer exits. Returns `true` if the consumer finished
    /// within the timeout.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        drop(self.sender.take());

        if let Some(handle) = self.consumer.take() {
            let start = std::time::Instant::now();

            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!(
                            "[LOGPIPE ERROR] consumer thread panicked during shutdown: {:?}",
                            e
                        );
                        return false;
                    }
                    break;
                }

                if start.elapsed() >= timeout {
                    eprintln!(
                        "[LOGPIPE WARNING] consumer thread did not finish within {:?}. \
                         Some records may be lost.",
                        timeout
                    );
                    return false;
                }

                thread::sleep(Duration::from_millis(10));
            }
        }

        true
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```no_run
/// use logpipe::{Level, Logger};
///
/// let logger = Logger::builder()
///     .threshold(Level::Warning)
///     .destination("logs/app.log")
///     .build()
///     .expect("destination should open");
/// ```
pub struct LoggerBuilder {
    threshold: Level,
    destination: Option<PathBuf>,
    sinks: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: Level::Debug,
            destination: None,
            sinks: Vec::new(),
        }
    }

    /// Set the admission threshold. Defaults to `Debug` (admit everything).
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: Level) -> Self {
        self.threshold = level;
        self
    }

    /// Tee output to a log file at `path` in addition to the console.
    #[must_use = "builder methods return a new value"]
    pub fn destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = Some(path.into());
        self
    }

    /// Add a custom sink.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Build the logger, opening the file destination if one was set.
    ///
    /// Fails only on destination setup (directory creation or file open).
    /// With no destination and no custom sinks, the console is used.
    pub fn build(self) -> Result<Logger> {
        let mut sinks = self.sinks;

        match self.destination {
            Some(path) if !path.as_os_str().is_empty() => {
                // File first, then console, matching tee write order
                sinks.push(Box::new(FileSink::create(path)?));
                sinks.push(Box::new(ConsoleSink::new()));
            }
            _ => {
                if sinks.is_empty() {
                    sinks.push(Box::new(ConsoleSink::new()));
                }
            }
        }

        Ok(Logger::start(self.threshold, sinks))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
