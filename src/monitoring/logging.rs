//! Operational and debug log streams.
//!
//! A [`Logger`] is built once per run and handed to the enumerator and the
//! dispatcher. It owns two streams: the operational stream, which is always
//! written, and the debug stream, which is only active when the
//! `REGIONSWEEP_DEBUG` environment variable is exactly `true`. Both streams
//! are `tracing` dispatchers formatting through `tracing-subscriber`, scoped
//! to the logger instead of installed globally.

use crate::core::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;

/// Environment variable enabling the debug stream.
pub const DEBUG_ENV_VAR: &str = "REGIONSWEEP_DEBUG";

/// Returns whether a raw toggle value enables debug output.
///
/// Only the exact string `true` does; any other value, including an unset
/// variable, leaves the debug stream disabled.
pub fn debug_toggle(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Reads [`DEBUG_ENV_VAR`] from the process environment.
pub fn debug_enabled_from_env() -> bool {
    debug_toggle(std::env::var(DEBUG_ENV_VAR).ok().as_deref())
}

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Plain text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Where log lines are written.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogDestination {
    /// Standard output
    #[default]
    Stdout,
    /// Standard error
    Stderr,
    /// Append to a file
    File(PathBuf),
    /// Drop everything
    Discard,
    /// In-memory capture, for tests and embedding
    #[serde(skip)]
    Buffer(LogBuffer),
}

/// Logger configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Output destination
    pub destination: LogDestination,
    /// Output format
    pub format: LogFormat,
    /// Prefix lines with a timestamp
    pub timestamps: bool,
}

impl LogConfig {
    /// Configuration writing to the given destination with default formatting.
    pub fn to(destination: LogDestination) -> Self {
        Self {
            destination,
            ..Default::default()
        }
    }

    /// Configuration that discards all output.
    pub fn discard() -> Self {
        Self::to(LogDestination::Discard)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            destination: LogDestination::Stdout,
            format: LogFormat::Text,
            timestamps: true,
        }
    }
}

/// Shared in-memory log capture.
#[derive(Clone, Debug, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        let bytes = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Written lines, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Clear the buffer.
    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[derive(Clone)]
enum SinkTarget {
    Stdout,
    Stderr,
    Shared(Arc<Mutex<dyn Write + Send>>),
}

/// Writer behind both streams of a logger.
///
/// Every formatted event reaches the sink as a single `write` call, which is
/// performed under the destination's lock, so lines from concurrent region
/// units never interleave.
#[derive(Clone)]
struct LogSink {
    target: SinkTarget,
}

impl LogSink {
    /// Open the destination. `None` means discard.
    fn open(destination: &LogDestination) -> Result<Option<Self>> {
        let target = match destination {
            LogDestination::Stdout => SinkTarget::Stdout,
            LogDestination::Stderr => SinkTarget::Stderr,
            LogDestination::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                SinkTarget::Shared(Arc::new(Mutex::new(file)))
            }
            LogDestination::Buffer(buffer) => SinkTarget::Shared(buffer.inner.clone()),
            LogDestination::Discard => return Ok(None),
        };
        Ok(Some(Self { target }))
    }
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.target {
            SinkTarget::Stdout => io::stdout().lock().write_all(buf)?,
            SinkTarget::Stderr => io::stderr().lock().write_all(buf)?,
            SinkTarget::Shared(writer) => writer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.target {
            SinkTarget::Stdout => io::stdout().flush(),
            SinkTarget::Stderr => io::stderr().flush(),
            SinkTarget::Shared(writer) => writer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StreamKind {
    Operational,
    Debug,
}

/// One log stream.
#[derive(Clone)]
pub struct LogStream {
    kind: StreamKind,
    dispatch: Option<Dispatch>,
}

impl LogStream {
    fn discard(kind: StreamKind) -> Self {
        Self {
            kind,
            dispatch: None,
        }
    }

    fn new(kind: StreamKind, sink: LogSink, config: &LogConfig) -> Self {
        let builder = tracing_subscriber::fmt()
            .with_writer(sink)
            .with_ansi(false)
            .with_target(false)
            .with_max_level(LevelFilter::TRACE);

        let dispatch = match (config.format, config.timestamps) {
            (LogFormat::Text, true) => Dispatch::new(builder.finish()),
            (LogFormat::Text, false) => Dispatch::new(builder.without_time().finish()),
            (LogFormat::Json, true) => Dispatch::new(builder.json().finish()),
            (LogFormat::Json, false) => Dispatch::new(builder.json().without_time().finish()),
        };

        Self {
            kind,
            dispatch: Some(dispatch),
        }
    }

    /// Whether lines written to this stream go anywhere.
    pub fn is_active(&self) -> bool {
        self.dispatch.is_some()
    }

    /// Write one line.
    pub fn println(&self, message: impl Display) {
        let Some(dispatch) = &self.dispatch else {
            return;
        };
        tracing::dispatcher::with_default(dispatch, || match self.kind {
            StreamKind::Operational => tracing::info!("{}", message),
            StreamKind::Debug => tracing::debug!("{}", message),
        });
    }
}

impl std::fmt::Debug for LogStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogStream")
            .field("kind", &self.kind)
            .field("active", &self.is_active())
            .finish()
    }
}

/// The logging context of a run.
#[derive(Clone, Debug)]
pub struct Logger {
    operational: LogStream,
    debug: LogStream,
}

impl Logger {
    /// Build both streams from a configuration.
    ///
    /// The debug stream shares the operational destination when
    /// `debug_enabled` is set, and discards otherwise.
    pub fn configure(config: &LogConfig, debug_enabled: bool) -> Result<Self> {
        let Some(sink) = LogSink::open(&config.destination)? else {
            return Ok(Self::disabled());
        };

        let debug = if debug_enabled {
            LogStream::new(StreamKind::Debug, sink.clone(), config)
        } else {
            LogStream::discard(StreamKind::Debug)
        };

        Ok(Self {
            operational: LogStream::new(StreamKind::Operational, sink, config),
            debug,
        })
    }

    /// Build both streams, reading the debug toggle from the environment.
    pub fn from_env(config: &LogConfig) -> Result<Self> {
        Self::configure(config, debug_enabled_from_env())
    }

    /// A logger that writes nothing.
    pub fn disabled() -> Self {
        Self {
            operational: LogStream::discard(StreamKind::Operational),
            debug: LogStream::discard(StreamKind::Debug),
        }
    }

    /// Write to the operational stream.
    pub fn info(&self, message: impl Display) {
        self.operational.println(message);
    }

    /// Write to the debug stream.
    pub fn debug(&self, message: impl Display) {
        self.debug.println(message);
    }

    /// The operational stream.
    pub fn operational(&self) -> &LogStream {
        &self.operational
    }

    /// The debug stream.
    pub fn debug_stream(&self) -> &LogStream {
        &self.debug
    }

    /// Whether debug lines are written anywhere.
    pub fn debug_enabled(&self) -> bool {
        self.debug.is_active()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::disabled()
    }
}
