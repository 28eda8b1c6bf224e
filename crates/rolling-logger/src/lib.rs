//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent formatted lines in a circular
//! buffer and mirrors each line to the platform console (browser console on
//! wasm32, stderr elsewhere).

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Number of lines kept in memory
    pub capacity: usize,
    /// Most verbose level recorded
    pub max_level: Level,
    /// Mirror lines to the console
    pub echo: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 500,
            max_level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
            echo: true,
        }
    }
}

/// Shared handle to the most recent log lines
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else { return };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

/// Layer that formats events into [`LogBuffer`] lines
pub struct RollingLayer {
    buffer: LogBuffer,
    max_level: Level,
    echo: bool,
}

impl RollingLayer {
    pub fn new(config: LoggerConfig) -> (Self, LogBuffer) {
        let buffer = LogBuffer::new(config.capacity);
        let layer = Self {
            buffer: buffer.clone(),
            max_level: config.max_level,
            echo: config.echo,
        };
        (layer, buffer)
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = format!(
            "{} {:<5} [{}] {}{}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            meta.level(),
            meta.target(),
            visitor.message,
            visitor.fields,
        );
        if self.echo {
            emit(meta.level(), &line);
        }
        self.buffer.push(line);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: &Level, line: &str) {
    let value = line.into();
    match *level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: &Level, line: &str) {
    eprintln!("{line}");
}

/// Install the rolling layer as the global subscriber.
///
/// Returns the buffer handle. A second call keeps the first subscriber and
/// hands back a buffer that stays empty.
pub fn init(config: LoggerConfig) -> LogBuffer {
    let (layer, buffer) = RollingLayer::new(config);
    let subscriber = tracing_subscriber::registry().with(layer);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("global subscriber already installed");
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(capacity: usize, max_level: Level) -> LoggerConfig {
        LoggerConfig { capacity, max_level, echo: false }
    }

    fn capture<F: FnOnce()>(config: LoggerConfig, f: F) -> LogBuffer {
        let (layer, buffer) = RollingLayer::new(config);
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        buffer
    }

    #[test]
    fn test_formats_message_and_fields() {
        let buffer = capture(quiet(10, Level::DEBUG), || {
            tracing::info!(count = 2, name = "oil", "added entries");
        });
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("added entries count=2 name=oil"));
    }

    #[test]
    fn test_drops_oldest_when_full() {
        let buffer = capture(quiet(3, Level::DEBUG), || {
            for i in 0..5 {
                tracing::info!("line {}", i);
            }
        });
        let lines = buffer.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_respects_max_level() {
        let buffer = capture(quiet(10, Level::WARN), || {
            tracing::debug!("hidden");
            tracing::info!("hidden too");
            tracing::error!("shown");
        });
        assert_eq!(buffer.len(), 1);
        assert!(buffer.lines()[0].ends_with("shown"));
    }

    #[test]
    fn test_clear() {
        let buffer = capture(quiet(10, Level::DEBUG), || tracing::info!("x"));
        assert!(!buffer.is_empty());
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
