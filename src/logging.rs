//! Activity log: a bounded buffer of recent tracing events, fed by a
//! subscriber layer and rendered in the activity panel.
//!
//! The terminal belongs to the UI while it runs, so events are collected
//! in memory instead of being written to stdout or stderr.

use std::collections::{BTreeMap, VecDeque};
use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Default number of entries kept.
pub const DEFAULT_CAPACITY: usize = 50;

/// One collected event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl LogEntry {
    /// Last path segment of the target, e.g. "clock" for "envnorm::clock".
    pub fn source(&self) -> &str {
        self.target.rsplit("::").next().unwrap_or(&self.target)
    }

    /// Message followed by `key=value` pairs.
    pub fn display(&self) -> String {
        let mut out = self.message.clone();
        for (key, value) in &self.fields {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

struct FieldVisitor<'a> {
    message: &'a mut String,
    fields: &'a mut BTreeMap<String, String>,
}

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            *self.message = value.to_string();
        } else {
            self.fields
                .insert(field.name().to_string(), value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            *self.message = format!("{value:?}");
        } else {
            self.fields
                .insert(field.name().to_string(), format!("{value:?}"));
        }
    }
}

#[derive(Debug)]
struct Buffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

/// Shared handle to the bounded event buffer. Clones see the same entries.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    inner: Arc<Mutex<Buffer>>,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Buffer {
                entries: VecDeque::with_capacity(capacity),
                capacity,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Buffer> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append an entry, evicting the oldest at capacity.
    pub fn push(&self, entry: LogEntry) {
        let mut buf = self.lock();
        if buf.capacity == 0 {
            return;
        }
        if buf.entries.len() >= buf.capacity {
            buf.entries.pop_front();
        }
        buf.entries.push_back(entry);
    }

    /// The `n` most recent entries, oldest first.
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        let buf = self.lock();
        let skip = buf.entries.len().saturating_sub(n);
        buf.entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// A subscriber layer that records into this log.
    pub fn layer(&self, level: Level) -> ActivityLayer {
        ActivityLayer {
            log: self.clone(),
            level,
        }
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Records events at or above `level` into an [`ActivityLog`].
#[derive(Debug, Clone)]
pub struct ActivityLayer {
    log: ActivityLog,
    level: Level,
}

impl<S> Layer<S> for ActivityLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        // Level ordering: ERROR < WARN < ... < TRACE.
        if *meta.level() > self.level {
            return;
        }
        let mut message = String::new();
        let mut fields = BTreeMap::new();
        event.record(&mut FieldVisitor {
            message: &mut message,
            fields: &mut fields,
        });
        self.log.push(LogEntry {
            level: *meta.level(),
            target: meta.target().to_string(),
            message,
            fields,
        });
    }
}

/// Install a global subscriber that feeds `log`.
pub fn install(
    log: &ActivityLog,
    level: Level,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::registry().with(log.layer(level));
    tracing::subscriber::set_global_default(subscriber)
}
