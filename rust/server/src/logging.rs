//! Tracing setup for table hosts, plus a capturing layer tests use to assert
//! on what the tables logged.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,holdem_server=debug";

/// Selects JSON lines instead of human-readable output.
pub const LOG_FORMAT_ENV: &str = "HOLDEM_LOG_FORMAT";

/// One captured event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Collects events in memory.
#[derive(Debug, Clone, Default)]
pub struct TestLogSubscriber {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Entries carrying `table_id = table_id`.
    pub fn for_table(&self, table_id: &str) -> Vec<LogEntry> {
        self.lock()
            .iter()
            .filter(|e| e.field("table_id") == Some(table_id))
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn into_layer<S>(self) -> TestLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        TestLayer {
            subscriber: self,
            _phantom: PhantomData,
        }
    }
}

pub struct TestLayer<S> {
    subscriber: TestLogSubscriber,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for TestLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        self.subscriber.lock().push(LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    // strings without the Debug quotes so tests can compare ids directly
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.push(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.push(field.name(), format!("{value:?}"));
    }
}

impl FieldVisitor {
    fn push(&mut self, name: &str, value: String) {
        if name == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((name.to_string(), value));
        }
    }
}

/// Output style of the host subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON lines; anything else is pretty.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }

    /// Reads [`LOG_FORMAT_ENV`].
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }
}

/// Builds the host subscriber, writing to `writer`.
pub fn build_subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn tracing::Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => Box::new(
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_current_span(false)
                .with_writer(writer)
                .finish(),
        ),
        LogFormat::Pretty => Box::new(
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer)
                .finish(),
        ),
    }
}

/// Installs the global subscriber on stdout. `RUST_LOG` overrides
/// [`DEFAULT_FILTER`], and `HOLDEM_LOG_FORMAT=json` switches to JSON lines.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = build_subscriber(LogFormat::from_env(), filter, std::io::stdout);
    tracing::subscriber::set_global_default(subscriber)
}

/// Installs a capturing subscriber once per test binary and returns it
/// cleared.
pub fn init_test_logging() -> TestLogSubscriber {
    static SUBSCRIBER: OnceLock<TestLogSubscriber> = OnceLock::new();
    static REGISTERED: OnceLock<()> = OnceLock::new();

    let subscriber = SUBSCRIBER.get_or_init(TestLogSubscriber::new);

    REGISTERED.get_or_init(|| {
        let layer = subscriber.clone().into_layer::<Registry>();
        let registry = Registry::default().with(layer);
        // another subscriber may already be installed; capture is then best effort
        let _ = tracing::subscriber::set_global_default(registry);
    });

    subscriber.clear();
    subscriber.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info, warn};

    fn capture(f: impl FnOnce()) -> Vec<LogEntry> {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());
        tracing::subscriber::with_default(registry, f);
        subscriber.entries()
    }

    #[test]
    fn captures_levels_in_order() {
        let entries = capture(|| {
            debug!("dealing");
            info!("hand complete");
            warn!("action rejected");
        });
        let levels: Vec<Level> = entries.iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![Level::DEBUG, Level::INFO, Level::WARN]);
        assert!(entries[1].message.contains("hand complete"));
    }

    #[test]
    fn captures_table_fields() {
        let entries = capture(|| {
            info!(table_id = "t1", player_id = "alice", round = 3u32, "player joined");
        });
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].field("table_id"), Some("t1"));
        assert_eq!(entries[0].field("player_id"), Some("alice"));
        assert_eq!(entries[0].field("round"), Some("3"));
    }

    /// Collects formatted output in memory.
    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn format_with(format: LogFormat) -> String {
        let buffer = Buffer::default();
        let subscriber = build_subscriber(format, EnvFilter::new("info"), buffer.clone());
        tracing::subscriber::with_default(subscriber, || {
            debug!("filtered out");
            info!(table_id = "t1", "hand complete");
        });
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn json_format_writes_one_object_per_event() {
        let text = format_with(LogFormat::Json);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["fields"]["message"], "hand complete");
        assert_eq!(value["fields"]["table_id"], "t1");
    }

    #[test]
    fn pretty_format_is_plain_text() {
        let text = format_with(LogFormat::Pretty);
        assert!(text.contains("hand complete"));
        assert!(text.contains("t1"));
        assert!(!text.contains("filtered out"));
        assert!(serde_json::from_str::<serde_json::Value>(text.trim()).is_err());
    }

    #[test]
    fn format_setting_is_case_insensitive() {
        assert_eq!(LogFormat::from_setting(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::from_setting(Some("text")), LogFormat::Pretty);
        assert_eq!(LogFormat::from_setting(None), LogFormat::Pretty);
    }

    #[test]
    fn global_subscriber_installs_once() {
        assert!(init_logging().is_ok());
        assert!(init_logging().is_err());
    }

    #[test]
    fn for_table_filters_and_clear_empties() {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());
        tracing::subscriber::with_default(registry, || {
            info!(table_id = "a", "one");
            info!(table_id = "b", "two");
            info!("untagged");
        });
        assert_eq!(subscriber.for_table("a").len(), 1);
        assert_eq!(subscriber.entries().len(), 3);
        subscriber.clear();
        assert!(subscriber.entries().is_empty());
    }
}
