//! Subscriber setup using the configured level and message template.

use chrono::Local;
use tijarah_settings::{LogFormat, LogLevel, LogRecord, LoggingSettings};
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// `strftime` pattern for `{timestamp}`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Event formatter that renders each event through a [`LogFormat`].
#[derive(Debug, Clone)]
pub struct TemplateFormat {
    format: LogFormat,
}

impl TemplateFormat {
    /// Creates a formatter for `format`.
    pub const fn new(format: LogFormat) -> Self {
        Self { format }
    }
}

impl<S, N> FormatEvent<S, N> for TemplateFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut message = String::new();
        ctx.format_fields(Writer::new(&mut message), event)?;

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let meta = event.metadata();
        let record = LogRecord {
            timestamp: &timestamp,
            target: meta.target(),
            level: LogLevel::label(meta.level()),
            message: &message,
        };

        self.format.write_to(&mut writer, &record)?;
        writeln!(writer)
    }
}

/// Builds the filter: `RUST_LOG` if set, otherwise the configured level.
fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.level_filter().to_string()))
}

/// Installs the global subscriber.
pub fn init(logging: &LoggingSettings) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(logging.level))
        .event_format(TemplateFormat::new(logging.format.clone()))
        .init();
}
