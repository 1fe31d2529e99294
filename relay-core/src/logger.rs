//! Tracing setup. Events always go to the log file; the long-running bot also echoes them to the
//! console, while one-shot commands keep stdout for their own output.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock timestamp prefixing every line.
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

fn line_format() -> fmt::format::Format<fmt::format::Full, LocalTimestamp> {
    fmt::format()
        .with_timer(LocalTimestamp)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false)
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Builds the subscriber: a plain-text file layer, plus a stdout layer when `console` is set.
fn build_subscriber(
    file: Arc<File>,
    console: bool,
    filter: EnvFilter,
) -> impl Subscriber + Send + Sync + 'static {
    let file_layer = fmt::layer()
        .with_writer(file)
        .event_format(line_format())
        .with_ansi(false);
    let console_layer = console.then(|| {
        fmt::layer()
            .with_writer(io::stdout)
            .event_format(line_format())
            .with_ansi(false)
    });

    Registry::default()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
}

/// Installs the global subscriber writing `YYYY-MM-DD HH:MM:SS LEVEL target: message key=value`.
///
/// Level comes from `RUST_LOG` (default `info`); load `.env` before calling. Fails if the log file
/// cannot be opened or a global subscriber is already set.
pub fn init_tracing(log_file_path: &str, console: bool) -> anyhow::Result<()> {
    let file = open_log_file(Path::new(log_file_path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    build_subscriber(Arc::new(file), console, filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
