//! Process-wide tracing setup for the calculator binary.
//!
//! Events go to stderr so reports printed on stdout stay clean. The level
//! filter and the optional log file can both be changed after startup, which
//! lets the binary begin logging before its configuration file is read.

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

/// Filter used when neither `RUST_LOG` nor the configuration says otherwise.
pub const DEFAULT_FILTER: &str = "info";

// --- Formatter ---

/// `<local timestamp> <LEVEL> <file:line> <fields>`, coloured when the
/// writer supports ANSI escapes.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
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
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let (colour, reset) = if ansi {
            let colour = match *meta.level() {
                Level::ERROR => "\x1b[1;31m",
                Level::WARN => "\x1b[1;33m",
                Level::INFO => "\x1b[1;32m",
                Level::DEBUG => "\x1b[1;34m",
                Level::TRACE => "\x1b[1;35m",
            };
            (colour, "\x1b[0m")
        } else {
            ("", "")
        };
        write!(writer, "{colour}{:>5}{reset} ", meta.level())?;

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file
                .strip_prefix("src/")
                .or_else(|| file.strip_prefix("src\\"))
                .unwrap_or(file);
            write!(writer, "{file}:{line} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

type SharedFile = Arc<Mutex<Option<File>>>;

/// Writes to the log file once one has been opened; discards output until then.
#[derive(Clone)]
struct FileSlot(SharedFile);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

// --- Statics ---

static LEVEL_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();
static LOG_FILE: OnceLock<SharedFile> = OnceLock::new();

/// True when `RUST_LOG` is set, in which case it takes precedence over any
/// configured level.
pub fn env_filter_overridden() -> bool {
    std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
}

fn initial_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Call once at startup; later calls are
/// ignored.
///
/// - Stderr: coloured when attached to a terminal, plain otherwise.
/// - File: inactive until [`enable_file_logging`] is called.
/// - Level: `RUST_LOG` when set, else [`DEFAULT_FILTER`].
pub fn init_logging() {
    let file: SharedFile = Arc::new(Mutex::new(None));
    let (level_filter, level_handle) = reload::Layer::new(initial_filter());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(false)
        .with_writer(FileSlot(file.clone()));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = LEVEL_HANDLE.set(level_handle);
        let _ = LOG_FILE.set(file);
    }
}

/// Replaces the active filter. Accepts a bare level (`"debug"`) or any
/// `EnvFilter` directive (`"info,profit_core=trace"`).
pub fn set_log_level(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| anyhow!("invalid log level '{directive}': {e}"))?;

    match LEVEL_HANDLE.get() {
        Some(handle) => handle
            .reload(filter)
            .map_err(|e| anyhow!("filter reload failed: {e}")),
        None => bail!("logging not yet initialized"),
    }
}

/// Appends log output to `path`, replacing any file opened earlier.
/// The parent directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    match LOG_FILE.get() {
        Some(slot) => {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
            Ok(())
        }
        None => bail!("logging not yet initialized"),
    }
}
