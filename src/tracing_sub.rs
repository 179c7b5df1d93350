use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::OnceLock;

use tracing::Level;

static LOG_FILE: OnceLock<File> = OnceLock::new();

/// The terminal belongs to the panel while the simulator runs, so log output
/// goes to the configured file or nowhere.
pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    File(File),
    Sink(io::Sink),
}

impl DelegatingWriter {
    fn new() -> Self {
        let inner = match LOG_FILE.get().map(File::try_clone) {
            Some(Ok(file)) => DelegatingInner::File(file),
            _ => DelegatingInner::Sink(io::sink()),
        };
        DelegatingWriter { inner }
    }
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::File(f) => f.write(buf),
            DelegatingInner::Sink(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::File(f) => f.flush(),
            DelegatingInner::Sink(s) => s.flush(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SubscriberMakeWriter;

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter::new()
    }
}

/// Open (append) the log file once for the whole process. Later calls keep
/// the first file.
pub fn set_log_file(path: &Path) -> io::Result<()> {
    if LOG_FILE.get().is_some() {
        return Ok(());
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = LOG_FILE.set(file);
    Ok(())
}

/// Install the global subscriber at `level`, logging to `log_file` if given.
/// Safe to call more than once; only the first subscriber sticks.
pub fn init(level: Level, log_file: Option<&Path>) -> io::Result<()> {
    if let Some(path) = log_file {
        set_log_file(path)?;
    }
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(SubscriberMakeWriter)
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}
