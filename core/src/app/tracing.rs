use std::io;
#[cfg(feature = "app_tracing_file")]
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable holding the console filter directives.
pub const CONSOLE_LOG: &str = "CONSOLE_LOG";
/// Environment variable holding the log file filter directives.
pub const FILE_LOG: &str = "FILE_LOG";
/// Directives used when the environment variable of a filter is not set or invalid.
pub const DEFAULT_DIRECTIVES: &str = "warn";

#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  #[cfg(feature = "app_tracing_file")]
  log_file_path: Option<PathBuf>,
  #[cfg(feature = "app_tracing_file")]
  file_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }
}
#[cfg(feature = "app_tracing_file")]
impl AppTracingBuilder {
  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Some(log_file_path.into());
    self
  }
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }
}

#[derive(Debug, Error)]
pub enum AppTracingError {
  #[error("Failed to set the global tracing subscriber")]
  Init(#[from] TryInitError),
}

/// Creates a filter from the directives in environment variable `env`, falling back to [`DEFAULT_DIRECTIVES`] when it
/// is not set or invalid. With the `app_env` feature, variables are read through [`crate::app::env::var`], so values
/// loaded from a `.env` file apply.
pub fn filter_from_env(env: &str) -> EnvFilter {
  #[cfg(feature = "app_env")]
  let directives = crate::app::env::var(env);
  #[cfg(not(feature = "app_env"))]
  let directives = std::env::var(env).ok();
  directives
    .and_then(|directives| EnvFilter::try_new(directives).ok())
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

impl AppTracingBuilder {
  /// Sets the global tracing subscriber: a console layer writing to stderr, and a layer writing to the log file if a
  /// log file path was set. Filters that were not set are read from [`CONSOLE_LOG`] and [`FILE_LOG`].
  ///
  /// Fails if a global subscriber was already set. The returned [`AppTracing`] must be kept alive for log file
  /// writes to be flushed.
  pub fn build(self) -> Result<AppTracing, AppTracingError> {
    let console_filter = self.console_filter.unwrap_or_else(|| filter_from_env(CONSOLE_LOG));
    let layered = tracing_subscriber::registry().with(
      tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter)
    );

    #[cfg(feature = "app_tracing_file")] {
      if let Some(file_path) = self.log_file_path {
        let file_filter = self.file_filter.unwrap_or_else(|| filter_from_env(FILE_LOG));
        return match create_log_file(&file_path) {
          Err(e) => {
            layered.try_init()?;
            tracing::warn!(
              "Cannot log to file; could not truncate/create and open log file '{}' for writing: {}",
              file_path.display(),
              e
            );
            Ok(AppTracing::default())
          }
          Ok(log_file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(io::BufWriter::new(log_file));
            layered.with(
              tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(file_filter)
            ).try_init()?;
            Ok(AppTracing { _file_tracing: FileTracing { _guard: Some(guard) } })
          }
        };
      }
    }

    layered.try_init()?;
    Ok(AppTracing::default())
  }
}

#[cfg(feature = "app_tracing_file")]
fn create_log_file(file_path: &std::path::Path) -> Result<std::fs::File, io::Error> {
  if let Some(parent) = file_path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::File::create(file_path)
}

/// Keeps the log file writer alive; dropping it flushes pending log file writes.
#[derive(Default)]
pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing {
  _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;
