//! Rolling file logger
//!
//! Installs a `tracing` subscriber that writes to `<log_dir>/<app>.log`,
//! rotating to `<app>.log.1 .. <app>.log.N` once the active file grows past
//! the size limit. The most recent lines are also kept in memory so the app
//! can show them without touching the filesystem. `log` records are bridged
//! into the same subscriber.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Log I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to install subscriber: {0}")]
    Subscriber(String),

    #[error("Logger not initialized")]
    NotInitialized,
}

/// Size and retention limits
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Rotate once the active file exceeds this many bytes
    pub max_file_size: u64,
    /// Rotated files kept besides the active one
    pub max_files: usize,
    /// Lines kept in the in-memory ring
    pub recent_capacity: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024,
            max_files: 5,
            recent_capacity: 200,
            level: LevelFilter::INFO,
        }
    }
}

static LOGGER: OnceLock<RollingWriter> = OnceLock::new();

/// Initialize with default limits
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, LoggerConfig::default())
}

pub fn init_logger_with(
    log_dir: PathBuf,
    app_name: &str,
    config: LoggerConfig,
) -> Result<(), LoggerError> {
    let level = config.level;
    let writer = RollingWriter::open(&log_dir, app_name, config)?;

    let builder = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_max_level(level);

    #[cfg(not(target_os = "android"))]
    builder
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    // logcat owns the `log` facade on Android; tracing events still go to file
    #[cfg(target_os = "android")]
    {
        tracing::subscriber::set_global_default(builder.finish())
            .map_err(|e| LoggerError::Subscriber(e.to_string()))?;
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(app_name.to_string()),
        );
    }

    LOGGER
        .set(writer)
        .map_err(|_| LoggerError::Subscriber("logger already initialized".to_string()))?;

    tracing::info!("{} logging to {}", app_name, log_dir.display());
    Ok(())
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .map(|writer| writer.recent_lines())
        .unwrap_or_default()
}

fn ensure_initialized() -> Result<(), LoggerError> {
    LOGGER.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

struct RollingState {
    dir: PathBuf,
    app_name: String,
    config: LoggerConfig,
    file: File,
    size: u64,
    recent: VecDeque<String>,
    partial_line: String,
}

/// Size-rotated log file plus an in-memory ring of recent lines
#[derive(Clone)]
pub struct RollingWriter {
    state: Arc<Mutex<RollingState>>,
}

impl RollingWriter {
    pub fn open(dir: &Path, app_name: &str, config: LoggerConfig) -> Result<Self, LoggerError> {
        fs::create_dir_all(dir)?;
        let path = active_path(dir, app_name);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let size = file.metadata()?.len();

        Ok(Self {
            state: Arc::new(Mutex::new(RollingState {
                dir: dir.to_path_buf(),
                app_name: app_name.to_string(),
                recent: VecDeque::with_capacity(config.recent_capacity),
                config,
                file,
                size,
                partial_line: String::new(),
            })),
        })
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.state.lock() {
            Ok(state) => state.recent.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().recent.iter().cloned().collect(),
        }
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;

        if state.size > 0 && state.size + buf.len() as u64 > state.config.max_file_size {
            state.rotate()?;
        }

        state.file.write_all(buf)?;
        state.size += buf.len() as u64;
        state.remember(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        state.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl RollingState {
    /// `<app>.log.(n-1)` -> `<app>.log.n`, ..., `<app>.log` -> `<app>.log.1`
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        let max = self.config.max_files;
        if max == 0 {
            self.file = File::create(active_path(&self.dir, &self.app_name))?;
            self.size = 0;
            return Ok(());
        }

        let oldest = rotated_path(&self.dir, &self.app_name, max);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..max).rev() {
            let from = rotated_path(&self.dir, &self.app_name, n);
            if from.exists() {
                fs::rename(&from, rotated_path(&self.dir, &self.app_name, n + 1))?;
            }
        }

        let active = active_path(&self.dir, &self.app_name);
        fs::rename(&active, rotated_path(&self.dir, &self.app_name, 1))?;
        self.file = OpenOptions::new().create(true).append(true).open(&active)?;
        self.size = 0;
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        let capacity = self.config.recent_capacity;
        if capacity == 0 {
            return;
        }

        self.partial_line.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial_line.find('\n') {
            let line: String = self.partial_line.drain(..=pos).collect();
            if self.recent.len() == capacity {
                self.recent.pop_front();
            }
            self.recent.push_back(line.trim_end().to_string());
        }
    }
}

fn active_path(dir: &Path, app_name: &str) -> PathBuf {
    dir.join(format!("{}.log", app_name))
}

fn rotated_path(dir: &Path, app_name: &str, n: usize) -> PathBuf {
    dir.join(format!("{}.log.{}", app_name, n))
}
