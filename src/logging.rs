use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const DEBUG_LOG_ENV: &str = "BOUNCE_TRIGGER_DEBUG_LOG";
pub const LAUNCH_TARGET: &str = "trigger.launch";

struct FileLogger {
    file: Mutex<Option<File>>,
    log_path: PathBuf,
    launch_file: Mutex<Option<File>>,
    launch_log_path: PathBuf,
}

fn open_append(path: &Path) -> Option<File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

impl FileLogger {
    fn new() -> Self {
        let log_path = get_log_path();
        let launch_log_path = get_launch_log_path();
        FileLogger {
            file: Mutex::new(open_append(&log_path)),
            log_path,
            launch_file: Mutex::new(open_append(&launch_log_path)),
            launch_log_path,
        }
    }

    fn write_to(slot: &Mutex<Option<File>>, line: &str) {
        if let Ok(mut guard) = slot.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.write_all(line.as_bytes());
                let _ = file.flush();
            }
        }
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let level = record.level();
        let target = record.target();
        let message = record.args();

        let log_line = format!("[{timestamp}] [{level:5}] [{target}] {message}\n");

        Self::write_to(&self.file, &log_line);
        // Launch records also go to their own file, which is kept across runs.
        if target == LAUNCH_TARGET {
            Self::write_to(&self.launch_file, &log_line);
        }

        #[cfg(debug_assertions)]
        eprint!("{}", log_line);
    }

    fn flush(&self) {
        for slot in [&self.file, &self.launch_file] {
            if let Ok(mut guard) = slot.lock() {
                if let Some(ref mut file) = *guard {
                    let _ = file.flush();
                }
            }
        }
    }
}

fn get_log_path() -> PathBuf {
    get_log_dir().join("trigger.log")
}

fn get_launch_log_path() -> PathBuf {
    get_log_dir().join("launches.log")
}

fn get_log_dir() -> PathBuf {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bounce-and-send");
    let _ = std::fs::create_dir_all(&log_dir);
    log_dir
}

static LOGGER: std::sync::OnceLock<FileLogger> = std::sync::OnceLock::new();

/// Initialize logging. Debug builds and `BOUNCE_TRIGGER_DEBUG_LOG` get the
/// file logger; otherwise warnings go to stderr through env_logger.
pub fn init() -> Result<(), SetLoggerError> {
    let enabled = cfg!(debug_assertions) || env_logging_enabled();
    if !enabled {
        return env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn"),
        )
        .try_init();
    }

    let logger = LOGGER.get_or_init(FileLogger::new);

    // Truncate the main log on startup
    if let Ok(file) = File::create(&logger.log_path) {
        drop(file);
    }
    if let Ok(mut guard) = logger.file.lock() {
        *guard = open_append(&logger.log_path);
    }

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Debug);

    log::info!("=== Bounce and Send Trigger Log Started ===");
    log::info!("Log file: {:?}", logger.log_path);
    log::info!("Launch log file: {:?}", logger.launch_log_path);

    Ok(())
}

fn env_logging_enabled() -> bool {
    std::env::var(DEBUG_LOG_ENV)
        .map(|value| flag_enabled(&value))
        .unwrap_or(false)
}

pub(crate) fn flag_enabled(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != "0"
}

/// Get the path to the log file
pub fn get_log_file_path() -> PathBuf {
    get_log_path()
}

/// Get the path to the launch history file
pub fn get_launch_log_file_path() -> PathBuf {
    get_launch_log_path()
}
