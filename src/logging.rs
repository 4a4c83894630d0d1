use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use once_cell::sync::OnceCell;
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug)]
struct SimpleLogger {
    log_path: PathBuf,
    level: LevelFilter,
}

static LOGGER: OnceCell<SimpleLogger> = OnceCell::new();

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_entry = format!(
                "{} - {} - {}\n",
                record.level(),
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.args()
            );

            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.log_path)
            {
                let _ = file.write_all(log_entry.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

// Appends log lines to `log.txt` in `log_dir`. Debug records are kept only in debug mode.
pub fn init(log_dir: PathBuf, debug_mode: bool) -> Result<(), SetLoggerError> {
    // The logger still installs if the directory can't be created; writes are then dropped.
    let _ = create_dir_all(&log_dir);

    let level = if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = LOGGER.get_or_init(|| SimpleLogger {
        log_path: log_dir.join("log.txt"),
        level,
    });

    log::set_logger(logger).map(|()| log::set_max_level(logger.level))
}
