//! Host-side log sink: файл рядом с плагином.
//!
//! Timestamp'ы добавляет движок на dispatch'е, здесь только запись.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use dyncam_engine::{log_error, log_info, LogLevel, LogSink, Notifier};

pub struct FileSink {
    path: PathBuf,
    open_error_logged: AtomicBool,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            open_error_logged: AtomicBool::new(false),
        }
    }

    /// Свежий лог на каждую загрузку плагина
    pub fn clear_log_file(path: &Path) {
        let _ = std::fs::remove_file(path);
    }
}

impl LogSink for FileSink {
    fn write(&self, level: LogLevel, message: &str) {
        use std::io::Write;

        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            Ok(mut file) => {
                let _ = writeln!(file, "[{}] {}", level.as_str(), message);
            }
            Err(e) => {
                // Жалуемся на недоступный лог-файл один раз, не каждый кадр
                if !self.open_error_logged.swap(true, Ordering::Relaxed) {
                    eprintln!("Failed to open log file {:?}: {}", self.path, e);
                }
            }
        }
    }
}

/// Notifier по умолчанию: без оверлея toast'ы уходят в лог.
/// Загрузчик с оверлеем ставит свой через `set_notifier`.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        log_info(&format!("[notification] {message}"));
    }

    fn error(&self, message: &str) {
        log_error(&format!("[notification] {message}"));
    }
}
