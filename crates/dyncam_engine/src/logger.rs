//! Глобальный logger плагина.
//!
//! Движок живёт внутри чужого процесса: куда писать логи, знает только
//! хост (файл рядом с DLL, консоль для headless-прогонов). Поэтому sink —
//! trait за глобальным static'ом, хост подставляет свой на старте.

use once_cell::sync::Lazy;
use std::sync::Mutex;

static SINK: Lazy<Mutex<Option<Box<dyn LogSink>>>> = Lazy::new(|| Mutex::new(None));

static THRESHOLD: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Info));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

pub trait LogSink: Send + Sync {
    fn write(&self, level: LogLevel, message: &str);
}

pub fn set_log_sink(sink: Box<dyn LogSink>) {
    *SINK.lock().unwrap() = Some(sink);
}

pub fn set_log_sink_if_needed(sink: Box<dyn LogSink>) {
    let mut slot = SINK.lock().unwrap();
    if slot.is_none() {
        *slot = Some(sink);
    }
}

pub fn set_log_threshold(level: LogLevel) {
    *THRESHOLD.lock().unwrap() = level;
}

pub fn log_debug(message: &str) {
    dispatch(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    dispatch(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    dispatch(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    dispatch(LogLevel::Error, message);
}

fn dispatch(level: LogLevel, message: &str) {
    if level < *THRESHOLD.lock().unwrap() {
        return;
    }
    // Timestamp добавляем здесь, а не в sink'е — формат единый для всех
    if let Some(sink) = SINK.lock().unwrap().as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        sink.write(level, &format!("[{}] {}", timestamp, message));
    }
}

/// Sink по умолчанию для headless-прогонов и тестов
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}

pub fn init_console_logger() {
    set_log_sink_if_needed(Box::new(ConsoleSink));
}
