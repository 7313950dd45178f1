//! Пользовательские уведомления (toast в оверлее хоста).
//!
//! Отдельный от logger'а канал: сюда попадают только события, которые
//! игрок должен увидеть — сохранение/загрузка настроек. Per-frame
//! back-off'ы движка сюда не ходят.

use once_cell::sync::Lazy;
use std::sync::Mutex;

static NOTIFIER: Lazy<Mutex<Option<Box<dyn Notifier>>>> = Lazy::new(|| Mutex::new(None));

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

pub fn set_notifier(notifier: Box<dyn Notifier>) {
    *NOTIFIER.lock().unwrap() = Some(notifier);
}

pub fn notify_success(message: &str) {
    if let Some(n) = NOTIFIER.lock().unwrap().as_ref() {
        n.success(message);
    }
}

pub fn notify_error(message: &str) {
    if let Some(n) = NOTIFIER.lock().unwrap().as_ref() {
        n.error(message);
    }
}
