//! Patch gate: глушилка нативной записи дистанции камеры.
//!
//! Игра каждый кадр сама пишет в поле дистанции из собственной логики;
//! без подавления этой записи override перетирается в том же кадре.
//! Gate молчит ровно одного конкурирующего писателя и обязан отключаться
//! в момент, когда override прекращается (катсцены, смена типа камеры).

use crate::logger::log_warning;

/// Примитив нативного патча: переписать фиксированную последовательность
/// инструкций filler-байтами и уметь вернуть оригинал.
///
/// Адрес патча зависит от билда игры и приходит из внешней конфигурации
/// (host crate, build profile) — здесь только поведение.
pub trait InstructionPatch {
    /// Переписать инструкции filler-байтами
    fn apply(&mut self);

    /// Восстановить оригинальные байты
    fn restore(&mut self);
}

/// Идемпотентная обёртка над [`InstructionPatch`].
///
/// enable/disable безопасно звать каждый кадр: повторный вызов в том же
/// состоянии — no-op, нативные байты не переключаются дважды.
/// Стартовое состояние — disabled (оригинальные байты на месте).
pub struct PatchGate {
    patch: Box<dyn InstructionPatch>,
    enabled: bool,
}

impl PatchGate {
    pub fn new(patch: Box<dyn InstructionPatch>) -> Self {
        Self {
            patch,
            enabled: false,
        }
    }

    pub fn enable(&mut self) {
        if !self.enabled {
            self.patch.apply();
            self.enabled = true;
        }
    }

    pub fn disable(&mut self) {
        if self.enabled {
            self.patch.restore();
            self.enabled = false;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Drop for PatchGate {
    fn drop(&mut self) {
        // Выгрузка плагина с активным патчем оставила бы игру без
        // нативной записи дистанции — возвращаем оригинал
        if self.enabled {
            log_warning("PatchGate dropped while enabled, restoring original bytes");
            self.patch.restore();
        }
    }
}
