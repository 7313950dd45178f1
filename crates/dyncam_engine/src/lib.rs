//! Dynamic Camera — override engine
//!
//! Per-frame движок, перехватывающий дистанцию/высоту камеры у живой
//! игры поверх её собственной логики, без видимых рывков.
//!
//! Архитектура (двухслойная, core + host bridge):
//! - ECS = engine layer: состояние плагина, классификация контекста,
//!   smoothing, gate нативного патча
//! - Host = tactical layer: сырые указатели на камеру, нативный патч,
//!   файл настроек, оверлей
//!
//! Хост каждый кадр кладёт [`FrameContext`] в мир и дёргает
//! `app.update()`; handle камеры живёт ровно один кадр.

use bevy::prelude::*;

// Публичные модули
pub mod camera;
pub mod engine;
pub mod gate;
pub mod logger;
pub mod notify;
pub mod settings;
pub mod smoothing;
pub mod stages;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod engine_tests;

// Re-export основных типов
pub use camera::{CameraField, CameraHandle, INTERPOLATION_CAMERA_KIND, MH_CAMERA_KIND};
pub use engine::{
    camera_override_system, CameraTarget, EngineState, FrameContext, CAMERA_DISTANCE_MAX,
    CAMERA_DISTANCE_MIN, CAMERA_HEIGHT_MAX, CAMERA_HEIGHT_MIN,
};
pub use gate::{InstructionPatch, PatchGate};
pub use logger::{
    init_console_logger, log_debug, log_error, log_info, log_warning, set_log_sink,
    set_log_sink_if_needed, set_log_threshold, LogLevel, LogSink,
};
pub use notify::{notify_error, notify_success, set_notifier, Notifier};
pub use settings::{load_or_default, CameraSave};
pub use smoothing::camera_smooth;
pub use stages::{fov_in_band, is_non_combat, StageId};

/// Главный plugin движка: состояние + per-frame система.
///
/// [`PatchGate`] плагин не создаёт — он требует нативный патч, который
/// знает только хост (или тест): `insert_non_send_resource(PatchGate::new(...))`.
pub struct CameraOverridePlugin;

impl Plugin for CameraOverridePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EngineState>()
            .add_systems(Update, camera_override_system);
    }
}

/// Создаёт minimal Bevy App для headless-прогона движка
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_console_logger();
    app.add_plugins(MinimalPlugins);

    app
}
