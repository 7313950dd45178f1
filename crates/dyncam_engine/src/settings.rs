//! Settings file: сериализация профилей камеры в JSON.
//!
//! Формат файла зафиксирован давно (им пользуются существующие конфиги),
//! поэтому имена полей — PascalCase через serde rename, а не наши.
//!
//! Ошибки файла никогда не роняют хост: не загрузилось — дефолты плюс
//! строка в лог и toast игроку; не сохранилось — state в памяти жив.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::{CameraTarget, EngineState};
use crate::logger::{log_error, log_info};
use crate::notify::{notify_error, notify_success};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraProfile {
    #[serde(rename = "CameraDistance")]
    pub distance: f32,
    #[serde(rename = "CameraHeight")]
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatCameraProfile {
    #[serde(rename = "CameraDistance")]
    pub distance: f32,
    #[serde(rename = "CameraHeight")]
    pub height: f32,
    /// Расширять полосу FOV при прицеливании
    #[serde(rename = "ADSFlag", default)]
    pub ads_flag: bool,
}

/// Persisted-форма [`EngineState`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSave {
    #[serde(rename = "PluginFlag", default = "default_plugin_flag")]
    pub plugin_flag: bool,
    #[serde(rename = "BaseCamera")]
    pub base: CameraProfile,
    #[serde(rename = "CombatCamera")]
    pub combat: CombatCameraProfile,
}

fn default_plugin_flag() -> bool {
    true
}

impl Default for CameraSave {
    fn default() -> Self {
        Self {
            plugin_flag: true,
            base: CameraProfile {
                distance: 90.0,
                height: -40.0,
            },
            combat: CombatCameraProfile {
                distance: -210.0,
                height: 10.0,
                ads_flag: false,
            },
        }
    }
}

impl From<&EngineState> for CameraSave {
    fn from(state: &EngineState) -> Self {
        Self {
            plugin_flag: state.enabled,
            base: CameraProfile {
                distance: state.base.distance,
                height: state.base.height,
            },
            combat: CombatCameraProfile {
                distance: state.combat.distance,
                height: state.combat.height,
                ads_flag: state.ads_widen_fov,
            },
        }
    }
}

impl From<&CameraSave> for EngineState {
    fn from(save: &CameraSave) -> Self {
        Self {
            enabled: save.plugin_flag,
            base: CameraTarget {
                distance: save.base.distance,
                height: save.base.height,
            },
            combat: CameraTarget {
                distance: save.combat.distance,
                height: save.combat.height,
            },
            ads_widen_fov: save.combat.ads_flag,
        }
    }
}

/// Загрузка файла настроек.
///
/// Отсутствующий файл — нормальный первый запуск, дефолты молча.
/// Нечитаемый/битый файл — дефолты, error-лог и toast игроку.
pub fn load_or_default(path: &Path) -> CameraSave {
    if !path.exists() {
        return CameraSave::default();
    }

    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(save) => save,
            Err(e) => {
                log_error(&format!("Camera config parse failed: {e}"));
                notify_error(&format!("Camera config did not load: {e}"));
                CameraSave::default()
            }
        },
        Err(e) => {
            log_error(&format!("Camera config read failed: {e}"));
            notify_error(&format!("Camera config did not load: {e}"));
            CameraSave::default()
        }
    }
}

/// Сохранение файла настроек (pretty JSON, как писал его оригинальный
/// конфиг — руками его тоже правят).
pub fn save(path: &Path, save: &CameraSave) {
    let json = match serde_json::to_string_pretty(save) {
        Ok(json) => json,
        Err(e) => {
            log_error(&format!("Camera config serialize failed: {e}"));
            notify_error(&format!("Camera config did not save: {e}"));
            return;
        }
    };

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match std::fs::write(path, json) {
        Ok(()) => {
            log_info(&format!("Settings saved in {}", path.display()));
            notify_success("Camera config saved");
        }
        Err(e) => {
            log_error(&format!("Camera config write failed: {e}"));
            notify_error(&format!("Camera config did not save: {e}"));
        }
    }
}
