//! Build profiles: всё, что зависит от билда игры, живёт здесь как
//! данные, а не как логика движка.
//!
//! Профиль — адрес патч-сайта, цепочки указателей до камеры/локации и
//! vtable-адреса классов камер. Файл `camera_builds.json` рядом с
//! конфигом позволяет добавить новый билд без пересборки; без файла
//! работает встроенный профиль поддерживаемого билда.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use dyncam_engine::{log_error, log_info, notify_error};

/// Билд, под который собран встроенный профиль
pub const DEFAULT_BUILD: &str = "421810";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildProfile {
    /// Адрес нативной записи дистанции камеры (глушится патчем)
    #[serde(rename = "PatchSite")]
    pub patch_site: String,
    /// Длина перезаписываемой последовательности инструкций
    #[serde(rename = "PatchLen")]
    pub patch_len: usize,
    /// Синглтон sMhCamera
    #[serde(rename = "CameraSystem")]
    pub camera_system: String,
    /// Смещение указателя камеры главного viewport'а внутри синглтона
    #[serde(rename = "ViewportCameraOffset")]
    pub viewport_camera_offset: String,
    /// Синглтон sMhArea
    #[serde(rename = "AreaManager")]
    pub area_manager: String,
    /// Смещение текущего stage id внутри синглтона
    #[serde(rename = "StageIdOffset")]
    pub stage_id_offset: String,
    /// Vtable класса uMhCamera (проверка типа без вызова кода игры)
    #[serde(rename = "MhCameraVtable")]
    pub mh_camera_vtable: String,
    /// Vtable класса uInterpolationCamera
    #[serde(rename = "InterpolationCameraVtable")]
    pub interpolation_camera_vtable: String,
}

/// Профиль с распарсенными адресами — то, чем пользуются memory/patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub patch_site: usize,
    pub patch_len: usize,
    pub camera_system: usize,
    pub viewport_camera_offset: usize,
    pub area_manager: usize,
    pub stage_id_offset: usize,
    pub mh_camera_vtable: usize,
    pub interpolation_camera_vtable: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildProfiles {
    #[serde(rename = "ActiveBuild")]
    pub active: String,
    #[serde(rename = "Builds")]
    pub builds: HashMap<String, BuildProfile>,
}

impl Default for BuildProfiles {
    fn default() -> Self {
        let mut builds = HashMap::new();
        builds.insert(
            DEFAULT_BUILD.to_string(),
            BuildProfile {
                patch_site: "0x141fa6564".into(),
                patch_len: 15,
                camera_system: "0x14506d340".into(),
                viewport_camera_offset: "0x50".into(),
                area_manager: "0x145011760".into(),
                stage_id_offset: "0x60".into(),
                mh_camera_vtable: "0x1434f9e30".into(),
                interpolation_camera_vtable: "0x1434f81a0".into(),
            },
        );

        Self {
            active: DEFAULT_BUILD.to_string(),
            builds,
        }
    }
}

impl BuildProfile {
    pub fn resolve(&self) -> Option<ResolvedProfile> {
        Some(ResolvedProfile {
            patch_site: parse_hex(&self.patch_site)?,
            patch_len: self.patch_len,
            camera_system: parse_hex(&self.camera_system)?,
            viewport_camera_offset: parse_hex(&self.viewport_camera_offset)?,
            area_manager: parse_hex(&self.area_manager)?,
            stage_id_offset: parse_hex(&self.stage_id_offset)?,
            mh_camera_vtable: parse_hex(&self.mh_camera_vtable)?,
            interpolation_camera_vtable: parse_hex(&self.interpolation_camera_vtable)?,
        })
    }
}

impl BuildProfiles {
    /// Файл профилей: нет файла — встроенный набор; битый файл —
    /// встроенный набор плюс лог (это конфиг моддера, toast не нужен).
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(profiles) => profiles,
                Err(e) => {
                    log_error(&format!("Build profile parse failed: {e}"));
                    Self::default()
                }
            },
            Err(e) => {
                log_error(&format!("Build profile read failed: {e}"));
                Self::default()
            }
        }
    }

    /// Профиль активного билда. Неизвестный билд или кривые адреса —
    /// плагин остаётся инертным, об этом должен узнать игрок.
    pub fn resolve_active(&self) -> Option<ResolvedProfile> {
        let Some(profile) = self.builds.get(&self.active) else {
            log_error(&format!("No build profile for '{}'", self.active));
            notify_error(&format!(
                "Dynamic Camera: unsupported game build '{}'",
                self.active
            ));
            return None;
        };

        match profile.resolve() {
            Some(resolved) => {
                log_info(&format!("Using build profile '{}'", self.active));
                Some(resolved)
            }
            None => {
                log_error(&format!("Malformed addresses in build profile '{}'", self.active));
                notify_error("Dynamic Camera: malformed build profile");
                None
            }
        }
    }
}

fn parse_hex(text: &str) -> Option<usize> {
    let digits = text.trim().strip_prefix("0x").unwrap_or(text.trim());
    usize::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_resolves() {
        let profiles = BuildProfiles::default();
        let resolved = profiles.resolve_active().expect("default must resolve");

        assert_eq!(resolved.patch_site, 0x141fa6564);
        assert_eq!(resolved.patch_len, 15);
        assert_eq!(resolved.viewport_camera_offset, 0x50);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0x10"), Some(16));
        assert_eq!(parse_hex("ff"), Some(255));
        assert_eq!(parse_hex(" 0x141fa6564 "), Some(0x141fa6564));
        assert_eq!(parse_hex("zz"), None);
    }

    #[test]
    fn test_unknown_active_build_yields_none() {
        let mut profiles = BuildProfiles::default();
        profiles.active = "999999".into();

        assert!(profiles.resolve_active().is_none());
    }

    #[test]
    fn test_missing_file_yields_builtin() {
        let path = std::env::temp_dir().join(format!(
            "dyncam_builds_missing_{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let profiles = BuildProfiles::load_or_default(&path);
        assert_eq!(profiles.active, DEFAULT_BUILD);
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "dyncam_builds_roundtrip_{}.json",
            std::process::id()
        ));

        let mut profiles = BuildProfiles::default();
        profiles
            .builds
            .get_mut(DEFAULT_BUILD)
            .unwrap()
            .patch_len = 16;
        std::fs::write(&path, serde_json::to_string_pretty(&profiles).unwrap()).unwrap();

        let loaded = BuildProfiles::load_or_default(&path);
        assert_eq!(loaded.builds[DEFAULT_BUILD].patch_len, 16);

        let _ = std::fs::remove_file(&path);
    }
}
