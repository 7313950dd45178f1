//! Точки входа плагина: C ABI, который дёргает нативный загрузчик.
//!
//! Жизненный цикл:
//! - `dyncam_on_load` — логгер, настройки, build profile, мост
//! - `dyncam_on_update` — каждый кадр: stage + камера → bridge.tick
//! - `dyncam_on_unload` — вернуть оригинальные байты, уронить мост
//!
//! Загрузчик зовёт все хуки с одного (главного) потока — Bridge живёт
//! в thread_local и с других потоков недостижим.

use std::cell::RefCell;
use std::path::Path;

use dyncam_engine::{
    log_error, log_info, set_log_sink, set_notifier, CameraHandle, EngineState, StageId,
};

use crate::bridge::Bridge;
use crate::builds::{BuildProfiles, ResolvedProfile};
use crate::controls;
use crate::logger::{FileSink, LogNotifier};
use crate::memory::{current_stage_id, viewport_camera};
use crate::patch::NativePatch;

const PLUGIN_DIR: &str = "nativePC/plugins/dyncam";
const LOG_PATH: &str = "nativePC/plugins/dyncam/dyncam.log";
const SETTINGS_PATH: &str = "nativePC/plugins/dyncam/camera_config.json";
const BUILDS_PATH: &str = "nativePC/plugins/dyncam/camera_builds.json";

struct Plugin {
    bridge: Bridge,
    profile: ResolvedProfile,
}

thread_local! {
    static PLUGIN: RefCell<Option<Plugin>> = const { RefCell::new(None) };
}

#[no_mangle]
pub extern "C" fn dyncam_on_load() {
    let _ = std::fs::create_dir_all(PLUGIN_DIR);
    FileSink::clear_log_file(Path::new(LOG_PATH));
    set_log_sink(Box::new(FileSink::new(LOG_PATH)));
    set_notifier(Box::new(LogNotifier));

    log_info("Loaded Dynamic Camera");

    let Some(profile) = BuildProfiles::load_or_default(Path::new(BUILDS_PATH)).resolve_active()
    else {
        // Без адресов текущего билда плагин остаётся инертным
        return;
    };

    let save = dyncam_engine::load_or_default(Path::new(SETTINGS_PATH));
    let state = EngineState::from(&save);

    // Адрес патч-сайта только что пришёл из профиля активного билда
    let patch = unsafe { NativePatch::nop_fill(profile.patch_site, profile.patch_len) };

    let plugin = Plugin {
        bridge: Bridge::new(state, Box::new(patch)),
        profile,
    };

    PLUGIN.with(|slot| *slot.borrow_mut() = Some(plugin));
}

#[no_mangle]
pub extern "C" fn dyncam_on_update(_dt: f32) {
    PLUGIN.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(plugin) = slot.as_mut() else {
            return;
        };

        let stage = StageId(current_stage_id(&plugin.profile));
        let camera = viewport_camera(&plugin.profile)
            .map(|camera| Box::new(camera) as Box<dyn CameraHandle>);

        plugin.bridge.tick(stage, camera);
    });
}

#[no_mangle]
pub extern "C" fn dyncam_on_unload() {
    PLUGIN.with(|slot| {
        if let Some(mut plugin) = slot.borrow_mut().take() {
            plugin.bridge.shutdown();
            log_info("Unloaded Dynamic Camera");
        }
    });
}

/// Save-кнопка оверлея
#[no_mangle]
pub extern "C" fn dyncam_save() {
    with_bridge(|bridge| controls::save_settings(bridge, Path::new(SETTINGS_PATH)));
}

#[no_mangle]
pub extern "C" fn dyncam_set_enabled(enabled: bool) {
    with_bridge(|bridge| controls::set_enabled(bridge, enabled));
}

#[no_mangle]
pub extern "C" fn dyncam_set_ads_widen_fov(widen: bool) {
    with_bridge(|bridge| controls::set_ads_widen_fov(bridge, widen));
}

#[no_mangle]
pub extern "C" fn dyncam_set_base_camera(distance: f32, height: f32) {
    with_bridge(|bridge| {
        controls::set_base_distance(bridge, distance);
        controls::set_base_height(bridge, height);
    });
}

#[no_mangle]
pub extern "C" fn dyncam_set_combat_camera(distance: f32, height: f32) {
    with_bridge(|bridge| {
        controls::set_combat_distance(bridge, distance);
        controls::set_combat_height(bridge, height);
    });
}

fn with_bridge(f: impl FnOnce(&mut Bridge)) {
    PLUGIN.with(|slot| {
        let mut slot = slot.borrow_mut();
        match slot.as_mut() {
            Some(plugin) => f(&mut plugin.bridge),
            None => log_error("Dynamic Camera is not initialized"),
        }
    });
}

mod dll {
    use winapi::shared::minwindef::{BOOL, DWORD, HINSTANCE, LPVOID, TRUE};
    use winapi::um::libloaderapi::DisableThreadLibraryCalls;
    use winapi::um::winnt::DLL_PROCESS_ATTACH;

    #[no_mangle]
    #[allow(non_snake_case)]
    pub extern "system" fn DllMain(
        module: HINSTANCE,
        reason: DWORD,
        _reserved: LPVOID,
    ) -> BOOL {
        if reason == DLL_PROCESS_ATTACH {
            unsafe {
                DisableThreadLibraryCalls(module);
            }
        }
        TRUE
    }
}
