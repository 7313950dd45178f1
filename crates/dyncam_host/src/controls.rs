//! Поверхность биндинга оверлея: то, к чему привязаны чекбоксы и
//! слайдеры. Сами виджеты рисует загрузчик; здесь — семантика.
//!
//! Значения слайдеров зажимаются в поддерживаемые движком диапазоны
//! до записи в состояние.

use std::path::Path;

use dyncam_engine::{
    settings, CameraSave, CAMERA_DISTANCE_MAX, CAMERA_DISTANCE_MIN, CAMERA_HEIGHT_MAX,
    CAMERA_HEIGHT_MIN,
};

use crate::bridge::Bridge;

pub fn set_enabled(bridge: &mut Bridge, enabled: bool) {
    bridge.update_state(|s| s.enabled = enabled);
}

pub fn set_ads_widen_fov(bridge: &mut Bridge, widen: bool) {
    bridge.update_state(|s| s.ads_widen_fov = widen);
}

pub fn set_base_distance(bridge: &mut Bridge, value: f32) {
    let value = value.clamp(CAMERA_DISTANCE_MIN, CAMERA_DISTANCE_MAX);
    bridge.update_state(|s| s.base.distance = value);
}

pub fn set_base_height(bridge: &mut Bridge, value: f32) {
    let value = value.clamp(CAMERA_HEIGHT_MIN, CAMERA_HEIGHT_MAX);
    bridge.update_state(|s| s.base.height = value);
}

pub fn set_combat_distance(bridge: &mut Bridge, value: f32) {
    let value = value.clamp(CAMERA_DISTANCE_MIN, CAMERA_DISTANCE_MAX);
    bridge.update_state(|s| s.combat.distance = value);
}

pub fn set_combat_height(bridge: &mut Bridge, value: f32) {
    let value = value.clamp(CAMERA_HEIGHT_MIN, CAMERA_HEIGHT_MAX);
    bridge.update_state(|s| s.combat.height = value);
}

/// Кнопка Save: текущее состояние → JSON на диске
pub fn save_settings(bridge: &Bridge, path: &Path) {
    settings::save(path, &CameraSave::from(bridge.state()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyncam_engine::{EngineState, InstructionPatch};

    struct NopPatch;

    impl InstructionPatch for NopPatch {
        fn apply(&mut self) {}
        fn restore(&mut self) {}
    }

    fn bridge() -> Bridge {
        Bridge::new(EngineState::default(), Box::new(NopPatch))
    }

    #[test]
    fn test_sliders_clamp_to_supported_ranges() {
        let mut bridge = bridge();

        set_base_distance(&mut bridge, 99999.0);
        assert_eq!(bridge.state().base.distance, CAMERA_DISTANCE_MAX);

        set_base_distance(&mut bridge, -99999.0);
        assert_eq!(bridge.state().base.distance, CAMERA_DISTANCE_MIN);

        set_combat_height(&mut bridge, -99999.0);
        assert_eq!(bridge.state().combat.height, CAMERA_HEIGHT_MIN);

        set_combat_height(&mut bridge, 42.0);
        assert_eq!(bridge.state().combat.height, 42.0);
    }

    #[test]
    fn test_toggles() {
        let mut bridge = bridge();

        set_enabled(&mut bridge, false);
        set_ads_widen_fov(&mut bridge, true);

        assert!(!bridge.state().enabled);
        assert!(bridge.state().ads_widen_fov);
    }

    #[test]
    fn test_save_round_trip() {
        let mut bridge = bridge();
        set_base_distance(&mut bridge, 150.0);
        set_ads_widen_fov(&mut bridge, true);

        let path = std::env::temp_dir().join(format!(
            "dyncam_controls_save_{}.json",
            std::process::id()
        ));
        save_settings(&bridge, &path);

        let loaded = dyncam_engine::load_or_default(&path);
        assert_eq!(loaded.base.distance, 150.0);
        assert!(loaded.combat.ads_flag);

        let _ = std::fs::remove_file(&path);
    }
}
