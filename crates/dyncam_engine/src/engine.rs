//! Per-frame оркестрация override'а.
//!
//! Один проход за кадр хоста: классифицировать контекст → выбрать
//! target-профиль → проверить вменяемость полей камеры → переключить
//! gate → прогнать оба поля через smoothing и записать обратно.
//!
//! Никаких ошибок наружу: любой отказ — "ничего не делаем этот кадр".

use bevy::prelude::*;

use crate::camera::{CameraField, CameraHandle, INTERPOLATION_CAMERA_KIND, MH_CAMERA_KIND};
use crate::gate::PatchGate;
use crate::smoothing::camera_smooth;
use crate::stages::{fov_in_band, is_non_combat, StageId};

/// Поддерживаемый диапазон дистанции (и предел слайдера в оверлее)
pub const CAMERA_DISTANCE_MIN: f32 = -1500.0;
pub const CAMERA_DISTANCE_MAX: f32 = 2000.0;

/// Поддерживаемый диапазон высоты
pub const CAMERA_HEIGHT_MIN: f32 = -1125.0;
pub const CAMERA_HEIGHT_MAX: f32 = 1950.0;

/// Пара смещений камеры, к которой тянется smoothing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub distance: f32,
    pub height: f32,
}

/// Состояние плагина. Единственный экземпляр на процесс; мутируется
/// оверлеем (controls) и загрузкой файла, читается per-frame системой.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EngineState {
    /// Главный выключатель плагина
    pub enabled: bool,
    /// Профиль для мирных локаций
    pub base: CameraTarget,
    /// Профиль для боевых локаций
    pub combat: CameraTarget,
    /// Расширять полосу FOV при прицеливании в боевых локациях
    pub ads_widen_fov: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            enabled: true,
            base: CameraTarget {
                distance: 90.0,
                height: -40.0,
            },
            combat: CameraTarget {
                distance: -210.0,
                height: 10.0,
            },
            ads_widen_fov: false,
        }
    }
}

/// Входы одного кадра. Хост пересоздаёт ресурс каждый тик — handle
/// живёт ровно один кадр и не переживает `app.update()` следующего.
/// NonSend: сырой указатель внутри handle прибит к главному потоку.
pub struct FrameContext {
    pub stage: StageId,
    pub camera: Option<Box<dyn CameraHandle>>,
}

/// Система: один шаг движка за кадр (Update schedule).
pub fn camera_override_system(
    state: Res<EngineState>,
    gate: Option<NonSendMut<PatchGate>>,
    frame: Option<NonSendMut<FrameContext>>,
) {
    let Some(mut gate) = gate else {
        return;
    };

    if !state.enabled {
        // Плагин выключен — вернуть игре нативное поведение
        gate.disable();
        return;
    }

    let Some(mut frame) = frame else {
        return;
    };
    let FrameContext { stage, camera } = &mut *frame;

    if stage.is_none() {
        return;
    }
    let Some(camera) = camera.as_deref_mut() else {
        return;
    };

    let overriding = fov_in_band(*stage, camera.field_of_view(), state.ads_widen_fov);
    apply_override(overriding, *stage, camera, &state, &mut gate);
}

/// Шаг обновления камеры.
///
/// `overriding == false` не значит "ничего не делать": поля плавно
/// возвращаются к нулю, и только дойдя до нейтрали gate отпускается.
pub fn apply_override(
    overriding: bool,
    stage: StageId,
    camera: &mut dyn CameraHandle,
    state: &EngineState,
    gate: &mut PatchGate,
) {
    if camera.is_kind(INTERPOLATION_CAMERA_KIND) {
        // Переходная камера не хранит осмысленной дистанции — жёсткий
        // ноль мимо smoothing'а, и игра снова сама за рулём
        camera.write_f32(CameraField::Distance, 0.0);
        gate.disable();
        return;
    }

    if !camera.is_kind(MH_CAMERA_KIND) {
        // Незнакомый тип камеры не трогаем
        return;
    }

    // Битое поле (NaN/inf/subnormal) — сигнал полностью отступить.
    // Не логируем: повторяется каждый кадр и обычно рассасывается само.
    let raw_height = camera.read_f32(CameraField::Height);
    if raw_height != 0.0 && !raw_height.is_normal() {
        gate.disable();
        return;
    }

    let raw_distance = camera.read_f32(CameraField::Distance);
    if raw_distance != 0.0 && !raw_distance.is_normal() {
        gate.disable();
        return;
    }

    // Округление до 6 знаков гасит float-шум нативного писателя:
    // повторные чтения неподвижного значения сравниваются как равные
    let actual_distance = round_to_micro(raw_distance);
    let actual_height = round_to_micro(raw_height);

    if overriding {
        let target = if is_non_combat(stage) {
            state.base
        } else {
            state.combat
        };

        gate.enable();

        camera.write_f32(
            CameraField::Distance,
            camera_smooth(actual_distance, target.distance),
        );
        camera.write_f32(
            CameraField::Height,
            camera_smooth(actual_height, target.height),
        );
    } else {
        // Возврат нативного поведения: каждую ось отдельно тянем к нулю
        if (CAMERA_DISTANCE_MIN..=CAMERA_DISTANCE_MAX).contains(&actual_distance) {
            if actual_distance.abs() > 0.1 {
                camera.write_f32(CameraField::Distance, camera_smooth(actual_distance, 0.0));
            } else {
                // Ось дома — gate падает сразу, высота этого кадра
                // остаётся нетронутой (см. DESIGN.md, open questions)
                gate.disable();
                return;
            }
        }

        if (CAMERA_HEIGHT_MIN..=CAMERA_HEIGHT_MAX).contains(&actual_height) {
            if actual_height.abs() > 0.1 {
                camera.write_f32(CameraField::Height, camera_smooth(actual_height, 0.0));
            } else {
                gate.disable();
                return;
            }
        }
    }
}

/// Округление до 6 знаков после запятой (через f64: умножение на 1e6
/// в f32 теряет точность уже на значениях порядка сотен)
fn round_to_micro(value: f32) -> f32 {
    ((f64::from(value) * 1_000_000.0).round() / 1_000_000.0) as f32
}
