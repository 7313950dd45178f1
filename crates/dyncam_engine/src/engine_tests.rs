//! Tests for the per-frame override step.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::camera::{
        CameraField, CameraHandle, INTERPOLATION_CAMERA_KIND, MH_CAMERA_KIND,
    };
    use crate::engine::{apply_override, EngineState};
    use crate::gate::{InstructionPatch, PatchGate};
    use crate::stages::StageId;

    /// Снимок полей камеры, общий между тестом и handle'ом
    #[derive(Debug, Clone)]
    struct CameraFields {
        kind: &'static str,
        distance: f32,
        height: f32,
        fov: f32,
        distance_writes: u32,
        height_writes: u32,
    }

    impl CameraFields {
        fn gameplay(distance: f32, height: f32) -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                kind: MH_CAMERA_KIND,
                distance,
                height,
                fov: 55.0,
                distance_writes: 0,
                height_writes: 0,
            }))
        }
    }

    struct FakeCamera(Rc<RefCell<CameraFields>>);

    impl CameraHandle for FakeCamera {
        fn is_kind(&self, kind: &str) -> bool {
            self.0.borrow().kind == kind
        }

        fn read_f32(&self, field: CameraField) -> f32 {
            let fields = self.0.borrow();
            match field {
                CameraField::Distance => fields.distance,
                CameraField::Height => fields.height,
            }
        }

        fn write_f32(&mut self, field: CameraField, value: f32) {
            let mut fields = self.0.borrow_mut();
            match field {
                CameraField::Distance => {
                    fields.distance = value;
                    fields.distance_writes += 1;
                }
                CameraField::Height => {
                    fields.height = value;
                    fields.height_writes += 1;
                }
            }
        }

        fn field_of_view(&self) -> f32 {
            self.0.borrow().fov
        }
    }

    struct NopPatch;

    impl InstructionPatch for NopPatch {
        fn apply(&mut self) {}
        fn restore(&mut self) {}
    }

    fn gate() -> PatchGate {
        PatchGate::new(Box::new(NopPatch))
    }

    #[test]
    fn test_override_in_non_combat_moves_toward_base_target() {
        // base = {90, -40}: из нуля дистанция идёт вверх, высота вниз,
        // каждый шаг ~3% оставшегося зазора
        let fields = CameraFields::gameplay(0.0, 0.0);
        let mut camera = FakeCamera(fields.clone());
        let state = EngineState::default();
        let mut gate = gate();

        apply_override(true, StageId::ASTERA, &mut camera, &state, &mut gate);

        assert!(gate.is_enabled(), "gate must arm while overriding");
        let snap = fields.borrow().clone();
        assert!((snap.distance - 2.7).abs() < 1e-3, "3% of 90 = 2.7");
        assert!((snap.height - (-1.2)).abs() < 1e-3, "3% of -40 = -1.2");
    }

    #[test]
    fn test_override_in_combat_uses_combat_target() {
        let fields = CameraFields::gameplay(0.0, 0.0);
        let mut camera = FakeCamera(fields.clone());
        let state = EngineState::default();
        let mut gate = gate();

        apply_override(
            true,
            StageId::ANCIENT_FOREST,
            &mut camera,
            &state,
            &mut gate,
        );

        // combat = {-210, 10}
        let snap = fields.borrow().clone();
        assert!(snap.distance < 0.0);
        assert!(snap.height > 0.0);
    }

    #[test]
    fn test_multi_frame_convergence() {
        let fields = CameraFields::gameplay(0.0, 0.0);
        let mut camera = FakeCamera(fields.clone());
        let state = EngineState::default();
        let mut gate = gate();

        for _ in 0..500 {
            apply_override(true, StageId::ASTERA, &mut camera, &state, &mut gate);
        }

        let snap = fields.borrow().clone();
        assert!((snap.distance - 90.0).abs() <= 0.1);
        assert!((snap.height - (-40.0)).abs() <= 0.1);
    }

    #[test]
    fn test_restore_eases_distance_toward_zero() {
        let fields = CameraFields::gameplay(500.0, 300.0);
        let mut camera = FakeCamera(fields.clone());
        let state = EngineState::default();
        let mut gate = gate();
        gate.enable();

        apply_override(false, StageId::ANCIENT_FOREST, &mut camera, &state, &mut gate);

        let snap = fields.borrow().clone();
        assert!((snap.distance - 485.0).abs() < 1e-3);
        assert!((snap.height - 291.0).abs() < 1e-3);
        assert!(gate.is_enabled(), "gate holds until an axis reaches neutral");
    }

    #[test]
    fn test_restore_early_return_skips_height_axis() {
        // Дистанция уже в нейтрали → gate падает сразу, высота в этом
        // кадре не пишется вовсе
        let fields = CameraFields::gameplay(0.05, 300.0);
        let mut camera = FakeCamera(fields.clone());
        let state = EngineState::default();
        let mut gate = gate();
        gate.enable();

        apply_override(false, StageId::ANCIENT_FOREST, &mut camera, &state, &mut gate);

        assert!(!gate.is_enabled());
        let snap = fields.borrow().clone();
        assert_eq!(snap.distance_writes, 0);
        assert_eq!(snap.height_writes, 0);
        assert_eq!(snap.height, 300.0);
    }

    #[test]
    fn test_restore_out_of_range_axis_left_alone() {
        // Дистанция за пределами поддерживаемого диапазона — её не
        // трогаем, высота возвращается своим чередом
        let fields = CameraFields::gameplay(5000.0, 300.0);
        let mut camera = FakeCamera(fields.clone());
        let state = EngineState::default();
        let mut gate = gate();
        gate.enable();

        apply_override(false, StageId::ANCIENT_FOREST, &mut camera, &state, &mut gate);

        let snap = fields.borrow().clone();
        assert_eq!(snap.distance, 5000.0);
        assert_eq!(snap.distance_writes, 0);
        assert!((snap.height - 291.0).abs() < 1e-3);
    }

    #[test]
    fn test_interpolation_camera_forces_distance_to_zero() {
        let fields = CameraFields::gameplay(123.0, 45.0);
        fields.borrow_mut().kind = INTERPOLATION_CAMERA_KIND;
        let mut camera = FakeCamera(fields.clone());
        let state = EngineState::default();
        let mut gate = gate();
        gate.enable();

        apply_override(true, StageId::ASTERA, &mut camera, &state, &mut gate);

        assert!(!gate.is_enabled());
        let snap = fields.borrow().clone();
        assert_eq!(snap.distance, 0.0, "raw zero, not smoothed");
        assert_eq!(snap.height, 45.0, "height untouched");
        assert_eq!(snap.height_writes, 0);
    }

    #[test]
    fn test_unrecognized_camera_kind_is_left_alone() {
        let fields = CameraFields::gameplay(123.0, 45.0);
        fields.borrow_mut().kind = "uShellCamera";
        let mut camera = FakeCamera(fields.clone());
        let state = EngineState::default();
        let mut gate = gate();
        gate.enable();

        apply_override(true, StageId::ASTERA, &mut camera, &state, &mut gate);

        // Ни записей, ни переключения gate
        assert!(gate.is_enabled());
        let snap = fields.borrow().clone();
        assert_eq!(snap.distance_writes, 0);
        assert_eq!(snap.height_writes, 0);
    }

    #[test]
    fn test_nan_height_backs_off_without_writes() {
        let fields = CameraFields::gameplay(10.0, f32::NAN);
        let mut camera = FakeCamera(fields.clone());
        let state = EngineState::default();
        let mut gate = gate();
        gate.enable();

        apply_override(true, StageId::ASTERA, &mut camera, &state, &mut gate);

        assert!(!gate.is_enabled());
        let snap = fields.borrow().clone();
        assert_eq!(snap.distance_writes, 0);
        assert_eq!(snap.height_writes, 0);
    }

    #[test]
    fn test_subnormal_distance_backs_off() {
        let fields = CameraFields::gameplay(1.0e-40, 10.0);
        let mut camera = FakeCamera(fields.clone());
        let state = EngineState::default();
        let mut gate = gate();
        gate.enable();

        apply_override(true, StageId::ASTERA, &mut camera, &state, &mut gate);

        assert!(!gate.is_enabled());
        assert_eq!(fields.borrow().distance_writes, 0);
    }

    #[test]
    fn test_zero_fields_are_not_corrupt() {
        // Ровно ноль — валидное значение, is_normal(0) == false не должен
        // приводить к back-off'у
        let fields = CameraFields::gameplay(0.0, 0.0);
        let mut camera = FakeCamera(fields.clone());
        let state = EngineState::default();
        let mut gate = gate();

        apply_override(true, StageId::ASTERA, &mut camera, &state, &mut gate);

        assert!(gate.is_enabled());
        assert_eq!(fields.borrow().distance_writes, 1);
    }
}
