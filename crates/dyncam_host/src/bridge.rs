//! Мост между update-callback'ом хоста и ECS движком.
//!
//! Каждый кадр: свежий [`FrameContext`] в мир → `app.update()`.
//! Handle камеры не переживает кадр — следующий tick кладёт новый
//! (или None), старый Box дропается при перезаписи ресурса.

use bevy::app::App;

use dyncam_engine::{
    create_headless_app, CameraHandle, CameraOverridePlugin, EngineState, FrameContext,
    InstructionPatch, PatchGate, StageId,
};

pub struct Bridge {
    app: App,
}

impl Bridge {
    /// `state` — из файла настроек, `patch` — нативный патч записи
    /// дистанции (в тестах — fake).
    pub fn new(state: EngineState, patch: Box<dyn InstructionPatch>) -> Self {
        let mut app = create_headless_app();
        app.add_plugins(CameraOverridePlugin);
        app.insert_resource(state);
        app.insert_non_send_resource(PatchGate::new(patch));

        Self { app }
    }

    /// Один кадр хоста
    pub fn tick(&mut self, stage: StageId, camera: Option<Box<dyn CameraHandle>>) {
        self.app
            .insert_non_send_resource(FrameContext { stage, camera });
        self.app.update();
    }

    pub fn state(&self) -> &EngineState {
        self.app.world().resource::<EngineState>()
    }

    /// Мутация состояния из оверлея (тот же поток, между кадрами)
    pub fn update_state(&mut self, f: impl FnOnce(&mut EngineState)) {
        f(&mut self.app.world_mut().resource_mut::<EngineState>());
    }

    pub fn gate_enabled(&self) -> bool {
        self.app.world().non_send_resource::<PatchGate>().is_enabled()
    }

    /// Явное отпускание патча при выгрузке плагина
    pub fn shutdown(&mut self) {
        self.app
            .world_mut()
            .non_send_resource_mut::<PatchGate>()
            .disable();
    }
}
