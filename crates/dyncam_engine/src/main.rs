//! Headless-прогон движка без хост-процесса
//!
//! Камера — in-memory, патч — no-op: удобно смотреть сходимость
//! smoothing'а и переключения gate без запуска игры.

use std::cell::RefCell;
use std::rc::Rc;

use dyncam_engine::{
    create_headless_app, CameraField, CameraHandle, CameraOverridePlugin, FrameContext,
    InstructionPatch, PatchGate, StageId, MH_CAMERA_KIND,
};

#[derive(Debug)]
struct Fields {
    distance: f32,
    height: f32,
}

struct MemoryCamera(Rc<RefCell<Fields>>);

impl CameraHandle for MemoryCamera {
    fn is_kind(&self, kind: &str) -> bool {
        kind == MH_CAMERA_KIND
    }

    fn read_f32(&self, field: CameraField) -> f32 {
        match field {
            CameraField::Distance => self.0.borrow().distance,
            CameraField::Height => self.0.borrow().height,
        }
    }

    fn write_f32(&mut self, field: CameraField, value: f32) {
        match field {
            CameraField::Distance => self.0.borrow_mut().distance = value,
            CameraField::Height => self.0.borrow_mut().height = value,
        }
    }

    fn field_of_view(&self) -> f32 {
        61.0 // внутри полосы хабов (floor 60)
    }
}

struct NopPatch;

impl InstructionPatch for NopPatch {
    fn apply(&mut self) {}
    fn restore(&mut self) {}
}

fn main() {
    println!("Starting dyncam headless run");

    let mut app = create_headless_app();
    app.add_plugins(CameraOverridePlugin);
    app.insert_non_send_resource(PatchGate::new(Box::new(NopPatch)));

    let fields = Rc::new(RefCell::new(Fields {
        distance: 0.0,
        height: 0.0,
    }));

    // 400 кадров в мирной локации: дистанция ползёт к 90, высота к -40
    for tick in 0..400 {
        app.insert_non_send_resource(FrameContext {
            stage: StageId::ASTERA,
            camera: Some(Box::new(MemoryCamera(fields.clone()))),
        });
        app.update();

        if tick % 50 == 0 {
            let f = fields.borrow();
            println!(
                "Tick {tick}: distance = {:.3}, height = {:.3}",
                f.distance, f.height
            );
        }
    }

    let f = fields.borrow();
    println!(
        "Done: distance = {:.3}, height = {:.3} (targets 90 / -40)",
        f.distance, f.height
    );
}
