//! Сырой доступ к объектам игры: камера главного viewport'а и текущая
//! локация. Все адреса приходят из build profile; каждое разыменование
//! проверяется на null, volatile — потому что по ту сторону пишет игра.

use dyncam_engine::{
    CameraField, CameraHandle, INTERPOLATION_CAMERA_KIND, MH_CAMERA_KIND,
};

use crate::builds::ResolvedProfile;

/// Смещения полей внутри uMhCamera
const DISTANCE_OFFSET: usize = 0x748;
const HEIGHT_OFFSET: usize = 0x744;
const FOV_OFFSET: usize = 0x2a0;

/// Живой камера-объект игры. Берётся заново каждый кадр и дропается
/// с FrameContext'ом — удерживать дольше нельзя, объектом владеет игра.
pub struct ProcessCamera {
    base: *mut u8,
    mh_camera_vtable: usize,
    interpolation_camera_vtable: usize,
}

unsafe fn read_ptr(address: usize) -> Option<usize> {
    if address == 0 {
        return None;
    }
    let value = std::ptr::read_volatile(address as *const usize);
    (value != 0).then_some(value)
}

/// Текущий stage id; 0 — локации нет (загрузка, главное меню)
pub fn current_stage_id(profile: &ResolvedProfile) -> u32 {
    unsafe {
        match read_ptr(profile.area_manager) {
            Some(area) => {
                std::ptr::read_volatile((area + profile.stage_id_offset) as *const u32)
            }
            None => 0,
        }
    }
}

/// Камера главного viewport'а, если она сейчас существует
pub fn viewport_camera(profile: &ResolvedProfile) -> Option<ProcessCamera> {
    unsafe {
        let system = read_ptr(profile.camera_system)?;
        let camera = read_ptr(system + profile.viewport_camera_offset)?;

        Some(ProcessCamera {
            base: camera as *mut u8,
            mh_camera_vtable: profile.mh_camera_vtable,
            interpolation_camera_vtable: profile.interpolation_camera_vtable,
        })
    }
}

impl ProcessCamera {
    fn vtable(&self) -> usize {
        unsafe { std::ptr::read_volatile(self.base as *const usize) }
    }

    fn field_offset(field: CameraField) -> usize {
        match field {
            CameraField::Distance => DISTANCE_OFFSET,
            CameraField::Height => HEIGHT_OFFSET,
        }
    }
}

impl CameraHandle for ProcessCamera {
    fn is_kind(&self, kind: &str) -> bool {
        // Сравнение vtable-адресов вместо вызова DTI-кода игры
        let vtable = self.vtable();
        match kind {
            MH_CAMERA_KIND => vtable == self.mh_camera_vtable,
            INTERPOLATION_CAMERA_KIND => vtable == self.interpolation_camera_vtable,
            _ => false,
        }
    }

    fn read_f32(&self, field: CameraField) -> f32 {
        unsafe {
            std::ptr::read_volatile(self.base.add(Self::field_offset(field)) as *const f32)
        }
    }

    fn write_f32(&mut self, field: CameraField, value: f32) {
        unsafe {
            std::ptr::write_volatile(
                self.base.add(Self::field_offset(field)) as *mut f32,
                value,
            );
        }
    }

    fn field_of_view(&self) -> f32 {
        unsafe { std::ptr::read_volatile(self.base.add(FOV_OFFSET) as *const f32) }
    }
}
