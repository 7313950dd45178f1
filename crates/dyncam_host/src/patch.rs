//! Нативный патч: глушение записи дистанции камеры nop-байтами.
//!
//! Единственное место, где плагин переписывает код игры. Оригинальные
//! байты снимаются один раз при создании и возвращаются на restore
//! (и при любом выходе через [`dyncam_engine::PatchGate`]).

use dyncam_engine::{log_error, InstructionPatch};

use winapi::um::errhandlingapi::GetLastError;
use winapi::um::memoryapi::VirtualProtect;
use winapi::um::winnt::PAGE_EXECUTE_READWRITE;

const NOP: u8 = 0x90;

pub struct NativePatch {
    address: usize,
    original: Vec<u8>,
    replacement: Vec<u8>,
}

impl NativePatch {
    /// Снимает оригинальные байты по адресу патч-сайта.
    ///
    /// # Safety
    /// `address..address + len` обязан быть валидным, исполняемым кодом
    /// текущего процесса на всё время жизни патча (адрес приходит из
    /// build profile соответствующего билда).
    pub unsafe fn nop_fill(address: usize, len: usize) -> Self {
        let original = std::slice::from_raw_parts(address as *const u8, len).to_vec();

        Self {
            address,
            original,
            replacement: vec![NOP; len],
        }
    }

    fn write_bytes(&self, bytes: &[u8]) {
        unsafe {
            let mut old_protect = 0u32;
            if VirtualProtect(
                self.address as *mut _,
                bytes.len(),
                PAGE_EXECUTE_READWRITE,
                &mut old_protect,
            ) == 0
            {
                log_error(&format!(
                    "VirtualProtect failed at {:#x} (error {}), patch not written",
                    self.address,
                    GetLastError()
                ));
                return;
            }

            std::ptr::copy_nonoverlapping(bytes.as_ptr(), self.address as *mut u8, bytes.len());

            VirtualProtect(
                self.address as *mut _,
                bytes.len(),
                old_protect,
                &mut old_protect,
            );
        }
    }
}

impl InstructionPatch for NativePatch {
    fn apply(&mut self) {
        self.write_bytes(&self.replacement);
    }

    fn restore(&mut self) {
        self.write_bytes(&self.original);
    }
}
