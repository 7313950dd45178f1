//! Dynamic Camera — host adapter (100% Rust, in-process)
//!
//! Архитектура:
//! - dyncam_engine = engine layer (решения, smoothing, gate)
//! - этот crate = tactical layer: сырые указатели на объекты игры,
//!   нативный патч, файл настроек, C ABI для загрузчика
//!
//! Всё, что трогает память процесса, живёт за `cfg(windows)`;
//! bridge/controls/builds платформо-нейтральны и тестируются где угодно.

pub mod bridge;
pub mod builds;
pub mod controls;
pub mod logger;

#[cfg(windows)]
pub mod memory;
#[cfg(windows)]
pub mod patch;
#[cfg(windows)]
pub mod plugin;

pub use bridge::Bridge;
pub use builds::{BuildProfile, BuildProfiles, ResolvedProfile};
