//! Camera handle seam.
//!
//! Движок никогда не трогает память игры напрямую — только через этот
//! trait. Production-реализация (host crate) читает/пишет поля живого
//! камера-объекта по сырым указателям; тесты подставляют in-memory fake.
//!
//! Handle одалживается на один кадр: хост передаёт свежий каждый тик,
//! движок не имеет права удерживать его дольше (lifetime объекта
//! контролирует игра).

/// DTI-имя основной геймплейной камеры
pub const MH_CAMERA_KIND: &str = "uMhCamera";

/// DTI-имя переходной/катсценовой камеры (никогда не override'ится)
pub const INTERPOLATION_CAMERA_KIND: &str = "uInterpolationCamera";

/// Числовые поля камеры, которыми управляет движок
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraField {
    /// Дистанция до персонажа
    Distance,
    /// Вертикальное смещение
    Height,
}

/// Доступ к живому камера-объекту на время одного кадра.
pub trait CameraHandle {
    /// Проверка конкретного типа камеры по DTI-имени класса
    fn is_kind(&self, kind: &str) -> bool;

    /// Чтение поля
    fn read_f32(&self, field: CameraField) -> f32;

    /// Запись поля
    fn write_f32(&mut self, field: CameraField, value: f32);

    /// Текущий field-of-view камеры (градусы)
    fn field_of_view(&self) -> f32;
}
