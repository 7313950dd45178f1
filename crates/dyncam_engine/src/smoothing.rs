//! Camera smoothing filter.
//!
//! Экспоненциальное приближение к target: каждый кадр закрываем ~3%
//! оставшегося зазора, с жёсткой остановкой в пределах 0.1 юнита
//! (иначе асимптота никогда не завершается и дрожит на float-шуме).

/// Доля оставшегося зазора, закрываемая за один кадр
pub const SMOOTHING_FACTOR: f32 = 0.03;

/// Зазор, при котором значение считается "пришедшим" в target
pub const ARRIVAL_EPSILON: f32 = 0.1;

/// Один шаг фильтра: (current, target) → next.
///
/// Pure, детерминированно. Вызывается один раз на ось (distance, height)
/// за кадр. Возврат `current` без изменений — терминальное условие:
/// caller должен трактовать его как "прибыли" (например, отпустить gate).
pub fn camera_smooth(current: f32, target: f32) -> f32 {
    if (current - target).abs() > ARRIVAL_EPSILON {
        // Направление движения
        let direction = (target - current).signum();

        // Weighted average: шаг пропорционален оставшемуся зазору
        return current + direction * (target - current).abs() * SMOOTHING_FACTOR;
    }
    current
}
