//! Stage conditionals: которые локации считаются "мирными" и какой
//! FOV ожидается у геймплейной камеры в каждой локации.
//!
//! Обе таблицы — неизменяемые данные. Движок их только читает:
//! никакая per-frame логика сюда не пишет.

/// Идентификатор локации, как его отдаёт игра.
///
/// `0` — sentinel "нет активной локации" (загрузка, главное меню);
/// caller обязан отсечь его до любой классификации.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageId(pub u32);

impl StageId {
    /// Нет активной локации
    pub const NONE: StageId = StageId(0);

    // Expedition maps
    pub const ANCIENT_FOREST: StageId = StageId(101);
    pub const WILDSPIRE_WASTE: StageId = StageId(102);
    pub const CORAL_HIGHLANDS: StageId = StageId(103);
    pub const ROTTEN_VALE: StageId = StageId(104);
    pub const ELDER_RECESS: StageId = StageId(105);
    pub const HOARFROST_REACH: StageId = StageId(106);
    pub const GUIDING_LANDS: StageId = StageId(107);

    // Quest-only arenas / story stages
    pub const SPECIAL_ARENA: StageId = StageId(201);
    pub const CHALLENGE_ARENA: StageId = StageId(202);
    pub const TRAINING_CAMP: StageId = StageId(203);
    pub const CONFLUENCE_OF_FATES: StageId = StageId(204);
    pub const EL_DORADO: StageId = StageId(205);
    pub const EVERSTREAM: StageId = StageId(206);
    pub const CASTLE_SCHRADE: StageId = StageId(207);
    pub const ORIGIN_ISLE_NERGIGANTE: StageId = StageId(208);
    pub const ORIGIN_ISLE_SHARA_ISHVALDA: StageId = StageId(209);
    pub const ALATREON_STAGE: StageId = StageId(210);
    pub const SELIANA_SUPPLY_CACHE: StageId = StageId(211);

    // Hubs & player rooms
    pub const ASTERA: StageId = StageId(301);
    pub const ASTERA_HUB: StageId = StageId(302);
    pub const RESEARCH_BASE: StageId = StageId(303);
    pub const PRIVATE_SUITE: StageId = StageId(304);
    pub const PRIVATE_QUARTERS: StageId = StageId(305);
    pub const LIVING_QUARTERS: StageId = StageId(306);
    pub const CHAMBER_OF_FIVE: StageId = StageId(307);
    pub const SELIANA: StageId = StageId(308);
    pub const SELIANA_HUB: StageId = StageId(309);
    pub const SELIANA_ROOM: StageId = StageId(310);

    pub fn is_none(self) -> bool {
        self == StageId::NONE
    }
}

/// Мирные локации: хабы, комнаты игрока, Research Base.
/// Здесь применяется base-профиль камеры вместо combat-профиля.
pub const NON_COMBAT_STAGES: [StageId; 10] = [
    StageId::ASTERA,
    StageId::ASTERA_HUB,
    StageId::PRIVATE_SUITE,
    StageId::CHAMBER_OF_FIVE,
    StageId::LIVING_QUARTERS,
    StageId::RESEARCH_BASE,
    StageId::SELIANA,
    StageId::SELIANA_HUB,
    StageId::SELIANA_ROOM,
    StageId::PRIVATE_QUARTERS,
];

/// Нижняя граница ожидаемого FOV геймплейной камеры по локациям.
///
/// Разные локации используют разные пресеты линзы; если FOV выпадает из
/// полосы, значит активна не геймплейная камера (катсцена, диалог), и
/// override должен отпустить управление.
pub fn fov_band_floor(stage: StageId) -> Option<f32> {
    let floor = match stage {
        StageId::RESEARCH_BASE => 60.0,
        StageId::ASTERA => 60.0,
        StageId::ASTERA_HUB => 60.0,
        StageId::CHAMBER_OF_FIVE => 60.0,
        StageId::EVERSTREAM => 57.0,
        StageId::CASTLE_SCHRADE => 57.0,
        StageId::ORIGIN_ISLE_SHARA_ISHVALDA => 57.0,
        StageId::GUIDING_LANDS => 53.0,
        StageId::SELIANA_SUPPLY_CACHE => 53.0,
        StageId::ALATREON_STAGE => 53.0,
        StageId::ORIGIN_ISLE_NERGIGANTE => 53.0,
        StageId::HOARFROST_REACH => 53.0,
        StageId::SELIANA_HUB => 53.0,
        StageId::SELIANA => 53.0,
        StageId::CORAL_HIGHLANDS => 53.0,
        StageId::ROTTEN_VALE => 53.0,
        StageId::WILDSPIRE_WASTE => 53.0,
        StageId::ELDER_RECESS => 53.0,
        StageId::ANCIENT_FOREST => 53.0,
        StageId::TRAINING_CAMP => 53.0,
        StageId::SPECIAL_ARENA => 53.0,
        StageId::CONFLUENCE_OF_FATES => 53.0,
        StageId::CHALLENGE_ARENA => 53.0,
        StageId::EL_DORADO => 53.0,
        StageId::SELIANA_ROOM => 51.0,
        StageId::PRIVATE_SUITE => 51.0,
        StageId::PRIVATE_QUARTERS => 49.0,
        StageId::LIVING_QUARTERS => 48.0,
        _ => return None,
    };
    Some(floor)
}

/// Ширина полосы над floor: поглощает дрожание линзы/зума
pub const FOV_TOLERANCE: f32 = 4.0;

/// Полоса по умолчанию для локаций без записи в таблице
pub const DEFAULT_FOV_BAND: (f32, f32) = (53.0, 57.0);

/// Нижняя граница FOV в ADS-режиме: прицеливание сужает FOV, и чтобы
/// override не отваливался при вскидке, floor опускается до 45°
pub const ADS_FOV_FLOOR: f32 = 45.0;

/// true ⟺ stage входит в фиксированный набор мирных локаций.
/// `StageId::NONE` в наборе отсутствует и всегда даёт false.
pub fn is_non_combat(stage: StageId) -> bool {
    NON_COMBAT_STAGES.contains(&stage)
}

/// Попадает ли текущий FOV в ожидаемую полосу геймплейной камеры.
///
/// `ads_widen` — пользовательская опция: в боевых локациях опускает
/// нижнюю границу до [`ADS_FOV_FLOOR`], чтобы override переживал
/// прицеливание. В мирных локациях опция игнорируется.
pub fn fov_in_band(stage: StageId, fov: f32, ads_widen: bool) -> bool {
    if ads_widen && !is_non_combat(stage) {
        if let Some(floor) = fov_band_floor(stage) {
            return fov >= ADS_FOV_FLOOR && fov <= floor + FOV_TOLERANCE;
        }
        // Нет записи в таблице — проваливаемся в полосу по умолчанию
    } else if let Some(floor) = fov_band_floor(stage) {
        return fov >= floor && fov <= floor + FOV_TOLERANCE;
    }

    fov >= DEFAULT_FOV_BAND.0 && fov <= DEFAULT_FOV_BAND.1
}
