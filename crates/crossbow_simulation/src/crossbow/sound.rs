//! Звуковые cue арбалета (что играть и кому)

use bevy::prelude::*;

/// Звуки арбалета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum SoundCue {
    CrossbowLoadingStart,  // item.crossbow.loading_start (без QuickCharge)
    CrossbowQuickCharge1,  // item.crossbow.quick_charge_1
    CrossbowQuickCharge2,  // item.crossbow.quick_charge_2
    CrossbowQuickCharge3,  // item.crossbow.quick_charge_3
    CrossbowLoadingMiddle, // item.crossbow.loading_middle (только без QuickCharge)
    CrossbowLoadingEnd,    // item.crossbow.loading_end (после загрузки)
    CrossbowShoot,         // item.crossbow.shoot (каждый снаряд)
    CrossbowHit,           // item.crossbow.hit (попадание стрелы из арбалета)
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::CrossbowLoadingStart => "item.crossbow.loading_start",
            SoundCue::CrossbowQuickCharge1 => "item.crossbow.quick_charge_1",
            SoundCue::CrossbowQuickCharge2 => "item.crossbow.quick_charge_2",
            SoundCue::CrossbowQuickCharge3 => "item.crossbow.quick_charge_3",
            SoundCue::CrossbowLoadingMiddle => "item.crossbow.loading_middle",
            SoundCue::CrossbowLoadingEnd => "item.crossbow.loading_end",
            SoundCue::CrossbowShoot => "item.crossbow.shoot",
            SoundCue::CrossbowHit => "item.crossbow.hit",
        }
    }
}

/// Категория звука (микшер клиента)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum SoundSource {
    Master,
    Player,
}

/// Кто слышит звук
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundAudience {
    /// Сам стрелок + все, кто его видит
    ViewersAndSelf(Entity),
    /// Все рядом с позицией звука
    Nearby,
}
