//! Crossbow subsystem: зарядка, загрузка боеприпасов, выстрел
//!
//! ECS ответственность:
//! - Lifecycle: begin → tick → finish → cancel/use (UseSession per entity)
//! - Боеприпасы: поиск, multishot копии, списание
//! - Выстрел: веер снарядов, разброс, износ, звук
//!
//! Хост ответственность:
//! - Счёт тиков use и Finish по истечении duration
//! - Физика полёта стрел (SpawnArrow → entity у хоста)
//! - Воспроизведение звуков (PlaySound)

use bevy::prelude::*;

pub mod ammo;
pub mod charge;
pub mod dispatch;
pub mod events;
pub mod lifecycle;
pub mod session;
pub mod sound;
pub mod systems;

#[cfg(test)]
mod systems_tests;

pub use ammo::{
    build_projectile_list, find_crossbow_projectile, load_projectiles, select_projectile, AmmoKind, LoadOutcome,
    ProjectileSelection, ProjectileSource,
};
pub use charge::{charge_duration, charge_progress, use_duration};
pub use dispatch::{dispatch_shots, ShotContext};
pub use events::{ArrowKind, DamageEquipment, ItemUseEvent, ItemUseRefused, PickupMode, PlaySound, SpawnArrow};
pub use session::{ChargePhase, CrossbowSessions, UseSession};
pub use sound::{SoundAudience, SoundCue, SoundSource};

/// Накопитель исходящих вызовов за один проход обработчиков
///
/// Обработчики lifecycle чистые (без EventWriter), система сливает outbox в события.
#[derive(Debug, Default)]
pub struct CrossbowOutbox {
    pub arrows: Vec<SpawnArrow>,
    pub sounds: Vec<PlaySound>,
    pub wear: Vec<DamageEquipment>,
    pub refused: Vec<ItemUseRefused>,
}

/// Crossbow Plugin
///
/// Регистрирует события, session store, lifecycle системы в FixedUpdate и чистку сессий в Last.
/// `CrossbowConfig` и `DeterministicRng` ожидаются от `SimulationPlugin` (или хоста).
pub struct CrossbowPlugin;

impl Plugin for CrossbowPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ItemUseEvent>()
            .add_event::<ItemUseRefused>()
            .add_event::<SpawnArrow>()
            .add_event::<PlaySound>()
            .add_event::<DamageEquipment>()
            .init_resource::<CrossbowSessions>();

        app.add_systems(
            FixedUpdate,
            (systems::process_item_use_events, systems::play_charge_sounds).chain(),
        );

        // RemovedComponents очищаются каждый update, читаем каждый кадр
        app.add_systems(Last, systems::forget_despawned_shooters);
    }
}
