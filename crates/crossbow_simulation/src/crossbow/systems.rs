//! Crossbow systems (ECS обёртки над lifecycle обработчиками)
//!
//! Порядок в FixedUpdate:
//! 1. process_item_use_events: Begin/Finish/Cancel/Use в порядке доставки
//! 2. play_charge_sounds: per-tick cue по progress зарядки
//!
//! В Last (каждый кадр): forget_despawned_shooters, чистка сессий удалённых стрелков

use bevy::prelude::*;

use crate::components::{Inventory, ItemUseState, Shooter, ShooterMotion, ShooterPose};
use crate::config::CrossbowConfig;
use crate::crossbow::events::{DamageEquipment, ItemUseEvent, ItemUseRefused, PlaySound, SpawnArrow};
use crate::crossbow::lifecycle::{begin_use, cancel_use, finish_use, fire_use, tick_charge, ShooterState};
use crate::crossbow::session::CrossbowSessions;
use crate::crossbow::CrossbowOutbox;
use crate::logger::{log, log_error};
use crate::DeterministicRng;

/// Система: обработка lifecycle событий использования предмета
///
/// Cancel трогает только session store (стрелок может быть уже без компонентов).
/// Для остальных событий стрелок без компонентов → error log, событие пропускается.
pub fn process_item_use_events(
    mut events: EventReader<ItemUseEvent>,
    mut shooters: Query<(
        &Shooter,
        &mut Inventory,
        &mut ItemUseState,
        &ShooterPose,
        &ShooterMotion,
    )>,
    mut sessions: ResMut<CrossbowSessions>,
    config: Res<CrossbowConfig>,
    mut rng: ResMut<DeterministicRng>,
    mut refused_events: EventWriter<ItemUseRefused>,
    mut arrow_events: EventWriter<SpawnArrow>,
    mut sound_events: EventWriter<PlaySound>,
    mut wear_events: EventWriter<DamageEquipment>,
) {
    let mut outbox = CrossbowOutbox::default();

    for event in events.read() {
        if let ItemUseEvent::Cancel { entity, item, .. } = event {
            cancel_use(*entity, &mut sessions, item);
            continue;
        }

        let entity = event.entity();
        let Ok((shooter, inventory, item_use, pose, motion)) = shooters.get_mut(entity) else {
            log_error(&format!(
                "process_item_use_events: {:?} has no Shooter components, event skipped",
                entity
            ));
            continue;
        };

        let mut state = ShooterState {
            entity,
            game_mode: shooter.game_mode,
            inventory: inventory.into_inner(),
            item_use: item_use.into_inner(),
            pose,
            motion,
        };

        match event {
            ItemUseEvent::Begin { hand, item, .. } => {
                begin_use(&mut state, &mut sessions, *hand, item, &config, &mut outbox);
            }
            ItemUseEvent::Finish { hand, item, .. } => {
                finish_use(&mut state, &mut sessions, *hand, item, &mut outbox);
            }
            ItemUseEvent::Use { hand, item, .. } => {
                fire_use(&mut state, &mut sessions, *hand, item, &config, &mut rng.rng, &mut outbox);
            }
            ItemUseEvent::Cancel { .. } => {}
        }
    }

    flush_outbox(
        outbox,
        &mut refused_events,
        &mut arrow_events,
        &mut sound_events,
        &mut wear_events,
    );
}

/// Система: per-tick звуки зарядки для всех стрелков с активным use
pub fn play_charge_sounds(
    shooters: Query<(Entity, &Inventory, &ItemUseState, &ShooterPose), With<Shooter>>,
    mut sessions: ResMut<CrossbowSessions>,
    config: Res<CrossbowConfig>,
    mut sound_events: EventWriter<PlaySound>,
) {
    let mut outbox = CrossbowOutbox::default();

    for (entity, inventory, item_use, pose) in shooters.iter() {
        if !item_use.is_active() {
            continue;
        }
        tick_charge(entity, inventory, item_use, pose, &mut sessions, &config, &mut outbox);
    }

    for sound in outbox.sounds {
        sound_events.write(sound);
    }
}

/// Система: удалить сессии стрелков, которые деспавнились (или потеряли Shooter)
pub fn forget_despawned_shooters(
    mut removed: RemovedComponents<Shooter>,
    mut sessions: ResMut<CrossbowSessions>,
) {
    for entity in removed.read() {
        if sessions.remove(entity).is_some() {
            log(&format!("🗑️ Crossbow session dropped for {:?}", entity));
        }
    }
}

fn flush_outbox(
    outbox: CrossbowOutbox,
    refused_events: &mut EventWriter<ItemUseRefused>,
    arrow_events: &mut EventWriter<SpawnArrow>,
    sound_events: &mut EventWriter<PlaySound>,
    wear_events: &mut EventWriter<DamageEquipment>,
) {
    for refused in outbox.refused {
        refused_events.write(refused);
    }
    for arrow in outbox.arrows {
        arrow_events.write(arrow);
    }
    for sound in outbox.sounds {
        sound_events.write(sound);
    }
    for wear in outbox.wear {
        wear_events.write(wear);
    }
}
