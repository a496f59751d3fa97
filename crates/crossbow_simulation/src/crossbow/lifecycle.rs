//! UseSessionTracker: обработчики lifecycle событий арбалета
//!
//! IDLE → CHARGING → CHARGED → (FIRED → IDLE), CANCELLED: выход из CHARGING.
//!
//! Debounce двух событий в одном тике:
//! - Finish ставит `just_finished_loading`
//! - Cancel (отпустили кнопку) снимает его
//! - Use (выстрел) игнорируется, пока флаг стоит
//!
//! Порядок Cancel/Use внутри тика не гарантирован хостом, поэтому проверка стоит в обоих местах.

use bevy::prelude::*;
use rand::Rng;

use crate::components::{GameMode, Hand, Inventory, ItemUseState, ShooterMotion, ShooterPose};
use crate::config::CrossbowConfig;
use crate::crossbow::ammo::{can_begin_charging, load_projectiles, LoadOutcome};
use crate::crossbow::charge::{charge_progress, weapon_charge_duration, weapon_use_duration};
use crate::crossbow::dispatch::{dispatch_shots, ShotContext};
use crate::crossbow::events::{ItemUseRefused, PlaySound};
use crate::crossbow::session::{ChargePhase, CrossbowSessions};
use crate::crossbow::sound::{SoundAudience, SoundCue, SoundSource};
use crate::crossbow::CrossbowOutbox;
use crate::item_system::{Enchantment, ItemStack, Material};
use crate::logger::log;

/// Mutable view на стрелка на время обработки одного события
pub struct ShooterState<'a> {
    pub entity: Entity,
    pub game_mode: GameMode,
    pub inventory: &'a mut Inventory,
    pub item_use: &'a mut ItemUseState,
    pub pose: &'a ShooterPose,
    pub motion: &'a ShooterMotion,
}

fn is_crossbow(item: &ItemStack) -> bool {
    item.is(Material::Crossbow)
}

/// Begin: отказ без боеприпасов, сброс устаревшего заряда после выстрела, старт use
pub fn begin_use(
    shooter: &mut ShooterState<'_>,
    sessions: &mut CrossbowSessions,
    hand: Hand,
    item: &ItemStack,
    config: &CrossbowConfig,
    out: &mut CrossbowOutbox,
) {
    if !is_crossbow(item) {
        return;
    }

    if !can_begin_charging(shooter.inventory, shooter.game_mode) {
        log(&format!("🚫 {:?}: no crossbow ammunition, begin refused", shooter.entity));
        out.refused.push(ItemUseRefused {
            entity: shooter.entity,
            hand,
        });
        return;
    }

    let session = sessions.entry(shooter.entity);
    let mut item = item.clone();

    // Snapshot мог остаться заряженным после выстрела в этом же тике
    if session.just_shot {
        item = item.with_charged_projectiles(Vec::new());
        shooter.inventory.set_item_in_hand(hand, item.clone());
    }

    if item.is_charged() {
        shooter.item_use.start(hand, None);
        session.phase = ChargePhase::Charged;
    } else {
        shooter.item_use.start(hand, Some(weapon_use_duration(&item, config)));
        session.phase = ChargePhase::Charging;
    }

    session.hand = Some(hand);
    session.just_shot = false;
}

/// Tick: звуковые cue по progress зарядки (каждый максимум раз за сессию)
pub fn tick_charge(
    entity: Entity,
    inventory: &Inventory,
    item_use: &ItemUseState,
    pose: &ShooterPose,
    sessions: &mut CrossbowSessions,
    config: &CrossbowConfig,
    out: &mut CrossbowOutbox,
) {
    let Some(active) = item_use.active else {
        return;
    };

    let Some(stack) = inventory.item_in_hand(active.hand) else {
        return;
    };

    if !is_crossbow(stack) || stack.is_charged() {
        return;
    }

    let quick_charge = stack.enchantment_level(Enchantment::QuickCharge);
    let progress = charge_progress(active.elapsed_ticks, weapon_charge_duration(stack, config));

    let session = sessions.entry(entity);
    for cue in session.take_charge_cues(progress, quick_charge, config) {
        out.sounds.push(PlaySound {
            cue,
            source: SoundSource::Player,
            position: pose.position,
            volume: config.charge_cue_volume,
            pitch: config.charge_cue_pitch,
            audience: SoundAudience::ViewersAndSelf(entity),
        });
    }
}

/// Finish: загрузка (если ещё не заряжен), debounce флаг, сброс звуковых флагов
pub fn finish_use(
    shooter: &mut ShooterState<'_>,
    sessions: &mut CrossbowSessions,
    hand: Hand,
    item: &ItemStack,
    out: &mut CrossbowOutbox,
) {
    if !is_crossbow(item) || item.is_charged() {
        return;
    }

    let outcome = load_projectiles(shooter.inventory, shooter.game_mode, item);

    let session = sessions.entry(shooter.entity);
    session.just_finished_loading = true;
    session.phase = match outcome {
        LoadOutcome::Loaded(_) => ChargePhase::Charged,
        LoadOutcome::Placeholder(_) => ChargePhase::Idle,
    };

    shooter.inventory.set_item_in_hand(hand, outcome.into_stack());

    out.sounds.push(PlaySound {
        cue: SoundCue::CrossbowLoadingEnd,
        source: SoundSource::Master,
        position: shooter.pose.position,
        volume: 1.0,
        pitch: 1.0,
        audience: SoundAudience::Nearby,
    });

    session.reset_charge_sounds();
}

/// Cancel: звуковые флаги сбрасываются всегда; debounce снимается только для арбалета
pub fn cancel_use(
    entity: Entity,
    sessions: &mut CrossbowSessions,
    item: &ItemStack,
) {
    let Some(session) = sessions.get_mut(entity) else {
        return;
    };

    session.reset_charge_sounds();

    if !is_crossbow(item) {
        return;
    }

    if session.phase == ChargePhase::Charging {
        session.phase = ChargePhase::Cancelled;
    }

    if !session.just_finished_loading {
        return;
    }
    session.just_finished_loading = false;
}

/// Use: выстрел заряженным арбалетом (кроме тика сразу после загрузки)
pub fn fire_use(
    shooter: &mut ShooterState<'_>,
    sessions: &mut CrossbowSessions,
    hand: Hand,
    item: &ItemStack,
    config: &CrossbowConfig,
    rng: &mut impl Rng,
    out: &mut CrossbowOutbox,
) {
    if !is_crossbow(item) || !item.is_charged() {
        return;
    }

    let just_finished_loading = sessions
        .get(shooter.entity)
        .is_some_and(|s| s.just_finished_loading);
    if just_finished_loading {
        return;
    }

    let ctx = ShotContext {
        shooter: shooter.entity,
        hand,
        game_mode: shooter.game_mode,
        pose: shooter.pose,
        motion: shooter.motion,
    };
    let uncharged = dispatch_shots(ctx, item, config, rng, out);

    log(&format!(
        "🎯 {:?} fired crossbow: {} projectile(s)",
        shooter.entity,
        item.charged_projectiles.len()
    ));

    let session = sessions.entry(shooter.entity);
    session.just_shot = true;
    session.phase = ChargePhase::Idle;

    shooter.inventory.set_item_in_hand(hand, uncharged);
    shooter.item_use.clear();
}
