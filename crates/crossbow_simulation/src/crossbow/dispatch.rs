//! ShotDispatcher: веер multishot + сборка каждого выстрела
//!
//! Веер: 0°, +step, −step, +2·step, −2·step, ...
//!
//! Каждый выстрел:
//! - Firework → no-op (не реализовано)
//! - снаряд по типу боеприпаса (spectral / обычный с копией предмета)
//! - critical всегда, piercing из арбалета
//! - pickup CreativeOnly, если Creative ИЛИ yaw offset ≠ 0
//! - старт: глаза − drop, скорость: rotation + jitter + движение стрелка
//! - износ арбалета + звук выстрела

use bevy::prelude::*;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::components::{direction_from_rotation, GameMode, Hand, ShooterMotion, ShooterPose};
use crate::config::CrossbowConfig;
use crate::crossbow::ammo::AmmoKind;
use crate::crossbow::events::{ArrowKind, DamageEquipment, PickupMode, PlaySound, SpawnArrow};
use crate::crossbow::sound::{SoundAudience, SoundCue, SoundSource};
use crate::crossbow::CrossbowOutbox;
use crate::item_system::{Enchantment, ItemStack};

/// Масштаб gaussian jitter на единицу spread
pub const SPREAD_JITTER_SCALE: f32 = 0.0075;

/// Стрелок в момент выстрела (read-only snapshot)
#[derive(Debug, Clone, Copy)]
pub struct ShotContext<'a> {
    pub shooter: Entity,
    pub hand: Hand,
    pub game_mode: GameMode,
    pub pose: &'a ShooterPose,
    pub motion: &'a ShooterMotion,
}

/// Yaw offsets веера в порядке выстрелов
pub fn fan_yaw_offsets(count: usize, step: f32) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(count);
    let mut offset = 0.0;

    for turn in 0..count {
        if turn == 0 {
            offsets.push(0.0);
            offset += step;
        } else if turn % 2 == 1 {
            offsets.push(offset);
        } else {
            offsets.push(-offset);
            offset += step;
        }
    }

    offsets
}

/// Начальная скорость из rotation: normalize → jitter (N(0,1)·0.0075·spread) → ×power
pub fn launch_velocity(
    yaw: f32,
    pitch: f32,
    power: f32,
    spread: f32,
    rng: &mut impl Rng,
) -> Vec3 {
    let direction = direction_from_rotation(yaw, pitch).normalize();
    let jitter_scale = spread * SPREAD_JITTER_SCALE;

    let jitter = Vec3::new(
        rng.sample::<f32, _>(StandardNormal),
        rng.sample::<f32, _>(StandardNormal),
        rng.sample::<f32, _>(StandardNormal),
    ) * jitter_scale;

    (direction + jitter) * power
}

/// Вклад движения стрелка: горизонталь всегда, вертикаль только в воздухе
pub fn shooter_velocity_bias(motion: &ShooterMotion) -> Vec3 {
    let vertical = if motion.on_ground { 0.0 } else { motion.velocity.y };
    Vec3::new(motion.velocity.x, vertical, motion.velocity.z)
}

/// Визуальный поворот снаряда из направления (yaw, pitch в градусах)
pub fn facing_from_direction(direction: Vec3) -> (f32, f32) {
    let direction = direction.normalize_or_zero();
    let yaw = direction.x.atan2(direction.z).to_degrees();
    let pitch = direction.y.clamp(-1.0, 1.0).asin().to_degrees();
    (yaw, pitch)
}

/// Pickup: side shots веера и выстрелы Creative подбирает только Creative
pub fn pickup_mode(game_mode: GameMode, yaw_offset: f32) -> PickupMode {
    if game_mode.has_unlimited_ammo() || yaw_offset != 0.0 {
        PickupMode::CreativeOnly
    } else {
        PickupMode::Allowed
    }
}

/// Вариант снаряда по боеприпасу
pub fn arrow_kind(kind: AmmoKind, projectile: &ItemStack) -> ArrowKind {
    match kind {
        AmmoKind::SpectralArrow => ArrowKind::Spectral,
        AmmoKind::Arrow | AmmoKind::Firework => ArrowKind::Standard {
            item: projectile.with_amount(1),
        },
    }
}

/// Выпустить все загруженные снаряды. Возвращает арбалет с пустым списком.
pub fn dispatch_shots(
    ctx: ShotContext<'_>,
    weapon: &ItemStack,
    config: &CrossbowConfig,
    rng: &mut impl Rng,
    out: &mut CrossbowOutbox,
) -> ItemStack {
    let offsets = fan_yaw_offsets(weapon.charged_projectiles.len(), config.multishot_yaw_step);

    for (projectile, yaw_offset) in weapon.charged_projectiles.iter().zip(offsets) {
        shoot_projectile(ctx, weapon, projectile, yaw_offset, config, rng, out);
    }

    weapon.with_charged_projectiles(Vec::new())
}

fn shoot_projectile(
    ctx: ShotContext<'_>,
    weapon: &ItemStack,
    projectile: &ItemStack,
    yaw_offset: f32,
    config: &CrossbowConfig,
    rng: &mut impl Rng,
    out: &mut CrossbowOutbox,
) {
    let Some(kind) = AmmoKind::of(projectile.material) else {
        crate::log_error(&format!(
            "Crossbow loaded with non-ammunition {:?}, skipping shot",
            projectile.material
        ));
        return;
    };

    // TODO: снаряд-фейерверк (FireworkRocket entity) ещё не реализован
    if kind == AmmoKind::Firework {
        return;
    }

    let pose = ctx.pose;
    let position = pose.position + Vec3::Y * (pose.eye_height - config.launch_drop);

    let velocity = launch_velocity(
        pose.yaw + yaw_offset,
        pose.pitch,
        config.launch_power,
        config.launch_spread,
        rng,
    ) + shooter_velocity_bias(ctx.motion);

    let (view_yaw, view_pitch) = facing_from_direction(pose.look_direction());

    out.arrows.push(SpawnArrow {
        shooter: ctx.shooter,
        kind: arrow_kind(kind, projectile),
        position,
        velocity,
        view_yaw,
        view_pitch,
        yaw_offset,
        critical: true,
        piercing: weapon.enchantment_level(Enchantment::Piercing),
        pickup: pickup_mode(ctx.game_mode, yaw_offset),
        hit_sound: SoundCue::CrossbowHit,
    });

    out.wear.push(DamageEquipment {
        entity: ctx.shooter,
        slot: ctx.hand.equipment_slot(),
        amount: kind.wear_cost(),
    });

    out.sounds.push(PlaySound {
        cue: SoundCue::CrossbowShoot,
        source: SoundSource::Player,
        position: pose.position,
        volume: config.shoot_volume,
        pitch: config.shoot_pitch,
        audience: SoundAudience::ViewersAndSelf(ctx.shooter),
    });
}
