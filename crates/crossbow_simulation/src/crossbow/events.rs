//! Crossbow events
//!
//! # Входящие (хост → симуляция)
//! - `ItemUseEvent`: begin / finish / cancel / use, в порядке доставки хостом
//!
//! # Исходящие (симуляция → хост)
//! - `ItemUseRefused`: begin отклонён (нет боеприпасов)
//! - `SpawnArrow`: создать снаряд (физика полёта на стороне хоста)
//! - `PlaySound`: проиграть звук
//! - `DamageEquipment`: износ предмета в руке

use bevy::prelude::*;

use crate::components::{EquipmentSlot, Hand};
use crate::crossbow::sound::{SoundAudience, SoundCue, SoundSource};
use crate::item_system::ItemStack;

// ============================================================================
// Input
// ============================================================================

/// Lifecycle использования предмета
///
/// `item`: snapshot предмета на момент, когда хост поднял событие.
/// Snapshot может быть устаревшим (например, Begin сразу после выстрела в том же тике
/// несёт ещё заряженный арбалет).
#[derive(Event, Debug, Clone)]
pub enum ItemUseEvent {
    /// Игрок начал удерживать предмет
    Begin {
        entity: Entity,
        hand: Hand,
        item: ItemStack,
    },
    /// Use duration истёк (предмет удерживался до конца)
    Finish {
        entity: Entity,
        hand: Hand,
        item: ItemStack,
    },
    /// Игрок отпустил предмет (или use прерван)
    Cancel {
        entity: Entity,
        hand: Hand,
        item: ItemStack,
    },
    /// Клик использования (для заряженного арбалета: выстрел)
    Use {
        entity: Entity,
        hand: Hand,
        item: ItemStack,
    },
}

impl ItemUseEvent {
    pub fn entity(&self) -> Entity {
        match self {
            ItemUseEvent::Begin { entity, .. }
            | ItemUseEvent::Finish { entity, .. }
            | ItemUseEvent::Cancel { entity, .. }
            | ItemUseEvent::Use { entity, .. } => *entity,
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Begin отклонён: боеприпасов нет, а режим не privileged
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ItemUseRefused {
    pub entity: Entity,
    pub hand: Hand,
}

/// Вариант снаряда
#[derive(Debug, Clone, PartialEq)]
pub enum ArrowKind {
    /// Обычная стрела: несёт копию боеприпаса (amount 1), включая tipped
    Standard { item: ItemStack },
    /// Spectral arrow (свой визуал и эффект подсветки)
    Spectral,
}

/// Кто может подобрать снаряд после попадания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum PickupMode {
    #[default]
    Allowed,
    CreativeOnly,
}

/// Projectile factory request
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SpawnArrow {
    pub shooter: Entity,
    pub kind: ArrowKind,
    /// Точка запуска (глаза − drop)
    pub position: Vec3,
    /// Начальная скорость (блоки/тик), уже с учётом движения стрелка
    pub velocity: Vec3,
    /// Визуальный поворот (от взгляда стрелка, не от вектора запуска)
    pub view_yaw: f32,
    pub view_pitch: f32,
    /// Смещение yaw в веере multishot (градусы)
    pub yaw_offset: f32,
    pub critical: bool,
    pub piercing: u8,
    pub pickup: PickupMode,
    pub hit_sound: SoundCue,
}

/// Audio broadcast request
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlaySound {
    pub cue: SoundCue,
    pub source: SoundSource,
    pub position: Vec3,
    pub volume: f32,
    pub pitch: f32,
    pub audience: SoundAudience,
}

/// Equipment wear request
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageEquipment {
    pub entity: Entity,
    pub slot: EquipmentSlot,
    pub amount: u32,
}
