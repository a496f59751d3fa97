//! Charge timing: длительность зарядки, progress, выбор звуковых cue
//!
//! - charge duration = 25 − 5×QuickCharge (тики), не меньше 0
//! - use duration = charge duration + 3
//! - progress = elapsed / charge duration (не clamp'ится сверху)

use crate::config::CrossbowConfig;
use crate::crossbow::sound::SoundCue;
use crate::item_system::{Enchantment, ItemStack};

/// Время зарядки для уровня QuickCharge (тики)
pub fn charge_duration(quick_charge: u8, config: &CrossbowConfig) -> u32 {
    let reduction = config.quick_charge_step_ticks.saturating_mul(u32::from(quick_charge));
    config.base_charge_ticks.saturating_sub(reduction)
}

/// Use duration: зарядка + epilogue
pub fn use_duration(quick_charge: u8, config: &CrossbowConfig) -> u32 {
    charge_duration(quick_charge, config).saturating_add(config.use_epilogue_ticks)
}

/// Время зарядки конкретного арбалета (modifiers читаются из предмета каждый раз)
pub fn weapon_charge_duration(weapon: &ItemStack, config: &CrossbowConfig) -> u32 {
    charge_duration(weapon.enchantment_level(Enchantment::QuickCharge), config)
}

pub fn weapon_use_duration(weapon: &ItemStack, config: &CrossbowConfig) -> u32 {
    use_duration(weapon.enchantment_level(Enchantment::QuickCharge), config)
}

/// Progress зарядки. Нулевая длительность = зарядка мгновенная (∞).
pub fn charge_progress(elapsed_ticks: u32, charge_duration: u32) -> f64 {
    if charge_duration == 0 {
        return f64::INFINITY;
    }
    f64::from(elapsed_ticks) / f64::from(charge_duration)
}

/// Start cue по уровню QuickCharge (уровни выше 3: базовый звук)
pub fn start_cue(quick_charge: u8) -> SoundCue {
    match quick_charge {
        1 => SoundCue::CrossbowQuickCharge1,
        2 => SoundCue::CrossbowQuickCharge2,
        3 => SoundCue::CrossbowQuickCharge3,
        _ => SoundCue::CrossbowLoadingStart,
    }
}

/// Mid-load cue есть только у арбалета без QuickCharge
pub fn mid_load_cue(quick_charge: u8) -> Option<SoundCue> {
    (quick_charge == 0).then_some(SoundCue::CrossbowLoadingMiddle)
}
