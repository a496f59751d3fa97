//! Crossbow Simulation Core
//!
//! Tick-based симуляция арбалета на Bevy 0.16 (authoritative server side)
//!
//! РАЗДЕЛЕНИЕ ОТВЕТСТВЕННОСТИ:
//! - ECS = правила оружия (зарядка, загрузка, выстрел, звуковые cue)
//! - Хост = счёт тиков use, физика стрел, воспроизведение звука

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod crossbow;
pub mod host;
pub mod item_system;
pub mod logger;

// Re-export базовых типов для удобства
pub use components::*;
pub use config::CrossbowConfig;
pub use crossbow::{
    ArrowKind, ChargePhase, CrossbowPlugin, CrossbowSessions, DamageEquipment, ItemUseEvent, ItemUseRefused,
    PickupMode, PlaySound, SoundAudience, SoundCue, SoundSource, SpawnArrow,
};
pub use item_system::{Enchantment, Enchantments, ItemStack, Material};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel, LogPrinter};

/// Частота simulation tick (20 тиков в секунду)
pub const TICKS_PER_SECOND: f64 = 20.0;

/// Главный plugin симуляции
///
/// Config и RNG, вставленные хостом до плагина, не перезаписываются.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<DeterministicRng>() {
            // Детерминистичный RNG (seed по умолчанию)
            app.insert_resource(DeterministicRng::new(42));
        }

        app.insert_resource(Time::<Fixed>::from_hz(TICKS_PER_SECOND))
            .init_resource::<CrossbowConfig>()
            .add_plugins(CrossbowPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции (с SimulationPlugin)
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins(SimulationPlugin);

    app
}

/// Создаёт headless App с конфигом из RON
pub fn create_headless_app_with_config(seed: u64, config: CrossbowConfig) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(config)
        .add_plugins(SimulationPlugin);

    app
}
