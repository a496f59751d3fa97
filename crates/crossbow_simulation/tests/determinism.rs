//! Тесты детерминизма
//!
//! Одинаковый seed + одинаковый сценарий событий → идентичный поток SpawnArrow

use bevy::prelude::*;
use crossbow_simulation::host::{self, begin, fire};
use crossbow_simulation::{
    create_headless_app, Enchantment, GameMode, Hand, Inventory, ItemStack, Material, Shooter, ShooterMotion,
    ShooterPose, SpawnArrow,
};

const SHOOTER_COUNT: usize = 4;
const ATTEMPTS: usize = 5;

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;

    let run1 = run_simulation(SEED);
    let run2 = run_simulation(SEED);

    assert!(!run1.is_empty());
    assert_eq!(
        run1, run2,
        "Симуляция с одинаковым seed ({}) дала разные стрелы!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;

    // Запускаем 5 раз: все должны быть идентичны
    let runs: Vec<_> = (0..5).map(|_| run_simulation(SEED)).collect();

    for (i, run) in runs.iter().enumerate().skip(1) {
        assert_eq!(runs[0], *run, "Прогон {} дал результат отличный от прогона 0", i);
    }
}

#[test]
fn test_different_seeds_change_spread() {
    let run1 = run_simulation(1);
    let run2 = run_simulation(2);

    assert_eq!(run1.len(), run2.len());
    // Веер и pickup одинаковые, jitter скорости: нет
    assert!(run1.iter().zip(&run2).all(|(a, b)| a.yaw_offset == b.yaw_offset));
    assert!(run1.iter().zip(&run2).any(|(a, b)| a.velocity != b.velocity));
}

/// Несколько стрелков, несколько попыток; возвращает все созданные стрелы
fn run_simulation(seed: u64) -> Vec<SpawnArrow> {
    let mut app = create_headless_app(seed);

    let crossbow = ItemStack::of(Material::Crossbow)
        .with_enchantment(Enchantment::Multishot, 1)
        .with_enchantment(Enchantment::QuickCharge, 1);

    let shooters: Vec<Entity> = (0..SHOOTER_COUNT)
        .map(|i| {
            app.world_mut()
                .spawn((
                    Shooter::new(GameMode::Survival),
                    ShooterPose::new(Vec3::new(i as f32 * 4.0, 64.0, 0.0), i as f32 * 15.0, -10.0),
                    ShooterMotion {
                        velocity: Vec3::new(0.05, -0.08, 0.0),
                        on_ground: i % 2 == 0,
                    },
                    Inventory::empty()
                        .with_item(0, crossbow.clone())
                        .with_item(9, ItemStack::new(Material::Arrow, 64)),
                ))
                .id()
        })
        .collect();

    let mut arrows = Vec::new();
    for _ in 0..ATTEMPTS {
        let world = app.world_mut();

        for &shooter in &shooters {
            host::raise(world, shooter, Hand::Main, begin);
        }
        host::run_ticks(world, 25);

        for &shooter in &shooters {
            host::release(world, shooter, Hand::Main);
        }
        host::step(world);

        for &shooter in &shooters {
            host::raise(world, shooter, Hand::Main, fire);
        }
        host::step(world);

        arrows.extend(world.resource_mut::<Events<SpawnArrow>>().drain());
    }

    arrows
}
