//! Headless демо арбалета
//!
//! Стрелок с Multishot + QuickCharge арбалетом и стрелами:
//! несколько попыток (зарядка → отпускание → выстрел), вывод созданных стрел

use bevy::prelude::*;
use crossbow_simulation::host::{self, begin, fire};
use crossbow_simulation::{
    create_headless_app, log, log_error, ArrowKind, Enchantment, GameMode, Hand, Inventory, ItemStack, Material,
    PlaySound, Shooter, ShooterPose, SpawnArrow,
};

const ATTEMPTS: usize = 3;

fn main() {
    let seed = 42;
    println!("Starting crossbow headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);

    let crossbow = ItemStack::of(Material::Crossbow)
        .with_enchantment(Enchantment::Multishot, 1)
        .with_enchantment(Enchantment::QuickCharge, 2);

    let shooter = app
        .world_mut()
        .spawn((
            Shooter::new(GameMode::Survival),
            ShooterPose::new(Vec3::new(0.0, 64.0, 0.0), 30.0, -5.0),
            Inventory::empty()
                .with_item(0, crossbow)
                .with_item(9, ItemStack::new(Material::Arrow, 2)),
        ))
        .id();

    for attempt in 1..=ATTEMPTS {
        let world = app.world_mut();

        if !host::raise(world, shooter, Hand::Main, begin) {
            log_error("Shooter lost its crossbow");
            break;
        }
        // Удерживаем, пока не истечёт use duration (QuickCharge II → 18 тиков)
        host::run_ticks(world, 20);

        // Отпустили кнопку, затем клик
        host::release(world, shooter, Hand::Main);
        host::step(world);
        host::raise(world, shooter, Hand::Main, fire);
        host::step(world);

        let arrows: Vec<SpawnArrow> = world.resource_mut::<Events<SpawnArrow>>().drain().collect();
        let sounds: Vec<PlaySound> = world.resource_mut::<Events<PlaySound>>().drain().collect();

        println!("Attempt {}: {} arrow(s), {} sound(s)", attempt, arrows.len(), sounds.len());
        for arrow in &arrows {
            let kind = match &arrow.kind {
                ArrowKind::Standard { item } => item.material.as_str(),
                ArrowKind::Spectral => "spectral_arrow",
            };
            println!(
                "  {} offset {:>5.1}° velocity ({:.3}, {:.3}, {:.3}) pickup {:?}",
                kind, arrow.yaw_offset, arrow.velocity.x, arrow.velocity.y, arrow.velocity.z, arrow.pickup
            );
        }
        if arrows.is_empty() {
            log("Nothing fired (no ammunition left?)");
        }
    }

    println!("Simulation complete!");
}
