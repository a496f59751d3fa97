//! Эмуляция хоста для headless прогонов (binary, интеграционные тесты)
//!
//! Реальный хост сам считает тики use и поднимает события.
//! Здесь минимальная версия: advance → Finish → FixedUpdate.

use bevy::prelude::*;

use crate::components::{Hand, Inventory, ItemUseState};
use crate::crossbow::ItemUseEvent;
use crate::item_system::ItemStack;

/// Snapshot предмета в руке (как его видит хост в момент события)
pub fn held_item(world: &World, entity: Entity, hand: Hand) -> Option<ItemStack> {
    world.get::<Inventory>(entity)?.item_in_hand(hand).cloned()
}

/// Поднять lifecycle событие со snapshot'ом текущего предмета в руке.
/// Пустая рука → событие не отправляется.
pub fn raise(world: &mut World, entity: Entity, hand: Hand, make: fn(Entity, Hand, ItemStack) -> ItemUseEvent) -> bool {
    let Some(item) = held_item(world, entity, hand) else {
        return false;
    };
    world.send_event(make(entity, hand, item));
    true
}

pub fn begin(entity: Entity, hand: Hand, item: ItemStack) -> ItemUseEvent {
    ItemUseEvent::Begin { entity, hand, item }
}

pub fn finish(entity: Entity, hand: Hand, item: ItemStack) -> ItemUseEvent {
    ItemUseEvent::Finish { entity, hand, item }
}

pub fn cancel(entity: Entity, hand: Hand, item: ItemStack) -> ItemUseEvent {
    ItemUseEvent::Cancel { entity, hand, item }
}

pub fn fire(entity: Entity, hand: Hand, item: ItemStack) -> ItemUseEvent {
    ItemUseEvent::Use { entity, hand, item }
}

/// Игрок отпустил кнопку: хост обрывает use и поднимает Cancel
pub fn release(world: &mut World, entity: Entity, hand: Hand) -> bool {
    if let Some(mut item_use) = world.get_mut::<ItemUseState>(entity) {
        item_use.clear();
    }
    raise(world, entity, hand, cancel)
}

/// Один тик хоста: продвинуть активные use, поднять Finish у истёкших, прогнать FixedUpdate
pub fn step(world: &mut World) {
    let mut completed = Vec::new();

    let mut query = world.query::<(Entity, &mut ItemUseState)>();
    for (entity, mut item_use) in query.iter_mut(world) {
        let Some(hand) = item_use.active_hand() else {
            continue;
        };
        if item_use.advance() {
            item_use.clear();
            completed.push((entity, hand));
        }
    }

    for (entity, hand) in completed {
        raise(world, entity, hand, finish);
    }

    world.run_schedule(FixedUpdate);
}

/// Несколько тиков подряд
pub fn run_ticks(world: &mut World, ticks: u32) {
    for _ in 0..ticks {
        step(world);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{GameMode, Shooter};
    use crate::crossbow::{CrossbowPlugin, CrossbowSessions};
    use crate::item_system::Material;
    use crate::{CrossbowConfig, DeterministicRng};

    #[test]
    fn test_step_raises_finish_after_duration() {
        let mut app = App::new();
        app.insert_resource(CrossbowConfig::default())
            .insert_resource(DeterministicRng::new(3))
            .add_plugins(CrossbowPlugin);

        let shooter = app
            .world_mut()
            .spawn((
                Shooter::new(GameMode::Survival),
                Inventory::empty()
                    .with_item(0, ItemStack::of(Material::Crossbow))
                    .with_item(9, ItemStack::new(Material::Arrow, 2)),
            ))
            .id();

        let world = app.world_mut();
        assert!(raise(world, shooter, Hand::Main, begin));
        step(world);
        run_ticks(world, 27);
        assert!(!held_item(world, shooter, Hand::Main).is_some_and(|s| s.is_charged()));

        step(world);
        assert!(held_item(world, shooter, Hand::Main).is_some_and(|s| s.is_charged()));
        assert!(!world.get::<ItemUseState>(shooter).is_some_and(ItemUseState::is_active));
        assert!(world.resource::<CrossbowSessions>().get(shooter).is_some_and(|s| s.just_finished_loading));
    }

    #[test]
    fn test_raise_with_empty_hand() {
        let mut world = World::new();
        let entity = world.spawn(Inventory::empty()).id();
        world.init_resource::<Events<ItemUseEvent>>();

        assert!(!raise(&mut world, entity, Hand::Off, cancel));
    }
}
