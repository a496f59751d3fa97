//! Tests for crossbow systems.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::components::{GameMode, Hand, Inventory, ItemUseState, Shooter};
    use crate::config::CrossbowConfig;
    use crate::crossbow::{CrossbowPlugin, CrossbowSessions, ItemUseEvent, ItemUseRefused, PlaySound, SoundCue};
    use crate::item_system::{ItemStack, Material};
    use crate::DeterministicRng;

    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(CrossbowConfig::default())
            .insert_resource(DeterministicRng::new(1))
            .add_plugins(CrossbowPlugin);
        app
    }

    fn crossbow() -> ItemStack {
        ItemStack::of(Material::Crossbow)
    }

    fn spawn_shooter(app: &mut App, inventory: Inventory) -> Entity {
        app.world_mut()
            .spawn((Shooter::new(GameMode::Survival), inventory))
            .id()
    }

    fn begin(entity: Entity) -> ItemUseEvent {
        ItemUseEvent::Begin {
            entity,
            hand: Hand::Main,
            item: crossbow(),
        }
    }

    fn drain_sounds(app: &mut App) -> Vec<PlaySound> {
        app.world_mut()
            .resource_mut::<Events<PlaySound>>()
            .drain()
            .collect()
    }

    #[test]
    fn test_refused_begin_writes_event() {
        let mut app = test_app();
        let shooter = spawn_shooter(&mut app, Inventory::empty().with_item(0, crossbow()));

        app.world_mut().send_event(begin(shooter));
        app.world_mut().run_schedule(FixedUpdate);

        let refused: Vec<ItemUseRefused> = app
            .world_mut()
            .resource_mut::<Events<ItemUseRefused>>()
            .drain()
            .collect();

        assert_eq!(refused.len(), 1);
        assert_eq!(refused[0].entity, shooter);
        assert!(!app.world().resource::<CrossbowSessions>().contains(shooter));
        assert!(!app.world().get::<ItemUseState>(shooter).is_some_and(ItemUseState::is_active));
    }

    #[test]
    fn test_event_for_unknown_entity_is_skipped() {
        let mut app = test_app();
        let ghost = Entity::from_raw(999);

        app.world_mut().send_event(begin(ghost));
        app.world_mut().send_event(ItemUseEvent::Cancel {
            entity: ghost,
            hand: Hand::Main,
            item: crossbow(),
        });
        app.world_mut().run_schedule(FixedUpdate);

        assert!(app.world().resource::<CrossbowSessions>().is_empty());
    }

    #[test]
    fn test_accepted_begin_starts_use() {
        let mut app = test_app();
        let shooter = spawn_shooter(
            &mut app,
            Inventory::empty()
                .with_item(0, crossbow())
                .with_item(9, ItemStack::new(Material::Arrow, 16)),
        );

        app.world_mut().send_event(begin(shooter));
        app.world_mut().run_schedule(FixedUpdate);

        let item_use = app.world().get::<ItemUseState>(shooter).expect("item use state");
        let active = item_use.active.expect("active use");
        assert_eq!(active.hand, Hand::Main);
        assert_eq!(active.duration, Some(28));
        assert!(app.world().resource::<CrossbowSessions>().contains(shooter));
    }

    #[test]
    fn test_charge_sounds_follow_elapsed_ticks() {
        let mut app = test_app();
        let shooter = spawn_shooter(
            &mut app,
            Inventory::empty()
                .with_item(0, crossbow())
                .with_item(9, ItemStack::new(Material::Arrow, 16)),
        );

        app.world_mut().send_event(begin(shooter));
        app.world_mut().run_schedule(FixedUpdate);
        assert!(drain_sounds(&mut app).is_empty());

        let mut cues = Vec::new();
        for _ in 0..20 {
            if let Some(mut item_use) = app.world_mut().get_mut::<ItemUseState>(shooter) {
                item_use.advance();
            }
            app.world_mut().run_schedule(FixedUpdate);
            cues.extend(drain_sounds(&mut app).into_iter().map(|s| s.cue));
        }

        assert_eq!(
            cues,
            vec![SoundCue::CrossbowLoadingStart, SoundCue::CrossbowLoadingMiddle]
        );
    }

    #[test]
    fn test_despawn_drops_session() {
        let mut app = test_app();
        let shooter = spawn_shooter(
            &mut app,
            Inventory::empty()
                .with_item(0, crossbow())
                .with_item(9, ItemStack::new(Material::Arrow, 16)),
        );

        app.world_mut().send_event(begin(shooter));
        app.world_mut().run_schedule(FixedUpdate);
        assert!(app.world().resource::<CrossbowSessions>().contains(shooter));

        app.world_mut().despawn(shooter);
        app.world_mut().run_schedule(Last);

        assert!(app.world().resource::<CrossbowSessions>().is_empty());
    }
}
