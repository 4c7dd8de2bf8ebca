//! Crocodile mouth system.
//!
//! Runs the mouth state machine stored in the
//! [`Crocodile`](crate::components::crocodile::Crocodile) component: scripted
//! steps first (the chomp after eating), then the idle open/close loop on a
//! random 2–4 second wait. The entity's sprite is kept in sync with the mouth.

use bevy_ecs::prelude::*;
use fastrand::Rng;

use crate::components::crocodile::Crocodile;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

const IDLE_WAIT_MIN: f32 = 2.0;
const IDLE_WAIT_MAX: f32 = 4.0;

pub fn crocodile_mouth_system(
    time: Res<WorldTime>,
    mut query: Query<(&mut Crocodile, &mut Sprite)>,
    mut rng: Local<Rng>,
) {
    let dt = time.delta;
    for (mut crocodile, mut sprite) in query.iter_mut() {
        crocodile.countdown -= dt;
        if crocodile.countdown <= 0.0 {
            if let Some((mouth, hold)) = crocodile.script.pop_front() {
                crocodile.mouth = mouth;
                crocodile.countdown = hold;
            } else {
                crocodile.mouth = crocodile.mouth.toggled();
                crocodile.countdown =
                    IDLE_WAIT_MIN + rng.f32() * (IDLE_WAIT_MAX - IDLE_WAIT_MIN);
            }
        }
        let key = crocodile.mouth.tex_key();
        if sprite.tex_key != key {
            sprite.tex_key = key.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::crocodile::Mouth;
    use crate::resources::worldtime::WorldTime;
    use bevy_ecs::prelude::{Schedule, World};

    fn make_world(delta: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            elapsed: 0.0,
            delta,
            time_scale: 1.0,
            frame_count: 0,
        });
        world
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(crocodile_mouth_system);
        schedule.run(world);
    }

    #[test]
    fn test_idle_toggles_after_wait() {
        let mut world = make_world(0.5);
        let entity = world
            .spawn((Crocodile::new(0.4), Sprite::centered("croc_closed", 96.0, 72.0)))
            .id();

        tick(&mut world);

        let crocodile = world.get::<Crocodile>(entity).unwrap();
        assert_eq!(crocodile.mouth, Mouth::Open);
        assert!(crocodile.countdown >= IDLE_WAIT_MIN - 0.001);
        assert!(crocodile.countdown <= IDLE_WAIT_MAX + 0.001);
        let sprite = world.get::<Sprite>(entity).unwrap();
        assert_eq!(sprite.tex_key, "croc_open");
    }

    #[test]
    fn test_chomp_script_runs_before_idle() {
        let mut world = make_world(0.2);
        let mut crocodile = Crocodile::new(3.0);
        crocodile.chomp(0.15);
        let entity = world
            .spawn((crocodile, Sprite::centered("croc_closed", 96.0, 72.0)))
            .id();

        // first tick consumes the scripted open step
        tick(&mut world);
        assert_eq!(world.get::<Crocodile>(entity).unwrap().mouth, Mouth::Open);

        // second tick consumes the scripted close step
        tick(&mut world);
        let crocodile = world.get::<Crocodile>(entity).unwrap();
        assert_eq!(crocodile.mouth, Mouth::Closed);
        assert!(crocodile.script.is_empty());
    }

    #[test]
    fn test_no_change_before_countdown() {
        let mut world = make_world(0.1);
        let entity = world
            .spawn((Crocodile::new(5.0), Sprite::centered("croc_closed", 96.0, 72.0)))
            .id();

        tick(&mut world);

        let crocodile = world.get::<Crocodile>(entity).unwrap();
        assert_eq!(crocodile.mouth, Mouth::Closed);
    }
}
