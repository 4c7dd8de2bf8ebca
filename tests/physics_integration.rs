//! Movement and rope constraint integration tests.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use vinesnip::components::mapposition::MapPosition;
use vinesnip::components::pinjoint::PinJoint;
use vinesnip::components::prize::Prize;
use vinesnip::components::rigidbody::RigidBody;
use vinesnip::components::tethers::Tethers;
use vinesnip::components::vine::VineSegment;
use vinesnip::game;
use vinesnip::resources::worldtime::WorldTime;
use vinesnip::systems::joints::{solve_pin_joints, solve_tethers};
use vinesnip::systems::movement::movement;

const EPSILON: f32 = 1e-3;

/// Allowed residual stretch after the iterative rope solve.
const ROPE_SLACK: f32 = 0.5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

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

fn tick_physics(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((movement, solve_pin_joints, solve_tethers).chain());
    schedule.run(world);
}

#[test]
fn gravity_accelerates_a_free_body() {
    let mut world = make_world(0.5);
    let entity = world
        .spawn((MapPosition::new(0.0, 0.0), RigidBody::with_gravity()))
        .id();

    tick_physics(&mut world);

    let body = world.get::<RigidBody>(entity).unwrap();
    let position = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(body.velocity.y, 490.0));
    assert!(approx_eq(position.pos.y, 245.0));
}

#[test]
fn frozen_bodies_do_not_move() {
    let mut world = make_world(0.5);
    let mut body = RigidBody::with_gravity();
    body.freeze();
    let entity = world.spawn((MapPosition::new(10.0, 10.0), body)).id();

    tick_physics(&mut world);

    let position = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(position.pos.y, 10.0));
}

#[test]
fn pin_joint_keeps_follower_within_rest_length() {
    let mut world = make_world(0.0);
    let anchor = world.spawn(MapPosition::new(0.0, 0.0)).id();
    let follower = world
        .spawn((
            MapPosition::new(0.0, 50.0),
            RigidBody::new(),
            PinJoint::new(anchor, 20.0),
        ))
        .id();

    tick_physics(&mut world);

    let position = world.get::<MapPosition>(follower).unwrap();
    assert!(approx_eq(position.pos.y, 20.0));
}

#[test]
fn chain_stays_connected_under_gravity() {
    let mut world = make_world(1.0 / 60.0);
    let spawn = world.register_system(|mut commands: Commands| {
        game::spawn_vine(&mut commands, 0, Vector2 { x: 200.0, y: 40.0 }, 4, 0.0);
    });
    world.run_system(spawn).expect("spawn chain");

    for _ in 0..30 {
        tick_physics(&mut world);
    }

    // every segment still hangs within rope reach of its joint target
    let links: Vec<(Entity, Entity, f32)> = world
        .query::<(Entity, &PinJoint)>()
        .iter(&world)
        .map(|(entity, joint)| (entity, joint.target, joint.rest_length))
        .collect();
    assert_eq!(links.len(), 4);
    for (follower, target, rest) in links {
        let fp = world.get::<MapPosition>(follower).unwrap().pos;
        let tp = world.get::<MapPosition>(target).unwrap().pos;
        let distance = (fp - tp).length();
        assert!(
            distance <= rest + ROPE_SLACK,
            "segment drifted to {} (rest {})",
            distance,
            rest
        );
    }
}

#[test]
fn tethered_prize_hangs_instead_of_falling() {
    let mut world = make_world(1.0 / 60.0);
    let segment = world.spawn(MapPosition::new(100.0, 100.0)).id();

    let mut tethers = Tethers::default();
    tethers.attach(0, segment, 30.0);
    let prize = world
        .spawn((
            Prize,
            MapPosition::new(100.0, 120.0),
            RigidBody::with_gravity(),
            tethers,
        ))
        .id();

    for _ in 0..60 {
        tick_physics(&mut world);
    }

    let position = world.get::<MapPosition>(prize).unwrap();
    let distance = (position.pos - Vector2 { x: 100.0, y: 100.0 }).length();
    assert!(distance <= 30.0 + ROPE_SLACK);
}

#[test]
fn prize_falls_freely_once_every_tether_is_gone() {
    let mut world = make_world(1.0 / 60.0);
    let segment = world.spawn(MapPosition::new(100.0, 100.0)).id();

    let mut tethers = Tethers::default();
    tethers.attach(0, segment, 30.0);
    let prize = world
        .spawn((
            Prize,
            MapPosition::new(100.0, 120.0),
            RigidBody::with_gravity(),
            tethers,
        ))
        .id();

    // the chain's last segment disappears (cut chain faded away)
    world.despawn(segment);

    for _ in 0..30 {
        tick_physics(&mut world);
    }

    let tethers = world.get::<Tethers>(prize).unwrap();
    assert!(tethers.is_free());
    let position = world.get::<MapPosition>(prize).unwrap();
    assert!(position.pos.y > 150.0, "prize should be falling");
}

#[test]
fn orphaned_joints_are_removed() {
    let mut world = make_world(1.0 / 60.0);
    let anchor = world.spawn(MapPosition::new(0.0, 0.0)).id();
    let follower = world
        .spawn((
            MapPosition::new(0.0, 10.0),
            RigidBody::with_gravity(),
            PinJoint::new(anchor, 20.0),
        ))
        .id();

    world.despawn(anchor);
    tick_physics(&mut world);

    assert!(world.get::<PinJoint>(follower).is_none());
}

#[test]
fn vine_segments_carry_their_chain_id() {
    let mut world = make_world(0.0);
    let spawn = world.register_system(|mut commands: Commands| {
        game::spawn_vine(&mut commands, 7, Vector2 { x: 50.0, y: 10.0 }, 3, 0.0);
    });
    world.run_system(spawn).expect("spawn chain");

    for segment in world.query::<&VineSegment>().iter(&world) {
        assert_eq!(segment.chain, 7);
    }
}
