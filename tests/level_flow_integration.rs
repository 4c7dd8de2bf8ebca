//! Level lifecycle integration tests: one scheduled transition per level end,
//! teardown and rebuild through the state hooks, button restarts.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use vinesnip::components::button::{ButtonAction, UiButton};
use vinesnip::components::crocodile::Crocodile;
use vinesnip::components::fadeout::FadeOut;
use vinesnip::components::mapposition::MapPosition;
use vinesnip::components::prize::{Prize, PrizeKind};
use vinesnip::components::rigidbody::RigidBody;
use vinesnip::components::tethers::Tethers;
use vinesnip::components::timer::Timer;
use vinesnip::components::vine::VineSegment;
use vinesnip::events::audio::AudioCmd;
use vinesnip::events::collision::{CollisionEvent, observe_prize_contact};
use vinesnip::events::gamestate::observe_gamestate_change_event;
use vinesnip::events::levelend::{LevelEndEvent, LevelOutcome, observe_level_end};
use vinesnip::events::timer::observe_timer;
use vinesnip::game;
use vinesnip::resources::gameconfig::GameConfig;
use vinesnip::resources::gamestate::{GameState, GameStates, NextGameState};
use vinesnip::resources::pointer::PointerState;
use vinesnip::resources::prizechoice::PrizeChoice;
use vinesnip::resources::screensize::ScreenSize;
use vinesnip::resources::systemsstore::SystemsStore;
use vinesnip::resources::vinelayout::VineLayout;
use vinesnip::resources::worldsignals::WorldSignals;
use vinesnip::resources::worldtime::WorldTime;
use vinesnip::systems::buttons::button_click_system;
use vinesnip::systems::gamestate::{check_pending_state, state_is_playing};
use vinesnip::systems::timer::update_timers;

/// Headless world with the full level lifecycle wired: observers, state
/// hooks, and a one-chain layout.
fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    world.insert_resource(GameConfig::new());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(PrizeChoice::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.init_resource::<Messages<AudioCmd>>();
    world.insert_resource(
        VineLayout::from_json(r#"[{ "length": 3, "rel_anchor": [0.5, 0.1] }]"#).expect("layout"),
    );

    let mut systems_store = SystemsStore::new();
    for (name, id) in [
        ("enter_play", world.register_system(game::enter_play)),
        ("clean_level", world.register_system(game::clean_level)),
    ] {
        world
            .entity_mut(id.entity())
            .insert(vinesnip::components::persistent::Persistent);
        systems_store.insert(name, id);
    }
    world.insert_resource(systems_store);

    world.spawn((
        Observer::new(observe_gamestate_change_event),
        vinesnip::components::persistent::Persistent,
    ));
    world.spawn((
        Observer::new(observe_level_end),
        vinesnip::components::persistent::Persistent,
    ));
    world.spawn((
        Observer::new(observe_timer),
        vinesnip::components::persistent::Persistent,
    ));
    world.spawn((
        Observer::new(observe_prize_contact),
        vinesnip::components::persistent::Persistent,
    ));
    world.flush();

    // enter the first level directly
    world.resource_mut::<NextGameState>().set(GameStates::Playing);
    let mut schedule = Schedule::default();
    schedule.add_systems(check_pending_state);
    schedule.run(&mut world);
    world
}

fn current_state(world: &World) -> GameStates {
    world.resource::<GameState>().get().clone()
}

fn timer_count(world: &mut World) -> usize {
    world.query::<&Timer>().iter(world).count()
}

fn prize_entity(world: &mut World) -> Entity {
    let mut query = world.query_filtered::<Entity, With<Prize>>();
    query.single(world).expect("exactly one prize")
}

fn tick_water_check(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((game::update).run_if(state_is_playing));
    schedule.run(world);
}

#[test]
fn prize_below_lower_bound_schedules_exactly_one_transition() {
    let mut world = make_world();
    assert_eq!(current_state(&world), GameStates::Playing);

    let prize = prize_entity(&mut world);
    world.get_mut::<MapPosition>(prize).unwrap().pos = Vector2 { x: 400.0, y: 650.0 };

    tick_water_check(&mut world);
    assert_eq!(current_state(&world), GameStates::LevelEnding);
    assert_eq!(timer_count(&mut world), 1);

    // the prize is still past the bound next frame; no second timer appears
    tick_water_check(&mut world);
    assert_eq!(timer_count(&mut world), 1);

    // nor does a competing eaten event while the level is already ending
    world.trigger(LevelEndEvent {
        outcome: LevelOutcome::Eaten,
    });
    assert_eq!(timer_count(&mut world), 1);
    assert_eq!(current_state(&world), GameStates::LevelEnding);
}

#[test]
fn transition_timer_rebuilds_a_fresh_level() {
    let mut world = make_world();
    let old_prize = prize_entity(&mut world);
    world.get_mut::<MapPosition>(old_prize).unwrap().pos = Vector2 { x: 400.0, y: 650.0 };
    tick_water_check(&mut world);
    assert_eq!(current_state(&world), GameStates::LevelEnding);

    // let the transition timer fire (default delay 1.0 s)
    world.resource_mut::<WorldTime>().delta = 1.1;
    let mut schedule = Schedule::default();
    schedule.add_systems((update_timers, check_pending_state).chain());
    schedule.run(&mut world);

    assert_eq!(current_state(&world), GameStates::Playing);
    assert_eq!(timer_count(&mut world), 0);

    // the old level was torn down, a fresh one built
    assert!(world.get_entity(old_prize).is_err());
    let new_prize = prize_entity(&mut world);
    assert_ne!(new_prize, old_prize);
    assert_eq!(world.query::<&VineSegment>().iter(&world).count(), 3);
    assert_eq!(
        world.resource::<WorldSignals>().get_integer("level"),
        Some(2)
    );
}

#[test]
fn crocodile_contact_ends_the_level_with_a_chomp() {
    let mut world = make_world();
    let prize = prize_entity(&mut world);
    let crocodile = {
        let mut query = world.query_filtered::<Entity, With<Crocodile>>();
        query.single(&world).expect("exactly one crocodile")
    };

    world.trigger(CollisionEvent {
        a: crocodile,
        b: prize,
    });
    world.flush();

    assert_eq!(current_state(&world), GameStates::LevelEnding);
    assert_eq!(timer_count(&mut world), 1);

    // eat presentation: prize fades and freezes, crocodile runs its chomp
    assert!(world.get::<FadeOut>(prize).is_some());
    assert!(world.get::<RigidBody>(prize).unwrap().frozen);
    assert!(world.get::<Tethers>(prize).unwrap().is_free());
    assert!(!world.get::<Crocodile>(crocodile).unwrap().script.is_empty());
}

#[test]
fn unrelated_collision_pairs_are_ignored() {
    let mut world = make_world();
    let a = world.spawn(MapPosition::new(0.0, 0.0)).id();
    let b = world.spawn(MapPosition::new(0.0, 0.0)).id();

    world.trigger(CollisionEvent { a, b });

    assert_eq!(current_state(&world), GameStates::Playing);
    assert_eq!(timer_count(&mut world), 0);
}

#[test]
fn vine_damping_grows_with_every_transition() {
    let mut world = make_world();
    assert_eq!(
        world.resource::<WorldSignals>().get_scalar("vine_damping"),
        None
    );

    world.trigger(LevelEndEvent {
        outcome: LevelOutcome::Restart,
    });
    let damping = world
        .resource::<WorldSignals>()
        .get_scalar("vine_damping")
        .unwrap();
    assert!((damping - 0.1).abs() < 1e-6);
}

#[test]
fn prize_buttons_select_the_prize_and_restart() {
    let mut world = make_world();

    // place the pointer on the Chocolate button
    let chocolate_rect = {
        let mut query = world.query::<&UiButton>();
        query
            .iter(&world)
            .find(|button| button.action == ButtonAction::SelectPrize(PrizeKind::Chocolate))
            .expect("chocolate button")
            .rect
    };
    {
        let mut pointer = world.resource_mut::<PointerState>();
        pointer.begin(Vector2 {
            x: chocolate_rect.x + 5.0,
            y: chocolate_rect.y + 5.0,
        });
    }

    let mut schedule = Schedule::default();
    schedule.add_systems(button_click_system);
    schedule.run(&mut world);

    assert_eq!(world.resource::<PrizeChoice>().kind, PrizeKind::Chocolate);
    assert_eq!(current_state(&world), GameStates::LevelEnding);
    assert_eq!(timer_count(&mut world), 1);
}

#[test]
fn clicks_outside_every_button_do_nothing() {
    let mut world = make_world();
    {
        let mut pointer = world.resource_mut::<PointerState>();
        pointer.begin(Vector2 { x: 1.0, y: 1.0 });
    }

    let mut schedule = Schedule::default();
    schedule.add_systems(button_click_system);
    schedule.run(&mut world);

    assert_eq!(current_state(&world), GameStates::Playing);
    assert_eq!(timer_count(&mut world), 0);
}

#[test]
fn button_restart_while_level_is_ending_is_ignored() {
    let mut world = make_world();
    world.trigger(LevelEndEvent {
        outcome: LevelOutcome::Restart,
    });
    world.flush();
    assert_eq!(timer_count(&mut world), 1);

    // second restart before the timer fires: still a single transition
    world.trigger(LevelEndEvent {
        outcome: LevelOutcome::Restart,
    });
    world.flush();
    assert_eq!(timer_count(&mut world), 1);
}
