//! Vinesnip main entry point.
//!
//! A small "cut the vine" physics toy written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! A crocodile waits under a prize that hangs from cuttable vine chains.
//! Dragging the pointer across a vine severs its chain; the prize falls until
//! the crocodile eats it or it splashes into the water, and a fresh level is
//! built after a short delay.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (sprites, vines, joints, colliders, etc.)
//! - [`events`] – event types and observers (collision, level end, timers)
//! - [`game`] – level construction and lifecycle hooks
//! - [`resources`] – ECS resources (config, layout, pointer state, stores)
//! - [`systems`] – ECS systems (movement, rope constraints, cutting, render)
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, the ECS world, and the audio thread
//! 2. Register lifecycle hooks and observers, then enter the `Setup` state
//! 3. Run the schedule each frame: input, physics, cutting, level flow, render
//! 4. Shut the audio thread down on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::collision::observe_prize_contact;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::levelend::observe_level_end;
use crate::events::timer::observe_timer;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::pointer::PointerState;
use crate::resources::prizechoice::PrizeChoice;
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::buttons::button_click_system;
use crate::systems::collision::collision_detector;
use crate::systems::crocodile::crocodile_mouth_system;
use crate::systems::fadeout::fade_out_system;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::input::keyboard_system;
use crate::systems::joints::{solve_pin_joints, solve_tethers};
use crate::systems::movement::movement;
use crate::systems::pointer::update_pointer_state;
use crate::systems::render::render_system;
use crate::systems::slicing::vine_cut_system;
use crate::systems::time::update_world_time;
use crate::systems::timer::update_timers;
use crate::systems::trail::trail_emitter_system;
use crate::systems::ttl::ttl_system;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Vinesnip, a vine-cutting toy
#[derive(Parser)]
#[command(version, about = "Feed the crocodile: cut the vines, save the prize from the water.")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the vine layout JSON file.
    #[arg(long, value_name = "PATH")]
    vines: Option<PathBuf>,

    /// Start with debug overlays enabled.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if let Some(vines) = cli.vines {
        config.vines_file = vines;
    }

    let window_width = config.window_width;
    let window_height = config.window_height;

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Vinesnip")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC-to-close; the keyboard system routes ESC through Quitting
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(ScreenSize {
        w: window_width as i32,
        h: window_height as i32,
    });
    world.insert_resource(PointerState::default());
    world.insert_resource(PrizeChoice::default());
    world.insert_resource(config);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    // Init audio thread and its message mailboxes. Must go before setup!!
    setup_audio(&mut world);

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(TextureStore::new());
    world.insert_non_send_resource(FontStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // --------------- Lifecycle hooks ---------------
    // NOTE: registered systems are stored as entities; mark them Persistent so
    // they survive level teardown.
    let mut systems_store = SystemsStore::new();
    for (name, id) in [
        ("setup", world.register_system(game::setup)),
        ("enter_play", world.register_system(game::enter_play)),
        ("clean_level", world.register_system(game::clean_level)),
        ("quit_game", world.register_system(game::quit_game)),
    ] {
        world.entity_mut(id.entity()).insert(Persistent);
        systems_store.insert(name, id);
    }
    world.insert_resource(systems_store);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(observe_prize_contact), Persistent));
    world.spawn((Observer::new(observe_level_end), Persistent));
    world.spawn((Observer::new(observe_timer), Persistent));
    // Ensure observers are registered before any system can trigger events.
    world.flush();

    // Enter the Setup state immediately
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {});

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_pointer_state);
    update.add_systems(keyboard_system);
    update.add_systems(check_pending_state);
    update.add_systems(
        // audio systems must be together
        (
            // advance AudioCmd messages and forward them to the audio thread
            update_bevy_audio_cmds,
            forward_audio_cmds,
            // then pull audio thread replies and advance them
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    update.add_systems(button_click_system.after(update_pointer_state));
    update.add_systems(movement);
    update.add_systems(solve_pin_joints.after(movement));
    update.add_systems(solve_tethers.after(solve_pin_joints));
    update.add_systems(
        vine_cut_system
            .run_if(state_is_playing)
            .after(update_pointer_state)
            .after(solve_tethers),
    );
    update.add_systems(collision_detector.after(solve_tethers));
    update.add_systems(
        (game::update)
            .run_if(state_is_playing)
            .after(check_pending_state)
            .after(collision_detector),
    );
    update.add_systems(crocodile_mouth_system.after(vine_cut_system));
    update.add_systems(trail_emitter_system.after(update_pointer_state));
    update.add_systems(update_timers);
    update.add_systems(fade_out_system);
    update.add_systems(ttl_system.after(fade_out_system));
    update.add_systems(render_system.after(game::update).after(crocodile_mouth_system));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag("quit_game")
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // clear changed components for next frame
    }
    shutdown_audio(&mut world);
}
