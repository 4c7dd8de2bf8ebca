//! Level-end event and the single-transition guard.
//!
//! Exactly three things can end a level: the crocodile eats the prize, the
//! prize drops into the water, or a UI button requests a restart. All three
//! funnel through [`LevelEndEvent`] so that [`observe_level_end`] is the only
//! place that schedules a transition.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::crocodile::Crocodile;
use crate::components::fadeout::FadeOut;
use crate::components::prize::Prize;
use crate::components::rigidbody::RigidBody;
use crate::components::tethers::Tethers;
use crate::components::timer::Timer;
use crate::events::audio::AudioCmd;
use crate::game::{NOM_DELAY, PRIZE_EAT_FADE_SECS};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::worldsignals::WorldSignals;

/// How a level ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    /// The crocodile caught the prize.
    Eaten,
    /// The prize dropped past the water line.
    Splashed,
    /// A UI button asked for a fresh level.
    Restart,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct LevelEndEvent {
    pub outcome: LevelOutcome,
}

/// Observer that schedules exactly one level transition.
///
/// Contract
/// - Ignores the event unless the current state is [`GameStates::Playing`];
///   the state is flipped to [`GameStates::LevelEnding`] synchronously, so a
///   second qualifying event is dropped, even in the same frame.
/// - Plays the outcome's sound and runs the eat presentation (prize fade,
///   crocodile chomp) where it applies.
/// - Spawns one [`Timer`] with the `"next_level"` signal; its expiry requests
///   the `Playing` state, which rebuilds the level via the state hooks.
/// - Bumps the `vine_damping` signal so every rebuilt level hangs a bit
///   stiffer than the last.
pub fn observe_level_end(
    trigger: On<LevelEndEvent>,
    mut commands: Commands,
    mut game_state: ResMut<GameState>,
    config: Res<GameConfig>,
    mut signals: ResMut<WorldSignals>,
    mut audio: MessageWriter<AudioCmd>,
    mut prizes: Query<(Entity, &mut RigidBody, &mut Tethers), With<Prize>>,
    mut crocodiles: Query<&mut Crocodile>,
) {
    if !matches!(game_state.get(), GameStates::Playing) {
        debug!("Level already ending; ignoring {:?}", trigger.event().outcome);
        return;
    }
    game_state.set(GameStates::LevelEnding);

    let outcome = trigger.event().outcome;
    info!("Level over: {:?}", outcome);

    match outcome {
        LevelOutcome::Eaten => {
            audio.write(AudioCmd::PlayFx {
                id: "nom_nom".into(),
            });
            for mut crocodile in crocodiles.iter_mut() {
                crocodile.chomp(NOM_DELAY);
            }
            for (entity, mut body, mut tethers) in prizes.iter_mut() {
                body.freeze();
                tethers.links.clear();
                commands
                    .entity(entity)
                    .insert(FadeOut::new(PRIZE_EAT_FADE_SECS));
            }
        }
        LevelOutcome::Splashed => {
            audio.write(AudioCmd::PlayFx {
                id: "splash".into(),
            });
        }
        LevelOutcome::Restart => {}
    }

    // every rebuilt level hangs a bit stiffer than the last
    let damping = signals.get_scalar("vine_damping").unwrap_or(0.0);
    signals.set_scalar("vine_damping", damping + 0.1);

    commands.spawn(Timer::new(config.transition_delay, "next_level"));
}
