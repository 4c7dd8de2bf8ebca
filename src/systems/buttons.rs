//! UI button clicks.
//!
//! A press inside a button's rectangle performs its action: prize buttons set
//! the prize for the next level, and every button requests a restart through
//! [`LevelEndEvent`](crate::events::levelend::LevelEndEvent), so the same
//! guard and transition path applies as for eaten/splashed prizes.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::button::{ButtonAction, UiButton};
use crate::events::levelend::{LevelEndEvent, LevelOutcome};
use crate::resources::pointer::PointerState;
use crate::resources::prizechoice::PrizeChoice;

pub fn button_click_system(
    pointer: Res<PointerState>,
    buttons: Query<&UiButton>,
    mut choice: ResMut<PrizeChoice>,
    mut commands: Commands,
) {
    if !pointer.just_pressed {
        return;
    }
    for button in buttons.iter() {
        if !button.contains(pointer.position) {
            continue;
        }
        match button.action {
            ButtonAction::SelectPrize(kind) => {
                info!("Next prize: {:?}", kind);
                choice.kind = kind;
            }
            ButtonAction::NewGame => {}
        }
        commands.trigger(LevelEndEvent {
            outcome: LevelOutcome::Restart,
        });
        break;
    }
}
