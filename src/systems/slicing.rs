//! Vine cut detection.
//!
//! Each frame while a drag gesture is active, the segment from the previous
//! pointer sample to the current one is swept against every vine segment
//! collider. A hit severs the struck segment immediately and fades out the
//! rest of its chain; the prize's tether link for that chain is released at
//! the same time.
//!
//! The `cut_multiple_chains` configuration flag selects whether one gesture
//! may cut several chains or only the first one struck.

use bevy_ecs::prelude::*;
use log::debug;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::crocodile::Crocodile;
use crate::components::fadeout::FadeOut;
use crate::components::mapposition::MapPosition;
use crate::components::pinjoint::PinJoint;
use crate::components::prize::Prize;
use crate::components::tethers::Tethers;
use crate::components::ttl::Ttl;
use crate::components::vine::VineSegment;
use crate::events::audio::AudioCmd;
use crate::resources::gameconfig::GameConfig;
use crate::resources::pointer::PointerState;

/// How long the rest of a cut chain lingers while fading.
pub const VINE_FADE_SECS: f32 = 0.25;

/// How long the crocodile holds its mouth open after a cut.
const MOUTH_OPEN_HOLD: f32 = 1.0;

pub fn vine_cut_system(
    mut commands: Commands,
    mut pointer: ResMut<PointerState>,
    config: Res<GameConfig>,
    segments: Query<(Entity, &VineSegment, &MapPosition, &BoxCollider)>,
    mut prizes: Query<&mut Tethers, With<Prize>>,
    mut crocodiles: Query<&mut Crocodile>,
    mut audio: MessageWriter<AudioCmd>,
) {
    if !pointer.dragging {
        return;
    }
    let from = pointer.previous;
    let to = pointer.position;

    // chains crossed by this frame's sweep, first struck segment per chain
    let mut struck: SmallVec<[(u32, Entity); 4]> = SmallVec::new();
    for (entity, segment, position, collider) in segments.iter() {
        if struck.iter().any(|(chain, _)| *chain == segment.chain) {
            continue;
        }
        if collider.segment_hits(position.pos, from, to) {
            struck.push((segment.chain, entity));
        }
    }
    if struck.is_empty() {
        return;
    }

    let mut cut_any = false;
    for &(chain, struck_entity) in struck.iter() {
        if !config.cut_multiple_chains && (pointer.chains_cut || cut_any) {
            break;
        }
        debug!("Chain {} cut", chain);

        // snip the struck segment right away, fade out the rest of the chain
        commands.entity(struck_entity).despawn();
        for (entity, segment, _, _) in segments.iter() {
            if segment.chain != chain || entity == struck_entity {
                continue;
            }
            commands
                .entity(entity)
                .remove::<PinJoint>()
                .insert((FadeOut::new(VINE_FADE_SECS), Ttl::new(VINE_FADE_SECS)));
        }
        for mut tethers in prizes.iter_mut() {
            tethers.release_chain(chain);
        }
        cut_any = true;
    }

    if cut_any {
        pointer.chains_cut = true;
        audio.write(AudioCmd::PlayFx { id: "slice".into() });
        for mut crocodile in crocodiles.iter_mut() {
            crocodile.snap_open(MOUTH_OPEN_HOLD);
        }
    }
}
