//! Pointer trail particles.
//!
//! The trail emitter entity follows the pointer; while a drag gesture is in
//! progress it sprays small droplet sprites that scatter, fade, and expire.
//! Emission supports catch-up when a frame is long.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::components::fadeout::FadeOut;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::trailemitter::TrailEmitter;
use crate::components::ttl::Ttl;
use crate::components::zindex::ZIndex;
use crate::game::layer;
use crate::resources::pointer::PointerState;
use crate::resources::worldtime::WorldTime;

const PARTICLE_SIZE: f32 = 6.0;

/// Sample a random f32 in the range [min, max].
#[inline]
fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    min + rng.f32() * range
}

pub fn trail_emitter_system(
    time: Res<WorldTime>,
    pointer: Res<PointerState>,
    mut emitters: Query<(&mut TrailEmitter, &mut MapPosition)>,
    mut commands: Commands,
    mut rng: Local<Rng>,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }

    for (mut emitter, mut position) in emitters.iter_mut() {
        position.pos = pointer.position;
        emitter.active = pointer.dragging;
        if !emitter.active || emitter.emissions_per_second <= 0.0 {
            emitter.time_since_emit = 0.0;
            continue;
        }

        let period = 1.0 / emitter.emissions_per_second;
        emitter.time_since_emit += dt;

        while emitter.time_since_emit >= period {
            emitter.time_since_emit -= period;
            for _ in 0..emitter.particles_per_emission {
                spawn_particle(&mut commands, &emitter, position.pos, &mut rng);
            }
        }
    }
}

fn spawn_particle(commands: &mut Commands, emitter: &TrailEmitter, at: Vector2, rng: &mut Rng) {
    let (arc_min, arc_max) = emitter.arc_degrees;
    let (speed_min, speed_max) = emitter.speed_range;
    let (ttl_min, ttl_max) = emitter.ttl_range;

    // 0 degrees points up, angles increase clockwise, y+ is down
    let theta = random_f32_range(rng, arc_min, arc_max).to_radians();
    let speed = random_f32_range(rng, speed_min, speed_max);
    let velocity = Vector2 {
        x: theta.sin() * speed,
        y: -theta.cos() * speed,
    };
    let lifetime = random_f32_range(rng, ttl_min, ttl_max);

    let mut body = RigidBody::new();
    body.velocity = velocity;

    commands.spawn((
        Group::new("trail"),
        MapPosition::new(at.x, at.y),
        ZIndex(layer::FOREGROUND),
        Sprite::centered(emitter.tex_key.clone(), PARTICLE_SIZE, PARTICLE_SIZE),
        body,
        Ttl::new(lifetime),
        FadeOut::new(lifetime),
    ));
}
