//! High-level game setup and level construction.
//!
//! The state observer runs these systems as enter/exit hooks:
//! - [`setup`] (enter `Setup`) – load assets, start the music, read the vine
//!   layout, then request `Playing`.
//! - [`enter_play`] (enter `Playing`) – build a level: scenery, prize, vine
//!   chains, crocodile, UI buttons, trail emitter.
//! - [`clean_level`] (exit `LevelEnding`) – despawn everything that is not
//!   [`Persistent`].
//! - [`quit_game`] (enter `Quitting`) – stop the music, raise the quit flag.
//!
//! [`update`] runs every frame while playing and watches the prize against
//! the lower screen bound.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::boxcollider::{BoxCollider, category};
use crate::components::button::{ButtonAction, UiButton};
use crate::components::crocodile::Crocodile;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::pinjoint::PinJoint;
use crate::components::prize::{Prize, PrizeKind};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::tethers::Tethers;
use crate::components::tint::Tint;
use crate::components::trailemitter::TrailEmitter;
use crate::components::vine::{VineAnchor, VineSegment};
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::events::levelend::{LevelEndEvent, LevelOutcome};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::prizechoice::PrizeChoice;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::vinelayout::VineLayout;
use crate::resources::worldsignals::WorldSignals;

/// Draw-order layers.
pub mod layer {
    pub const BACKGROUND: i32 = 0;
    pub const CROCODILE: i32 = 1;
    pub const VINE: i32 = 1;
    pub const PRIZE: i32 = 2;
    pub const FOREGROUND: i32 = 3;
}

pub const VINE_SEGMENT_WIDTH: f32 = 8.0;
pub const VINE_SEGMENT_HEIGHT: f32 = 20.0;
pub const VINE_HOLDER_SIZE: f32 = 16.0;
pub const PRIZE_SIZE: f32 = 36.0;
pub const CROC_WIDTH: f32 = 96.0;
pub const CROC_HEIGHT: f32 = 72.0;

/// Fraction of the screen height covered by the water strip.
pub const WATER_HEIGHT_FRAC: f32 = 0.2139;
/// Prize spawn point as fractions of the screen size.
pub const PRIZE_START_FRAC: (f32, f32) = (0.5, 0.3);
/// Crocodile y position as a fraction of the screen height.
pub const CROC_Y_FRAC: f32 = 0.688;
/// Base damping on vine segments; `vine_damping` is added per rebuilt level.
pub const SEGMENT_DAMPING: f32 = 2.0;
/// Mouth-step delay of the eat animation.
pub const NOM_DELAY: f32 = 0.15;
/// How fast the eaten prize disappears.
pub const PRIZE_EAT_FADE_SECS: f32 = 0.08;

const TEXTURE_FILES: &[(&str, &str)] = &[
    ("background", "./assets/textures/background.png"),
    ("water", "./assets/textures/water.png"),
    ("vine", "./assets/textures/vine.png"),
    ("vine_holder", "./assets/textures/vine_holder.png"),
    ("croc_open", "./assets/textures/croc_mouth_open.png"),
    ("croc_closed", "./assets/textures/croc_mouth_closed.png"),
    ("pineapple", "./assets/textures/pineapple.png"),
    ("candy", "./assets/textures/candy.png"),
    ("chocolate", "./assets/textures/chocolate.png"),
    ("droplet", "./assets/textures/droplet.png"),
];

const FX_FILES: &[(&str, &str)] = &[
    ("slice", "./assets/audio/slice.wav"),
    ("splash", "./assets/audio/splash.wav"),
    ("nom_nom", "./assets/audio/nom_nom.wav"),
];

/// Load assets and request `Playing`. Runs once, on entering `Setup`.
///
/// Every load failure is logged and skipped: a missing texture renders as
/// nothing, a missing sound stays silent, a missing layout yields zero vines.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    config: Res<GameConfig>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut textures: NonSendMut<TextureStore>,
    mut fonts: NonSendMut<FontStore>,
    mut audio: MessageWriter<AudioCmd>,
) {
    // identity camera: world coordinates are screen coordinates
    commands.insert_resource(Camera2DRes(Camera2D {
        target: Vector2::zero(),
        offset: Vector2::zero(),
        rotation: 0.0,
        zoom: 1.0,
    }));

    for (key, path) in TEXTURE_FILES {
        match rl.load_texture(&th, path) {
            Ok(texture) => textures.insert(*key, texture),
            Err(e) => warn!("Texture {:?} not loaded ({}); skipping", path, e),
        }
    }

    match rl.load_font(&th, "./assets/fonts/button.ttf") {
        Ok(font) => fonts.add("button", font),
        Err(e) => warn!("Button font not loaded ({}); using the default font", e),
    }

    audio.write(AudioCmd::LoadMusic {
        id: "jungle_theme".into(),
        path: "./assets/audio/jungle_theme.ogg".into(),
    });
    for (id, path) in FX_FILES {
        audio.write(AudioCmd::LoadFx {
            id: (*id).into(),
            path: (*path).into(),
        });
    }
    audio.write(AudioCmd::PlayMusic {
        id: "jungle_theme".into(),
        looped: true,
    });

    commands.insert_resource(VineLayout::load_or_empty(&config.vines_file));

    next_state.set(GameStates::Playing);
    info!("Setup done, next state set to Playing");
}

/// Build one level. Runs on every transition into `Playing`.
pub fn enter_play(
    mut commands: Commands,
    layout: Res<VineLayout>,
    screen: Res<ScreenSize>,
    choice: Res<PrizeChoice>,
    mut signals: ResMut<WorldSignals>,
    mut rng: Local<Rng>,
) {
    let w = screen.w as f32;
    let h = screen.h as f32;

    spawn_scenery(&mut commands, w, h);

    let prize_pos = Vector2 {
        x: w * PRIZE_START_FRAC.0,
        y: h * PRIZE_START_FRAC.1,
    };

    // chains first: the prize is tethered to the last segment of every chain
    let extra_damping = signals.get_scalar("vine_damping").unwrap_or(0.0);
    let mut tethers = Tethers::default();
    for (i, spec) in layout.vines.iter().enumerate() {
        let chain = i as u32;
        let anchor = Vector2 {
            x: spec.rel_anchor[0] * w,
            y: spec.rel_anchor[1] * h,
        };
        if let Some((last, last_pos)) =
            spawn_vine(&mut commands, chain, anchor, spec.length, extra_damping)
        {
            let rest_length = (prize_pos - last_pos).length();
            tethers.attach(chain, last, rest_length);
        }
    }

    commands.spawn((
        Group::new("prize"),
        Prize,
        MapPosition::new(prize_pos.x, prize_pos.y),
        ZIndex(layer::PRIZE),
        Sprite::centered(choice.kind.tex_key(), PRIZE_SIZE, PRIZE_SIZE),
        RigidBody::with_gravity().with_damping(0.2),
        BoxCollider::centered(PRIZE_SIZE, PRIZE_SIZE, category::PRIZE),
        tethers,
        Tint::default(),
    ));

    spawn_crocodile(&mut commands, w, h, &mut rng);
    spawn_buttons(&mut commands, w, h);

    commands.spawn((
        Group::new("trail"),
        TrailEmitter::default(),
        MapPosition::new(0.0, 0.0),
    ));

    let level = signals.get_integer("level").unwrap_or(0) + 1;
    signals.set_integer("level", level);
    info!("Level {} ready ({} vines)", level, layout.vines.len());
}

fn spawn_scenery(commands: &mut Commands, w: f32, h: f32) {
    commands.spawn((
        Group::new("scenery"),
        MapPosition::new(0.0, 0.0),
        ZIndex(layer::BACKGROUND),
        Sprite::new("background", w, h),
    ));
    commands.spawn((
        Group::new("scenery"),
        MapPosition::new(0.0, h * (1.0 - WATER_HEIGHT_FRAC)),
        ZIndex(layer::FOREGROUND),
        Sprite::new("water", w, h * WATER_HEIGHT_FRAC),
    ));
}

/// Spawn one vine chain: a static holder plus `length` jointed segments
/// hanging straight down, each one segment-height below the previous.
///
/// Returns the last segment and its spawn position, or `None` for an empty
/// chain.
pub fn spawn_vine(
    commands: &mut Commands,
    chain: u32,
    anchor: Vector2,
    length: u32,
    extra_damping: f32,
) -> Option<(Entity, Vector2)> {
    let holder = commands
        .spawn((
            Group::new("vine"),
            VineAnchor { chain },
            MapPosition::new(anchor.x, anchor.y),
            ZIndex(layer::VINE),
            Sprite::centered("vine_holder", VINE_HOLDER_SIZE, VINE_HOLDER_SIZE),
            BoxCollider::centered(VINE_HOLDER_SIZE, VINE_HOLDER_SIZE, category::VINE_HOLDER),
        ))
        .id();

    let mut parent = holder;
    let mut last = None;
    for index in 0..length {
        let pos = Vector2 {
            x: anchor.x,
            y: anchor.y + VINE_SEGMENT_HEIGHT * (index + 1) as f32,
        };
        let segment = commands
            .spawn((
                Group::new("vine"),
                VineSegment { chain, index },
                MapPosition::new(pos.x, pos.y),
                ZIndex(layer::VINE),
                Sprite::centered("vine", VINE_SEGMENT_WIDTH, VINE_SEGMENT_HEIGHT),
                RigidBody::with_gravity().with_damping(SEGMENT_DAMPING + extra_damping),
                BoxCollider::centered(VINE_SEGMENT_WIDTH, VINE_SEGMENT_HEIGHT, category::VINE),
                PinJoint::new(parent, VINE_SEGMENT_HEIGHT),
                Tint::default(),
            ))
            .id();
        parent = segment;
        last = Some((segment, pos));
    }
    last
}

fn spawn_crocodile(commands: &mut Commands, w: f32, h: f32, rng: &mut Rng) {
    let x_frac = 0.3 + rng.f32() * 0.4;
    let first_wait = 2.0 + rng.f32() * 2.0;
    commands.spawn((
        Group::new("crocodile"),
        Crocodile::new(first_wait),
        MapPosition::new(w * x_frac, h * CROC_Y_FRAC),
        ZIndex(layer::CROCODILE),
        Sprite::centered("croc_closed", CROC_WIDTH, CROC_HEIGHT),
        // trigger region over the open mouth, upper half of the sprite
        BoxCollider::new(CROC_WIDTH * 0.5, CROC_HEIGHT * 0.4, category::CROCODILE)
            .with_offset(Vector2 {
                x: -CROC_WIDTH * 0.25,
                y: -CROC_HEIGHT * 0.5,
            })
            .with_contact_mask(category::PRIZE),
    ));
}

fn spawn_buttons(commands: &mut Commands, w: f32, h: f32) {
    let button_w = 150.0;
    let button_h = 44.0;
    let spacing = 10.0;
    let y = h - button_h - 12.0;

    let prizes = [PrizeKind::Pineapple, PrizeKind::Candy, PrizeKind::Chocolate];
    let row_w = 3.0 * button_w + 2.0 * spacing;
    let mut x = (w - row_w) * 0.5;
    for kind in prizes {
        commands.spawn((
            Group::new("ui"),
            UiButton::new(
                Rectangle {
                    x,
                    y,
                    width: button_w,
                    height: button_h,
                },
                kind.label(),
                ButtonAction::SelectPrize(kind),
            )
            .with_fill(Color::new(30, 30, 160, 220)),
        ));
        x += button_w + spacing;
    }

    commands.spawn((
        Group::new("ui"),
        UiButton::new(
            Rectangle {
                x: (w - button_w) * 0.5,
                y: y - button_h - spacing,
                width: button_w,
                height: button_h,
            },
            "New game",
            ButtonAction::NewGame,
        ),
    ));
}

/// Per-frame check while playing: the prize dropping past the bottom of the
/// screen ends the level. The level-end observer handles the guard, so firing
/// on consecutive frames is harmless.
pub fn update(
    screen: Res<ScreenSize>,
    prizes: Query<&MapPosition, With<Prize>>,
    mut commands: Commands,
) {
    let lower_bound = screen.h as f32;
    for position in prizes.iter() {
        if position.pos.y >= lower_bound {
            commands.trigger(LevelEndEvent {
                outcome: LevelOutcome::Splashed,
            });
        }
    }
}

/// Despawn every entity that is not [`Persistent`]. Runs on exiting
/// `LevelEnding`, just before the next level is built.
pub fn clean_level(mut commands: Commands, query: Query<Entity, Without<Persistent>>) {
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
}

/// Stop the music and raise the quit flag; the main loop exits on it.
pub fn quit_game(mut signals: ResMut<WorldSignals>, mut audio: MessageWriter<AudioCmd>) {
    audio.write(AudioCmd::StopMusic {
        id: "jungle_theme".into(),
    });
    signals.set_flag("quit_game");
}
