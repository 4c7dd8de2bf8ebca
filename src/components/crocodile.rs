//! Crocodile mouth state machine.
//!
//! The crocodile idles by toggling its mouth open/closed on a random wait.
//! Game events push scripted sequences on top of the idle loop: a vine cut
//! snaps the mouth open, eating the prize runs a close/open/close chomp.
//! See [`crate::systems::crocodile::crocodile_mouth_system`].

use bevy_ecs::prelude::Component;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mouth {
    Open,
    Closed,
}

impl Mouth {
    pub fn tex_key(self) -> &'static str {
        match self {
            Mouth::Open => "croc_open",
            Mouth::Closed => "croc_closed",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mouth::Open => Mouth::Closed,
            Mouth::Closed => Mouth::Open,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Crocodile {
    pub mouth: Mouth,
    /// Seconds until the next mouth change.
    pub countdown: f32,
    /// Scripted (mouth, hold) steps; the idle toggle resumes when empty.
    pub script: VecDeque<(Mouth, f32)>,
}

impl Crocodile {
    pub fn new(first_wait: f32) -> Self {
        Crocodile {
            mouth: Mouth::Closed,
            countdown: first_wait,
            script: VecDeque::new(),
        }
    }

    /// Immediate reaction to a cut vine: mouth open, idle loop restarts.
    pub fn snap_open(&mut self, hold: f32) {
        self.script.clear();
        self.mouth = Mouth::Open;
        self.countdown = hold;
    }

    /// Eat animation: snap shut now, reopen after `delay`, close again.
    pub fn chomp(&mut self, delay: f32) {
        self.script.clear();
        self.mouth = Mouth::Closed;
        self.countdown = delay;
        self.script.push_back((Mouth::Open, delay));
        self.script.push_back((Mouth::Closed, delay));
    }
}
