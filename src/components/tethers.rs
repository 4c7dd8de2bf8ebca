//! Prize-side attachment to the vine chains.
//!
//! The prize carries one [`TetherLink`] per chain, pointing at that chain's
//! last segment. Cutting a chain releases its link; when no links remain the
//! prize falls freely.

use bevy_ecs::prelude::{Component, Entity};

/// One rope connection from the prize to a chain's last segment.
#[derive(Debug, Clone, Copy)]
pub struct TetherLink {
    pub chain: u32,
    pub segment: Entity,
    pub rest_length: f32,
}

#[derive(Component, Debug, Clone, Default)]
pub struct Tethers {
    pub links: Vec<TetherLink>,
}

impl Tethers {
    pub fn attach(&mut self, chain: u32, segment: Entity, rest_length: f32) {
        self.links.push(TetherLink {
            chain,
            segment,
            rest_length,
        });
    }

    /// Drop the link belonging to a cut chain.
    pub fn release_chain(&mut self, chain: u32) {
        self.links.retain(|link| link.chain != chain);
    }

    /// True when nothing holds the prize any more.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_free(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    #[test]
    fn test_attach_and_release() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        let mut tethers = Tethers::default();
        assert!(tethers.is_free());

        tethers.attach(0, a, 30.0);
        tethers.attach(1, b, 45.0);
        assert_eq!(tethers.links.len(), 2);
        assert!(!tethers.is_free());

        tethers.release_chain(0);
        assert_eq!(tethers.links.len(), 1);
        assert_eq!(tethers.links[0].chain, 1);

        tethers.release_chain(1);
        assert!(tethers.is_free());
    }

    #[test]
    fn test_release_unknown_chain_is_noop() {
        let mut world = World::new();
        let a = world.spawn_empty().id();

        let mut tethers = Tethers::default();
        tethers.attach(3, a, 10.0);
        tethers.release_chain(7);
        assert_eq!(tethers.links.len(), 1);
    }
}
