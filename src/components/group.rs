use bevy_ecs::prelude::Component;

/// Tag component for grouping entities by name ("scenery", "vine", "trail", ...).
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn name(&self) -> &str {
        &self.0
    }
}
