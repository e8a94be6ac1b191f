use bevy_ecs::prelude::Component;

/// Which instruction sign an entity represents.
///
/// The lifecycle of each sign is tracked in
/// [`SignCoordinator`](crate::resources::signs::SignCoordinator); this
/// component only marks the spawned entity so the pointer router and the
/// renderer can recognize it.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignRole {
    /// Control instructions shown when the scene starts.
    Primary,
    /// Scroll instructions shown once the user starts interacting.
    Secondary,
}

impl SignRole {
    pub fn label(&self) -> &'static str {
        match self {
            SignRole::Primary => "controls",
            SignRole::Secondary => "scroll",
        }
    }
}
