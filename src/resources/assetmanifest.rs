//! Manifest of spawned scene assets.
//!
//! A monotonically growing set of the identities spawned this session,
//! used for membership checks (was this prop ever created?). Entries are
//! never removed, even when the underlying entity despawns.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

use crate::components::sign::SignRole;
use crate::components::uikind::PropKind;

/// Identity of a spawned scene asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetId {
    Prop(PropKind),
    Sign(SignRole),
}

/// Set of everything spawned so far; grows monotonically.
#[derive(Resource, Default)]
pub struct AssetManifest {
    spawned: FxHashSet<AssetId>,
}

impl AssetManifest {
    pub fn add(&mut self, id: AssetId) {
        self.spawned.insert(id);
    }

    pub fn contains(&self, id: AssetId) -> bool {
        self.spawned.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.spawned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty()
    }
}
