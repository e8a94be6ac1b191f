//! Pending asset spawn requests.
//!
//! Spawning goes through a queue drained once per frame by
//! [`crate::systems::spawn::spawn_queue_system`]: requesters (scene setup,
//! the background coordinator) enqueue plain data and never touch the
//! physics sets or the texture store directly. The initial scene comes
//! from a JSON manifest of prop placements.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use serde::Deserialize;
use std::path::Path;

use crate::components::sign::SignRole;
use crate::components::uikind::PropKind;

/// One queued spawn.
#[derive(Clone, Debug)]
pub enum SpawnRequest {
    Prop {
        kind: PropKind,
        position: Vector2,
        rotation: f32,
        physics: bool,
    },
    Sign {
        role: SignRole,
        position: Vector2,
    },
}

/// FIFO of spawn requests, drained once per frame.
#[derive(Resource, Default)]
pub struct SpawnQueue {
    requests: Vec<SpawnRequest>,
}

impl SpawnQueue {
    pub fn push(&mut self, request: SpawnRequest) {
        self.requests.push(request);
    }

    /// Take all pending requests, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<SpawnRequest> {
        std::mem::take(&mut self.requests)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

fn default_physics() -> bool {
    true
}

/// One prop placement from the scene manifest.
#[derive(Clone, Debug, Deserialize)]
pub struct PropSpec {
    pub kind: PropKind,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_physics")]
    pub physics: bool,
}

impl PropSpec {
    pub fn to_request(&self) -> SpawnRequest {
        SpawnRequest::Prop {
            kind: self.kind,
            position: Vector2 {
                x: self.x,
                y: self.y,
            },
            rotation: self.rotation,
            physics: self.physics,
        }
    }
}

/// Load the prop manifest from a JSON file.
pub fn load_prop_manifest(path: impl AsRef<Path>) -> Result<Vec<PropSpec>, String> {
    let json = std::fs::read_to_string(path.as_ref())
        .map_err(|e| format!("Failed to read prop manifest: {}", e))?;
    serde_json::from_str(&json).map_err(|e| format!("Failed to parse prop manifest: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drain_empties() {
        let mut queue = SpawnQueue::default();
        queue.push(SpawnRequest::Sign {
            role: SignRole::Primary,
            position: Vector2 { x: 0.0, y: 4.0 },
        });
        assert_eq!(queue.len(), 1);
        let drained = queue.drain();
        assert_eq!(drained.len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_prop_spec_parses_with_defaults() {
        let spec: PropSpec =
            serde_json::from_str(r#"{ "kind": "book", "x": -15.0, "y": 5.0 }"#).unwrap();
        assert_eq!(spec.kind, PropKind::Book);
        assert_eq!(spec.rotation, 0.0);
        assert!(spec.physics);
    }

    #[test]
    fn test_prop_spec_static_override() {
        let spec: PropSpec =
            serde_json::from_str(r#"{ "kind": "room", "x": 0.0, "y": 0.0, "physics": false }"#)
                .unwrap();
        assert!(!spec.physics);
        match spec.to_request() {
            SpawnRequest::Prop { kind, physics, .. } => {
                assert_eq!(kind, PropKind::Room);
                assert!(!physics);
            }
            _ => panic!("expected a prop request"),
        }
    }
}
