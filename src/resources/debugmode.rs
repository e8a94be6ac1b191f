//! Debug mode marker resource.
//!
//! The presence of [`DebugMode`] in the world enables the debug overlay
//! (frame stats, collider outlines, pointer readout). Toggled by the
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)
//! observer.

use bevy_ecs::prelude::Resource;

/// Presence-only resource: inserted = debug overlay on.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;
