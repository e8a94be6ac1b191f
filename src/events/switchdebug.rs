//! Debug overlay toggle event and observer.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::debugmode::DebugMode;

/// Emitted when the debug key is pressed.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Toggles the presence of the [`DebugMode`] resource.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        debug!("Debug mode off");
        commands.remove_resource::<DebugMode>();
    } else {
        debug!("Debug mode on");
        commands.insert_resource(DebugMode);
    }
}
