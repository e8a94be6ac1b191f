//! Input systems.
//!
//! - [`update_input_state`] polls raylib each frame, refreshes
//!   [`PointerState`](crate::resources::pointer::PointerState) in all three
//!   coordinate spaces, and emits button-edge messages for the router.
//! - [`diagnostic_keys_system`] handles the error overlay's retry/continue
//!   keys.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::pointer::{PointerEdge, PointerMessage};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::diagnostics::Diagnostics;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::physics::PhysicsPause;
use crate::resources::pointer::PointerState;
use crate::resources::screensize::ScreenSize;
use crate::resources::uicamera::UiCamera;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

/// Advance the pointer message buffer (drops messages older than two
/// frames). Runs before the input poll writes this frame's edges.
pub fn update_pointer_messages(
    mut messages: ResMut<bevy_ecs::message::Messages<PointerMessage>>,
) {
    messages.update();
}

/// Poll raylib for pointer and keyboard input.
pub fn update_input_state(
    mut pointer: ResMut<PointerState>,
    screen: Res<ScreenSize>,
    ui: Res<UiCamera>,
    camera: Res<Camera2DRes>,
    rl: NonSend<raylib::RaylibHandle>,
    mut pointer_writer: MessageWriter<PointerMessage>,
    mut signals: ResMut<WorldSignals>,
    mut pause: ResMut<PhysicsPause>,
    mut commands: Commands,
) {
    let mouse = rl.get_mouse_position();
    pointer.screen = mouse;
    pointer.plane = ui.pixels_to_plane(mouse, &screen);
    pointer.world = camera.screen_to_world(mouse, &screen);
    pointer.left_down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        pointer_writer.write(PointerMessage {
            edge: PointerEdge::Down,
            plane: pointer.plane,
            world: pointer.world,
        });
    }
    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        pointer_writer.write(PointerMessage {
            edge: PointerEdge::Up,
            plane: pointer.plane,
            world: pointer.world,
        });
    }

    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        commands.trigger(SwitchDebugEvent {});
    }
    if rl.is_key_pressed(KeyboardKey::KEY_P) {
        pause.toggle();
    }
    if rl.is_key_pressed(KeyboardKey::KEY_Q)
        && (rl.is_key_down(KeyboardKey::KEY_LEFT_CONTROL)
            || rl.is_key_down(KeyboardKey::KEY_RIGHT_CONTROL))
    {
        signals.set_flag("quit_game");
    }
}

/// Retry / continue key handling while the error overlay is up.
pub fn diagnostic_keys_system(
    rl: NonSend<raylib::RaylibHandle>,
    time: Res<WorldTime>,
    mut diagnostics: ResMut<Diagnostics>,
    mut next_state: ResMut<NextGameState>,
) {
    if diagnostics.overlay().is_none() {
        return;
    }
    if rl.is_key_pressed(KeyboardKey::KEY_R) {
        diagnostics.retry(time.elapsed as f64);
        next_state.set(GameStates::Setup);
    } else if rl.is_key_pressed(KeyboardKey::KEY_C) {
        diagnostics.continue_degraded();
    }
}

/// Fire the init watchdog off the simulation clock.
pub fn diagnostics_watchdog_system(time: Res<WorldTime>, mut diagnostics: ResMut<Diagnostics>) {
    diagnostics.check_watchdog(time.elapsed as f64);
}
