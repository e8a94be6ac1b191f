//! Scene state transition event and observer.
//!
//! Systems can request a change to the high-level [`GameStates`] by
//! updating [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then
//! triggers the observer in this module, which applies the transition to
//! [`GameState`] and invokes the appropriate enter systems stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change state from the mechanics of running
//! setup/teardown systems and avoids borrowing conflicts.

use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending scene state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs enter hooks, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending scene state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], then calls the
///   enter hooks for the new state and resets [`NextGameState`].
/// - If any required resource is missing, logs a diagnostic and returns.
///
/// The enter hooks are executed by looking up system IDs in
/// [`SystemsStore`] under well-known keys (e.g. `"setup"`, `"enter_play"`).
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    if let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    {
        let next_state_value = next_game_state.get().clone();
        match next_state_value {
            Pending(new_state) => {
                info!(
                    "Transitioning from {:?} to {:?}",
                    game_state.get(),
                    new_state
                );
                game_state.set(new_state.clone());
                next_game_state.reset();
                on_state_enter(&new_state, &mut commands, systems_store.as_ref());
            }
            Unchanged => {
                debug!("No state change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
    }
}

/// Internal: run state-specific "enter" systems for the given state.
fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    match state {
        GameStates::None => debug!("Entered None state"),
        GameStates::Setup => {
            let setup_system_id = systems_store
                .get("setup")
                .expect("Setup system not found in SystemsStore");
            commands.run_system(*setup_system_id);
        }
        GameStates::Playing => {
            let enter_play_system_id = systems_store
                .get("enter_play")
                .expect("EnterPlay system not found in SystemsStore");
            commands.run_system(*enter_play_system_id);
        }
        GameStates::Quitting => {
            let quit_game_system_id = systems_store
                .get("quit_game")
                .expect("QuitGame system not found in SystemsStore");
            commands.run_system(*quit_game_system_id);
        }
    }
}
