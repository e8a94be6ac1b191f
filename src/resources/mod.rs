//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, configuration, overlay and
//! physics state, registries, and diagnostics. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `appconfig` – INI-backed application configuration
//! - `assetmanifest` – set of spawned prop identities
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles the debug overlay
//! - `diagnostics` – init stages, watchdog, and the error overlay
//! - `framescheduler` – foreground/background loop cadence state machine
//! - `gamestate` – authoritative and pending high-level scene state
//! - `overlaylayout` – entity registry for the overlay widgets
//! - `overlaystate` – column side, hide/focus state, animation guard
//! - `physics` – rapier world wrapper and the pause flags
//! - `pointer` – per-frame mouse state and the grabbed prop
//! - `screensize` – current framebuffer dimensions in pixels
//! - `signs` – instruction-sign lifecycle state machines
//! - `spawnqueue` – pending asset spawn requests
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tweens` – the shared tween schedule
//! - `uicamera` – UI-plane geometry helpers
//! - `worldsignals` – global flags/strings for cross-system communication
//! - `worldtime` – simulation time and delta

pub mod appconfig;
pub mod assetmanifest;
pub mod camera2d;
pub mod debugmode;
pub mod diagnostics;
pub mod framescheduler;
pub mod gamestate;
pub mod overlaylayout;
pub mod overlaystate;
pub mod physics;
pub mod pointer;
pub mod screensize;
pub mod signs;
pub mod spawnqueue;
pub mod systemsstore;
pub mod texturestore;
pub mod tweens;
pub mod uicamera;
pub mod worldsignals;
pub mod worldtime;
