//! Event types and observers used by the app.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`gamestate`] – state transition notifications for the high-level flow
//! - [`pointer`] – mouse press/release edges with hit-test results
//! - [`switchdebug`] – toggle the debug overlay on/off

pub mod gamestate;
pub mod pointer;
pub mod switchdebug;
