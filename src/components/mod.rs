//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the scene world. Components define data such as position, rendering,
//! overlay layout, and physics linkage.
//!
//! Submodules overview:
//! - [`dynamictext`] – text rendered with raylib's default font
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`overlayposition`] – camera-plane position for overlay widgets
//! - [`panel`] – flat colored quad for overlay backdrops and buttons
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`physicsbody`] – handles linking an entity to its rapier body/collider
//! - [`rotation`] – rotation angle in degrees
//! - [`sign`] – role marker for instruction sign entities
//! - [`sprite`] – 2D sprite rendering component
//! - [`swivel`] – y-axis swivel angle for overlay widgets
//! - [`uikind`] – tagged classification of interactive entities
//! - [`uilayer`] – overlay layer flag (interactive vs hidden)
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod dynamictext;
pub mod mapposition;
pub mod overlayposition;
pub mod panel;
pub mod persistent;
pub mod physicsbody;
pub mod rotation;
pub mod sign;
pub mod sprite;
pub mod swivel;
pub mod uikind;
pub mod uilayer;
pub mod zindex;
