//! Mouse press/release edge messages.
//!
//! The input system emits one message per button edge; the pointer router
//! consumes them and performs hit testing and dispatch. Messages carry the
//! cursor position in the spaces needed downstream so the router does not
//! have to re-derive them.

use bevy_ecs::message::Message;
use raylib::prelude::Vector2;

/// The kind of button edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEdge {
    Down,
    Up,
}

/// One mouse button edge.
#[derive(Message, Debug, Clone, Copy)]
pub struct PointerMessage {
    pub edge: PointerEdge,
    /// Cursor in UI-plane units at the time of the edge.
    pub plane: Vector2,
    /// Cursor in world units at the time of the edge.
    pub world: Vector2,
}
