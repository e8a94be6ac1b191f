//! Entity registry for the overlay widgets.
//!
//! Built once during scene setup; the choreography systems look widgets up
//! here instead of searching by name. Rebuilt when the scene is torn down
//! and set up again.

use bevy_ecs::prelude::{Entity, Resource};

use crate::components::uikind::Section;

/// Entities making up the overlay, registered at setup.
#[derive(Resource, Clone, Debug)]
pub struct OverlayLayout {
    /// The label column root (carries position + swivel).
    pub column: Entity,
    /// One label entity per section, in stacking order.
    pub labels: Vec<(Section, Entity)>,
    /// The panel rack root; panel y-offsets are relative to it.
    pub text_rack: Entity,
    /// One text panel per section.
    pub panels: Vec<(Section, Entity)>,
    /// The hide/show toggle button.
    pub hide_button: Entity,
    /// External link buttons, children of the column.
    pub links: Vec<Entity>,
}

impl OverlayLayout {
    /// Label entity for a section.
    pub fn label(&self, section: Section) -> Option<Entity> {
        self.labels
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, e)| *e)
    }

    /// Panel entity for a section.
    pub fn panel(&self, section: Section) -> Option<Entity> {
        self.panels
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, e)| *e)
    }
}
