//! Tagged classification of interactive entities.
//!
//! Every clickable or hit-testable entity carries a [`UiKind`] resolved once
//! at spawn time. Pointer dispatch matches on this tag instead of parsing
//! display names.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;
use serde::Deserialize;

use super::sign::SignRole;

/// Portfolio sections shown by the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Education,
    Work,
    Contact,
}

impl Section {
    /// All sections, in label-column stacking order (bottom to top).
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Education,
        Section::Work,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Work => "Work",
            Section::Contact => "Contact",
        }
    }

    /// Backdrop color of the section's text panel.
    pub fn color(&self) -> Color {
        match self {
            Section::About => Color::new(52, 73, 94, 235),
            Section::Projects => Color::new(39, 96, 139, 235),
            Section::Education => Color::new(104, 159, 56, 235),
            Section::Work => Color::new(142, 68, 173, 235),
            Section::Contact => Color::new(192, 97, 44, 235),
        }
    }
}

/// Kinds of background props described by the scene manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropKind {
    Book,
    Cat,
    Chair,
    Computer,
    Desk,
    DeskPhoto,
    Keyboard,
    Monitor,
    Mouse,
    Mousepad,
    Notebook,
    Plant,
    Room,
    Tablet,
}

impl PropKind {
    /// Texture-store key for the prop's placeholder texture.
    pub fn tex_key(&self) -> &'static str {
        match self {
            PropKind::Book => "book",
            PropKind::Cat => "cat",
            PropKind::Chair => "chair",
            PropKind::Computer => "computer",
            PropKind::Desk => "desk",
            PropKind::DeskPhoto => "desk_photo",
            PropKind::Keyboard => "keyboard",
            PropKind::Monitor => "monitor",
            PropKind::Mouse => "mouse",
            PropKind::Mousepad => "mousepad",
            PropKind::Notebook => "notebook",
            PropKind::Plant => "plant",
            PropKind::Room => "room",
            PropKind::Tablet => "tablet",
        }
    }

    /// Flat placeholder color for the prop's generated texture.
    pub fn color(&self) -> Color {
        match self {
            PropKind::Book => Color::new(170, 80, 60, 255),
            PropKind::Cat => Color::new(120, 120, 130, 255),
            PropKind::Chair => Color::new(90, 70, 50, 255),
            PropKind::Computer => Color::new(60, 60, 70, 255),
            PropKind::Desk => Color::new(130, 100, 70, 255),
            PropKind::DeskPhoto => Color::new(210, 200, 180, 255),
            PropKind::Keyboard => Color::new(50, 50, 55, 255),
            PropKind::Monitor => Color::new(30, 30, 40, 255),
            PropKind::Mouse => Color::new(80, 80, 90, 255),
            PropKind::Mousepad => Color::new(40, 45, 60, 255),
            PropKind::Notebook => Color::new(200, 180, 140, 255),
            PropKind::Plant => Color::new(70, 130, 70, 255),
            PropKind::Room => Color::new(36, 40, 52, 255),
            PropKind::Tablet => Color::new(45, 45, 55, 255),
        }
    }

    /// Sprite/collider size in world units.
    pub fn size(&self) -> (f32, f32) {
        match self {
            PropKind::Book => (24.0, 8.0),
            PropKind::Cat => (20.0, 16.0),
            PropKind::Chair => (28.0, 44.0),
            PropKind::Computer => (20.0, 28.0),
            PropKind::Desk => (96.0, 40.0),
            PropKind::DeskPhoto => (10.0, 12.0),
            PropKind::Keyboard => (28.0, 8.0),
            PropKind::Monitor => (36.0, 26.0),
            PropKind::Mouse => (8.0, 6.0),
            PropKind::Mousepad => (18.0, 3.0),
            PropKind::Notebook => (16.0, 4.0),
            PropKind::Plant => (16.0, 30.0),
            PropKind::Room => (640.0, 360.0),
            PropKind::Tablet => (14.0, 20.0),
        }
    }
}

/// Interaction tag attached to hit-testable entities.
#[derive(Component, Clone, Debug, PartialEq)]
pub enum UiKind {
    /// A section label in the overlay column.
    Label(Section),
    /// A section's sliding text panel (backdrop included).
    TextPanel(Section),
    /// The overlay hide/show toggle.
    HideButton,
    /// An external link; activating it records/opens the URL.
    Link(String),
    /// A grabbable background prop.
    Interactable(PropKind),
    /// An instruction sign.
    Sign(SignRole),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_have_distinct_titles() {
        let mut titles: Vec<&str> = Section::ALL.iter().map(|s| s.title()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), Section::ALL.len());
    }

    #[test]
    fn test_prop_kind_deserializes_snake_case() {
        let kind: PropKind = serde_json::from_str("\"desk_photo\"").unwrap();
        assert_eq!(kind, PropKind::DeskPhoto);
    }

    #[test]
    fn test_prop_sizes_are_positive() {
        let (w, h) = PropKind::Desk.size();
        assert!(w > 0.0 && h > 0.0);
    }
}
