//! Pointer hit testing and dispatch.
//!
//! Consumes the button-edge messages emitted by the input system, hit-tests
//! overlay widgets first (interactive layer only) and world props second,
//! and dispatches on the hit entity's [`UiKind`] tag. All dispatch is a
//! no-op while an overlay transition is animating; releasing a grabbed
//! prop is the one thing that always goes through.

use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::overlayposition::OverlayPosition;
use crate::components::panel::Panel;
use crate::components::sprite::Sprite;
use crate::components::swivel::Swivel;
use crate::components::uikind::UiKind;
use crate::components::uilayer::UiLayer;
use crate::components::zindex::ZIndex;
use crate::events::pointer::{PointerEdge, PointerMessage};
use crate::resources::overlaylayout::OverlayLayout;
use crate::resources::overlaystate::OverlayState;
use crate::resources::pointer::Grabbed;
use crate::resources::tweens::TweenSchedule;
use crate::resources::uicamera::{Direction, UiCamera};
use crate::resources::worldsignals::WorldSignals;
use crate::systems::{hover, overlay, textpanels};

/// Axis-aligned point-in-rectangle test around a center point.
pub fn point_in_rect(point: Vector2, center: Vector2, width: f32, height: f32) -> bool {
    (point.x - center.x).abs() <= width * 0.5 && (point.y - center.y).abs() <= height * 0.5
}

/// Record an activated external link.
fn open_link(url: &str, signals: &mut WorldSignals) {
    info!("Opening link: {}", url);
    signals.set_string("last_link", url);
}

/// Hit-test the overlay widgets at a UI-plane point.
///
/// Checks the hide button, then labels and links (which ride the column),
/// then text panels (which ride the rack). A widget only hits when both
/// its own layer and its parent's layer are interactive.
fn pick_overlay(
    plane: Vector2,
    layout: &OverlayLayout,
    positions: &Query<&mut OverlayPosition>,
    layers: &Query<&mut UiLayer>,
    panels: &Query<&Panel>,
    kinds: &Query<&UiKind>,
) -> Option<(Entity, UiKind)> {
    let interactive = |entity: Entity| -> bool {
        layers
            .get(entity)
            .map(|l| l.is_interactive())
            .unwrap_or(false)
    };
    let position = |entity: Entity| -> Option<Vector2> {
        positions.get(entity).map(|p| p.pos).ok()
    };

    let mut candidates: Vec<(Entity, Option<Entity>)> = Vec::new();
    candidates.push((layout.hide_button, None));
    for (_, label) in layout.labels.iter() {
        candidates.push((*label, Some(layout.column)));
    }
    for link in layout.links.iter() {
        candidates.push((*link, Some(layout.column)));
    }
    for (_, panel) in layout.panels.iter() {
        candidates.push((*panel, Some(layout.text_rack)));
    }

    for (entity, parent) in candidates {
        if !interactive(entity) {
            continue;
        }
        if let Some(parent) = parent {
            if !interactive(parent) {
                continue;
            }
        }
        let Some(own) = position(entity) else {
            continue;
        };
        let center = match parent.and_then(|p| position(p)) {
            Some(parent_pos) => Vector2 {
                x: parent_pos.x + own.x,
                y: parent_pos.y + own.y,
            },
            None => own,
        };
        let Ok(quad) = panels.get(entity) else {
            continue;
        };
        if point_in_rect(plane, center, quad.width, quad.height) {
            if let Ok(kind) = kinds.get(entity) {
                return Some((entity, kind.clone()));
            }
        }
    }
    None
}

/// Hit-test world props at a world-space point; topmost (highest z) wins.
fn pick_prop(
    world_point: Vector2,
    props: &Query<(Entity, &UiKind, &Sprite, &MapPosition, &ZIndex)>,
) -> Option<(Entity, UiKind)> {
    props
        .iter()
        .filter(|(_, _, sprite, position, _)| {
            point_in_rect(world_point, position.pos, sprite.width, sprite.height)
        })
        .max_by_key(|(_, _, _, _, z)| **z)
        .map(|(entity, kind, _, _, _)| (entity, kind.clone()))
}

/// Consume pointer edges and dispatch them.
pub fn pointer_router_system(
    mut messages: MessageReader<PointerMessage>,
    mut state: ResMut<OverlayState>,
    mut tweens: ResMut<TweenSchedule>,
    layout: Option<Res<OverlayLayout>>,
    ui: Res<UiCamera>,
    mut grabbed: ResMut<Grabbed>,
    mut signals: ResMut<WorldSignals>,
    mut positions: Query<&mut OverlayPosition>,
    mut swivels: Query<&mut Swivel>,
    mut layers: Query<&mut UiLayer>,
    panels: Query<&Panel>,
    kinds: Query<&UiKind>,
    props: Query<(Entity, &UiKind, &Sprite, &MapPosition, &ZIndex)>,
) {
    let Some(layout) = layout else {
        return;
    };
    for message in messages.read() {
        match message.edge {
            PointerEdge::Up => {
                // Releasing a grab always goes through.
                if grabbed.0.take().is_some() {
                    debug!("Released grabbed prop");
                }
                if state.is_animating(&tweens) {
                    debug!("Skipping interaction - animation in progress");
                    continue;
                }
                let overlay_hit = pick_overlay(
                    message.plane,
                    &layout,
                    &positions,
                    &layers,
                    &panels,
                    &kinds,
                );
                if state.column_left {
                    let Some((_, kind)) = overlay_hit else {
                        continue;
                    };
                    match kind {
                        UiKind::Label(section) => {
                            debug!("{:?} label clicked up", section);
                            hover::reset_hover(&mut state, &mut tweens, &layout, &mut swivels);
                            overlay::swap_column_sides(
                                &mut state,
                                &mut tweens,
                                &layout,
                                &ui,
                                &mut positions,
                                &mut swivels,
                                &mut layers,
                            );
                            textpanels::focus(
                                section,
                                &mut state,
                                &mut tweens,
                                &layout,
                                &ui,
                                &mut positions,
                                &mut layers,
                            );
                        }
                        UiKind::HideButton => {
                            overlay::trigger_overlay(
                                &mut state,
                                &mut tweens,
                                &layout,
                                &ui,
                                &mut positions,
                                &mut layers,
                            );
                        }
                        UiKind::Link(url) => open_link(&url, &mut signals),
                        _ => {}
                    }
                } else {
                    match overlay_hit {
                        Some((_, UiKind::Label(section))) => {
                            debug!("{:?} label clicked up on right side", section);
                            textpanels::focus(
                                section,
                                &mut state,
                                &mut tweens,
                                &layout,
                                &ui,
                                &mut positions,
                                &mut layers,
                            );
                        }
                        Some((_, UiKind::Link(url))) => open_link(&url, &mut signals),
                        Some((_, UiKind::TextPanel(_))) => {
                            debug!("Clicked on text element, not swapping sides");
                        }
                        _ => {
                            // Empty space or a scene object while on the
                            // right: swap back and drop focus westward.
                            overlay::swap_column_sides(
                                &mut state,
                                &mut tweens,
                                &layout,
                                &ui,
                                &mut positions,
                                &mut swivels,
                                &mut layers,
                            );
                            textpanels::lose_focus(
                                Direction::West,
                                &mut state,
                                &mut tweens,
                                &layout,
                                &ui,
                                &mut positions,
                            );
                        }
                    }
                }
            }
            PointerEdge::Down => {
                if state.is_animating(&tweens) {
                    debug!("Skipping interaction - animation in progress");
                    continue;
                }
                let overlay_hit = pick_overlay(
                    message.plane,
                    &layout,
                    &positions,
                    &layers,
                    &panels,
                    &kinds,
                );
                match overlay_hit {
                    Some((_, UiKind::Label(section))) => {
                        debug!("{:?} label clicked down", section);
                    }
                    Some(_) => {}
                    None => {
                        if let Some((entity, UiKind::Interactable(kind))) =
                            pick_prop(message.world, &props)
                        {
                            debug!("Grabbed {:?}", kind);
                            grabbed.0 = Some(entity);
                        }
                    }
                }
            }
        }
    }
}
