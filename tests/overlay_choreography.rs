//! Integration tests for the overlay choreography: pointer routing, side
//! swaps, focus/defocus, and the hide/show transition, driven through a
//! bare ECS world without a window.

#![allow(dead_code)]

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use showroom::components::dynamictext::DynamicText;
use showroom::components::mapposition::MapPosition;
use showroom::components::overlayposition::OverlayPosition;
use showroom::components::panel::Panel;
use showroom::components::sprite::Sprite;
use showroom::components::swivel::Swivel;
use showroom::components::uikind::{PropKind, Section, UiKind};
use showroom::components::uilayer::UiLayer;
use showroom::components::zindex::ZIndex;
use showroom::events::pointer::{PointerEdge, PointerMessage};
use showroom::resources::overlaylayout::OverlayLayout;
use showroom::resources::overlaystate::OverlayState;
use showroom::resources::pointer::{Grabbed, PointerState};
use showroom::resources::signs::SignCoordinator;
use showroom::resources::tweens::{TweenKey, TweenSchedule};
use showroom::resources::uicamera::{Direction, UiCamera};
use showroom::resources::worldsignals::WorldSignals;
use showroom::resources::worldtime::WorldTime;
use showroom::systems::pointer::pointer_router_system;
use showroom::systems::tween::tween_update_system;
use showroom::systems::{hidebutton, labelcolumn, textpanels};

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Camera whose UI plane is exactly 20 x 10 units.
fn test_camera() -> UiCamera {
    UiCamera::new(90.0, 2.0, 5.0)
}

/// Build a world with the overlay widgets laid out as `game::setup` does.
fn make_world() -> World {
    let mut world = World::new();
    let ui = test_camera();

    world.insert_resource(WorldTime::default());
    world.insert_resource(OverlayState::default());
    world.insert_resource(TweenSchedule::new());
    world.insert_resource(SignCoordinator::default());
    world.insert_resource(Grabbed::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(PointerState::default());
    world.init_resource::<Messages<PointerMessage>>();

    let column = world
        .spawn((
            OverlayPosition::new(
                labelcolumn::column_x_position(&ui, true),
                labelcolumn::column_y_position(&ui, true),
            ),
            Swivel::new(labelcolumn::column_swivel(true)),
            UiLayer::INTERACTIVE,
        ))
        .id();

    let mut labels = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        let offset = labelcolumn::label_offset(i);
        let label = world
            .spawn((
                OverlayPosition::new(offset.x, offset.y),
                Swivel::default(),
                UiLayer::INTERACTIVE,
                UiKind::Label(*section),
                Panel::new(
                    labelcolumn::LABEL_WIDTH,
                    labelcolumn::LABEL_HEIGHT,
                    section.color(),
                ),
                DynamicText::new(section.title(), 18.0, Color::RAYWHITE),
            ))
            .id();
        labels.push((*section, label));
    }

    let text_rack = world
        .spawn((OverlayPosition::new(0.0, 0.0), UiLayer::INTERACTIVE))
        .id();

    let park = textpanels::park_position(&ui);
    let mut panels = Vec::new();
    for section in Section::ALL.iter() {
        let panel = world
            .spawn((
                OverlayPosition::new(park.x, park.y),
                UiLayer::HIDDEN,
                UiKind::TextPanel(*section),
                Panel::new(
                    textpanels::panel_width(&ui),
                    textpanels::panel_height(&ui),
                    section.color(),
                ),
            ))
            .id();
        panels.push((*section, panel));
    }

    let hide_button = world
        .spawn((
            OverlayPosition::new(
                hidebutton::hide_button_x(&ui, true),
                hidebutton::hide_button_y(&ui),
            ),
            UiLayer::INTERACTIVE,
            UiKind::HideButton,
            Panel::new(
                hidebutton::HIDE_WIDTH,
                hidebutton::HIDE_HEIGHT,
                hidebutton::hide_button_color(false),
            ),
        ))
        .id();

    world.insert_resource(OverlayLayout {
        column,
        labels,
        text_rack,
        panels,
        hide_button,
        links: Vec::new(),
    });
    world.insert_resource(ui);
    world
}

fn click(world: &mut World, plane: Vector2) {
    let world_point = Vector2 { x: 0.0, y: 0.0 };
    world
        .resource_mut::<Messages<PointerMessage>>()
        .write(PointerMessage {
            edge: PointerEdge::Down,
            plane,
            world: world_point,
        });
    tick_router(world);
    // Each tick builds a fresh schedule (and a fresh reader), so processed
    // messages must be dropped by hand.
    world.resource_mut::<Messages<PointerMessage>>().clear();
    world
        .resource_mut::<Messages<PointerMessage>>()
        .write(PointerMessage {
            edge: PointerEdge::Up,
            plane,
            world: world_point,
        });
    tick_router(world);
    world.resource_mut::<Messages<PointerMessage>>().clear();
}

fn tick_router(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(pointer_router_system);
    schedule.run(world);
}

/// Run the tween scheduler with the given frame delta until `seconds` have
/// elapsed.
fn run_tweens(world: &mut World, seconds: f32) {
    let mut schedule = Schedule::default();
    schedule.add_systems(tween_update_system);
    let steps = (seconds / 0.05).ceil() as usize;
    for _ in 0..steps {
        world.resource_mut::<WorldTime>().delta = 0.05;
        schedule.run(world);
    }
}

fn column_position(world: &mut World) -> Vector2 {
    let column = world.resource::<OverlayLayout>().column;
    world.get::<OverlayPosition>(column).unwrap().pos
}

fn panel_position(world: &mut World, section: Section) -> Vector2 {
    let panel = world.resource::<OverlayLayout>().panel(section).unwrap();
    world.get::<OverlayPosition>(panel).unwrap().pos
}

fn about_label_plane() -> Vector2 {
    // Column starts at (-6, -3); the About label sits at offset (0, 0).
    Vector2 { x: -6.0, y: -3.0 }
}

fn hide_button_plane() -> Vector2 {
    Vector2 { x: 7.5, y: 2.5 }
}

#[test]
fn label_click_swaps_sides_and_focuses() {
    let mut world = make_world();

    click(&mut world, about_label_plane());

    let state = *world.resource::<OverlayState>();
    assert!(!state.column_left, "column should have swapped right");
    assert!(state.swapping_sides, "swap animation should be in flight");
    assert_eq!(state.focused_section, Some(Section::About));
    assert!(state.hovered_label.is_none(), "hover resets before the swap");

    let tweens = world.resource::<TweenSchedule>();
    assert!(tweens.contains(TweenKey::Column));
    assert!(tweens.contains(TweenKey::ColumnSwivel));
    assert!(tweens.contains(TweenKey::HideButton));
    assert!(tweens.contains(TweenKey::Panel(Section::About)));
}

#[test]
fn swap_completes_and_clears_guard() {
    let mut world = make_world();
    let ui = test_camera();

    click(&mut world, about_label_plane());
    run_tweens(&mut world, 2.0);

    let state = *world.resource::<OverlayState>();
    assert!(!state.swapping_sides);
    assert!(world.resource::<TweenSchedule>().is_empty());

    let column = column_position(&mut world);
    assert!(approx_eq(column.x, labelcolumn::column_x_position(&ui, false)));
    assert!(approx_eq(column.y, labelcolumn::column_y_position(&ui, false)));

    let panel = panel_position(&mut world, Section::About);
    assert!(approx_eq(panel.x, textpanels::focused_text_x(&ui)));
}

#[test]
fn input_is_noop_while_animating() {
    let mut world = make_world();

    click(&mut world, about_label_plane());
    let before = column_position(&mut world);
    let state_before = *world.resource::<OverlayState>();
    assert!(state_before.swapping_sides);

    // Click empty space mid-swap; the router must ignore it entirely.
    click(&mut world, Vector2 { x: 0.0, y: 4.5 });

    let state = *world.resource::<OverlayState>();
    assert_eq!(state.column_left, state_before.column_left);
    assert_eq!(state.focused_section, state_before.focused_section);
    let after = column_position(&mut world);
    assert!(approx_eq(before.x, after.x));
    assert!(approx_eq(before.y, after.y));
}

#[test]
fn focusing_second_panel_defocuses_first() {
    let mut world = make_world();
    let ui = test_camera();

    click(&mut world, about_label_plane());
    run_tweens(&mut world, 2.0);

    // Column is right now; Projects label sits one slot above its root.
    let projects_plane = Vector2 {
        x: labelcolumn::column_x_position(&ui, false),
        y: labelcolumn::column_y_position(&ui, false) + labelcolumn::LABEL_SPACING,
    };
    click(&mut world, projects_plane);

    let state = *world.resource::<OverlayState>();
    assert_eq!(state.focused_section, Some(Section::Projects));
    // The old panel is animating off south while the new one slides in.
    let tweens = world.resource::<TweenSchedule>();
    assert!(tweens.contains(TweenKey::Panel(Section::About)));
    assert!(tweens.contains(TweenKey::Panel(Section::Projects)));

    run_tweens(&mut world, 2.0);

    let about = panel_position(&mut world, Section::About);
    let park = textpanels::park_position(&ui);
    assert!(approx_eq(about.x, park.x), "defocused panel parks offscreen");
    let about_entity = world.resource::<OverlayLayout>().panel(Section::About).unwrap();
    assert_eq!(*world.get::<UiLayer>(about_entity).unwrap(), UiLayer::HIDDEN);

    let projects = panel_position(&mut world, Section::Projects);
    assert!(approx_eq(projects.x, textpanels::focused_text_x(&ui)));
}

#[test]
fn empty_click_on_right_swaps_back_and_defocuses() {
    let mut world = make_world();
    let ui = test_camera();

    click(&mut world, about_label_plane());
    run_tweens(&mut world, 2.0);
    assert_eq!(
        world.resource::<OverlayState>().focused_section,
        Some(Section::About)
    );

    click(&mut world, Vector2 { x: 0.0, y: 4.5 });
    let state = *world.resource::<OverlayState>();
    assert!(state.column_left, "column should swap back left");
    assert!(state.focused_section.is_none(), "focus drops immediately");

    run_tweens(&mut world, 2.0);
    let about = panel_position(&mut world, Section::About);
    let park = textpanels::park_position(&ui);
    assert!(approx_eq(about.x, park.x));
    let column = column_position(&mut world);
    assert!(approx_eq(column.x, labelcolumn::column_x_position(&ui, true)));
}

#[test]
fn hide_button_toggles_overlay_to_west_and_back() {
    let mut world = make_world();
    let ui = test_camera();

    click(&mut world, hide_button_plane());
    let state = *world.resource::<OverlayState>();
    assert!(state.overlay_hidden);
    assert!(state.primary_trigger, "first hide arms the primary sign");

    // While the hide transition runs, further input is ignored.
    click(&mut world, hide_button_plane());
    assert!(world.resource::<OverlayState>().overlay_hidden);

    run_tweens(&mut world, 2.0);
    let column = column_position(&mut world);
    assert!(
        approx_eq(column.x, ui.associated_position(Direction::West)),
        "hidden column parks at the west edge value, got {}",
        column.x
    );
    let layout = world.resource::<OverlayLayout>().clone();
    assert_eq!(*world.get::<UiLayer>(layout.column).unwrap(), UiLayer::HIDDEN);
    assert_eq!(
        *world.get::<UiLayer>(layout.text_rack).unwrap(),
        UiLayer::HIDDEN
    );

    // Un-hide: the column returns to its computed on-screen position
    // (screen width 20 -> left column x = -6).
    click(&mut world, hide_button_plane());
    let state = *world.resource::<OverlayState>();
    assert!(!state.overlay_hidden);
    run_tweens(&mut world, 2.0);
    let column = column_position(&mut world);
    assert!(approx_eq(column.x, -6.0));
    assert_eq!(
        *world.get::<UiLayer>(layout.column).unwrap(),
        UiLayer::INTERACTIVE
    );
}

#[test]
fn grab_releases_even_while_animating() {
    let mut world = make_world();

    let prop = world
        .spawn((
            Sprite::new("book", 24.0, 8.0),
            MapPosition::new(0.0, 0.0),
            ZIndex(0),
            UiKind::Interactable(PropKind::Book),
        ))
        .id();
    world.resource_mut::<Grabbed>().0 = Some(prop);
    world.resource_mut::<OverlayState>().swapping_sides = true;

    click(&mut world, Vector2 { x: 0.0, y: 4.5 });
    assert!(
        world.resource::<Grabbed>().0.is_none(),
        "mouse up always releases the grab"
    );
}

#[test]
fn mouse_down_grabs_prop_under_cursor() {
    let mut world = make_world();

    let prop = world
        .spawn((
            Sprite::new("cat", 20.0, 16.0),
            MapPosition::new(0.0, 0.0),
            ZIndex(0),
            UiKind::Interactable(PropKind::Cat),
        ))
        .id();

    // Plane point misses every widget; the world point hits the prop.
    world
        .resource_mut::<Messages<PointerMessage>>()
        .write(PointerMessage {
            edge: PointerEdge::Down,
            plane: Vector2 { x: 0.0, y: 4.5 },
            world: Vector2 { x: 0.0, y: 0.0 },
        });
    tick_router(&mut world);

    assert_eq!(world.resource::<Grabbed>().0, Some(prop));
}
