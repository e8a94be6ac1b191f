//! High-level scene setup and flow hooks.
//!
//! `setup` builds (or rebuilds, on a diagnostic retry) the overlay widgets,
//! placeholder textures, and fresh physics/overlay resources. `enter_play`
//! lays the static ground, enqueues the prop manifest, and hands control
//! to the per-frame systems. `quit_game` raises the quit flag the main
//! loop watches.

use bevy_ecs::prelude::*;
use rapier2d::prelude::*;
use raylib::prelude::{Color, Image, Vector2};

use crate::components::dynamictext::DynamicText;
use crate::components::overlayposition::OverlayPosition;
use crate::components::panel::Panel;
use crate::components::persistent::Persistent;
use crate::components::swivel::Swivel;
use crate::components::uikind::{PropKind, Section, UiKind};
use crate::components::uilayer::UiLayer;
use crate::resources::appconfig::AppConfig;
use crate::resources::diagnostics::{Diagnostics, InitStage};
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::overlaylayout::OverlayLayout;
use crate::resources::overlaystate::OverlayState;
use crate::resources::physics::{PhysicsPause, PhysicsWorld};
use crate::resources::screensize::ScreenSize;
use crate::resources::signs::SignCoordinator;
use crate::resources::spawnqueue::{SpawnQueue, load_prop_manifest};
use crate::resources::texturestore::TextureStore;
use crate::resources::tweens::TweenSchedule;
use crate::resources::uicamera::UiCamera;
use crate::resources::worldsignals::WorldSignals;
use crate::systems::{hidebutton, labelcolumn, textpanels};
use log::{error, info, warn};

/// Social links shown under the label column.
const LINKS: [(&str, &str); 2] = [
    ("github", "https://github.com"),
    ("linkedin", "https://linkedin.com"),
];

/// Fallback prop layout used when the manifest cannot be read.
/// (kind, x, y, physics)
const DEFAULT_PROPS: [(PropKind, f32, f32, bool); 14] = [
    (PropKind::Room, 0.0, 0.0, false),
    (PropKind::Desk, 0.0, 8.0, true),
    (PropKind::Chair, 0.0, 10.0, true),
    (PropKind::Computer, 0.0, 18.0, true),
    (PropKind::Monitor, 0.0, 48.0, true),
    (PropKind::Keyboard, 6.0, 18.0, true),
    (PropKind::Mouse, 18.0, 18.0, true),
    (PropKind::Mousepad, 18.0, 20.0, true),
    (PropKind::Book, -90.0, 30.0, true),
    (PropKind::Cat, 90.0, 30.0, true),
    (PropKind::DeskPhoto, -30.0, 30.0, true),
    (PropKind::Notebook, 30.0, 30.0, true),
    (PropKind::Plant, 60.0, 30.0, true),
    (PropKind::Tablet, -60.0, 30.0, true),
];

/// Ground/wall extents for the physics world.
const FLOOR_Y: f32 = -30.0;
const FLOOR_HALF_WIDTH: f32 = 330.0;
const WALL_X: f32 = 330.0;
const WALL_HALF_HEIGHT: f32 = 240.0;

/// Generate a tiny flat-color placeholder texture.
fn make_color_texture(
    rl: &mut raylib::RaylibHandle,
    thread: &raylib::RaylibThread,
    color: Color,
) -> Option<raylib::prelude::Texture2D> {
    let image = Image::gen_image_color(8, 8, color);
    rl.load_texture_from_image(thread, &image).ok()
}

/// Build (or rebuild) the scene: textures, overlay widgets, fresh state.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    thread: NonSend<raylib::RaylibThread>,
    existing: Query<Entity, Without<Persistent>>,
    config: Res<AppConfig>,
    screen: Res<ScreenSize>,
    mut ui: ResMut<UiCamera>,
    mut diagnostics: ResMut<Diagnostics>,
    mut signals: ResMut<WorldSignals>,
    mut tweens: ResMut<TweenSchedule>,
    mut signs: ResMut<SignCoordinator>,
    mut queue: ResMut<SpawnQueue>,
    mut overlay_state: ResMut<OverlayState>,
    mut pause: ResMut<PhysicsPause>,
) {
    diagnostics.set_stage(InitStage::SceneBuilding);

    // Teardown for the retry path: everything non-persistent goes.
    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    *tweens = TweenSchedule::new();
    *signs = SignCoordinator::default();
    *queue = SpawnQueue::default();
    *overlay_state = OverlayState::default();
    *pause = PhysicsPause::default();
    commands.insert_resource(PhysicsWorld::from_config(&config));

    *ui = UiCamera::new(
        config.fov_y,
        screen.w as f32 / screen.h.max(1) as f32,
        config.ui_distance,
    );

    // Placeholder textures for every prop plus the signs.
    let mut tex_store = TextureStore::new();
    for kind in [
        PropKind::Book,
        PropKind::Cat,
        PropKind::Chair,
        PropKind::Computer,
        PropKind::Desk,
        PropKind::DeskPhoto,
        PropKind::Keyboard,
        PropKind::Monitor,
        PropKind::Mouse,
        PropKind::Mousepad,
        PropKind::Notebook,
        PropKind::Plant,
        PropKind::Room,
        PropKind::Tablet,
    ] {
        match make_color_texture(&mut rl, &thread, kind.color()) {
            Some(texture) => tex_store.insert(kind.tex_key(), texture),
            None => diagnostics.record_error(format!("texture for {:?} failed", kind)),
        }
    }
    match make_color_texture(&mut rl, &thread, Color::new(120, 90, 50, 255)) {
        Some(texture) => tex_store.insert("sign", texture),
        None => diagnostics.record_error("sign texture failed".to_string()),
    }
    commands.insert_resource(tex_store);

    // ---- Overlay widgets ----
    let column = commands
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
        let label = commands
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

    let mut links = Vec::new();
    for (i, (name, url)) in LINKS.iter().enumerate() {
        let link = commands
            .spawn((
                OverlayPosition::new(
                    (i as f32 - 0.5) * labelcolumn::LABEL_WIDTH * 0.75,
                    -labelcolumn::LABEL_SPACING * 1.5,
                ),
                Swivel::default(),
                UiLayer::INTERACTIVE,
                UiKind::Link((*url).to_string()),
                Panel::new(
                    labelcolumn::LABEL_WIDTH * 0.6,
                    labelcolumn::LABEL_HEIGHT * 0.6,
                    Color::new(70, 80, 100, 235),
                ),
                DynamicText::new(*name, 12.0, Color::RAYWHITE),
            ))
            .id();
        links.push(link);
    }

    let text_rack = commands
        .spawn((OverlayPosition::new(0.0, 0.0), UiLayer::INTERACTIVE))
        .id();

    let park = textpanels::park_position(&ui);
    let panel_width = textpanels::panel_width(&ui);
    let panel_height = textpanels::panel_height(&ui);
    let mut panels = Vec::new();
    for section in Section::ALL.iter() {
        let panel = commands
            .spawn((
                OverlayPosition::new(park.x, park.y),
                UiLayer::HIDDEN,
                UiKind::TextPanel(*section),
                Panel::new(panel_width, panel_height, section.color()),
                DynamicText::new(section.title(), 24.0, Color::RAYWHITE),
            ))
            .id();
        panels.push((*section, panel));
    }

    let hide_button = commands
        .spawn((
            OverlayPosition::new(hidebutton::hide_button_x(&ui, true), hidebutton::hide_button_y(&ui)),
            UiLayer::INTERACTIVE,
            UiKind::HideButton,
            Panel::new(
                hidebutton::HIDE_WIDTH,
                hidebutton::HIDE_HEIGHT,
                hidebutton::hide_button_color(false),
            ),
        ))
        .id();

    commands.insert_resource(OverlayLayout {
        column,
        labels,
        text_rack,
        panels,
        hide_button,
        links,
    });

    signals.set_string("scene", "setup");
    next_state.set(GameStates::Playing);
    info!("Scene setup done, next state set to Playing");
}

/// Lay the static ground and enqueue the prop manifest.
pub fn enter_play(
    config: Res<AppConfig>,
    mut physics: ResMut<PhysicsWorld>,
    mut queue: ResMut<SpawnQueue>,
    mut diagnostics: ResMut<Diagnostics>,
    mut signals: ResMut<WorldSignals>,
) {
    diagnostics.set_stage(InitStage::AssetsLoading);

    // Static bounds: floor plus two walls so props stay in the room.
    let floor = RigidBodyBuilder::fixed()
        .translation(vector![0.0, FLOOR_Y])
        .build();
    physics.insert(floor, ColliderBuilder::cuboid(FLOOR_HALF_WIDTH, 10.0).build());
    for wall_x in [-WALL_X, WALL_X] {
        let wall = RigidBodyBuilder::fixed()
            .translation(vector![wall_x, 0.0])
            .build();
        physics.insert(wall, ColliderBuilder::cuboid(10.0, WALL_HALF_HEIGHT).build());
    }

    match load_prop_manifest(&config.manifest_path) {
        Ok(specs) => {
            info!(
                "Loaded {} prop placements from {:?}",
                specs.len(),
                config.manifest_path
            );
            for spec in specs.iter() {
                queue.push(spec.to_request());
            }
        }
        Err(message) => {
            error!("{}", message);
            diagnostics.record_error(message);
            warn!("Falling back to the built-in prop layout");
            for (kind, x, y, physics_enabled) in DEFAULT_PROPS.iter() {
                queue.push(crate::resources::spawnqueue::SpawnRequest::Prop {
                    kind: *kind,
                    position: Vector2 { x: *x, y: *y },
                    rotation: 0.0,
                    physics: *physics_enabled,
                });
            }
        }
    }

    signals.set_string("scene", "playing");
}

/// Raise the quit flag watched by the main loop.
pub fn quit_game(mut signals: ResMut<WorldSignals>) {
    info!("Quitting");
    signals.set_flag("quit_game");
}
