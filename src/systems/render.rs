//! Render system.
//!
//! Exclusive system that takes the raylib handle out of the world, draws
//! the frame, and puts it back. Three passes: world sprites through the
//! 2D camera, overlay widgets through the UI-plane projection, then the
//! diagnostics/debug overlays in raw screen space.
//!
//! When the frame scheduler gates rendering off (background cadence), the
//! system still opens an empty frame — raylib pumps window events inside
//! the draw scope, and visibility/close detection must stay alive while
//! the window is hidden.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::overlayposition::OverlayPosition;
use crate::components::panel::Panel;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::components::swivel::Swivel;
use crate::components::uilayer::UiLayer;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::diagnostics::Diagnostics;
use crate::resources::framescheduler::FrameScheduler;
use crate::resources::overlaylayout::OverlayLayout;
use crate::resources::overlaystate::OverlayState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::tweens::TweenSchedule;
use crate::resources::uicamera::UiCamera;
use crate::systems::hidebutton;

const CLEAR_COLOR: Color = Color::new(18, 20, 28, 255);

struct OverlayQuad {
    center: Vector2,
    width: f32,
    height: f32,
    color: Color,
    swivel: f32,
    text: Option<(String, f32, Color)>,
}

pub fn render_system(world: &mut World) {
    let render_enabled = world.resource::<FrameScheduler>().render_this_frame;
    let mut rl = world
        .remove_non_send_resource::<raylib::RaylibHandle>()
        .expect("RaylibHandle missing from world");
    let thread = world
        .remove_non_send_resource::<raylib::RaylibThread>()
        .expect("RaylibThread missing from world");

    if !render_enabled {
        // Empty frame: no scene drawing, but the event pump still runs.
        let _d = rl.begin_drawing(&thread);
    } else {
        let screen = *world.resource::<ScreenSize>();
        let camera = *world.resource::<Camera2DRes>();
        let ui = *world.resource::<UiCamera>();
        let overlay_state = *world.resource::<OverlayState>();

        // Collect world sprites before borrowing the texture store.
        let mut sprites: Vec<(Sprite, Vector2, f32, ZIndex)> = {
            let mut query = world.query::<(&Sprite, &MapPosition, &Rotation, &ZIndex)>();
            query
                .iter(world)
                .map(|(sprite, position, rotation, z)| {
                    (sprite.clone(), position.pos, rotation.degrees, *z)
                })
                .collect()
        };
        sprites.sort_by_key(|(_, _, _, z)| *z);

        let world_texts: Vec<(String, f32, Color, Vector2)> = {
            let mut query = world.query::<(&DynamicText, &MapPosition)>();
            query
                .iter(world)
                .map(|(text, position)| {
                    (text.content.clone(), text.font_size, text.color, position.pos)
                })
                .collect()
        };

        let overlay_quads = collect_overlay_quads(world, &overlay_state);

        let textures = world.resource::<TextureStore>();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(CLEAR_COLOR);

        // World pass. World angles are CCW-positive with y up; raylib
        // rotates clockwise in screen space, so the angle flips.
        for (sprite, position, degrees, _z) in sprites.iter() {
            let Some(texture) = textures.get(&sprite.tex_key) else {
                continue;
            };
            let px = camera.world_to_screen(*position, &screen);
            let dest_w = sprite.width * camera.zoom;
            let dest_h = sprite.height * camera.zoom;
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: texture.width as f32,
                height: texture.height as f32,
            };
            let dest = Rectangle {
                x: px.x,
                y: px.y,
                width: dest_w,
                height: dest_h,
            };
            let origin = Vector2 {
                x: dest_w * 0.5,
                y: dest_h * 0.5,
            };
            d.draw_texture_pro(texture, src, dest, origin, -degrees, Color::WHITE);
        }
        for (content, font_size, color, position) in world_texts.iter() {
            let px = camera.world_to_screen(*position, &screen);
            let size = *font_size as i32;
            let width = d.measure_text(content, size);
            d.draw_text(
                content,
                px.x as i32 - width / 2,
                px.y as i32 - size / 2,
                size,
                *color,
            );
        }

        // Overlay pass.
        let ppux = ui.pixels_per_unit_x(&screen);
        let ppuy = ui.pixels_per_unit_y(&screen);
        for quad in overlay_quads.iter() {
            let px = ui.plane_to_pixels(quad.center, &screen);
            // Swivel foreshortens the quad's width.
            let width = quad.width * ppux * quad.swivel.cos().abs();
            let height = quad.height * ppuy;
            d.draw_rectangle_rec(
                Rectangle {
                    x: px.x - width * 0.5,
                    y: px.y - height * 0.5,
                    width,
                    height,
                },
                quad.color,
            );
            if let Some((content, font_size, color)) = &quad.text {
                let size = *font_size as i32;
                let text_width = d.measure_text(content, size);
                d.draw_text(
                    content,
                    px.x as i32 - text_width / 2,
                    px.y as i32 - size / 2,
                    size,
                    *color,
                );
            }
        }

        diagnostics_pass(world, &screen, &mut d);
        debug_pass(world, &screen, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Gather every visible overlay widget into flat draw data.
fn collect_overlay_quads(world: &World, state: &OverlayState) -> Vec<OverlayQuad> {
    let Some(layout) = world.get_resource::<OverlayLayout>().cloned() else {
        return Vec::new();
    };

    let mut quads = Vec::new();
    let interactive = |world: &World, entity: Entity| -> bool {
        world
            .get::<UiLayer>(entity)
            .map(|l| l.is_interactive())
            .unwrap_or(false)
    };
    let position = |world: &World, entity: Entity| -> Vector2 {
        world
            .get::<OverlayPosition>(entity)
            .map(|p| p.pos)
            .unwrap_or(Vector2 { x: 0.0, y: 0.0 })
    };
    let swivel = |world: &World, entity: Entity| -> f32 {
        world.get::<Swivel>(entity).map(|s| s.y).unwrap_or(0.0)
    };
    let text_of = |world: &World, entity: Entity| -> Option<(String, f32, Color)> {
        world
            .get::<DynamicText>(entity)
            .map(|t| (t.content.clone(), t.font_size, t.color))
    };

    // Text panels ride the rack.
    if interactive(world, layout.text_rack) {
        let rack_pos = position(world, layout.text_rack);
        for (_, panel_entity) in layout.panels.iter() {
            if !interactive(world, *panel_entity) {
                continue;
            }
            let Some(panel) = world.get::<Panel>(*panel_entity).copied() else {
                continue;
            };
            let own = position(world, *panel_entity);
            quads.push(OverlayQuad {
                center: Vector2 {
                    x: rack_pos.x + own.x,
                    y: rack_pos.y + own.y,
                },
                width: panel.width,
                height: panel.height,
                color: panel.color,
                swivel: 0.0,
                text: text_of(world, *panel_entity),
            });
        }
    }

    // Labels and links ride the column and inherit its swivel.
    if interactive(world, layout.column) {
        let column_pos = position(world, layout.column);
        let column_swivel = swivel(world, layout.column);
        let children = layout
            .labels
            .iter()
            .map(|(_, e)| *e)
            .chain(layout.links.iter().copied());
        for child in children {
            if !interactive(world, child) {
                continue;
            }
            let Some(panel) = world.get::<Panel>(child).copied() else {
                continue;
            };
            let own = position(world, child);
            quads.push(OverlayQuad {
                center: Vector2 {
                    x: column_pos.x + own.x,
                    y: column_pos.y + own.y,
                },
                width: panel.width,
                height: panel.height,
                color: panel.color,
                swivel: column_swivel + swivel(world, child),
                text: text_of(world, child),
            });
        }
    }

    // Hide button; its color reflects the overlay's hidden state.
    if interactive(world, layout.hide_button) {
        if let Some(panel) = world.get::<Panel>(layout.hide_button).copied() {
            quads.push(OverlayQuad {
                center: position(world, layout.hide_button),
                width: panel.width,
                height: panel.height,
                color: hidebutton::hide_button_color(state.overlay_hidden),
                swivel: 0.0,
                text: None,
            });
        }
    }

    quads
}

/// Loading progress line and the fallback error overlay.
fn diagnostics_pass(world: &World, screen: &ScreenSize, d: &mut RaylibDrawHandle) {
    let diagnostics = world.resource::<Diagnostics>();
    if let Some(code) = diagnostics.overlay() {
        d.draw_rectangle(0, 0, screen.w, screen.h, Color::new(0, 0, 0, 200));
        let center_x = screen.w / 2;
        let mut y = screen.h / 2 - 80;
        let title = format!("ERROR {}", code);
        let title_width = d.measure_text(&title, 40);
        d.draw_text(&title, center_x - title_width / 2, y, 40, Color::RED);
        y += 56;
        let device = format!("DEVICE: {}", diagnostics.device.to_uppercase());
        d.draw_text(&device, center_x - 160, y, 20, Color::RAYWHITE);
        y += 28;
        let stage = format!("STAGE: {}", diagnostics.stage.label());
        d.draw_text(&stage, center_x - 160, y, 20, Color::RAYWHITE);
        y += 28;
        let errors = if diagnostics.errors.is_empty() {
            "ERRORS: NONE".to_string()
        } else {
            format!("ERRORS: {}", diagnostics.errors.join(", "))
        };
        d.draw_text(&errors, center_x - 160, y, 20, Color::RAYWHITE);
        y += 48;
        d.draw_text(
            "[R] RETRY    [C] CONTINUE ANYWAY",
            center_x - 180,
            y,
            20,
            Color::ORANGE,
        );
    } else if !diagnostics.is_ready() {
        let progress = format!("LOADING: {}", diagnostics.stage.label());
        d.draw_text(&progress, 10, screen.h - 30, 20, Color::LIGHTGRAY);
    } else if diagnostics.degraded {
        d.draw_text("DEGRADED MODE", 10, screen.h - 30, 20, Color::ORANGE);
    }
}

/// Frame stats when debug mode is on.
fn debug_pass(world: &World, _screen: &ScreenSize, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let fps = d.get_fps();
    d.draw_text(
        &format!("DEBUG (F11) | FPS: {}", fps),
        10,
        10,
        10,
        Color::GREEN,
    );
    let entity_count = world.entity_count();
    let tween_count = world.resource::<TweenSchedule>().len();
    let mode = world.resource::<FrameScheduler>().mode();
    d.draw_text(
        &format!(
            "Entities: {} | Tweens: {} | Mode: {:?}",
            entity_count, tween_count, mode
        ),
        10,
        24,
        10,
        Color::GREEN,
    );
    let state = world.resource::<OverlayState>();
    d.draw_text(
        &format!(
            "Column left: {} | Hidden: {} | Focused: {:?}",
            state.column_left, state.overlay_hidden, state.focused_section
        ),
        10,
        38,
        10,
        Color::GREEN,
    );
}
