use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::button::UiButton;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::FontStore;
use crate::resources::texturestore::TextureStore;

/// Draw the world and the screen-space UI.
///
/// World pass: sprites sorted by `ZIndex` (painter's algorithm), each drawn
/// with `draw_texture_pro` stretching the whole texture into the sprite's
/// world size, modulated by the entity's `Tint` when present. A sprite whose
/// texture key is missing from the store is skipped. UI pass: buttons as
/// rounded rectangles with centered labels, drawn outside the camera
/// transform. Debug overlay: collider AABBs and position crosses.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    textures: NonSend<TextureStore>,
    fonts: NonSend<FontStore>,
    camera: Res<Camera2DRes>,
    debug: Option<Res<DebugMode>>,
    sprites: Query<(&Sprite, &MapPosition, &ZIndex, Option<&Tint>)>,
    buttons: Query<&UiButton>,
    colliders: Query<(&BoxCollider, &MapPosition)>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::SKYBLUE);

    {
        let mut d2 = d.begin_mode2D(camera.0);

        let mut to_draw: Vec<(&Sprite, &MapPosition, &ZIndex, Option<&Tint>)> =
            sprites.iter().collect();
        to_draw.sort_by_key(|(_, _, z, _)| z.0);

        for (sprite, position, _z, tint) in to_draw {
            let Some(tex) = textures.get(&sprite.tex_key) else {
                continue;
            };
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width as f32,
                height: tex.height as f32,
            };
            let dest = Rectangle {
                x: position.pos.x,
                y: position.pos.y,
                width: sprite.width,
                height: sprite.height,
            };
            let color = tint.map(|t| t.color).unwrap_or(Color::WHITE);
            d2.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, color);
        }

        if debug.is_some() {
            for (collider, position) in colliders.iter() {
                let (x, y, w, h) = collider.get_aabb(position.pos);
                d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
            }
            for (_, position, _, _) in sprites.iter() {
                let x = position.pos.x as i32;
                let y = position.pos.y as i32;
                d2.draw_line(x - 5, y, x + 5, y, Color::GREEN);
                d2.draw_line(x, y - 5, x, y + 5, Color::GREEN);
            }
        }
    }

    // screen-space UI on top of the world pass
    for button in buttons.iter() {
        d.draw_rectangle_rounded(button.rect, 0.35, 8, button.fill);
        match fonts.get(&button.font) {
            Some(font) => {
                let text_size =
                    font.measure_text(&button.label, button.font_size, 1.0);
                let at = Vector2 {
                    x: button.rect.x + (button.rect.width - text_size.x) * 0.5,
                    y: button.rect.y + (button.rect.height - text_size.y) * 0.5,
                };
                d.draw_text_ex(font, &button.label, at, button.font_size, 1.0, Color::WHITE);
            }
            None => {
                // rough centering for the built-in font
                let width = button.label.len() as f32 * button.font_size * 0.5;
                d.draw_text(
                    &button.label,
                    (button.rect.x + (button.rect.width - width) * 0.5) as i32,
                    (button.rect.y + (button.rect.height - button.font_size) * 0.5) as i32,
                    button.font_size as i32,
                    Color::WHITE,
                );
            }
        }
    }

    if debug.is_some() {
        let fps = d.get_fps();
        d.draw_text(&format!("FPS: {}", fps), 10, 10, 10, Color::BLACK);
    }
}
