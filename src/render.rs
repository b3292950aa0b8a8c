//! Drawing the world with SDL2 gfx primitives.

use std::error::Error;

use rphys2d::{Renderable, Vec2};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget};
use sdl2::ttf::Font;
use sdl2::video::Window;

const BALL: Color = Color::RED;
const MARKER: Color = Color::WHITE;
const POLYGON: Color = Color::GREEN;
const OUTLINE: Color = Color::RGB(0, 90, 0);

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

/// Maps arena coordinates (y up) to window pixels (y down).
fn to_screen(point: Vec2, height: f64) -> (i16, i16) {
    (point.x().round() as i16, (height - point.y()).round() as i16)
}

/// Draws one body onto a canvas `height` pixels tall.
pub fn draw<T: RenderTarget>(canvas: &mut Canvas<T>, renderable: &Renderable, height: f64) {
    match renderable {
        Renderable::Circle {
            center,
            radius,
            orientation,
        } => {
            let (x, y) = to_screen(*center, height);
            let _ = canvas.filled_circle(x, y, radius.round() as i16, to_abgr(BALL));
            // A spoke shows the spin.
            let rim = *center + Vec2::new(orientation.cos(), orientation.sin()) * *radius;
            let (rim_x, rim_y) = to_screen(rim, height);
            let _ = canvas.line(x, y, rim_x, rim_y, to_abgr(MARKER));
        }
        Renderable::Polygon { triangles } => {
            for triangle in triangles {
                let [a, b, c] = (*triangle.vertices()).map(|v| to_screen(v, height));
                let _ = canvas.filled_trigon(a.0, a.1, b.0, b.1, c.0, c.1, to_abgr(POLYGON));
                let _ = canvas.trigon(a.0, a.1, b.0, b.1, c.0, c.1, to_abgr(OUTLINE));
            }
        }
    }
}

/// Renders a line of text in the top-left corner.
pub fn hud(canvas: &mut Canvas<Window>, font: &Font, text: &str) -> Result<(), Box<dyn Error>> {
    let text_surface = font.render(text).blended(Color::RGB(255, 255, 255))?;
    let texture_creator = canvas.texture_creator();
    let text_texture = texture_creator.create_texture_from_surface(&text_surface)?;
    let texture_query = text_texture.query();
    let target_rect = Rect::new(10, 10, texture_query.width, texture_query.height);
    canvas.copy(&text_texture, None, Some(target_rect))?;
    Ok(())
}
