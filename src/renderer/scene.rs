//! Scene painting: background first, then bodies in insertion order

use super::shapes::Rect;
use super::surface::Surface;
use crate::settings::Palette;
use crate::sim::{Body, BodyKind, World};

/// Paint one full frame of `world`
pub fn draw<S: Surface + ?Sized>(surface: &mut S, world: &World) {
    let palette = &world.settings().palette;
    surface.begin_frame();
    draw_background(surface, world, palette);

    // Later bodies paint over earlier ones
    for body in world.bodies() {
        draw_body(surface, body, palette);
    }
}

/// Sky over the top 80% of the screen, ground below
pub fn draw_background<S: Surface + ?Sized>(surface: &mut S, world: &World, palette: &Palette) {
    let settings = world.settings();
    let width = settings.screen_width;
    let sky_height = settings.sky_height();

    surface.set_fill_color(&palette.sky);
    surface.fill_rect(0.0, 0.0, width, sky_height);

    surface.set_fill_color(&palette.ground);
    surface.fill_rect(0.0, sky_height, width, settings.ground_height());
}

pub fn draw_body<S: Surface + ?Sized>(surface: &mut S, body: &Body, palette: &Palette) {
    let color = match body.kind {
        BodyKind::Runner(_) => &palette.person,
        BodyKind::Obstacle => &palette.obstacle,
        BodyKind::Cloud => &palette.cloud,
    };
    let rect = Rect::from_body(body);

    surface.set_fill_color(color);
    surface.fill_rect(rect.x, rect.y, rect.width, rect.height);
}
