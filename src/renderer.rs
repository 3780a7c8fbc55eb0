use raylib::core::text::measure_text;
use raylib::prelude::*;

use crate::constants::*;

/// Primitive drawing operations the deck and the background emit into.
///
/// `Icon` is whatever image handle the backend draws; the deck only ever
/// holds borrowed icons and hands them back here.
pub trait Renderer {
    type Icon;

    fn fill_rounded_rect(&mut self, rect: Rectangle, color: Color);
    fn stroke_rounded_rect(&mut self, rect: Rectangle, thickness: f32, color: Color);
    fn fill_gradient_v(&mut self, rect: Rectangle, top: Color, bottom: Color);
    fn text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color);
    fn text_width(&self, text: &str, size: i32) -> i32;
    /// Stretch the whole icon over `dest`.
    fn icon(&mut self, icon: &Self::Icon, dest: Rectangle, tint: Color);
}

/// Draws through any raylib draw handle (screen or texture mode).
pub struct RaylibRenderer<'a, D: RaylibDraw> {
    d: &'a mut D,
}

impl<'a, D: RaylibDraw> RaylibRenderer<'a, D> {
    pub fn new(d: &'a mut D) -> Self {
        Self { d }
    }
}

impl<D: RaylibDraw> Renderer for RaylibRenderer<'_, D> {
    type Icon = Texture2D;

    fn fill_rounded_rect(&mut self, rect: Rectangle, color: Color) {
        self.d.draw_rectangle_rounded(rect, CARD_ROUNDNESS, CARD_SEGMENTS, color);
    }

    fn stroke_rounded_rect(&mut self, rect: Rectangle, thickness: f32, color: Color) {
        self.d.draw_rectangle_rounded_lines_ex(rect, CARD_ROUNDNESS, CARD_SEGMENTS, thickness, color);
    }

    fn fill_gradient_v(&mut self, rect: Rectangle, top: Color, bottom: Color) {
        self.d.draw_rectangle_gradient_v(
            rect.x as i32,
            rect.y as i32,
            rect.width as i32,
            rect.height as i32,
            top,
            bottom,
        );
    }

    fn text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color) {
        self.d.draw_text(text, x, y, size, color);
    }

    fn text_width(&self, text: &str, size: i32) -> i32 {
        measure_text(text, size)
    }

    fn icon(&mut self, icon: &Texture2D, dest: Rectangle, tint: Color) {
        let tex_width = icon.width() as f32;
        let tex_height = icon.height() as f32;

        self.d.draw_texture_pro(
            icon,
            Rectangle::new(0.0, 0.0, tex_width, tex_height), // Whole texture
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            tint,
        );
    }
}
