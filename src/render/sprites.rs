use ratatui::style::Color;

use super::surface::{Drawable, PixelRect, Surface};
use crate::game::{Apple, Snake};

pub const BOARD_BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);
pub const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);
pub const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

fn draw_block(surface: &mut dyn Surface, rect: PixelRect, color: Color) {
    surface.fill_rect(rect, color);
    surface.stroke_rect(rect, BORDER_COLOR);
}

impl Drawable for Apple {
    fn draw(&self, surface: &mut dyn Surface) {
        draw_block(surface, PixelRect::cell(self.position), APPLE_COLOR);
    }
}

impl Drawable for Snake {
    fn draw(&self, surface: &mut dyn Surface) {
        // The head looks the same as the body
        for &cell in &self.positions {
            draw_block(surface, PixelRect::cell(cell), SNAKE_COLOR);
        }

        if let Some(last) = self.last {
            if !self.positions.contains(&last) {
                surface.fill_rect(PixelRect::cell(last), BOARD_BACKGROUND_COLOR);
            }
        }
    }
}
