//! The drawing surface the game paints onto.
//!
//! Game objects draw filled and outlined rectangles in logical pixels of a
//! 640x480 canvas. [`BoardCanvas`] keeps that canvas at cell resolution and
//! renders it as a ratatui widget, two terminal columns per cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::game::{Cell, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH};

/// Terminal columns used by one board row
pub const BOARD_COLUMNS: u16 = GRID_WIDTH as u16 * 2;
/// Terminal rows used by the board
pub const BOARD_ROWS: u16 = GRID_HEIGHT as u16;

/// A rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The square covering one board cell
    pub fn cell(cell: Cell) -> Self {
        Self::new(cell.x, cell.y, GRID_SIZE, GRID_SIZE)
    }
}

/// Anything the game can paint rectangles on
pub trait Surface {
    /// Paint the whole surface in one colour
    fn fill(&mut self, color: Color);
    fn fill_rect(&mut self, rect: PixelRect, color: Color);
    /// Draw a 1-pixel outline along the edge of `rect`
    fn stroke_rect(&mut self, rect: PixelRect, color: Color);
}

/// Something that knows how to paint itself onto a [`Surface`]
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

/// What one board cell currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub fill: Color,
    pub border: Option<Color>,
}

impl Tile {
    fn plain(fill: Color) -> Self {
        Self { fill, border: None }
    }
}

/// A [`Surface`] backed by one [`Tile`] per board cell
#[derive(Debug, Clone, PartialEq)]
pub struct BoardCanvas {
    tiles: Vec<Tile>,
}

impl BoardCanvas {
    pub fn new(background: Color) -> Self {
        Self {
            tiles: vec![Tile::plain(background); (GRID_WIDTH * GRID_HEIGHT) as usize],
        }
    }

    /// Tile at the given column and row, if it is on the board
    pub fn tile(&self, column: i32, row: i32) -> Option<Tile> {
        Self::index(column, row).map(|index| self.tiles[index])
    }

    fn index(column: i32, row: i32) -> Option<usize> {
        if (0..GRID_WIDTH).contains(&column) && (0..GRID_HEIGHT).contains(&row) {
            Some((row * GRID_WIDTH + column) as usize)
        } else {
            None
        }
    }

    /// Indices of every tile `rect` touches, clipped to the board
    fn covered(rect: PixelRect) -> Vec<usize> {
        if rect.width <= 0 || rect.height <= 0 {
            return Vec::new();
        }

        let first_column = rect.x.div_euclid(GRID_SIZE).max(0);
        let last_column = (rect.x + rect.width - 1).div_euclid(GRID_SIZE).min(GRID_WIDTH - 1);
        let first_row = rect.y.div_euclid(GRID_SIZE).max(0);
        let last_row = (rect.y + rect.height - 1).div_euclid(GRID_SIZE).min(GRID_HEIGHT - 1);

        (first_row..=last_row)
            .flat_map(|row| (first_column..=last_column).map(move |column| (column, row)))
            .filter_map(|(column, row)| Self::index(column, row))
            .collect()
    }
}

impl Surface for BoardCanvas {
    fn fill(&mut self, color: Color) {
        self.tiles.fill(Tile::plain(color));
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        for index in Self::covered(rect) {
            self.tiles[index] = Tile::plain(color);
        }
    }

    fn stroke_rect(&mut self, rect: PixelRect, color: Color) {
        for index in Self::covered(rect) {
            self.tiles[index].border = Some(color);
        }
    }
}

impl Widget for &BoardCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..GRID_HEIGHT {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }

            for column in 0..GRID_WIDTH {
                let x = area.x + column as u16 * 2;
                if x + 1 >= area.right() {
                    break;
                }

                let tile = self.tiles[(row * GRID_WIDTH + column) as usize];
                let (symbol, style) = match tile.border {
                    Some(border) => ("[]", Style::default().fg(border).bg(tile.fill)),
                    None => ("  ", Style::default().bg(tile.fill)),
                };
                buf.set_string(x, y, symbol, style);
            }
        }
    }
}
