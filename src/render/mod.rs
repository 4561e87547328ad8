pub mod renderer;
pub mod sprites;
pub mod surface;

pub use renderer::Renderer;
pub use sprites::{APPLE_COLOR, BOARD_BACKGROUND_COLOR, BORDER_COLOR, SNAKE_COLOR};
pub use surface::{BoardCanvas, Drawable, PixelRect, Surface, Tile};
