//! Stock components.

mod rect_sprite;

pub use rect_sprite::RectSprite;
