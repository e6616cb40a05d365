pub mod model;
pub mod view;

pub use model::{CardFrame, Pose, SlideAnimation, Stage, unlock_after};
pub use view::draw;

pub const STAGE_HEIGHT: i32 = 300;
pub const CARD_MAX_WIDTH: f64 = 430.0;
pub const CARD_HEIGHT: f64 = 250.0;
pub const CARD_RADIUS: f64 = 10.0;
pub const SHADOW_OFFSET: f64 = 4.0;
pub const SHADOW_SPREAD: f64 = 8.0;

pub const LABEL_TOP: f64 = 10.0;
pub const LABEL_PADDING_X: f64 = 10.0;
pub const LABEL_PADDING_Y: f64 = 5.0;
pub const LABEL_RADIUS: f64 = 5.0;
pub const LABEL_FONT_SIZE: f64 = 14.0;

pub const GLYPH_FONT_SIZE: f64 = 24.0;
pub const GLYPH_PADDING: f64 = 15.0; // badge radius = padding + half the glyph
