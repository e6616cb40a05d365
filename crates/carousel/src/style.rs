use crate::position::RelativePosition;
use strum::{AsRefStr, Display as StrumDisplay};

/// Arrow drawn on the cards flanking the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, AsRefStr)]
pub enum DirectionGlyph {
    #[strum(serialize = "→")]
    Forward,
    #[strum(serialize = "←")]
    Backward,
}

/// Style class name for a card, usable as a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CardClass {
    Active,
    Adjacent,
    Hidden,
}

/// Visual attributes of a card. `translate_fraction` is a multiple of the
/// card's own width; `layer` orders painting, higher on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub layer: u8,
    pub translate_fraction: f64,
    pub scale: f64,
    pub opacity: f64,
    pub label: &'static str,
    pub glyph: Option<DirectionGlyph>,
    pub class: CardClass,
}

impl CardStyle {
    pub const CURRENT: Self = Self {
        layer: 3,
        translate_fraction: 0.0,
        scale: 1.0,
        opacity: 1.0,
        label: "Current",
        glyph: None,
        class: CardClass::Active,
    };

    pub const NEXT: Self = Self {
        layer: 2,
        translate_fraction: 1.0,
        scale: 0.85,
        opacity: 1.0,
        label: "Next",
        glyph: Some(DirectionGlyph::Forward),
        class: CardClass::Adjacent,
    };

    pub const PREVIOUS: Self = Self {
        layer: 2,
        translate_fraction: -1.0,
        scale: 0.85,
        opacity: 1.0,
        label: "Previous",
        glyph: Some(DirectionGlyph::Backward),
        class: CardClass::Adjacent,
    };

    pub const HIDDEN: Self = Self {
        layer: 1,
        translate_fraction: 0.0,
        scale: 0.8,
        opacity: 0.0,
        label: "",
        glyph: None,
        class: CardClass::Hidden,
    };

    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }
}

pub const fn style_for(position: RelativePosition) -> CardStyle {
    match position {
        RelativePosition::Current => CardStyle::CURRENT,
        RelativePosition::Next => CardStyle::NEXT,
        RelativePosition::Previous => CardStyle::PREVIOUS,
        RelativePosition::Hidden => CardStyle::HIDDEN,
    }
}
