//! Circular position and navigation model for an infinite card carousel.
//!
//! Everything in here is toolkit agnostic: a presentation layer owns one
//! [`Carousel`], feeds it navigation requests and paints whatever
//! [`Carousel::descriptors`] and [`Carousel::dots`] hand back.

pub mod macros;

pub mod card;
pub mod carousel;
pub mod ipc;
pub mod position;
pub mod state;
pub mod style;

pub use card::{Card, CardId, Deck, DeckError, ImageUrl};
pub use carousel::{CardDescriptor, Carousel, DotDescriptor};
pub use position::{RelativePosition, resolve};
pub use state::{CarouselState, IgnoreReason, Navigation, TRANSITION_DURATION, TransitionTicket};
pub use style::{CardClass, CardStyle, DirectionGlyph, style_for};
