use crate::card::{CardId, Deck, ImageUrl};
use crate::position::{self, RelativePosition};
use crate::state::{CarouselState, Navigation, TransitionTicket};
use crate::style::{self, CardStyle};

/// Render-ready view of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDescriptor<'a> {
    pub index: usize,
    pub id: CardId,
    pub image: &'a ImageUrl,
    pub position: RelativePosition,
    pub style: CardStyle,
}

/// Render-ready view of one navigation dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotDescriptor {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

impl DotDescriptor {
    pub fn label_for(index: usize) -> String {
        format!("Go to slide {}", index + 1)
    }
}

/// A deck plus its navigation state. The only way to move the active card
/// is [`Carousel::request_navigate`].
#[derive(Debug)]
pub struct Carousel {
    deck: Deck,
    state: CarouselState,
}

impl Carousel {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            state: CarouselState::new(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.len()
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn request_navigate(&mut self, target: usize) -> Navigation {
        debug_assert!(
            self.contains_index(target),
            "navigation target {target} outside deck of {}",
            self.len()
        );
        let nav = self.state.request_navigate(target);
        match nav {
            Navigation::Accepted { from, to, .. } => {
                log::debug!("Navigating from card {} to card {}", from, to)
            }
            Navigation::Ignored(reason) => {
                log::debug!("Navigation to card {} ignored: {}", target, reason)
            }
        }
        nav
    }

    pub fn finish_transition(&mut self, ticket: TransitionTicket) -> bool {
        let released = self.state.finish_transition(ticket);
        if !released {
            log::debug!("Ignoring stale transition unlock {:?}", ticket);
        }
        released
    }

    pub fn position_of(&self, index: usize) -> RelativePosition {
        position::resolve(index, self.active_index(), self.len())
    }

    pub fn descriptors(&self) -> impl Iterator<Item = CardDescriptor<'_>> + '_ {
        self.deck.iter().enumerate().map(move |(index, card)| {
            let position = self.position_of(index);
            CardDescriptor {
                index,
                id: card.id,
                image: &card.image,
                position,
                style: style::style_for(position),
            }
        })
    }

    pub fn dots(&self) -> impl Iterator<Item = DotDescriptor> + '_ {
        let active = self.active_index();
        (0..self.len()).map(move |index| DotDescriptor {
            index,
            active: index == active,
            label: DotDescriptor::label_for(index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use RelativePosition::*;

    fn carousel(count: u32) -> Carousel {
        let cards = (1..=count)
            .map(|id| Card::new(id, format!("/images/card{id}.svg")))
            .collect();
        Carousel::new(Deck::new(cards).unwrap())
    }

    fn positions(carousel: &Carousel) -> Vec<RelativePosition> {
        carousel.descriptors().map(|d| d.position).collect()
    }

    #[test]
    fn test_descriptors_follow_active_card() {
        let mut c = carousel(3);
        assert_eq!(positions(&c), vec![Current, Next, Previous]);

        let ticket = match c.request_navigate(1) {
            Navigation::Accepted { ticket, .. } => ticket,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(positions(&c), vec![Previous, Current, Next]);

        assert!(c.finish_transition(ticket));
        c.request_navigate(0);
        assert_eq!(positions(&c), vec![Current, Next, Previous]);
    }

    #[test]
    fn test_descriptors_carry_card_data_and_style() {
        let c = carousel(3);
        let next = c.descriptors().nth(1).unwrap();
        assert_eq!(next.id, CardId::new(2));
        assert_eq!(next.image.as_str(), "/images/card2.svg");
        assert_eq!(next.style, CardStyle::NEXT);
    }

    #[test]
    fn test_dots_mark_active_card() {
        let mut c = carousel(3);
        c.request_navigate(2);

        let dots: Vec<_> = c.dots().collect();
        assert_eq!(dots.len(), 3);
        assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
        assert!(dots[2].active);
        assert_eq!(dots[0].label, "Go to slide 1");
    }

    #[test]
    fn test_busy_carousel_drops_second_click() {
        let mut c = carousel(3);
        assert!(c.request_navigate(1).is_accepted());
        assert!(!c.request_navigate(2).is_accepted());
        assert_eq!(c.active_index(), 1);
        assert!(c.is_transitioning());
    }

    #[test]
    fn test_single_card_never_moves() {
        let mut c = carousel(1);
        assert_eq!(positions(&c), vec![Current]);
        assert!(!c.request_navigate(0).is_accepted());
        assert!(!c.is_transitioning());
    }
}
