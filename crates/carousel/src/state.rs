use std::time::Duration;
use strum::Display as StrumDisplay;

/// How long a transition holds the navigation lock. Matches the visual
/// transition of the cards.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// Identifies one accepted transition. The deferred unlock hands it back to
/// [`CarouselState::finish_transition`]; any other ticket is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "snake_case")]
pub enum IgnoreReason {
    Transitioning,
    AlreadyActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Accepted {
        from: usize,
        to: usize,
        ticket: TransitionTicket,
    },
    Ignored(IgnoreReason),
}

impl Navigation {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

#[derive(Debug, Default)]
pub struct CarouselState {
    active_index: usize,
    transitioning: Option<TransitionTicket>,
    issued: u64,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning.is_some()
    }

    /// Moves the active card to `target` unless a transition is still running
    /// or `target` is already active. On acceptance the caller owns scheduling
    /// the unlock after [`TRANSITION_DURATION`].
    pub fn request_navigate(&mut self, target: usize) -> Navigation {
        if self.transitioning.is_some() {
            return Navigation::Ignored(IgnoreReason::Transitioning);
        }
        if target == self.active_index {
            return Navigation::Ignored(IgnoreReason::AlreadyActive);
        }

        self.issued += 1;
        let ticket = TransitionTicket(self.issued);
        let from = self.active_index;

        self.active_index = target;
        self.transitioning = Some(ticket);

        Navigation::Accepted {
            from,
            to: target,
            ticket,
        }
    }

    /// Releases the lock held by `ticket`. Returns false for a ticket that no
    /// longer owns the lock.
    pub fn finish_transition(&mut self, ticket: TransitionTicket) -> bool {
        if self.transitioning != Some(ticket) {
            return false;
        }
        self.transitioning = None;
        true
    }
}
