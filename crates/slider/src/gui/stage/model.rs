use crate::gui::stage::{CARD_HEIGHT, CARD_MAX_WIDTH};
use carousel::{CardStyle, Carousel, Navigation, TRANSITION_DURATION, TransitionTicket};
use gdk_pixbuf::Pixbuf;
use std::path::Path;
use std::time::{Duration, Instant};

/// Resolves after the transition window with the ticket it was given. Run it
/// as a component command so it dies with the component.
pub async fn unlock_after(ticket: TransitionTicket) -> TransitionTicket {
    tokio::time::sleep(TRANSITION_DURATION).await;
    ticket
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl CardFrame {
    /// Card box centred in the drawing area, at most [`CARD_MAX_WIDTH`] wide.
    pub fn layout(area_width: f64, area_height: f64) -> Self {
        Self {
            center_x: area_width / 2.0,
            center_y: area_height / 2.0,
            width: area_width.min(CARD_MAX_WIDTH),
            height: CARD_HEIGHT.min(area_height),
        }
    }
}

/// The animatable part of a [`CardStyle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translate_fraction: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Pose {
    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *to;
        }
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            translate_fraction: mix(self.translate_fraction, to.translate_fraction),
            scale: mix(self.scale, to.scale),
            opacity: mix(self.opacity, to.opacity),
        }
    }
}

impl From<&CardStyle> for Pose {
    fn from(style: &CardStyle) -> Self {
        Self {
            translate_fraction: style.translate_fraction,
            scale: style.scale,
            opacity: style.opacity,
        }
    }
}

/// CSS `ease`, i.e. cubic-bezier(0.25, 0.1, 0.25, 1.0).
pub fn ease(t: f64) -> f64 {
    const X1: f64 = 0.25;
    const Y1: f64 = 0.1;
    const X2: f64 = 0.25;
    const Y2: f64 = 1.0;

    let bezier = |p1: f64, p2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };

    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // x(s) is monotonic for these control points, bisect for s
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..32 {
        let mid = (lo + hi) / 2.0;
        if bezier(X1, X2, mid) < t {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier(Y1, Y2, (lo + hi) / 2.0)
}

/// Poses the cards had when a transition started.
#[derive(Debug, Clone)]
pub struct SlideAnimation {
    from: Vec<Pose>,
    started: Instant,
}

impl SlideAnimation {
    pub fn new(from: Vec<Pose>, started: Instant) -> Self {
        Self { from, started }
    }

    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        progress_at(elapsed)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    fn pose(&self, index: usize, target: Pose, now: Instant) -> Pose {
        match self.from.get(index) {
            Some(from) => from.lerp(&target, ease(self.progress(now))),
            None => target,
        }
    }
}

fn progress_at(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() / TRANSITION_DURATION.as_secs_f64()).min(1.0)
}

pub fn load_image(path: &Path) -> Option<Pixbuf> {
    match Pixbuf::from_file(path) {
        Ok(pixbuf) => Some(pixbuf),
        Err(e) => {
            log::warn!("Failed to load card image {}: {}", path.display(), e);
            None
        }
    }
}

/// Everything the drawing area needs: the carousel itself, one decoded
/// image per card and the animation in flight.
pub struct Stage {
    pub carousel: Carousel,
    pub images: Vec<Option<Pixbuf>>,
    pub animation: Option<SlideAnimation>,
}

impl Stage {
    pub fn new(carousel: Carousel, images: Vec<Option<Pixbuf>>) -> Self {
        Self {
            carousel,
            images,
            animation: None,
        }
    }

    pub fn image(&self, index: usize) -> Option<&Pixbuf> {
        self.images.get(index).and_then(Option::as_ref)
    }

    /// Current on-screen pose of every card, mid-animation if one is running.
    pub fn poses(&self, now: Instant) -> Vec<Pose> {
        self.carousel
            .descriptors()
            .map(|d| {
                let target = Pose::from(&d.style);
                match &self.animation {
                    Some(animation) => animation.pose(d.index, target, now),
                    None => target,
                }
            })
            .collect()
    }

    pub fn navigate(&mut self, target: usize, now: Instant) -> Navigation {
        let from = self.poses(now);
        let nav = self.carousel.request_navigate(target);
        if nav.is_accepted() {
            self.animation = Some(SlideAnimation::new(from, now));
        }
        nav
    }

    pub fn finish_transition(&mut self, ticket: TransitionTicket) -> bool {
        self.carousel.finish_transition(ticket)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.as_ref().is_some_and(|a| a.is_running(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel::{Card, Deck};

    fn stage() -> Stage {
        let deck = Deck::new(vec![
            Card::new(1, "a.svg"),
            Card::new(2, "b.svg"),
            Card::new(3, "c.svg"),
        ])
        .unwrap();
        Stage::new(Carousel::new(deck), vec![None, None, None])
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_ease_endpoints_and_shape() {
        assert!(approx(ease(0.0), 0.0));
        assert!(approx(ease(1.0), 1.0));
        assert!(ease(0.5) > 0.5);
        assert!(ease(0.25) < ease(0.5));
        assert!(approx(ease(-1.0), 0.0));
        assert!(approx(ease(2.0), 1.0));
    }

    #[test]
    fn test_pose_lerp() {
        let from = Pose::from(&CardStyle::NEXT);
        let to = Pose::from(&CardStyle::CURRENT);
        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);
        assert!(approx(from.lerp(&to, 0.5).translate_fraction, 0.5));
    }

    #[test]
    fn test_progress_saturates() {
        assert!(approx(progress_at(Duration::ZERO), 0.0));
        assert!(approx(progress_at(Duration::from_millis(250)), 0.5));
        assert!(approx(progress_at(Duration::from_secs(3)), 1.0));
    }

    #[test]
    fn test_navigate_animates_from_previous_poses() {
        let mut stage = stage();
        let start = Instant::now();

        assert!(stage.navigate(1, start).is_accepted());
        assert!(stage.is_animating(start));

        let poses = stage.poses(start);
        assert_eq!(poses[1], Pose::from(&CardStyle::NEXT));

        let done = start + TRANSITION_DURATION;
        assert!(!stage.is_animating(done));
        assert_eq!(stage.poses(done)[1], Pose::from(&CardStyle::CURRENT));
        assert_eq!(stage.poses(done)[0], Pose::from(&CardStyle::PREVIOUS));
    }

    #[test]
    fn test_ignored_navigation_keeps_still() {
        let mut stage = stage();
        let now = Instant::now();
        assert!(!stage.navigate(0, now).is_accepted());
        assert!(stage.animation.is_none());
    }

    #[test]
    fn test_card_frame_layout() {
        let wide = CardFrame::layout(1200.0, 300.0);
        assert_eq!((wide.center_x, wide.width, wide.height), (600.0, 430.0, 250.0));

        let narrow = CardFrame::layout(320.0, 300.0);
        assert_eq!(narrow.width, 320.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unlock_waits_for_transition() {
        let mut stage = stage();
        let ticket = match stage.navigate(2, Instant::now()) {
            Navigation::Accepted { ticket, .. } => ticket,
            other => panic!("unexpected {other:?}"),
        };

        let early = tokio::time::timeout(
            TRANSITION_DURATION - Duration::from_millis(1),
            unlock_after(ticket),
        )
        .await;
        assert!(early.is_err());
        assert!(stage.carousel.is_transitioning());

        let returned = unlock_after(ticket).await;
        assert!(stage.finish_transition(returned));
        assert!(!stage.carousel.is_transitioning());
        assert!(stage.navigate(0, Instant::now()).is_accepted());
    }
}
