use std::ops::RangeInclusive;

use raylib::prelude::*;
use tracing::{debug, trace};

use crate::card::Card;
use crate::constants::*;
use crate::easing::ease;
use crate::error::{Error, Result};
use crate::renderer::Renderer;

/// Geometry of the card track.
#[derive(Debug, Clone)]
pub struct DeckLayout {
    pub card_width: f32,
    pub card_height: f32,
    pub padding: f32,
    pub shift_x: f32,
    pub baseline_y: f32,
    /// Logical indices that get drawn.
    pub visible: RangeInclusive<usize>,
}

impl Default for DeckLayout {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            padding: CARD_PADDING,
            shift_x: CARD_SHIFT_X,
            baseline_y: CARD_BASELINE_Y,
            visible: FIRST_VISIBLE..=LAST_VISIBLE,
        }
    }
}

impl DeckLayout {
    /// Rest geometry of the slot at `index`: shrunk by the easing curve and
    /// kept centered inside its pitch.
    fn slot(&self, index: usize, count: usize) -> (Vector2, Vector2) {
        let scale = ease(index, count);

        let width = self.card_width * scale;
        let height = self.card_height * scale;
        let x_offset = (self.card_width - width) * 0.5 + self.shift_x;
        let y_offset = (self.card_height - height) * 0.5;

        let position = Vector2::new(
            self.padding + index as f32 * (self.card_width + self.padding) + x_offset,
            self.baseline_y + y_offset,
        );
        (position, Vector2::new(width, height))
    }
}

/// A row of cards that scrolls left one slot at a time.
///
/// Icons, when given, are borrowed from the caller and stay attached to the
/// card at the same array position for the deck's whole life.
pub struct Deck<'a, I = Texture2D> {
    cards: Vec<Card>,
    layout: DeckLayout,
    icons: Option<&'a [I]>,

    transition_duration: f32,
    elapsed: f32,
    is_animating: bool,
}

impl<'a, I> Deck<'a, I> {
    pub fn new(count: usize, transition_duration: f32, icons: Option<&'a [I]>) -> Result<Self> {
        Self::with_layout(count, transition_duration, icons, DeckLayout::default())
    }

    pub fn with_layout(
        count: usize,
        transition_duration: f32,
        icons: Option<&'a [I]>,
        layout: DeckLayout,
    ) -> Result<Self> {
        if count == 0 {
            return Err(Error::EmptyDeck);
        }
        if !(transition_duration >= 0.0) {
            return Err(Error::InvalidDuration(transition_duration));
        }
        if let Some(icons) = icons {
            if icons.len() != count {
                return Err(Error::IconCountMismatch { expected: count, actual: icons.len() });
            }
        }

        let cards = (0..count)
            .map(|i| {
                let (position, size) = layout.slot(i, count);
                Card::new(position, size, i)
            })
            .collect();

        debug!(count, transition_duration, icons = icons.is_some(), "Created card deck");

        Ok(Self {
            cards,
            layout,
            icons,
            transition_duration,
            elapsed: 0.0,
            is_animating: false,
        })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn transition_duration(&self) -> f32 {
        self.transition_duration
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_animating
    }

    /// Start shifting every card one slot to the left. The card falling off
    /// the left edge is sent to the rightmost slot.
    ///
    /// Returns `false` when a transition is already running.
    pub fn begin_advance(&mut self) -> bool {
        if self.cards.is_empty() || self.is_animating {
            return false;
        }

        let count = self.cards.len();
        let carry = self.cards[count - 1]; // cache the final card for later

        for card in self.cards.iter_mut() {
            card.logical_index = (card.logical_index + count - 1) % count;
        }
        // Each card moves into its predecessor's slot
        for i in 1..count {
            let (position, size) = (self.cards[i - 1].position, self.cards[i - 1].size);
            self.cards[i].retarget(position, size);
        }
        self.cards[0].retarget(carry.position, carry.size);
        self.cards[0].logical_index = carry.logical_index;

        self.is_animating = true;
        self.elapsed = 0.0;

        debug!(first = self.cards[0].logical_index, "Deck advancing");
        true
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= self.transition_duration {
            // Stop animation and set the cards to their final position
            self.is_animating = false;
            for card in self.cards.iter_mut() {
                card.settle();
            }
            trace!(elapsed = self.elapsed, "Deck settled");
        } else {
            let t = self.elapsed / self.transition_duration;
            for card in self.cards.iter_mut() {
                card.interpolate(t);
            }
        }
    }

    /// One frame: advance the running transition by `dt`, then start a new
    /// one if asked to. Returns whether a new transition started.
    pub fn tick(&mut self, dt: f32, advance_requested: bool) -> bool {
        self.update(dt);
        advance_requested && self.begin_advance()
    }

    pub fn draw<R: Renderer<Icon = I>>(&self, r: &mut R) {
        let count = self.cards.len();

        for (i, card) in self.cards.iter().enumerate() {
            if !self.layout.visible.contains(&card.logical_index) {
                continue;
            }

            let scale = ease(card.logical_index, count).max(CARD_MIN_SCALE);
            let rect = card.rect();

            r.fill_rounded_rect(rect, Color::LIGHTGRAY.alpha(scale));
            r.stroke_rounded_rect(rect, 3.0 * scale, Color::RAYWHITE.alpha(scale));

            match self.icons {
                Some(icons) => r.icon(&icons[i], rect, Color::WHITE),
                None => {
                    let center = card.center();
                    r.text(
                        &format!("{}", card.logical_index + 1),
                        center.x as i32,
                        center.y as i32,
                        CARD_LABEL_SIZE,
                        Color::RAYWHITE,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{Command, RecordingRenderer};
    use rstest::rstest;

    fn deck(count: usize, duration: f32) -> Deck<'static, u32> {
        Deck::new(count, duration, None).unwrap()
    }

    fn indices<I>(deck: &Deck<'_, I>) -> Vec<usize> {
        deck.cards().iter().map(|c| c.logical_index).collect()
    }

    fn geometry<I>(deck: &Deck<'_, I>) -> Vec<(f32, f32, f32, f32)> {
        deck.cards()
            .iter()
            .map(|c| (c.position.x, c.position.y, c.size.x, c.size.y))
            .collect()
    }

    fn run_to_completion<I>(deck: &mut Deck<'_, I>) {
        deck.update(deck.transition_duration() + 1.0);
        assert!(!deck.is_scrolling());
    }

    #[rstest]
    #[case(0, 0.25)]
    #[case(14, -0.1)]
    #[case(14, f32::NAN)]
    fn rejects_invalid_construction(#[case] count: usize, #[case] duration: f32) {
        assert!(Deck::<u32>::new(count, duration, None).is_err());
    }

    #[test]
    fn rejects_icon_count_mismatch() {
        let icons = [1u32, 2, 3];
        match Deck::new(4, 0.25, Some(&icons[..])) {
            Err(Error::IconCountMismatch { expected: 4, actual: 3 }) => {}
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(14)]
    #[case(31)]
    fn starts_as_identity_permutation(#[case] count: usize) {
        let deck = deck(count, 0.25);
        assert_eq!(deck.len(), count);
        assert_eq!(indices(&deck), (0..count).collect::<Vec<_>>());
        assert!(!deck.is_scrolling());
    }

    #[test]
    fn reference_layout() {
        let deck = deck(14, 0.25);
        let card = deck.cards()[7];
        let scale = ease(7, 14);
        assert!((card.size.x - 100.0 * scale).abs() < 1e-4);
        assert!((card.size.y - 150.0 * scale).abs() < 1e-4);
        let x = 12.0 + 7.0 * 112.0 + (100.0 - 100.0 * scale) * 0.5 - 335.0;
        assert!((card.position.x - x).abs() < 1e-3);
        assert!((card.position.y - (280.0 + (150.0 - 150.0 * scale) * 0.5)).abs() < 1e-3);
        // Settled from the start
        assert_eq!(card.target_position.x, card.position.x);
        assert_eq!(card.target_size.y, card.size.y);
    }

    #[test]
    fn advance_scenario() {
        let mut deck = deck(14, 0.25);
        let first = deck.cards()[0];
        let last = deck.cards()[13];

        assert!(deck.begin_advance());
        deck.update(0.1);
        assert!(deck.is_scrolling());

        let card = deck.cards()[0];
        let expected_x = first.position.x + (last.position.x - first.position.x) * 0.4;
        let expected_w = first.size.x + (last.size.x - first.size.x) * 0.4;
        assert!((card.position.x - expected_x).abs() < 1e-3);
        assert!((card.size.x - expected_w).abs() < 1e-3);

        deck.update(0.2);
        assert!(!deck.is_scrolling());
        assert_eq!(indices(&deck), vec![13, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(14)]
    #[case(30)]
    fn k_advances_decrement_indices(#[case] k: usize) {
        let count = 14;
        let mut deck = deck(count, 0.25);
        for _ in 0..k {
            assert!(deck.begin_advance());
            run_to_completion(&mut deck);
        }
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.logical_index, (i + count * k - k) % count);
        }
    }

    #[test]
    fn settled_cards_sit_in_their_logical_slot() {
        let mut deck = deck(14, 0.25);
        let slots = geometry(&deck);
        for _ in 0..3 {
            deck.begin_advance();
            run_to_completion(&mut deck);
        }
        for card in deck.cards() {
            let slot = slots[card.logical_index];
            assert_eq!((card.position.x, card.position.y, card.size.x, card.size.y), slot);
        }
    }

    #[test]
    fn advance_while_scrolling_is_noop() {
        let mut deck = deck(14, 0.25);
        deck.begin_advance();
        deck.update(0.05);

        let before_indices = indices(&deck);
        let before_geometry = geometry(&deck);
        let before_targets: Vec<_> = deck.cards().iter().map(|c| c.target_position.x).collect();

        assert!(!deck.begin_advance());
        assert_eq!(indices(&deck), before_indices);
        assert_eq!(geometry(&deck), before_geometry);
        let after_targets: Vec<_> = deck.cards().iter().map(|c| c.target_position.x).collect();
        assert_eq!(after_targets, before_targets);
    }

    #[test]
    fn update_when_idle_is_noop() {
        let mut deck = deck(14, 0.25);
        let before = geometry(&deck);
        deck.update(0.1);
        deck.update(10.0);
        assert_eq!(geometry(&deck), before);
        assert!(!deck.is_scrolling());
    }

    #[test]
    fn snaps_exactly_to_targets() {
        let mut deck = deck(14, 0.25);
        deck.begin_advance();
        let targets: Vec<_> = deck
            .cards()
            .iter()
            .map(|c| (c.target_position.x, c.target_position.y, c.target_size.x, c.target_size.y))
            .collect();

        for _ in 0..16 {
            deck.update(1.0 / 60.0);
        }
        assert!(!deck.is_scrolling());
        assert_eq!(geometry(&deck), targets);
    }

    #[test]
    fn zero_duration_settles_on_first_update() {
        let mut deck = deck(14, 0.0);
        deck.begin_advance();
        deck.update(0.0);
        assert!(!deck.is_scrolling());
        assert_eq!(indices(&deck)[0], 13);
    }

    #[test]
    fn interpolation_is_linear_and_monotonic() {
        let mut deck = deck(14, 1.0);
        let start = geometry(&deck);
        deck.begin_advance();
        let targets: Vec<_> = deck.cards().iter().map(|c| c.target_position.x).collect();

        let mut previous = start.iter().map(|g| g.0).collect::<Vec<_>>();
        for step in 1..10 {
            deck.update(0.1);
            let t = step as f32 * 0.1;
            for (i, card) in deck.cards().iter().enumerate() {
                let from = start[i].0;
                let to = targets[i];
                let expected = from + (to - from) * t;
                assert!((card.position.x - expected).abs() < 1e-2, "card {i} at step {step}");
                // Each step moves strictly closer to the target
                assert!((to - card.position.x).abs() < (to - previous[i]).abs());
                previous[i] = card.position.x;
            }
        }
    }

    #[test]
    fn tick_updates_before_advancing() {
        let mut deck = deck(14, 0.25);
        assert!(deck.tick(1.0 / 60.0, true));
        assert!(deck.is_scrolling());
        // Requests during the transition are dropped
        assert!(!deck.tick(0.1, true));
        assert!(!deck.tick(0.2, false));
        assert!(!deck.is_scrolling());
        assert!(deck.tick(1.0 / 60.0, true));
        assert_eq!(indices(&deck)[0], 12);
    }

    #[test]
    fn draws_only_the_visible_window() {
        let deck = deck(14, 0.25);
        let mut r = RecordingRenderer::default();
        deck.draw(&mut r);

        assert_eq!(r.fills().len(), 8);
        let strokes = r.commands.iter().filter(|c| matches!(c, Command::Stroke { .. })).count();
        assert_eq!(strokes, 8);
        assert_eq!(r.texts(), (3..=10).map(|i| i.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn draw_clamps_border_scale() {
        let deck = deck(14, 0.25);
        let mut r = RecordingRenderer::default();
        deck.draw(&mut r);

        for command in &r.commands {
            if let Command::Stroke { thickness, color, .. } = command {
                assert!(*thickness >= 1.5 - 1e-6);
                assert!(color.a >= 127);
            }
        }
        // ease(2, 14) is about 0.33, so the leftmost visible card is clamped
        let (_, color) = r.fills()[0];
        assert_eq!(color.a, 127);
    }

    #[test]
    fn colors_keep_rgb_and_fade_with_scale() {
        let deck = deck(14, 0.25);
        let mut r = RecordingRenderer::default();
        deck.draw(&mut r);

        let gray = Color::LIGHTGRAY;
        for (_, color) in r.fills() {
            assert_eq!((color.r, color.g, color.b), (gray.r, gray.g, gray.b));
        }
        // Logical 7 sits at the top of the curve
        let (_, peak) = r.fills()[5];
        assert_eq!(peak.a, (ease(7, 14) * 255.0) as u8);

        let white = Color::RAYWHITE;
        let strokes: Vec<_> = r
            .commands
            .iter()
            .filter_map(|c| match c {
                Command::Stroke { thickness, color, .. } => Some((*thickness, *color)),
                _ => None,
            })
            .collect();
        let (thickness, color) = strokes[0];
        assert_eq!(thickness, 1.5);
        assert_eq!((color.r, color.g, color.b, color.a), (white.r, white.g, white.b, 127));
    }

    #[test]
    fn draw_uses_current_geometry() {
        let mut deck = deck(14, 0.25);
        deck.begin_advance();
        deck.update(0.1);

        let mut r = RecordingRenderer::default();
        deck.draw(&mut r);
        let visible: Vec<_> = deck
            .cards()
            .iter()
            .filter(|c| (2..=9).contains(&c.logical_index))
            .map(|c| c.position.x)
            .collect();
        let drawn: Vec<_> = r.fills().iter().map(|(rect, _)| rect.x).collect();
        assert_eq!(drawn, visible);
    }

    #[test]
    fn icons_stay_with_their_array_position() {
        let icons: Vec<u32> = (100..114).collect();
        let mut deck = Deck::new(14, 0.25, Some(&icons[..])).unwrap();

        let mut r = RecordingRenderer::default();
        deck.draw(&mut r);
        assert_eq!(r.icons(), (102..=109).collect::<Vec<_>>());
        assert!(r.texts().is_empty());

        deck.begin_advance();
        run_to_completion(&mut deck);

        // Logical 2..=9 now live at array positions 3..=10
        let mut r = RecordingRenderer::default();
        deck.draw(&mut r);
        assert_eq!(r.icons(), (103..=110).collect::<Vec<_>>());
    }
}
