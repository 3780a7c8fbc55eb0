use std::f64::consts::PI;

/// Half a sine wave across the deck, used to shrink and fade cards near the
/// edges of the visible window.
///
/// `index` is the card's logical index and `count` the number of cards; the
/// value rises from the left edge, peaks in the middle and falls towards the
/// last index. Indices at the very edges come out near zero or negative.
/// `count` must be greater than zero.
pub fn ease(index: usize, count: usize) -> f32 {
    debug_assert!(count > 0, "ease() needs a non-empty deck");
    ((index as f64 - 0.5) / count as f64 * PI).sin() as f32
}
