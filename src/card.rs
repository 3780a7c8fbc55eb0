use raylib::prelude::*;

/// One visual slot of the deck.
///
/// `logical_index` says which slot of the track the card is heading for and
/// drives visibility and the label; the card's position in the deck's array
/// never changes.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub position: Vector2,
    pub target_position: Vector2,
    pub size: Vector2,
    pub target_size: Vector2,
    pub logical_index: usize,

    pub(crate) start_position: Vector2,
    pub(crate) start_size: Vector2,
}

impl Card {
    pub fn new(position: Vector2, size: Vector2, logical_index: usize) -> Self {
        Self {
            position,
            target_position: position,
            size,
            target_size: size,
            logical_index,
            start_position: position,
            start_size: size,
        }
    }

    pub fn rect(&self) -> Rectangle {
        Rectangle::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(
            self.position.x + self.size.x * 0.5,
            self.position.y + self.size.y * 0.5,
        )
    }

    /// Remember where the card is now and where it is going.
    pub(crate) fn retarget(&mut self, position: Vector2, size: Vector2) {
        self.start_position = self.position;
        self.start_size = self.size;
        self.target_position = position;
        self.target_size = size;
    }

    pub(crate) fn interpolate(&mut self, t: f32) {
        self.position = self.start_position.lerp(self.target_position, t);
        self.size = self.start_size.lerp(self.target_size, t);
    }

    pub(crate) fn settle(&mut self) {
        self.position = self.target_position;
        self.size = self.target_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_is_settled() {
        let card = Card::new(Vector2::new(10.0, 20.0), Vector2::new(30.0, 40.0), 3);
        assert_eq!(card.target_position.x, 10.0);
        assert_eq!(card.target_size.y, 40.0);
        let r = card.rect();
        assert_eq!((r.x, r.y, r.width, r.height), (10.0, 20.0, 30.0, 40.0));
        let c = card.center();
        assert_eq!((c.x, c.y), (25.0, 40.0));
    }

    #[test]
    fn interpolation_starts_from_retarget_point() {
        let mut card = Card::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 10.0), 0);
        card.retarget(Vector2::new(100.0, 50.0), Vector2::new(20.0, 30.0));

        card.interpolate(0.5);
        assert_eq!((card.position.x, card.position.y), (50.0, 25.0));
        assert_eq!((card.size.x, card.size.y), (15.0, 20.0));

        // Linear in t, not compounded from the previous frame
        card.interpolate(0.75);
        assert_eq!((card.position.x, card.position.y), (75.0, 37.5));

        card.settle();
        assert_eq!((card.position.x, card.position.y), (100.0, 50.0));
    }
}
