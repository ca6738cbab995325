/// Cyclic cursor over a fixed, non-empty slide sequence.
///
/// The only mutable state of the whole widget lives here: the index of the
/// slide currently shown. Both transitions wrap, so the first slide's
/// predecessor is the last slide and the last slide's successor is the first.
pub struct SlideNavigator {
    current: usize,
    len: usize,
}

impl SlideNavigator {
    /// `len` is the slide count; the deck guarantees it is non-zero.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "deck construction rejects empty decks");
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Move to the next slide, wrapping to the first after the last.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
        log::debug!("advance -> slide {}/{}", self.current + 1, self.len);
    }

    /// Move to the previous slide, wrapping to the last before the first.
    pub fn retreat(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
        log::debug!("retreat -> slide {}/{}", self.current + 1, self.len);
    }

    /// Position indicator shown between the nav buttons, e.g. "2 / 3".
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_slide() {
        let nav = SlideNavigator::new(3);
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.position_label(), "1 / 3");
    }

    #[test]
    fn advance_steps_forward() {
        let mut nav = SlideNavigator::new(3);
        nav.advance();
        assert_eq!(nav.current(), 1);
        nav.advance();
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn advance_wraps_to_first() {
        let mut nav = SlideNavigator::new(3);
        nav.advance();
        nav.advance();
        assert_eq!(nav.current(), 2);
        nav.advance();
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn retreat_wraps_to_last() {
        let mut nav = SlideNavigator::new(5);
        nav.retreat();
        assert_eq!(nav.current(), 4);
    }

    #[test]
    fn retreat_is_inverse_of_advance() {
        for len in 1..=5 {
            for start in 0..len {
                let mut nav = SlideNavigator::new(len);
                for _ in 0..start {
                    nav.advance();
                }
                nav.advance();
                nav.retreat();
                assert_eq!(nav.current(), start);
                nav.retreat();
                nav.advance();
                assert_eq!(nav.current(), start);
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=6 {
            let mut nav = SlideNavigator::new(len);
            nav.advance(); // arbitrary starting state
            let start = nav.current();
            for _ in 0..len {
                nav.advance();
            }
            assert_eq!(nav.current(), start);
            for _ in 0..len {
                nav.retreat();
            }
            assert_eq!(nav.current(), start);
        }
    }

    #[test]
    fn index_stays_in_range_under_mixed_input() {
        let mut nav = SlideNavigator::new(4);
        for step in 0..1000 {
            if step % 3 == 0 {
                nav.retreat();
            } else {
                nav.advance();
            }
            assert!(nav.current() < nav.len());
        }
    }

    #[test]
    fn single_slide_deck_is_a_fixed_point() {
        let mut nav = SlideNavigator::new(1);
        nav.advance();
        assert_eq!(nav.current(), 0);
        nav.retreat();
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.position_label(), "1 / 1");
    }

    #[test]
    fn indicator_follows_arrow_sequence() {
        // Right, right, right cycles through the deck; left wraps back.
        let mut nav = SlideNavigator::new(3);
        nav.advance();
        assert_eq!(nav.position_label(), "2 / 3");
        nav.advance();
        assert_eq!(nav.position_label(), "3 / 3");
        nav.advance();
        assert_eq!(nav.position_label(), "1 / 3");
        nav.retreat();
        assert_eq!(nav.position_label(), "3 / 3");
    }
}
