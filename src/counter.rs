use std::fmt;

/// A message naming one of the two counter transitions.
///
/// Hosts map their "increase" and "decrease" gestures onto these and feed
/// them to [`Counter::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
}

/// A single signed integer, starting at zero, changed only by
/// [`increment`](Counter::increment) and [`decrement`](Counter::decrement).
///
/// Both transitions wrap at the ends of the `i32` range, so
/// `i32::MAX` increments to `i32::MIN` and the reverse.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: i32,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn increment(&mut self) -> i32 {
        self.value = self.value.wrapping_add(1);
        self.value
    }

    pub fn decrement(&mut self) -> i32 {
        self.value = self.value.wrapping_sub(1);
        self.value
    }

    /// Runs the transition named by `action` and returns the new value.
    pub fn apply(&mut self, action: Action) -> i32 {
        match action {
            Action::Increment => self.increment(),
            Action::Decrement => self.decrement(),
        }
    }

    /// Plain decimal text of the value: no padding, no grouping, `-` for negatives.
    pub fn current_display(&self) -> String {
        self.value.to_string()
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let counter = Counter::new();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.current_display(), "0");
    }

    #[test]
    fn increment_from_zero_shows_one() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.current_display(), "1");
    }

    #[test]
    fn decrement_from_zero_shows_minus_one() {
        let mut counter = Counter::new();
        assert_eq!(counter.decrement(), -1);
        assert_eq!(counter.current_display(), "-1");
    }

    #[test]
    fn three_up_one_down() {
        let mut counter = Counter::new();
        for _ in 0..3 {
            counter.increment();
        }
        counter.decrement();
        assert_eq!(counter.current_display(), "2");
    }

    #[test]
    fn display_tracks_repeated_increments() {
        let mut counter = Counter::new();
        for n in 1..=1500 {
            counter.increment();
            assert_eq!(counter.current_display(), n.to_string());
        }
        // no grouping separators
        assert_eq!(counter.current_display(), "1500");
    }

    #[test]
    fn transitions_are_inverse() {
        for start in [0, 7, -42, i32::MAX - 1, i32::MIN + 1] {
            let mut counter = Counter { value: start };
            counter.increment();
            counter.decrement();
            assert_eq!(counter.value(), start);

            counter.decrement();
            counter.increment();
            assert_eq!(counter.value(), start);
        }
    }

    #[test]
    fn display_is_pure() {
        let mut counter = Counter::new();
        counter.decrement();
        counter.decrement();
        let first = counter.current_display();
        assert_eq!(counter.current_display(), first);
        assert_eq!(counter.current_display(), first);
        assert_eq!(counter.value(), -2);
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut counter = Counter::new();
        assert_eq!(counter.apply(Action::Increment), 1);
        assert_eq!(counter.apply(Action::Increment), 2);
        assert_eq!(counter.apply(Action::Decrement), 1);
    }

    #[test]
    fn wraps_at_range_ends() {
        let mut counter = Counter { value: i32::MAX };
        assert_eq!(counter.increment(), i32::MIN);
        assert_eq!(counter.current_display(), "-2147483648");
        assert_eq!(counter.decrement(), i32::MAX);
        assert_eq!(counter.current_display(), "2147483647");
    }

    #[test]
    fn display_trait_matches_projection() {
        let mut counter = Counter::new();
        counter.apply(Action::Decrement);
        assert_eq!(format!("{counter}"), counter.current_display());
    }
}
