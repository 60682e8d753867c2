/// Per-round hint countdown.
///
/// Pure value type: it only knows how many seconds remain and whether it is
/// still running. The one-second tick source is owned by the UI layer, which
/// must cancel the old source before arming a new one so two countdowns never
/// double-decrement the same value. `active == false` is the unlock signal:
/// the hint may now be revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    active: bool,
}

impl Countdown {
    /// Starts a countdown at `seconds`. Starting at zero is already unlocked.
    #[must_use]
    pub fn start(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            active: seconds > 0,
        }
    }

    /// Consumes one elapsed second. Deactivates on reaching zero; ticking an
    /// inactive countdown has no effect.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.active = false;
        }
    }

    /// Re-arms the countdown at `seconds`, reactivating it.
    pub fn reset(&mut self, seconds: u32) {
        *self = Self::start(seconds);
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deactivates_after_counting_down_to_zero() {
        let mut countdown = Countdown::start(10);
        for _ in 0..10 {
            assert!(countdown.is_active());
            countdown.tick();
        }
        assert!(!countdown.is_active());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn ticking_inactive_countdown_is_a_no_op() {
        let mut countdown = Countdown::start(1);
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_active());
    }

    #[test]
    fn reset_reactivates_at_any_point() {
        let mut countdown = Countdown::start(10);
        countdown.tick();
        countdown.tick();
        countdown.reset(10);
        assert!(countdown.is_active());
        assert_eq!(countdown.remaining(), 10);
    }

    #[test]
    fn starting_at_zero_is_already_unlocked() {
        let countdown = Countdown::start(0);
        assert!(!countdown.is_active());
    }
}
