use std::time::Duration;

/// Hold accumulator behind the SOS control.
///
/// Press/release events arrive from the input layer; elapsed time is counted
/// in fixed ticks driven by the controller's 100 ms ticker. The emergency
/// fires exactly once per press, when the accumulated hold crosses the
/// threshold; releasing earlier discards all progress. A fresh press always
/// starts from zero; overlapping presses are not supported.
#[derive(Debug)]
pub struct SosHold {
    tick: Duration,
    threshold: Duration,
    held: Duration,
    fired: bool,
}

impl SosHold {
    pub fn new(tick: Duration, threshold: Duration) -> Self {
        Self {
            tick,
            threshold,
            held: Duration::ZERO,
            fired: false,
        }
    }

    /// Begin (or restart) a press.
    pub fn press(&mut self) {
        self.held = Duration::ZERO;
        self.fired = false;
    }

    /// One ticker step while the control is held. Returns `true` on the
    /// single step that crosses the threshold.
    pub fn tick(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.held += self.tick;
        if self.held >= self.threshold {
            self.fired = true;
            return true;
        }
        false
    }

    /// The press ended (or the pointer left the control); drop progress.
    pub fn release(&mut self) {
        self.held = Duration::ZERO;
        self.fired = false;
    }

    pub fn held(&self) -> Duration {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hold() -> SosHold {
        SosHold::new(Duration::from_millis(100), Duration::from_millis(3000))
    }

    #[test]
    fn fires_exactly_on_the_thirtieth_tick() {
        let mut sos = hold();
        sos.press();
        for _ in 0..29 {
            assert!(!sos.tick());
        }
        assert!(sos.tick());
    }

    #[test]
    fn fires_only_once_per_press() {
        let mut sos = hold();
        sos.press();
        let fired: usize = (0..100).filter(|_| sos.tick()).count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn early_release_discards_progress() {
        let mut sos = hold();
        sos.press();
        for _ in 0..29 {
            sos.tick();
        }
        sos.release();
        assert_eq!(sos.held(), Duration::ZERO);

        // The next press starts over; 29 more ticks still are not enough.
        sos.press();
        for _ in 0..29 {
            assert!(!sos.tick());
        }
    }

    #[test]
    fn new_press_resets_the_counter() {
        let mut sos = hold();
        sos.press();
        for _ in 0..20 {
            sos.tick();
        }
        sos.press();
        assert_eq!(sos.held(), Duration::ZERO);
    }
}
