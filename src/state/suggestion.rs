use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Collapsed,
    /// Expanded with the delayed navigation still pending.
    Expanding,
    /// The delayed navigation has been handed to the router.
    Navigated,
    /// The owning view unmounted; nothing may fire any more.
    TornDown,
}

/// Expand-then-navigate state of the smart suggestion panel.
///
/// The machine decides *whether* the navigation may run; scheduling the
/// timer is left to the caller, which passes the returned delay to a one-shot
/// and calls [`SuggestionPanel::fire`] when it elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionPanel {
    phase: PanelPhase,
    delay: Duration,
}

impl SuggestionPanel {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: PanelPhase::Collapsed,
            delay,
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.phase, PanelPhase::Expanding | PanelPhase::Navigated)
    }

    /// The trigger control is disabled as soon as the panel leaves `Collapsed`.
    pub fn control_disabled(&self) -> bool {
        self.phase != PanelPhase::Collapsed
    }

    /// Expands the panel. Returns the delay to schedule, or `None` if the
    /// panel was already triggered.
    pub fn trigger(&mut self) -> Option<Duration> {
        if self.phase != PanelPhase::Collapsed {
            return None;
        }
        self.phase = PanelPhase::Expanding;
        Some(self.delay)
    }

    /// Called when the one-shot elapses. Returns true when the caller must navigate.
    pub fn fire(&mut self) -> bool {
        if self.phase != PanelPhase::Expanding {
            return false;
        }
        self.phase = PanelPhase::Navigated;
        true
    }

    /// Returns true if a navigation was still pending and its timer must be cancelled.
    pub fn teardown(&mut self) -> bool {
        let pending = self.phase == PanelPhase::Expanding;
        self.phase = PanelPhase::TornDown;
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SUGGESTION_DELAY;

    /// Manual clock standing in for the browser timer queue.
    #[derive(Default)]
    struct FakeTimers {
        now: Duration,
        pending: Vec<Duration>,
    }

    impl FakeTimers {
        fn schedule(&mut self, delay: Duration) {
            self.pending.push(self.now + delay);
        }

        fn cancel_all(&mut self) {
            self.pending.clear();
        }

        /// Advances the clock and returns how many timers fired.
        fn advance(&mut self, by: Duration, panel: &mut SuggestionPanel) -> usize {
            self.now += by;
            let now = self.now;
            let (due, rest): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|at| *at <= now);
            self.pending = rest;
            due.into_iter().filter(|_| panel.fire()).count()
        }
    }

    fn trigger(panel: &mut SuggestionPanel, timers: &mut FakeTimers) {
        if let Some(delay) = panel.trigger() {
            timers.schedule(delay);
        }
    }

    #[test]
    fn starts_collapsed() {
        let panel = SuggestionPanel::new(SUGGESTION_DELAY);
        assert_eq!(panel.phase(), PanelPhase::Collapsed);
        assert!(!panel.is_expanded());
        assert!(!panel.control_disabled());
    }

    #[test]
    fn trigger_disables_control_immediately() {
        let mut panel = SuggestionPanel::new(SUGGESTION_DELAY);
        assert_eq!(panel.trigger(), Some(SUGGESTION_DELAY));
        assert!(panel.is_expanded());
        assert!(panel.control_disabled());
    }

    #[test]
    fn navigates_once_after_delay() {
        let mut panel = SuggestionPanel::new(SUGGESTION_DELAY);
        let mut timers = FakeTimers::default();
        trigger(&mut panel, &mut timers);

        assert_eq!(timers.advance(Duration::from_millis(499), &mut panel), 0);
        assert_eq!(timers.advance(Duration::from_millis(1), &mut panel), 1);
        assert_eq!(timers.advance(Duration::from_secs(5), &mut panel), 0);
        assert_eq!(panel.phase(), PanelPhase::Navigated);
        assert!(panel.is_expanded());
    }

    #[test]
    fn double_trigger_navigates_at_most_once() {
        let mut panel = SuggestionPanel::new(SUGGESTION_DELAY);
        let mut timers = FakeTimers::default();
        trigger(&mut panel, &mut timers);
        timers.advance(Duration::from_millis(10), &mut panel);
        trigger(&mut panel, &mut timers);

        assert_eq!(timers.pending.len(), 1);
        assert_eq!(timers.advance(Duration::from_secs(1), &mut panel), 1);
    }

    #[test]
    fn teardown_before_delay_suppresses_navigation() {
        let mut panel = SuggestionPanel::new(SUGGESTION_DELAY);
        let mut timers = FakeTimers::default();
        trigger(&mut panel, &mut timers);
        timers.advance(Duration::from_millis(250), &mut panel);

        assert!(panel.teardown());
        timers.cancel_all();
        assert_eq!(timers.advance(Duration::from_secs(1), &mut panel), 0);
    }

    #[test]
    fn stale_fire_after_teardown_is_ignored() {
        let mut panel = SuggestionPanel::new(SUGGESTION_DELAY);
        let mut timers = FakeTimers::default();
        trigger(&mut panel, &mut timers);
        panel.teardown();

        // timer not cancelled: the machine still refuses to navigate
        assert_eq!(timers.advance(Duration::from_secs(1), &mut panel), 0);
        assert_eq!(panel.phase(), PanelPhase::TornDown);
    }

    #[test]
    fn teardown_after_navigation_has_nothing_pending() {
        let mut panel = SuggestionPanel::new(SUGGESTION_DELAY);
        panel.trigger();
        assert!(panel.fire());
        assert!(!panel.teardown());
        assert!(!panel.fire());
    }

    #[test]
    fn teardown_without_trigger_has_nothing_pending() {
        let mut panel = SuggestionPanel::new(SUGGESTION_DELAY);
        assert!(!panel.teardown());
        assert_eq!(panel.trigger(), None);
    }
}
