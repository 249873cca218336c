#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState {
    Unseen,
    Seen,
}

/// Per-instance notification badge. `Seen` is terminal for the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationBadge {
    state: BadgeState,
}

impl NotificationBadge {
    pub fn new(has_unseen: bool) -> Self {
        let state = if has_unseen {
            BadgeState::Unseen
        } else {
            BadgeState::Seen
        };
        Self { state }
    }

    #[cfg(test)]
    pub fn state(&self) -> BadgeState {
        self.state
    }

    pub fn has_unseen(&self) -> bool {
        self.state == BadgeState::Unseen
    }

    /// Marks notifications as seen. Returns true only on the transition.
    pub fn dismiss(&mut self) -> bool {
        let changed = self.state == BadgeState::Unseen;
        self.state = BadgeState::Seen;
        changed
    }
}

impl Default for NotificationBadge {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unseen() {
        let badge = NotificationBadge::default();
        assert_eq!(badge.state(), BadgeState::Unseen);
        assert!(badge.has_unseen());
    }

    #[test]
    fn dismiss_is_terminal_and_idempotent() {
        let mut badge = NotificationBadge::default();
        assert!(badge.dismiss());
        assert_eq!(badge.state(), BadgeState::Seen);

        assert!(!badge.dismiss());
        assert!(!badge.dismiss());
        assert_eq!(badge.state(), BadgeState::Seen);
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut first = NotificationBadge::new(true);
        let second = NotificationBadge::new(true);
        first.dismiss();
        assert!(!first.has_unseen());
        assert!(second.has_unseen());
    }

    #[test]
    fn constructed_seen_has_no_badge() {
        let mut badge = NotificationBadge::new(false);
        assert!(!badge.has_unseen());
        assert!(!badge.dismiss());
    }
}
