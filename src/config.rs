use std::time::Duration;

use dioxus::prelude::*;

use crate::routes::Route;

/// Viewports narrower than this (logical px) use the phone layout.
pub const COMPACT_BREAKPOINT: f64 = 768.0;
/// Delay between expanding the suggestion panel and leaving for the profile.
pub const SUGGESTION_DELAY: Duration = Duration::from_millis(500);

/// Tunables shared through context by [`crate::app::App`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub compact_breakpoint: f64,
    pub suggestion_delay: Duration,
    pub suggestion_destination: Route,
    /// Initial state of the header badge for each mounted header.
    pub notifications_unseen: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: COMPACT_BREAKPOINT,
            suggestion_delay: SUGGESTION_DELAY,
            suggestion_destination: Route::Profile {},
            notifications_unseen: true,
        }
    }
}

pub fn use_dashboard_config() -> DashboardConfig {
    use_context::<DashboardConfig>()
}
