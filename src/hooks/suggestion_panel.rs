use dioxus::prelude::*;

use dioxus::logger::tracing::info;

use crate::config::use_dashboard_config;
use crate::hooks::one_shot::{use_one_shot, OneShotSlot};
use crate::routes::Route;
use crate::state::suggestion::PanelPhase;
use crate::state::SuggestionPanel;

/// Suggestion panel wired to the router. Expanding schedules one navigation
/// to the configured destination; it is dropped if the caller unmounts first.
#[derive(Clone)]
pub struct SuggestionControls {
    panel: Signal<SuggestionPanel>,
    timer: OneShotSlot,
    nav: Navigator,
    destination: Route,
}

impl SuggestionControls {
    pub fn phase(&self) -> PanelPhase {
        self.panel.read().phase()
    }

    pub fn is_expanded(&self) -> bool {
        self.panel.read().is_expanded()
    }

    pub fn control_disabled(&self) -> bool {
        self.panel.read().control_disabled()
    }

    pub fn expand(&mut self) {
        let Some(delay) = self.panel.write().trigger() else {
            return;
        };
        info!("[suggestions] expanded; navigating in {} ms", delay.as_millis());
        let mut panel = self.panel;
        let nav = self.nav;
        let destination = self.destination.clone();
        self.timer.schedule(delay, move || {
            let go = panel.try_write().map(|mut p| p.fire()).unwrap_or(false);
            if go {
                nav.push(destination);
            }
        });
    }
}

pub fn use_suggestion_panel() -> SuggestionControls {
    let config = use_dashboard_config();
    let mut panel = use_signal(|| SuggestionPanel::new(config.suggestion_delay));
    let timer = use_one_shot();
    let nav = navigator();

    // teardown on unmount: no navigation may fire afterwards
    use_drop(move || {
        if let Ok(mut p) = panel.try_write() {
            if p.teardown() {
                info!("[suggestions] unmounted with navigation pending; cancelled");
            }
        }
    });

    SuggestionControls {
        panel,
        timer,
        nav,
        destination: config.suggestion_destination,
    }
}
