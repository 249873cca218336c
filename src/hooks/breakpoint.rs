use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::{debug, warn};

use crate::config::use_dashboard_config;
#[cfg(feature = "web")]
use crate::error::DeviceError;
#[cfg(feature = "web")]
use crate::hooks::media::{inner_width, window, Listener};
use crate::state::CompactLayout;

/// `Some(true)` while the viewport is narrower than the configured breakpoint.
/// `None` until a width has been measured, which happens after mount.
pub fn use_compact_layout() -> Memo<Option<bool>> {
    let breakpoint = use_dashboard_config().compact_breakpoint;
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut layout = use_signal(|| CompactLayout::new(breakpoint));

    #[cfg(feature = "web")]
    {
        let mut listener: Signal<Option<Listener>> = use_signal(|| None);
        use_hook(move || match watch(layout) {
            Ok(l) => listener.set(Some(l)),
            Err(e) => warn!("[breakpoint] {e}; layout stays as measured"),
        });
        use_effect(move || {
            if let Some(width) = measure() {
                layout.write().observe(width);
            }
        });
        use_drop(move || {
            listener.write().take();
        });
    }

    use_memo(move || layout.read().is_compact())
}

#[cfg(feature = "web")]
fn measure() -> Option<f64> {
    match inner_width() {
        Ok(width) => Some(width),
        Err(e) => {
            warn!("[breakpoint] {e}");
            None
        }
    }
}

#[cfg(feature = "web")]
fn watch(mut layout: Signal<CompactLayout>) -> Result<Listener, DeviceError> {
    Listener::attach(window()?.into(), "resize", move |_| {
        let Some(width) = measure() else { return };
        let changed = layout.write().observe(width);
        if let Some(compact) = changed {
            debug!("[breakpoint] compact={compact} at {width}px");
        }
    })
}
