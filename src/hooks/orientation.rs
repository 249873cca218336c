use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::{debug, warn};

#[cfg(feature = "web")]
use crate::error::DeviceError;
#[cfg(feature = "web")]
use crate::hooks::media::{media_query, window, Listener};
use crate::state::OrientationState;

#[cfg(feature = "web")]
const PORTRAIT_QUERY: &str = "(orientation: portrait)";

/// Whether the viewport is in portrait orientation.
///
/// Portrait on the first render so server and client markup agree; the real
/// orientation is measured in an effect once mounted. While landscape, one
/// best-effort portrait lock is requested per mount; a refusal is only logged.
/// The media listener is detached when the calling component unmounts.
pub fn use_orientation() -> Memo<bool> {
    #[cfg_attr(not(feature = "web"), allow(unused_mut))]
    let mut state = use_signal(|| OrientationState::new(None));

    #[cfg(feature = "web")]
    {
        let mut listener: Signal<Option<Listener>> = use_signal(|| None);
        use_hook(move || match watch(state) {
            Ok(l) => listener.set(Some(l)),
            Err(e) => warn!("[orientation] {e}; keeping last known orientation"),
        });
        use_effect(move || {
            if let Some(portrait) = measure() {
                state.write().observe(portrait);
            }
            request_lock(state);
        });
        use_drop(move || {
            // dropping the guard detaches the listener
            listener.write().take();
        });
    }

    use_memo(move || state.read().is_portrait())
}

#[cfg(feature = "web")]
fn measure() -> Option<bool> {
    match media_query(PORTRAIT_QUERY) {
        Ok(query) => Some(query.matches()),
        Err(e) => {
            warn!("[orientation] {e}; assuming portrait");
            None
        }
    }
}

#[cfg(feature = "web")]
fn watch(mut state: Signal<OrientationState>) -> Result<Listener, DeviceError> {
    let query = media_query(PORTRAIT_QUERY)?;
    Listener::attach(query.clone().into(), "change", move |_| {
        let changed = state.write().observe(query.matches());
        if let Some(portrait) = changed {
            debug!("[orientation] portrait={portrait}");
            request_lock(state);
        }
    })
}

#[cfg(feature = "web")]
fn request_lock(mut state: Signal<OrientationState>) {
    if state.peek().is_portrait() || !state.write().take_lock_request() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async {
        match lock_portrait().await {
            Ok(()) => debug!("[orientation] locked to portrait"),
            Err(e) => warn!("[orientation] {e}"),
        }
    });
}

#[cfg(feature = "web")]
async fn lock_portrait() -> Result<(), DeviceError> {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::OrientationLockType;

    let rejected = |e: JsValue| DeviceError::OrientationLock(format!("{e:?}"));
    let screen = window()?.screen().map_err(rejected)?;
    let promise = screen
        .orientation()
        .lock(OrientationLockType::Portrait)
        .map_err(rejected)?;
    JsFuture::from(promise).await.map(|_| ()).map_err(rejected)
}
