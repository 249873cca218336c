#![cfg(feature = "web")]
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MediaQueryList, Window};

use crate::error::DeviceError;

/// DOM event listener that detaches itself from its target when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DeviceError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| DeviceError::Listener {
                event,
                reason: format!("{e:?}"),
            })?;
        Ok(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn window() -> Result<Window, DeviceError> {
    web_sys::window().ok_or(DeviceError::NoWindow)
}

pub fn media_query(query: &str) -> Result<MediaQueryList, DeviceError> {
    window()?
        .match_media(query)
        .ok()
        .flatten()
        .ok_or_else(|| DeviceError::MediaQuery(query.to_string()))
}

pub fn inner_width() -> Result<f64, DeviceError> {
    window()?
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .ok_or(DeviceError::Width)
}
