use std::time::Duration;

use dioxus::prelude::*;

/// Cancellable handle to a callback scheduled to run once.
///
/// The callback runs inside a Dioxus task, so it sees the scheduling
/// component's scope (router, context) like an event handler would.
/// Cancelling after the callback ran is a no-op.
pub struct OneShot {
    task: Task,
}

impl OneShot {
    /// Must be called from inside the Dioxus runtime (event handler, effect).
    pub fn schedule(delay: Duration, callback: impl FnOnce() + 'static) -> Self {
        let task = spawn(async move {
            sleep(delay).await;
            callback();
        });
        Self { task }
    }

    pub fn cancel(self) {
        self.task.cancel();
    }
}

#[cfg(feature = "web")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(feature = "web"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Slot holding at most one pending [`OneShot`], cancelled when the owner unmounts.
#[derive(Clone, Copy)]
pub struct OneShotSlot {
    handle: Signal<Option<OneShot>>,
}

impl OneShotSlot {
    /// Replaces (and cancels) any pending callback.
    pub fn schedule(&mut self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();
        self.handle.set(Some(OneShot::schedule(delay, callback)));
    }

    pub fn cancel(&mut self) {
        if let Some(prev) = self.handle.write().take() {
            prev.cancel();
        }
    }
}

pub fn use_one_shot() -> OneShotSlot {
    let slot = OneShotSlot {
        handle: use_signal(|| None),
    };

    // teardown on unmount
    use_drop(move || {
        let mut slot = slot;
        slot.cancel();
    });

    slot
}
