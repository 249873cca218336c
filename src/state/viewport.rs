/// True when a viewport of `width` logical pixels should use the compact layout.
pub fn is_compact(width: f64, breakpoint: f64) -> bool {
    width < breakpoint
}

/// Portrait tracking behind the rotate-device overlay.
///
/// Holds the last known reading and whether this activation has already
/// asked the device for a portrait lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationState {
    portrait: bool,
    lock_requested: bool,
}

impl OrientationState {
    /// `measured` is `None` when the host could not answer synchronously.
    /// Portrait is assumed in that case so the overlay never flashes on first paint.
    pub fn new(measured: Option<bool>) -> Self {
        Self {
            portrait: measured.unwrap_or(true),
            lock_requested: false,
        }
    }

    pub fn is_portrait(&self) -> bool {
        self.portrait
    }

    /// Records a reading and returns it only when it changed the state.
    pub fn observe(&mut self, portrait: bool) -> Option<bool> {
        if self.portrait == portrait {
            return None;
        }
        self.portrait = portrait;
        Some(portrait)
    }

    /// Returns true at most once per activation, while the viewport is landscape.
    pub fn take_lock_request(&mut self) -> bool {
        if self.portrait || self.lock_requested {
            return false;
        }
        self.lock_requested = true;
        true
    }
}

/// Compact-layout tracking against a fixed breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactLayout {
    breakpoint: f64,
    compact: Option<bool>,
}

impl CompactLayout {
    pub fn new(breakpoint: f64) -> Self {
        Self {
            breakpoint,
            compact: None,
        }
    }

    /// `None` until the first width measurement.
    pub fn is_compact(&self) -> Option<bool> {
        self.compact
    }

    /// Records a width and returns the new signal value only when it changed.
    pub fn observe(&mut self, width: f64) -> Option<bool> {
        let next = is_compact(width, self.breakpoint);
        if self.compact == Some(next) {
            return None;
        }
        self.compact = Some(next);
        Some(next)
    }
}
