pub mod badge;
pub mod nav;
pub mod suggestion;
pub mod viewport;

pub use badge::NotificationBadge;
pub use nav::{resolve_active, NavId, NAV_ITEMS};
pub use suggestion::SuggestionPanel;
pub use viewport::{CompactLayout, OrientationState};
