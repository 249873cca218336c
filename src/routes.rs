use dioxus::prelude::*;

use crate::components::Shell;
use crate::screens::{Billing, Home, Profile, Realtime, Trends};
use crate::state::NavId;

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/trends")]
        Trends {},
        #[route("/realtime")]
        Realtime {},
        #[route("/billing")]
        Billing {},
        #[route("/profile")]
        Profile {},
}

impl From<NavId> for Route {
    fn from(id: NavId) -> Self {
        match id {
            NavId::Home => Route::Home {},
            NavId::Trends => Route::Trends {},
            NavId::Realtime => Route::Realtime {},
            NavId::Billing => Route::Billing {},
            NavId::Profile => Route::Profile {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NAV_ITEMS;

    #[test]
    fn nav_items_match_route_paths() {
        for item in NAV_ITEMS.iter() {
            assert_eq!(Route::from(item.id).to_string(), item.path);
        }
    }
}
