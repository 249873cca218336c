#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavId {
    Home,
    Trends,
    Realtime,
    Billing,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: NavId,
    pub label: &'static str,
    pub path: &'static str,
}

/// Navigation destinations, in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        id: NavId::Home,
        label: "Home",
        path: "/",
    },
    NavItem {
        id: NavId::Trends,
        label: "Trends",
        path: "/trends",
    },
    NavItem {
        id: NavId::Realtime,
        label: "Realtime",
        path: "/realtime",
    },
    NavItem {
        id: NavId::Billing,
        label: "Billing",
        path: "/billing",
    },
    NavItem {
        id: NavId::Profile,
        label: "Profile",
        path: "/profile",
    },
];

/// Item whose path equals `current` exactly. No prefix matching.
pub fn resolve_active<'a>(current: &str, items: &'a [NavItem]) -> Option<&'a NavItem> {
    items.iter().find(|item| item.path == current)
}
