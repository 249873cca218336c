use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{resolve_active, NavId, NAV_ITEMS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPlacement {
    /// Fixed tab bar along the bottom edge (phone layout).
    TabBar,
    /// Inline row under the header (wide layout).
    Rail,
}

fn icon(id: NavId) -> &'static str {
    match id {
        NavId::Home => "M3 11l9-8 9 8v9a1 1 0 0 1-1 1h-5v-6H9v6H4a1 1 0 0 1-1-1z",
        NavId::Trends => "M3 17l6-6 4 4 8-8M14 7h7v7",
        NavId::Realtime => "M13 2L4 14h7l-1 8 9-12h-7z",
        NavId::Billing => "M4 3h16v18l-3-2-3 2-2-2-2 2-3-2-3 2zM8 8h8M8 12h8",
        NavId::Profile => "M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM4 21a8 8 0 0 1 16 0",
    }
}

#[allow(non_snake_case)]
#[component]
pub fn NavBar(placement: NavPlacement) -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    let active = resolve_active(&path, &NAV_ITEMS).map(|item| item.id);

    let nav_class = match placement {
        NavPlacement::TabBar => "fixed inset-x-0 bottom-0 z-40 border-t border-slate-800 bg-slate-950/95 backdrop-blur-sm flex justify-around px-2 pb-[env(safe-area-inset-bottom)]",
        NavPlacement::Rail => "flex gap-2 rounded-2xl border border-slate-800 bg-slate-900/60 p-1",
    };

    rsx! {
        nav { class: "{nav_class}",
            {
                NAV_ITEMS.iter().map(|item| {
                    let cls = if active == Some(item.id) {
                        "flex flex-1 flex-col items-center gap-1 rounded-xl py-2 text-xs text-emerald-400"
                    } else {
                        "flex flex-1 flex-col items-center gap-1 rounded-xl py-2 text-xs text-slate-400 hover:text-slate-200"
                    };
                    rsx! {
                        Link { key: "{item.path}", to: Route::from(item.id), class: "{cls}",
                            svg { class: "h-5 w-5", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "1.8", stroke_linejoin: "round",
                                path { d: icon(item.id) }
                            }
                            "{item.label}"
                        }
                    }
                })
            }
        }
    }
}
