use dioxus::prelude::*;

use crate::components::{Header, NavBar, NavPlacement, RotateOverlay};
use crate::hooks::{use_compact_layout, use_orientation};
use crate::routes::Route;

/// Layout wrapping every route: header, navigation, routed screen and the
/// rotate-device overlay.
#[allow(non_snake_case)]
#[component]
pub fn Shell() -> Element {
    let portrait = use_orientation();
    let compact = use_compact_layout();
    // unknown width keeps the phone layout
    let wide = compact() == Some(false);

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100",
            if !portrait() {
                RotateOverlay {}
            }
            // one tree for both layouts so screens are not remounted on resize
            div { class: if wide { "w-full max-w-5xl mx-auto p-6 space-y-6" } else { "w-full max-w-md mx-auto px-4 pt-5 pb-24 space-y-4" },
                Header {}
                if wide {
                    NavBar { placement: NavPlacement::Rail }
                }
                main { class: if wide { "grid gap-6 md:grid-cols-2" } else { "space-y-4" },
                    Outlet::<Route> {}
                }
            }
            if !wide {
                NavBar { placement: NavPlacement::TabBar }
            }
        }
    }
}
