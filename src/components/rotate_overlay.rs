use dioxus::prelude::*;

/// Full-viewport blocker shown while the device is held in landscape.
#[allow(non_snake_case)]
#[component]
pub fn RotateOverlay() -> Element {
    rsx! {
        div { class: "fixed inset-0 z-50 grid place-items-center bg-slate-950/95 backdrop-blur-sm p-8 text-center",
            role: "alertdialog",
            div { class: "space-y-4",
                svg { class: "mx-auto h-16 w-16 text-emerald-400 animate-spin [animation-duration:3s]", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "1.5",
                    rect { x: "7", y: "2", width: "10", height: "20", rx: "2" }
                    line { x1: "11", y1: "18", x2: "13", y2: "18" }
                }
                p { class: "text-lg font-medium text-slate-100", "Please rotate your device" }
                p { class: "text-sm text-slate-400", "This dashboard is designed for portrait mode." }
            }
        }
    }
}
