use dioxus::prelude::*;

use dioxus::logger::tracing::debug;

use crate::config::use_dashboard_config;
use crate::data::use_dashboard;
use crate::state::NotificationBadge;

#[allow(non_snake_case)]
#[component]
pub fn Header() -> Element {
    let config = use_dashboard_config();
    let user = use_dashboard().user;
    // per mounted header; a remount starts from the configured state again
    let mut badge = use_signal(|| NotificationBadge::new(config.notifications_unseen));
    let first_name = user.name.split_whitespace().next().unwrap_or("there").to_string();

    rsx! {
        header { class: "flex items-center justify-between",
            div {
                p { class: "text-xs uppercase tracking-wider text-slate-400", "Energy dashboard" }
                h1 { class: "text-xl font-semibold tracking-tight text-slate-100", "Hello, {first_name}" }
            }
            button {
                class: "relative rounded-full border border-slate-800 bg-slate-900 p-2 text-slate-300 hover:text-slate-100",
                r#type: "button",
                onclick: move |_| {
                    if badge.write().dismiss() {
                        debug!("[header] notifications marked seen");
                    }
                },
                svg { class: "h-5 w-5", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "1.8",
                    path { d: "M6 8a6 6 0 1 1 12 0c0 7 3 8 3 8H3s3-1 3-8" }
                    path { d: "M10 21a2 2 0 0 0 4 0" }
                }
                if badge.read().has_unseen() {
                    span { class: "absolute right-1.5 top-1.5 h-2.5 w-2.5 rounded-full bg-rose-500 ring-2 ring-slate-950" }
                }
            }
        }
    }
}
