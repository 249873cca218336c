use dioxus::prelude::*;

use crate::components::{Co2Card, SuggestionPanelCard};
use crate::data::use_dashboard;
use crate::routes::Route;
use crate::utils::format::{format_currency, format_kw};

#[allow(non_snake_case)]
#[component]
pub fn Home() -> Element {
    let data = use_dashboard();
    let live = format_kw(data.live.current_kw);
    let due = format_currency(data.billing.amount_due);

    rsx! {
        div { class: "grid grid-cols-2 gap-4",
            Link { to: Route::Realtime {}, class: "rounded-2xl border border-slate-800 bg-slate-900/60 p-4 space-y-1",
                p { class: "text-xs text-slate-400", "Using now" }
                p { class: "text-2xl font-semibold text-emerald-400 tabular-nums", "{live}" }
            }
            Link { to: Route::Billing {}, class: "rounded-2xl border border-slate-800 bg-slate-900/60 p-4 space-y-1",
                p { class: "text-xs text-slate-400", "Due {data.billing.due_date}" }
                p { class: "text-2xl font-semibold text-slate-100 tabular-nums", "{due}" }
            }
        }
        Co2Card { stats: data.co2.clone() }
        SuggestionPanelCard { suggestions: data.suggestions.clone() }
    }
}
