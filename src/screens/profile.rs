use dioxus::prelude::*;

use crate::data::use_dashboard;
use crate::utils::format::{format_currency, format_mass_kg};

#[allow(non_snake_case)]
#[component]
pub fn Profile() -> Element {
    let data = use_dashboard();
    let user = &data.user;
    let initials: String = user
        .name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect();
    let potential: f64 = data.suggestions.iter().map(|s| s.monthly_saving).sum();

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-5 space-y-4",
            div { class: "flex items-center gap-4",
                div { class: "grid h-14 w-14 place-items-center rounded-full bg-emerald-500/20 text-lg font-semibold text-emerald-400", "{initials}" }
                div {
                    p { class: "text-lg font-medium text-slate-100", "{user.name}" }
                    p { class: "text-xs text-slate-400", "Member since {user.member_since}" }
                }
            }
            dl { class: "grid grid-cols-2 gap-3 text-sm",
                div {
                    dt { class: "text-slate-400", "Plan" }
                    dd { class: "text-slate-100", "{user.plan}" }
                }
                div {
                    dt { class: "text-slate-400", "Address" }
                    dd { class: "text-slate-100", "{user.address}" }
                }
                div {
                    dt { class: "text-slate-400", "Potential savings" }
                    dd { class: "text-emerald-400 tabular-nums", "{format_currency(potential)}/mo" }
                }
                div {
                    dt { class: "text-slate-400", "CO₂ saved" }
                    dd { class: "text-slate-100 tabular-nums", "{format_mass_kg(data.co2.saved_kg)}" }
                }
            }
        }
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-5 space-y-3",
            h2 { class: "text-base font-medium text-slate-200", "Your tips" }
            ul { class: "space-y-2 text-sm",
                for (i, s) in data.suggestions.iter().enumerate() {
                    li { key: "{i}", class: "flex justify-between gap-3",
                        span { class: "text-slate-300", "{s.title}" }
                        span { class: "shrink-0 tabular-nums text-emerald-400", "{format_currency(s.monthly_saving)}" }
                    }
                }
            }
        }
    }
}
