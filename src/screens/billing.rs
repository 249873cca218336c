use dioxus::prelude::*;

use crate::components::billing_chart::{bar_tone, BarTone};
use crate::components::BillingChart;
use crate::data::use_dashboard;
use crate::utils::format::format_currency;

#[allow(non_snake_case)]
#[component]
pub fn Billing() -> Element {
    let billing = use_dashboard().billing;

    rsx! {
        BillingChart { periods: billing.periods.clone(), change: billing.change.clone() }
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-5 space-y-3",
            div { class: "flex items-end justify-between",
                h2 { class: "text-base font-medium text-slate-200", "Statements" }
                span { class: "text-xs text-slate-400", "Next due {billing.due_date}" }
            }
            ul { class: "divide-y divide-slate-800",
                for (i, p) in billing.periods.iter().rev().enumerate() {
                    li { key: "{i}", class: "flex justify-between py-2 text-sm",
                        span { class: if bar_tone(&p.period_label) == BarTone::Highlight { "text-emerald-400" } else { "text-slate-300" },
                            "{p.period_label}"
                        }
                        span { class: "tabular-nums text-slate-100", "{format_currency(p.amount)}" }
                    }
                }
            }
        }
    }
}
