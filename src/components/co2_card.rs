use dioxus::prelude::*;

use crate::components::gauge::progress;
use crate::components::ArcGauge;
use crate::shared::types::Co2StatsDto;
use crate::utils::format::format_mass_kg;

#[allow(non_snake_case)]
#[component]
pub fn Co2Card(stats: Co2StatsDto) -> Element {
    let filled = progress(stats.saved_kg, stats.goal_kg);
    let pct = (filled * 100.0).round() as i32;

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-5 space-y-4",
            h2 { class: "text-base font-medium text-slate-200", "CO₂ this month" }
            div { class: "flex items-center gap-5",
                ArcGauge {
                    progress: filled,
                    start_angle: 45.0,
                    stop_angle: 315.0,
                    size: 120,
                    stroke: 10,
                    track_class: "text-slate-800".to_string(),
                    progress_class: "text-emerald-400".to_string(),
                    div { class: "text-2xl font-bold text-emerald-400 tabular-nums", "{pct}%" }
                }
                dl { class: "space-y-1 text-sm",
                    div { class: "flex gap-2",
                        dt { class: "text-slate-400", "Saved" }
                        dd { class: "text-slate-100 tabular-nums", "{format_mass_kg(stats.saved_kg)} of {format_mass_kg(stats.goal_kg)}" }
                    }
                    div { class: "flex gap-2",
                        dt { class: "text-slate-400", "Emitted" }
                        dd { class: "text-slate-100 tabular-nums", "{format_mass_kg(stats.emitted_kg)}" }
                    }
                    div { class: "flex gap-2",
                        dt { class: "text-slate-400", "Trees" }
                        dd { class: "text-slate-100 tabular-nums", "{stats.trees_equivalent}" }
                    }
                }
            }
        }
    }
}
