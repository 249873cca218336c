use dioxus::prelude::*;

use crate::components::LiveChart;
use crate::data::use_dashboard;
use crate::utils::format::clock_now;

#[allow(non_snake_case)]
#[component]
pub fn Realtime() -> Element {
    let live = use_dashboard().live;
    // Filled in after hydration so the server markup stays stable
    let mut updated = use_signal(|| Option::<String>::None);
    use_effect(move || updated.set(clock_now()));
    let peak = live.samples.iter().max_by(|a, b| a.value.total_cmp(&b.value));

    rsx! {
        LiveChart { current_kw: live.current_kw, samples: live.samples.clone() }
        div { class: "flex justify-between text-xs text-slate-400 px-1",
            if let Some(p) = peak {
                span { "Peak {p.value:.1} kW at {p.time_label}" }
            }
            if let Some(t) = updated() {
                span { "Updated {t}" }
            }
        }
    }
}
