use dioxus::prelude::*;

use crate::hooks::use_suggestion_panel;
use crate::shared::types::SuggestionDto;
use crate::state::suggestion::PanelPhase;
use crate::utils::format::format_currency;

#[allow(non_snake_case)]
#[component]
pub fn SuggestionPanelCard(suggestions: Vec<SuggestionDto>) -> Element {
    let controls = use_suggestion_panel();

    let expand = {
        let mut controls = controls.clone();
        move |_: Event<MouseData>| controls.expand()
    };

    let expanded = controls.is_expanded();
    let disabled = controls.control_disabled();
    let label = match controls.phase() {
        PanelPhase::Collapsed => "Show all tips",
        _ => "Opening your profile…",
    };
    let shown = if expanded {
        suggestions.len()
    } else {
        suggestions.len().min(1)
    };
    let total_saving: f64 = suggestions.iter().map(|s| s.monthly_saving).sum();

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-5 space-y-4",
            div { class: "flex items-end justify-between",
                h2 { class: "text-base font-medium text-slate-200", "Smart suggestions" }
                if total_saving > 0.0 {
                    div { class: "text-xs text-emerald-400", "Save up to {format_currency(total_saving)}/mo" }
                }
            }
            if suggestions.is_empty() {
                p { class: "text-sm text-slate-400", "No suggestions right now." }
            }
            ul { class: "space-y-3",
                for (i, s) in suggestions.iter().take(shown).enumerate() {
                    li { key: "{i}", class: "rounded-xl bg-slate-800/60 p-3 transition-all duration-300",
                        div { class: "flex items-center justify-between gap-3",
                            span { class: "text-sm font-medium text-slate-100", "{s.title}" }
                            span { class: "shrink-0 text-xs tabular-nums text-emerald-400", "{format_currency(s.monthly_saving)}" }
                        }
                        p { class: "mt-1 text-xs text-slate-400", "{s.detail}" }
                    }
                }
            }
            button {
                class: "w-full rounded-xl bg-emerald-500 py-2.5 text-sm font-medium text-slate-950 transition-opacity disabled:opacity-50",
                r#type: "button",
                disabled: disabled,
                onclick: expand,
                "{label}"
            }
        }
    }
}
