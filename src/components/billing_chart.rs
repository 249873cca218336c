use dioxus::prelude::*;

use crate::shared::types::BillingPeriodDto;
use crate::utils::format::format_currency;

/// The billing period drawn with the accent treatment.
pub const HIGHLIGHT_PERIOD: &str = "Oct";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTone {
    Highlight,
    Muted,
}

impl BarTone {
    fn class(self) -> &'static str {
        match self {
            BarTone::Highlight => "text-emerald-400",
            BarTone::Muted => "text-slate-700",
        }
    }
}

pub fn bar_tone(period_label: &str) -> BarTone {
    if period_label == HIGHLIGHT_PERIOD {
        BarTone::Highlight
    } else {
        BarTone::Muted
    }
}

#[allow(non_snake_case)]
#[component]
pub fn BillingChart(periods: Vec<BillingPeriodDto>, change: String) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let height = 140.0f32;
    let padding = 16.0f32;
    let bar_w = 28.0f32;
    let gap = 14.0f32;
    let n = periods.len() as f32;
    let width = (n * (bar_w + gap) - gap).max(0.0) + padding * 2.0;
    let max_amount = periods
        .iter()
        .map(|p| p.amount)
        .fold(0.0f64, f64::max) as f32;
    let scale = |amount: f64| {
        if max_amount <= 0.0 {
            0.0
        } else {
            (amount.max(0.0) as f32) / max_amount * height
        }
    };
    let view_box = format!("0 0 {} {}", width, height + padding * 2.0 + 14.0);

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-5 space-y-3",
            div { class: "flex items-end justify-between",
                h2 { class: "text-base font-medium text-slate-200", "Billing history" }
                div { class: "text-xs text-slate-400", "{change}" }
            }
            svg { class: "block w-full", view_box: "{view_box}", height: "{height + padding * 2.0 + 14.0}",
                {
                    periods.iter().enumerate().map(|(i, p)| {
                        let x = padding + (i as f32) * (bar_w + gap);
                        let h = scale(p.amount);
                        let y = padding + (height - h);
                        let tone = bar_tone(&p.period_label);
                        let cls = tone.class();
                        let show_amount = tone == BarTone::Highlight || *hovered.read() == Some(i);
                        let amount = format_currency(p.amount);
                        rsx! {
                            g { key: "{i}",
                                rect {
                                    class: "{cls}", x: "{x}", y: "{y}", width: "{bar_w}", height: "{h}", fill: "currentColor", rx: "6",
                                    onmouseenter: move |_| *hovered.write() = Some(i),
                                    onmouseleave: move |_| *hovered.write() = None,
                                    ontouchstart: move |_| *hovered.write() = Some(i),
                                    ontouchend: move |_| *hovered.write() = None,
                                }
                                if show_amount {
                                    text { x: "{x + bar_w / 2.0}", y: "{(y - 4.0).max(10.0)}", text_anchor: "middle", class: "fill-current text-[10px] text-slate-200", "{amount}" }
                                }
                                text { x: "{x + bar_w / 2.0}", y: "{height + padding * 2.0 + 6.0}", text_anchor: "middle", class: "fill-current text-[10px] text-slate-400", "{p.period_label}" }
                            }
                        }
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_october_is_highlighted() {
        let periods = [("Aug", 40.0), ("Sep", 55.0), ("Oct", 62.0)];
        let tones: Vec<_> = periods.iter().map(|(label, _)| bar_tone(label)).collect();
        assert_eq!(tones, vec![BarTone::Muted, BarTone::Muted, BarTone::Highlight]);
    }

    #[test]
    fn highlight_is_exact_match() {
        assert_eq!(bar_tone("oct"), BarTone::Muted);
        assert_eq!(bar_tone("October"), BarTone::Muted);
        assert_eq!(bar_tone(" Oct"), BarTone::Muted);
    }
}
