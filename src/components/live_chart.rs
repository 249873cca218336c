use dioxus::prelude::*;

use crate::shared::types::UsageSampleDto;
use crate::utils::format::format_kw;
use crate::utils::geometry::smooth_path;

/// Maps samples onto a `width` x `height` plot, highest value at the top edge.
pub fn project(samples: &[UsageSampleDto], width: f32, height: f32) -> Vec<(f32, f32)> {
    let max = samples.iter().map(|s| s.value).fold(0.0f64, f64::max) as f32;
    let step = if samples.len() > 1 {
        width / (samples.len() - 1) as f32
    } else {
        0.0
    };
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let y = if max <= 0.0 {
                height
            } else {
                height - (s.value.max(0.0) as f32) / max * height
            };
            (i as f32 * step, y)
        })
        .collect()
}

#[allow(non_snake_case)]
#[component]
pub fn LiveChart(current_kw: f64, samples: Vec<UsageSampleDto>) -> Element {
    let width = 320.0f32;
    let height = 120.0f32;
    let pad = 12.0f32;

    let points: Vec<(f32, f32)> = project(&samples, width, height)
        .into_iter()
        .map(|(x, y)| (x + pad, y + pad))
        .collect();
    let line = smooth_path(&points);
    let area = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => format!(
            "{line} L {:.2} {:.2} L {:.2} {:.2} Z",
            last.0,
            height + pad,
            first.0,
            height + pad
        ),
        _ => String::new(),
    };
    let current = format_kw(current_kw);

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-5 space-y-3",
            div { class: "flex items-end justify-between",
                h2 { class: "text-base font-medium text-slate-200", "Live usage" }
                div { class: "flex items-center gap-2",
                    span { class: "h-2 w-2 rounded-full bg-emerald-400 animate-pulse" }
                    span { class: "text-2xl font-semibold text-emerald-400 tabular-nums", "{current}" }
                }
            }
            svg { class: "block w-full", view_box: "0 0 {width + pad * 2.0} {height + pad * 2.0 + 14.0}",
                defs {
                    linearGradient { id: "live-fill", x1: "0", y1: "0", x2: "0", y2: "1",
                        stop { offset: "0%", stop_color: "#34d399", stop_opacity: "0.35" }
                        stop { offset: "100%", stop_color: "#34d399", stop_opacity: "0" }
                    }
                }
                if !area.is_empty() {
                    path { d: "{area}", fill: "url(#live-fill)" }
                }
                path { d: "{line}", fill: "none", stroke: "#34d399", stroke_width: "2.5", stroke_linecap: "round" }
                {
                    points.iter().zip(samples.iter()).enumerate().map(|(i, ((x, _), s))| {
                        rsx! { text { key: "{i}", x: "{x}", y: "{height + pad * 2.0 + 10.0}", text_anchor: "middle", class: "fill-current text-[9px] text-slate-400", "{s.time_label}" } }
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(value: f64) -> UsageSampleDto {
        UsageSampleDto {
            time_label: String::new(),
            value,
        }
    }

    #[test]
    fn projects_peak_to_top() {
        let pts = project(&[sample(1.0), sample(2.0), sample(0.0)], 100.0, 50.0);
        assert_eq!(pts, vec![(0.0, 25.0), (50.0, 0.0), (100.0, 50.0)]);
    }

    #[test]
    fn empty_and_flat_series() {
        assert!(project(&[], 100.0, 50.0).is_empty());
        assert_eq!(project(&[sample(0.0)], 100.0, 50.0), vec![(0.0, 50.0)]);
    }
}
