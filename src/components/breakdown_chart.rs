use dioxus::prelude::*;

use crate::shared::types::EnergyCategoryDto;
use crate::utils::format::format_kwh;
use crate::utils::geometry::{arc_path, fractions};

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub start: f32, // degrees
    pub end: f32,
    pub color: String,
}

/// Donut arcs proportional to each category's value, starting at 12 o'clock.
pub fn donut_segments(categories: &[EnergyCategoryDto]) -> Vec<DonutSegment> {
    let values: Vec<f64> = categories.iter().map(|c| c.value).collect();
    let mut angle = -90.0f32;
    fractions(&values)
        .into_iter()
        .zip(categories)
        .filter(|(f, _)| *f > 0.0)
        .map(|(f, c)| {
            // a full circle collapses to a point as an SVG arc
            let sweep = (f as f32 * 360.0).min(359.99);
            let seg = DonutSegment {
                start: angle,
                end: angle + sweep,
                color: c.color.clone(),
            };
            angle += sweep;
            seg
        })
        .collect()
}

/// `total` is shown as given; it is not derived from `categories`.
#[allow(non_snake_case)]
#[component]
pub fn BreakdownChart(categories: Vec<EnergyCategoryDto>, total: f64) -> Element {
    let size = 180.0f32;
    let stroke = 22.0f32;
    let c = size / 2.0;
    let r = c - stroke / 2.0;
    let segments = donut_segments(&categories);
    let total_label = format_kwh(total);

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-5 space-y-4",
            h2 { class: "text-base font-medium text-slate-200", "Energy breakdown" }
            div { class: "flex flex-col items-center gap-5 sm:flex-row",
                div { class: "relative", style: "width:{size}px;height:{size}px",
                    svg { width: "{size}", height: "{size}", view_box: "0 0 {size} {size}",
                        circle { cx: "{c}", cy: "{c}", r: "{r}", fill: "none", stroke: "#1e293b", stroke_width: "{stroke}" }
                        {
                            segments.iter().enumerate().map(|(i, s)| {
                                let d = arc_path(c, c, r, s.start, s.end);
                                rsx! { path { key: "{i}", d: "{d}", fill: "none", stroke: "{s.color}", stroke_width: "{stroke}" } }
                            })
                        }
                    }
                    div { class: "absolute inset-0 grid place-items-center text-center",
                        div {
                            div { class: "text-xl font-semibold text-slate-100 tabular-nums", "{total_label}" }
                            div { class: "text-xs text-slate-400", "this month" }
                        }
                    }
                }
                ul { class: "w-full space-y-2",
                    for (i, cat) in categories.iter().enumerate() {
                        li { key: "{i}", class: "flex items-center justify-between text-sm",
                            span { class: "flex items-center gap-2 text-slate-300",
                                span { class: "inline-block h-2.5 w-2.5 rounded-full", style: "background:{cat.color}" }
                                "{cat.category_name}"
                            }
                            span { class: "tabular-nums text-slate-200", "{format_kwh(cat.value)}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(name: &str, value: f64) -> EnergyCategoryDto {
        EnergyCategoryDto {
            category_name: name.into(),
            value,
            color: "#fff".into(),
        }
    }

    #[test]
    fn segments_cover_the_circle() {
        let cats = vec![cat("Heating", 200.0), cat("Lighting", 100.0), cat("Other", 100.0)];
        let segs = donut_segments(&cats);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].start, -90.0);
        assert!((segs[0].end - 90.0).abs() < 1e-3);
        assert_eq!(segs[1].start, segs[0].end);
        assert!((segs[2].end - 270.0).abs() < 1e-3);
    }

    #[test]
    fn single_category_stays_drawable() {
        let segs = donut_segments(&[cat("All", 5.0)]);
        assert_eq!(segs.len(), 1);
        assert!(segs[0].end - segs[0].start < 360.0);
    }

    #[test]
    fn empty_or_zero_data_draws_nothing() {
        assert!(donut_segments(&[]).is_empty());
        assert!(donut_segments(&[cat("Idle", 0.0)]).is_empty());
    }

    #[test]
    fn zero_value_categories_are_skipped() {
        let segs = donut_segments(&[cat("A", 0.0), cat("B", 3.0)]);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].start, -90.0);
    }
}
