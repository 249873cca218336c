use dioxus::prelude::*;

use crate::utils::geometry::arc_path;

/// Share of the arc to fill for `value` out of `goal`, clamped to `0..=1`.
pub fn progress(value: f64, goal: f64) -> f32 {
    if goal <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / goal).clamp(0.0, 1.0) as f32
}

#[allow(non_snake_case)]
#[component]
pub fn ArcGauge(
    /// 0.0 ..= 1.0
    progress: f32,
    start_angle: f32,
    stop_angle: f32,
    size: i32,
    stroke: i32,
    track_class: String,
    progress_class: String,
    children: Element,
) -> Element {
    let span = (stop_angle - start_angle).abs().max(0.0001);
    let end_angle = start_angle + span * progress.clamp(0.0, 1.0);

    let c = (size as f32) / 2.0;
    let r = c - (stroke as f32) / 2.0 - 1.0; // small padding

    // Rotate 90 degrees clockwise so the gap sits at the bottom
    let angle_offset = 90.0;
    let track_d = arc_path(c, c, r, start_angle + angle_offset, stop_angle + angle_offset);
    let progress_d = arc_path(c, c, r, start_angle + angle_offset, end_angle + angle_offset);

    let view_box = format!("0 0 {size} {size}");
    let container_style = format!("width:{size}px;height:{size}px");

    rsx! {
        div { class: "relative", style: "{container_style}",
            svg { width: "{size}", height: "{size}", view_box: "{view_box}",
                path { class: "{track_class}", d: "{track_d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke}", stroke_linecap: "round" }
                if progress > 0.0 {
                    path { class: "{progress_class}", d: "{progress_d}", fill: "none", stroke: "currentColor", stroke_width: "{stroke}", stroke_linecap: "round" }
                }
            }
            div { class: "absolute inset-0 grid place-items-center", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps() {
        assert_eq!(progress(60.0, 120.0), 0.5);
        assert_eq!(progress(200.0, 120.0), 1.0);
        assert_eq!(progress(-1.0, 120.0), 0.0);
        assert_eq!(progress(10.0, 0.0), 0.0);
        assert_eq!(progress(f64::NAN, 10.0), 0.0);
    }
}
