//! SVG path helpers shared by the arc gauge, the breakdown donut and the
//! live usage trend line.

pub fn polar(cx: f32, cy: f32, r: f32, deg: f32) -> (f32, f32) {
    let rad = deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Circular arc from `a0` to `a1` degrees (0 = 3 o'clock, clockwise).
pub fn arc_path(cx: f32, cy: f32, r: f32, a0: f32, a1: f32) -> String {
    let (x0, y0) = polar(cx, cy, r, a0);
    let (x1, y1) = polar(cx, cy, r, a1);
    let delta = (a1 - a0).abs();
    let large_arc = if delta >= 180.0 { 1 } else { 0 };
    let sweep = if a1 >= a0 { 1 } else { 0 };
    format!("M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} {sweep} {x1:.3} {y1:.3}")
}

/// Share of each value in the sum of the positive values. Negative values
/// count as zero. Empty when nothing is positive.
pub fn fractions(values: &[f64]) -> Vec<f64> {
    let sum: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if sum <= 0.0 {
        return Vec::new();
    }
    values.iter().map(|v| v.max(0.0) / sum).collect()
}

/// Smooth curve through `points` (Catmull-Rom converted to cubic Béziers).
pub fn smooth_path(points: &[(f32, f32)]) -> String {
    let Some(&(x0, y0)) = points.first() else {
        return String::new();
    };
    let mut d = format!("M {x0:.2} {y0:.2}");
    for i in 0..points.len().saturating_sub(1) {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(points.len() - 1)];
        let c1 = (p1.0 + (p2.0 - p0.0) / 6.0, p1.1 + (p2.1 - p0.1) / 6.0);
        let c2 = (p2.0 - (p3.0 - p1.0) / 6.0, p2.1 - (p3.1 - p1.1) / 6.0);
        d.push_str(&format!(
            " C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
            c1.0, c1.1, c2.0, c2.1, p2.0, p2.1
        ));
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_quadrants() {
        let (x, y) = polar(50.0, 50.0, 10.0, 0.0);
        assert!((x - 60.0).abs() < 1e-4 && (y - 50.0).abs() < 1e-4);
        let (x, y) = polar(50.0, 50.0, 10.0, 90.0);
        assert!((x - 50.0).abs() < 1e-4 && (y - 60.0).abs() < 1e-4);
    }

    #[test]
    fn arc_flags() {
        let small = arc_path(0.0, 0.0, 10.0, 0.0, 90.0);
        assert!(small.contains(" 0 0 1 "), "{small}");
        let large = arc_path(0.0, 0.0, 10.0, 0.0, 270.0);
        assert!(large.contains(" 0 1 1 "), "{large}");
    }

    #[test]
    fn fractions_sum_to_one() {
        let f = fractions(&[182.0, 124.0, 46.0, 68.0]);
        assert_eq!(f.len(), 4);
        assert!((f.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!((f[0] - 182.0 / 420.0).abs() < 1e-9);
    }

    #[test]
    fn fractions_of_nothing() {
        assert!(fractions(&[]).is_empty());
        assert!(fractions(&[0.0, 0.0]).is_empty());
        assert_eq!(fractions(&[-5.0, 5.0]), vec![0.0, 1.0]);
    }

    #[test]
    fn smooth_path_shapes() {
        assert_eq!(smooth_path(&[]), "");
        assert_eq!(smooth_path(&[(1.0, 2.0)]), "M 1.00 2.00");

        let d = smooth_path(&[(0.0, 10.0), (10.0, 0.0), (20.0, 10.0)]);
        assert!(d.starts_with("M 0.00 10.00"));
        assert_eq!(d.matches(" C ").count(), 2);
        assert!(d.ends_with("20.00 10.00"));
    }
}
