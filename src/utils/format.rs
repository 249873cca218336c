pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Browser-local wall clock as `hh:mm`.
#[cfg(feature = "web")]
pub fn clock_now() -> Option<String> {
    use js_sys::Date;
    let d = Date::new_0();
    if d.get_time().is_nan() {
        return None;
    }
    Some(format!(
        "{}:{}",
        pad2(d.get_hours() as i32),
        pad2(d.get_minutes() as i32)
    ))
}

#[cfg(not(feature = "web"))]
pub fn clock_now() -> Option<String> {
    None
}

pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

pub fn format_kwh(kwh: f64) -> String {
    if kwh.abs() >= 1_000.0 {
        format!("{:.1} MWh", kwh / 1_000.0)
    } else if (kwh.fract()).abs() < f64::EPSILON {
        format!("{} kWh", kwh as i64)
    } else {
        format!("{:.1} kWh", kwh)
    }
}

pub fn format_kw(kw: f64) -> String {
    format!("{:.1} kW", kw)
}

pub fn format_mass_kg(kg: f64) -> String {
    if kg.abs() >= 1_000.0 {
        let t = kg / 1_000.0;
        if (t * 10.0).round() % 10.0 == 0.0 {
            format!("{} t", t.round() as i64)
        } else {
            format!("{:.1} t", t)
        }
    } else {
        format!("{} kg", kg.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads() {
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(12), "12");
    }

    #[test]
    fn currency() {
        assert_eq!(format_currency(62.0), "$62.00");
        assert_eq!(format_currency(6.5), "$6.50");
        assert_eq!(format_currency(-3.25), "-$3.25");
    }

    #[test]
    fn energy() {
        assert_eq!(format_kwh(420.0), "420 kWh");
        assert_eq!(format_kwh(12.34), "12.3 kWh");
        assert_eq!(format_kwh(1_500.0), "1.5 MWh");
        assert_eq!(format_kw(2.4), "2.4 kW");
        assert_eq!(format_kw(3.0), "3.0 kW");
    }

    #[test]
    fn mass() {
        assert_eq!(format_mass_kg(86.0), "86 kg");
        assert_eq!(format_mass_kg(142.5), "143 kg");
        assert_eq!(format_mass_kg(2_000.0), "2 t");
        assert_eq!(format_mass_kg(1_340.0), "1.3 t");
    }

    #[cfg(not(feature = "web"))]
    #[test]
    fn clock_unavailable_off_web() {
        assert_eq!(clock_now(), None);
    }
}
