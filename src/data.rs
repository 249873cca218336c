use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::error::DataError;
use crate::shared::types::DashboardDto;

const FIXTURE: &str = include_str!("../assets/dashboard.json");

pub fn parse(json: &str) -> Result<DashboardDto, DataError> {
    Ok(serde_json::from_str(json)?)
}

/// Embedded dashboard figures, or an empty dashboard if the fixture is broken.
pub fn load_or_empty() -> DashboardDto {
    match parse(FIXTURE) {
        Ok(data) => data,
        Err(e) => {
            warn!("[data] {e}; rendering empty dashboard");
            DashboardDto::default()
        }
    }
}

pub fn use_dashboard() -> DashboardDto {
    use_context::<DashboardDto>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixture_parses() {
        let data = parse(FIXTURE).expect("fixture");
        assert!(!data.billing.periods.is_empty());
        assert!(data.billing.periods.iter().any(|p| p.period_label == "Oct"));
        assert_eq!(data.breakdown.categories.len(), 4);
        assert_eq!(data.live.samples.len(), 8);
        assert_eq!(data.suggestions.len(), 3);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let data = parse(r#"{ "user": { "name": "Sam" } }"#).expect("partial");
        assert_eq!(data.user.name, "Sam");
        assert!(data.billing.periods.is_empty());
        assert!(data.live.samples.is_empty());
        assert_eq!(data.breakdown.total, 0.0);
    }

    #[test]
    fn malformed_fixture_is_an_error() {
        assert!(matches!(parse("{ not json"), Err(DataError::Fixture(_))));
        assert!(parse(r#"{ "billing": { "periods": [ { "amount": 3 } ] } }"#).is_err());
    }
}
