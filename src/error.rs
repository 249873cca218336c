use thiserror::Error;

/// Failures of the browser environment queries. None of these reach the UI.
#[derive(Debug, Error)]
#[cfg_attr(not(feature = "web"), allow(dead_code))]
pub enum DeviceError {
    #[error("no browser window available")]
    NoWindow,

    #[error("media query `{0}` unavailable")]
    MediaQuery(String),

    #[error("could not listen for `{event}`: {reason}")]
    Listener { event: &'static str, reason: String },

    #[error("viewport width unavailable")]
    Width,

    #[error("portrait lock not available: {0}")]
    OrientationLock(String),
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("dashboard fixture is malformed: {0}")]
    Fixture(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = DeviceError::Listener {
            event: "change",
            reason: "denied".into(),
        };
        assert_eq!(err.to_string(), "could not listen for `change`: denied");

        let err = DeviceError::OrientationLock("NotSupportedError".into());
        assert_eq!(
            err.to_string(),
            "portrait lock not available: NotSupportedError"
        );
    }

    #[test]
    fn fixture_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: DataError = json_err.into();
        assert!(err.to_string().starts_with("dashboard fixture is malformed"));
    }
}
