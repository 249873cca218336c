#![cfg(feature = "server")]

pub use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Loads `.env` (for `RUST_LOG` and the dioxus serve address) and installs
/// the log subscriber before the app is launched.
pub fn init() {
    dotenvy::dotenv().ok();
    init_tracing();
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .is_err()
    {
        eprintln!("[server] log subscriber already installed");
    }
}
