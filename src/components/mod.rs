pub mod billing_chart;
pub mod breakdown_chart;
pub mod co2_card;
pub mod gauge;
pub mod header;
pub mod live_chart;
pub mod nav_bar;
pub mod rotate_overlay;
pub mod shell;
pub mod suggestion_panel;

pub use billing_chart::BillingChart;
pub use breakdown_chart::BreakdownChart;
pub use co2_card::Co2Card;
pub use gauge::ArcGauge;
pub use header::Header;
pub use live_chart::LiveChart;
pub use nav_bar::{NavBar, NavPlacement};
pub use rotate_overlay::RotateOverlay;
pub use shell::Shell;
pub use suggestion_panel::SuggestionPanelCard;
