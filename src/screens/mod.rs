pub mod billing;
pub mod home;
pub mod profile;
pub mod realtime;
pub mod trends;

pub use billing::Billing;
pub use home::Home;
pub use profile::Profile;
pub use realtime::Realtime;
pub use trends::Trends;
