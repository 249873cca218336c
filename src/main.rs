use dioxus::prelude::*;

mod app;
mod components;
mod config;
mod data;
mod error;
mod hooks;
mod routes;
mod screens;
mod shared;
mod state;
mod utils;

#[cfg(feature = "server")]
mod server;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    server::init();

    dioxus::launch(app::App);
}
