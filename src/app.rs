use dioxus::prelude::*;

use crate::config::DashboardConfig;
use crate::data;
use crate::routes::Route;
use crate::{FAVICON, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    use_context_provider(DashboardConfig::default);
    use_context_provider(data::load_or_empty);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1, viewport-fit=cover" }
        Router::<Route> {}
    }
}
