use dioxus::prelude::*;

use crate::components::BreakdownChart;
use crate::data::use_dashboard;

#[allow(non_snake_case)]
#[component]
pub fn Trends() -> Element {
    let breakdown = use_dashboard().breakdown;

    rsx! {
        BreakdownChart { categories: breakdown.categories, total: breakdown.total }
    }
}
