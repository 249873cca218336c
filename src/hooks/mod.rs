pub mod breakpoint;
pub mod media;
pub mod one_shot;
pub mod orientation;
pub mod suggestion_panel;

pub use breakpoint::use_compact_layout;
pub use one_shot::use_one_shot;
pub use orientation::use_orientation;
pub use suggestion_panel::use_suggestion_panel;

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::prelude::*;

    use super::*;
    use crate::config::DashboardConfig;

    thread_local! {
        static FIRST_RENDER: Cell<Option<(bool, Option<bool>)>> = const { Cell::new(None) };
    }

    #[allow(non_snake_case)]
    #[component]
    fn Root() -> Element {
        use_context_provider(DashboardConfig::default);
        rsx! { Monitors {} }
    }

    #[allow(non_snake_case)]
    #[component]
    fn Monitors() -> Element {
        let portrait = use_orientation();
        let compact = use_compact_layout();
        use_hook(|| FIRST_RENDER.with(|f| f.set(Some((portrait(), compact())))));
        rsx! {}
    }

    #[test]
    fn first_render_uses_unmeasured_defaults() {
        let mut dom = VirtualDom::new(Root);
        dom.rebuild_in_place();

        // portrait, no layout decision yet: identical to the server-rendered markup
        assert_eq!(FIRST_RENDER.with(|f| f.get()), Some((true, None)));
    }
}
