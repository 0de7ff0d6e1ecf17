use dioxus::prelude::*;

use crate::{
    domain::CalculatorState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{calculator::run_calculation, CalculatorPage, RateTablesPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/tabelas")]
    RateTables {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(CalculatorState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // The form opens with its defaults already evaluated.
    use_hook({
        let state = state.clone();
        let toasts = toasts.clone();
        move || {
            tracing::debug!("running initial valuation with default form");
            run_calculation(state, toasts);
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn RateTables() -> Element {
    rsx! { Shell { RateTablesPage {} } }
}
