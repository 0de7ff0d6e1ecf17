use dioxus::prelude::*;

use crate::ui::theme;

/// One monetary result line; `highlight` marks the total.
#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, highlight: bool) -> Element {
    if highlight {
        return rsx! {
            div {
                class: "rounded-xl border border-rose-500/40 bg-rose-500/10 p-5 shadow-lg",
                h3 { class: "text-xs font-semibold uppercase tracking-wide text-rose-200", "{title}" }
                p { class: "mt-2 text-3xl font-semibold text-rose-100", "{value}" }
                if let Some(desc) = description {
                    p { class: "mt-1 text-xs text-rose-200/70", "{desc}" }
                }
            }
        };
    }

    rsx! {
        div {
            class: "{theme::panel_solid()} p-4 shadow-sm",
            h3 { class: "{theme::label_class()}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold text-emerald-400", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted()}", "{desc}" }
            }
        }
    }
}
