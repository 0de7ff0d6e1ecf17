use dioxus::prelude::*;

use crate::domain::BreakdownSection;

#[component]
pub fn BreakdownPanel(sections: Vec<BreakdownSection>) -> Element {
    rsx! {
        div {
            class: "mt-6 rounded-xl border border-slate-800 bg-slate-950/60 p-5",
            h3 { class: "text-sm font-semibold text-slate-200", "📄 Detalhes do Cálculo" }
            div { class: "mt-4 space-y-3 text-sm text-slate-300",
                for (idx, BreakdownSection { title, lines }) in sections.into_iter().enumerate() {
                    div {
                        key: "{title}",
                        class: if idx > 0 { "border-t border-slate-800 pt-3" } else { "" },
                        p { class: "font-semibold text-slate-200", "{title}:" }
                        for line in lines {
                            p { class: "font-mono text-xs", "{line}" }
                        }
                    }
                }
            }
        }
    }
}
