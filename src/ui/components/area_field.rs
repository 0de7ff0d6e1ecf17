use dioxus::prelude::*;

use crate::domain::FormField;
use crate::ui::theme;

#[component]
pub fn AreaField(
    label: String,
    field: FormField,
    value: String,
    placeholder: &'static str,
    onchange: EventHandler<(FormField, String)>,
) -> Element {
    rsx! {
        div {
            label { class: "{theme::label_class()}", "{label}" }
            input {
                class: "{theme::input_class()}",
                inputmode: "decimal",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |evt| onchange.call((field, evt.value())),
            }
        }
    }
}
