use dioxus::prelude::*;

use crate::domain::{Category, FormField, Rated};
use crate::ui::theme;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub text: String,
}

/// Options for a category, each labelled with its table value, e.g. `Aclive (0,90)`.
pub fn category_options<C: Category + Rated>() -> Vec<SelectOption> {
    C::all()
        .iter()
        .map(|&item| SelectOption {
            value: item.code(),
            text: format!("{} ({})", item.label(), item.table_value().display()),
        })
        .collect()
}

#[component]
pub fn SelectField(
    label: String,
    field: FormField,
    value: String,
    options: Vec<SelectOption>,
    onchange: EventHandler<(FormField, String)>,
    #[props(default)] wide: bool,
) -> Element {
    let wrapper = if wide { "sm:col-span-2" } else { "" };
    let rendered = options
        .into_iter()
        .map(|opt| {
            let selected = opt.value == value;
            (opt, selected)
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "{wrapper}",
            label { class: "{theme::label_class()}", "{label}" }
            select {
                class: "{theme::input_class()}",
                value: "{value}",
                onchange: move |evt| onchange.call((field, evt.value())),
                for (opt, selected) in rendered {
                    option {
                        key: "{opt.value}",
                        value: opt.value,
                        selected,
                        "{opt.text}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Position, Zone};

    #[test]
    fn options_follow_table_order_with_values() {
        let options = category_options::<Zone>();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0].value, "central");
        assert_eq!(options[0].text, "Central (R$ 700,00/m²)");
        assert_eq!(options[1].text, "Médio Central (R$ 560,00/m²)");
    }

    #[test]
    fn multiplier_options_use_decimal_comma() {
        let options = category_options::<Position>();
        assert_eq!(options[2].value, "germinada-alinhada");
        assert_eq!(options[2].text, "Germinada-alinhada (0,70)");
    }
}
