use dioxus::prelude::*;

use crate::{
    domain::{
        BuildingType, CalculatorState, Category, Ceiling, Conservation, Electrical, Finish,
        Floor, FormField, Position, Roof, Sanitation, Situation, Soil, Structure, Topography,
        Zone,
    },
    ui::{
        components::{
            area_field::AreaField,
            breakdown_panel::BreakdownPanel,
            kpi_card::KpiCard,
            select_field::{category_options, SelectField},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{self, Accent},
    },
    util::format::format_brl,
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<CalculatorState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let form = state.with(|st| st.form.clone());

    let on_field = {
        let mut state = state.clone();
        move |(field, value): (FormField, String)| {
            state.with_mut(|st| st.update(field, value));
        }
    };

    let on_calculate = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| run_calculation(state.clone(), toasts.clone())
    };

    let on_reset = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let mut state = state.clone();
            state.with_mut(|st| st.reset());
            run_calculation(state.clone(), toasts.clone());
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Formulário restaurado para os valores padrão.",
            );
        }
    };

    rsx! {
        div { class: "grid gap-8 lg:grid-cols-2",
            div { class: "space-y-6",
                section { class: "{theme::section_panel(Accent::Property)}",
                    h2 { class: "{theme::section_title(Accent::Property)}", "🏢 Dados do Imóvel" }
                    div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                        AreaField {
                            label: "Área do Terreno (m²)".to_string(),
                            field: FormField::LandArea,
                            value: form.get(FormField::LandArea).to_string(),
                            placeholder: "Ex: 250",
                            onchange: on_field.clone(),
                        }
                        AreaField {
                            label: "Área Construída (m²)".to_string(),
                            field: FormField::BuiltArea,
                            value: form.get(FormField::BuiltArea).to_string(),
                            placeholder: "Ex: 70",
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: Zone::TITLE.to_string(),
                            field: FormField::Zone,
                            value: form.get(FormField::Zone).to_string(),
                            options: category_options::<Zone>(),
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: BuildingType::TITLE.to_string(),
                            field: FormField::BuildingType,
                            value: form.get(FormField::BuildingType).to_string(),
                            options: category_options::<BuildingType>(),
                            onchange: on_field.clone(),
                        }
                    }
                }

                section { class: "{theme::section_panel(Accent::Terrain)}",
                    h2 { class: "{theme::section_title(Accent::Terrain)}", "📍 Características do Terreno" }
                    div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                        SelectField {
                            label: Topography::TITLE.to_string(),
                            field: FormField::Topography,
                            value: form.get(FormField::Topography).to_string(),
                            options: category_options::<Topography>(),
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: Situation::TITLE.to_string(),
                            field: FormField::Situation,
                            value: form.get(FormField::Situation).to_string(),
                            options: category_options::<Situation>(),
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: Soil::TITLE.to_string(),
                            field: FormField::Soil,
                            value: form.get(FormField::Soil).to_string(),
                            options: category_options::<Soil>(),
                            onchange: on_field.clone(),
                        }
                    }
                }

                section { class: "{theme::section_panel(Accent::Building)}",
                    h2 { class: "{theme::section_title(Accent::Building)}", "⚙️ Características da Edificação" }
                    div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                        SelectField {
                            label: Finish::TITLE.to_string(),
                            field: FormField::Finish,
                            value: form.get(FormField::Finish).to_string(),
                            options: category_options::<Finish>(),
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: Floor::TITLE.to_string(),
                            field: FormField::Floor,
                            value: form.get(FormField::Floor).to_string(),
                            options: category_options::<Floor>(),
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: Ceiling::TITLE.to_string(),
                            field: FormField::Ceiling,
                            value: form.get(FormField::Ceiling).to_string(),
                            options: category_options::<Ceiling>(),
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: Roof::TITLE.to_string(),
                            field: FormField::Roof,
                            value: form.get(FormField::Roof).to_string(),
                            options: category_options::<Roof>(),
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: Sanitation::TITLE.to_string(),
                            field: FormField::Sanitation,
                            value: form.get(FormField::Sanitation).to_string(),
                            options: category_options::<Sanitation>(),
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: Structure::TITLE.to_string(),
                            field: FormField::Structure,
                            value: form.get(FormField::Structure).to_string(),
                            options: category_options::<Structure>(),
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: Electrical::TITLE.to_string(),
                            field: FormField::Electrical,
                            value: form.get(FormField::Electrical).to_string(),
                            options: category_options::<Electrical>(),
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: Conservation::TITLE.to_string(),
                            field: FormField::Conservation,
                            value: form.get(FormField::Conservation).to_string(),
                            options: category_options::<Conservation>(),
                            onchange: on_field.clone(),
                        }
                        SelectField {
                            label: Position::TITLE.to_string(),
                            field: FormField::Position,
                            value: form.get(FormField::Position).to_string(),
                            options: category_options::<Position>(),
                            onchange: on_field.clone(),
                            wide: true,
                        }
                    }
                }

                div { class: "flex flex-col gap-3",
                    button {
                        class: "{theme::btn_primary()}",
                        onclick: on_calculate,
                        "🧮 Calcular Valor Venal"
                    }
                    button {
                        class: "{theme::btn_secondary()}",
                        onclick: on_reset,
                        "Restaurar Padrões"
                    }
                }
            }

            ResultsPanel {}
        }
    }
}

#[component]
fn ResultsPanel() -> Element {
    let state = use_context::<Signal<CalculatorState>>();
    let calculation = state.with(|st| st.calculation.clone());
    let show_details = state.with(|st| st.show_details);

    let on_toggle = {
        let mut state = state.clone();
        move |_| state.with_mut(|st| st.toggle_details())
    };

    rsx! {
        section { class: "{theme::section_panel(Accent::Results)} self-start",
            div { class: "flex items-center justify-between",
                h2 { class: "{theme::section_title(Accent::Results)}", "💲 Resultados do Cálculo" }
                if calculation.is_some() {
                    button {
                        class: "{theme::link_class()}",
                        onclick: on_toggle,
                        if show_details { "Ocultar detalhes" } else { "Mostrar detalhes" }
                    }
                }
            }
            if let Some(calculation) = calculation {
                div { class: "mt-4 space-y-4",
                    KpiCard {
                        title: "Valor Venal do Terreno (VVT)".to_string(),
                        value: format_brl(calculation.result.land_value),
                        highlight: false,
                    }
                    KpiCard {
                        title: "Valor Venal da Edificação (VVE)".to_string(),
                        value: format_brl(calculation.result.building_value),
                        highlight: false,
                    }
                    KpiCard {
                        title: "Valor Venal Total (VVI)".to_string(),
                        value: format_brl(calculation.result.total_value),
                        description: Some("VVT + VVE".to_string()),
                        highlight: true,
                    }
                }
                if show_details {
                    BreakdownPanel { sections: calculation.breakdown() }
                }
            } else {
                p { class: "mt-4 text-sm {theme::text_muted()}", "Preencha os dados e clique em calcular." }
            }
        }
    }
}

/// Runs the calculation and reports a rejected form as an error toast.
pub fn run_calculation(mut state: Signal<CalculatorState>, toasts: Signal<Vec<ToastMessage>>) {
    let outcome = state.with_mut(|st| st.calculate().map(|_| ()));
    if let Err(err) = outcome {
        push_toast(toasts, ToastKind::Error, err.user_message());
    }
}
