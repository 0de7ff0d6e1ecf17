use dioxus::prelude::*;

use crate::{
    domain::{
        rates::max_weight_sum, BuildingType, Category, Ceiling, Conservation, Electrical, Finish,
        Floor, Position, Rated, Roof, Sanitation, Situation, Soil, Structure, Topography, Zone,
    },
    ui::theme,
};

#[derive(Clone, Debug, PartialEq)]
struct TableRow {
    code: &'static str,
    label: &'static str,
    value: String,
}

fn rows_for<C: Category + Rated>() -> Vec<TableRow> {
    C::all()
        .iter()
        .map(|&item| TableRow {
            code: item.code(),
            label: item.label(),
            value: item.table_value().display(),
        })
        .collect()
}

/// Read-only view of every table used by the calculator.
#[component]
pub fn RateTablesPage() -> Element {
    let max_sum = max_weight_sum();

    rsx! {
        div { class: "space-y-8",
            p { class: "text-sm {theme::text_muted()}",
                "Valores da Planta Genérica de Valores aplicados no cálculo do valor venal. "
                "A soma dos elementos construtivos chega no máximo a {max_sum}%."
            }
            div { class: "grid gap-6 lg:grid-cols-2",
                RateTable { title: "Valor Básico do Terreno (VBT)", rows: rows_for::<Zone>() }
                RateTable { title: "Valor Básico da Edificação (VBE)", rows: rows_for::<BuildingType>() }
                RateTable { title: Topography::TITLE, rows: rows_for::<Topography>() }
                RateTable { title: Situation::TITLE, rows: rows_for::<Situation>() }
                RateTable { title: Soil::TITLE, rows: rows_for::<Soil>() }
                RateTable { title: Finish::TITLE, rows: rows_for::<Finish>() }
                RateTable { title: Floor::TITLE, rows: rows_for::<Floor>() }
                RateTable { title: Ceiling::TITLE, rows: rows_for::<Ceiling>() }
                RateTable { title: Roof::TITLE, rows: rows_for::<Roof>() }
                RateTable { title: Sanitation::TITLE, rows: rows_for::<Sanitation>() }
                RateTable { title: Structure::TITLE, rows: rows_for::<Structure>() }
                RateTable { title: Electrical::TITLE, rows: rows_for::<Electrical>() }
                RateTable { title: Conservation::TITLE, rows: rows_for::<Conservation>() }
                RateTable { title: Position::TITLE, rows: rows_for::<Position>() }
            }
        }
    }
}

#[component]
fn RateTable(title: &'static str, rows: Vec<TableRow>) -> Element {
    rsx! {
        div { class: "space-y-2",
            h2 { class: "text-sm font-semibold text-slate-200", "{title}" }
            div {
                class: "{theme::table_container()}",
                table {
                    class: "min-w-full {theme::table_divider()} text-sm",
                    thead {
                        class: "{theme::table_header()} text-left tracking-wide",
                        tr {
                            th { class: "px-4 py-3 font-medium", "Opção" }
                            th { class: "px-4 py-3 font-medium", "Código" }
                            th { class: "px-4 py-3 font-medium text-right", "Valor" }
                        }
                    }
                    tbody {
                        class: "{theme::table_divider()}",
                        for row in rows {
                            tr { key: "{row.code}",
                                td { class: "px-4 py-2 text-slate-200", "{row.label}" }
                                td { class: "px-4 py-2 font-mono text-xs {theme::text_muted()}", "{row.code}" }
                                td { class: "px-4 py-2 text-right text-slate-300", "{row.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
