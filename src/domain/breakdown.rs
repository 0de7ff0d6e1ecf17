//! Step-by-step rendering of a finished calculation for the details panel.

use super::valuation::{ValuationInput, ValuationResult};
use crate::util::format::{format_area, format_brl, format_fixed};

#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Builds the land, building, total and factor sections from a computed result.
pub fn breakdown(input: &ValuationInput, result: &ValuationResult) -> Vec<BreakdownSection> {
    let vvt = format_brl(result.land_value);
    let vve = format_brl(result.building_value);
    let vvi = format_brl(result.total_value);

    vec![
        BreakdownSection {
            title: "Cálculo do Terreno",
            lines: vec![
                "VVT = VBT × AT × IO × FCT".to_string(),
                format!(
                    "VVT = {} × {} × {} × {}",
                    format_fixed(input.zone.base_rate(), 2),
                    format_area(input.land_area),
                    format_fixed(result.idleness_index, 2),
                    format_fixed(result.terrain_correction_factor, 2),
                ),
                format!("VVT = {vvt}"),
            ],
        },
        BreakdownSection {
            title: "Cálculo da Edificação",
            lines: vec![
                format!("Soma dos elementos: {}%", result.weight_sum),
                format!(
                    "FCE = ({}/100) × {} × {} = {}",
                    result.weight_sum,
                    format_fixed(input.conservation.multiplier(), 2),
                    format_fixed(input.position.multiplier(), 2),
                    format_fixed(result.building_correction_factor, 2),
                ),
                "VVE = VBE × AC × FCE".to_string(),
                format!(
                    "VVE = {} × {} × {}",
                    format_fixed(input.building_type.base_rate(), 2),
                    format_area(input.built_area),
                    format_fixed(result.building_correction_factor, 2),
                ),
                format!("VVE = {vve}"),
            ],
        },
        BreakdownSection {
            title: "Resultado Final",
            lines: vec![format!("VVI = VVT + VVE = {vvt} + {vve} = {vvi}")],
        },
        BreakdownSection {
            title: "Verificação dos Fatores",
            lines: vec![
                format!(
                    "Coeficiente de Utilização (AC/AT): {}",
                    format_fixed(result.occupancy_ratio, 4)
                ),
                format!(
                    "Índice de Ociosidade (IO): {}",
                    format_fixed(result.idleness_index, 2)
                ),
                format!(
                    "Fator Corretivo Terreno (FCT): {}",
                    format_fixed(result.terrain_correction_factor, 2)
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{form::ValuationForm, valuation::compute};
    use rust_decimal::Decimal;

    fn default_breakdown() -> Vec<BreakdownSection> {
        let input = ValuationForm::default().to_input().unwrap();
        let result = compute(&input).unwrap();
        breakdown(&input, &result)
    }

    #[test]
    fn land_section_substitutes_values() {
        let sections = default_breakdown();
        assert_eq!(sections[0].title, "Cálculo do Terreno");
        assert_eq!(sections[0].lines[1], "VVT = 700.00 × 250 × 0.90 × 1.00");
        assert_eq!(sections[0].lines[2], "VVT = R$ 157.500,00");
    }

    #[test]
    fn building_section_shows_weight_sum_and_factor() {
        let sections = default_breakdown();
        let lines = &sections[1].lines;
        assert_eq!(lines[0], "Soma dos elementos: 77%");
        assert_eq!(lines[1], "FCE = (77/100) × 1.00 × 1.00 = 0.77");
        assert_eq!(lines[3], "VVE = 1042.00 × 70 × 0.77");
        assert_eq!(lines[4], "VVE = R$ 56.163,80");
    }

    #[test]
    fn total_and_factor_sections() {
        let sections = default_breakdown();
        assert_eq!(
            sections[2].lines[0],
            "VVI = VVT + VVE = R$ 157.500,00 + R$ 56.163,80 = R$ 213.663,80"
        );
        assert_eq!(sections[3].lines[0], "Coeficiente de Utilização (AC/AT): 0.2800");
        assert_eq!(sections[3].lines[1], "Índice de Ociosidade (IO): 0.90");
        assert_eq!(sections[3].lines[2], "Fator Corretivo Terreno (FCT): 1.00");
    }

    #[test]
    fn vacant_land_breakdown_reports_zero_building_value() {
        let mut input = ValuationForm::default().to_input().unwrap();
        input.built_area = Decimal::ZERO;
        let result = compute(&input).unwrap();
        let sections = breakdown(&input, &result);
        assert_eq!(sections[1].lines[3], "VVE = 1042.00 × 0 × 0.77");
        assert_eq!(sections[1].lines[4], "VVE = R$ 0,00");
    }
}
