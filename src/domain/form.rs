use std::str::FromStr;

use rust_decimal::Decimal;

use super::{
    categories::{
        BuildingType, Category, Ceiling, Conservation, Electrical, Finish, Floor, Position, Roof,
        Sanitation, Situation, Soil, Structure, Topography, Zone,
    },
    error::ValuationError,
    valuation::{validate_areas, ValuationInput},
};

/// Addresses one input of the valuation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    LandArea,
    BuiltArea,
    Zone,
    BuildingType,
    Topography,
    Situation,
    Soil,
    Finish,
    Floor,
    Ceiling,
    Roof,
    Sanitation,
    Structure,
    Electrical,
    Conservation,
    Position,
}

/// Raw form contents, exactly as typed or selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValuationForm {
    pub land_area: String,
    pub built_area: String,
    pub zone: String,
    pub building_type: String,
    pub topography: String,
    pub situation: String,
    pub soil: String,
    pub finish: String,
    pub floor: String,
    pub ceiling: String,
    pub roof: String,
    pub sanitation: String,
    pub structure: String,
    pub electrical: String,
    pub conservation: String,
    pub position: String,
}

impl Default for ValuationForm {
    fn default() -> Self {
        Self {
            land_area: "250".to_string(),
            built_area: "70".to_string(),
            zone: Zone::Central.code().to_string(),
            building_type: BuildingType::House.code().to_string(),
            topography: Topography::Flat.code().to_string(),
            situation: Situation::OneFrontage.code().to_string(),
            soil: Soil::Normal.code().to_string(),
            finish: Finish::Whitewash.code().to_string(),
            floor: Floor::Ceramic.code().to_string(),
            ceiling: Ceiling::Wood.code().to_string(),
            roof: Roof::Tile.code().to_string(),
            sanitation: Sanitation::Internal.code().to_string(),
            structure: Structure::Masonry.code().to_string(),
            electrical: Electrical::Embedded.code().to_string(),
            conservation: Conservation::Good.code().to_string(),
            position: Position::IsolatedSetback.code().to_string(),
        }
    }
}

impl ValuationForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::LandArea => &self.land_area,
            FormField::BuiltArea => &self.built_area,
            FormField::Zone => &self.zone,
            FormField::BuildingType => &self.building_type,
            FormField::Topography => &self.topography,
            FormField::Situation => &self.situation,
            FormField::Soil => &self.soil,
            FormField::Finish => &self.finish,
            FormField::Floor => &self.floor,
            FormField::Ceiling => &self.ceiling,
            FormField::Roof => &self.roof,
            FormField::Sanitation => &self.sanitation,
            FormField::Structure => &self.structure,
            FormField::Electrical => &self.electrical,
            FormField::Conservation => &self.conservation,
            FormField::Position => &self.position,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            FormField::LandArea => &mut self.land_area,
            FormField::BuiltArea => &mut self.built_area,
            FormField::Zone => &mut self.zone,
            FormField::BuildingType => &mut self.building_type,
            FormField::Topography => &mut self.topography,
            FormField::Situation => &mut self.situation,
            FormField::Soil => &mut self.soil,
            FormField::Finish => &mut self.finish,
            FormField::Floor => &mut self.floor,
            FormField::Ceiling => &mut self.ceiling,
            FormField::Roof => &mut self.roof,
            FormField::Sanitation => &mut self.sanitation,
            FormField::Structure => &mut self.structure,
            FormField::Electrical => &mut self.electrical,
            FormField::Conservation => &mut self.conservation,
            FormField::Position => &mut self.position,
        };
        *slot = value;
    }

    /// Converts the raw form into a validated input.
    ///
    /// Area text that does not parse is treated as zero (see [`parse_area`]),
    /// so an empty land area surfaces as [`ValuationError::InvalidLandArea`].
    /// Category codes are checked in form order and the first unknown one is reported.
    pub fn to_input(&self) -> Result<ValuationInput, ValuationError> {
        let land_area = parse_area(&self.land_area);
        let built_area = parse_area(&self.built_area);

        let input = ValuationInput {
            land_area,
            built_area,
            zone: parse_code(&self.zone)?,
            building_type: parse_code(&self.building_type)?,
            topography: parse_code(&self.topography)?,
            situation: parse_code(&self.situation)?,
            soil: parse_code(&self.soil)?,
            finish: parse_code(&self.finish)?,
            floor: parse_code(&self.floor)?,
            ceiling: parse_code(&self.ceiling)?,
            roof: parse_code(&self.roof)?,
            sanitation: parse_code(&self.sanitation)?,
            structure: parse_code(&self.structure)?,
            electrical: parse_code(&self.electrical)?,
            conservation: parse_code(&self.conservation)?,
            position: parse_code(&self.position)?,
        };

        validate_areas(input.land_area, input.built_area)?;
        Ok(input)
    }
}

fn parse_code<C: Category>(raw: &str) -> Result<C, ValuationError> {
    C::from_str(raw)
}

/// Parses an area entry, accepting `,` as the decimal separator.
///
/// Anything unparsable becomes zero instead of an error.
pub fn parse_area(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };

    match Decimal::from_str(&normalized) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(input = %raw, error = %err, "area entry not numeric; using 0");
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_match_initial_form_state() {
        let input = ValuationForm::default().to_input().unwrap();
        assert_eq!(input.land_area, dec!(250));
        assert_eq!(input.built_area, dec!(70));
        assert_eq!(input.zone, Zone::Central);
        assert_eq!(input.building_type, BuildingType::House);
        assert_eq!(input.finish, Finish::Whitewash);
        assert_eq!(input.floor, Floor::Ceramic);
        assert_eq!(input.ceiling, Ceiling::Wood);
        assert_eq!(input.structure, Structure::Masonry);
        assert_eq!(input.position, Position::IsolatedSetback);
    }

    #[test]
    fn area_parsing_accepts_dot_and_comma() {
        assert_eq!(parse_area("250"), dec!(250));
        assert_eq!(parse_area(" 12.5 "), dec!(12.5));
        assert_eq!(parse_area("12,5"), dec!(12.5));
    }

    #[test]
    fn unparsable_area_coerces_to_zero() {
        assert_eq!(parse_area(""), Decimal::ZERO);
        assert_eq!(parse_area("   "), Decimal::ZERO);
        assert_eq!(parse_area("abc"), Decimal::ZERO);
        assert_eq!(parse_area("1.000,50"), Decimal::ZERO);
        assert_eq!(parse_area("12m²"), Decimal::ZERO);
    }

    #[test]
    fn empty_land_area_is_invalid() {
        let mut form = ValuationForm::default();
        form.set(FormField::LandArea, "");
        assert_eq!(
            form.to_input(),
            Err(ValuationError::InvalidLandArea {
                value: Decimal::ZERO
            })
        );
    }

    #[test]
    fn empty_built_area_means_vacant_land() {
        let mut form = ValuationForm::default();
        form.set(FormField::BuiltArea, "n/a");
        let input = form.to_input().unwrap();
        assert_eq!(input.built_area, Decimal::ZERO);
    }

    #[test]
    fn negative_areas_are_rejected() {
        let mut form = ValuationForm::default();
        form.set(FormField::LandArea, "-5");
        assert!(matches!(
            form.to_input(),
            Err(ValuationError::InvalidLandArea { .. })
        ));

        let mut form = ValuationForm::default();
        form.set(FormField::BuiltArea, "-5");
        assert!(matches!(
            form.to_input(),
            Err(ValuationError::InvalidBuiltArea { .. })
        ));
    }

    #[test]
    fn oversized_land_area_is_an_error_not_a_panic() {
        let mut form = ValuationForm::default();
        form.set(FormField::LandArea, "79228162514264337593543950335");
        let input = form.to_input().unwrap();
        assert_eq!(
            crate::domain::valuation::compute(&input),
            Err(ValuationError::OutOfRange)
        );
    }

    #[test]
    fn first_unknown_code_is_reported() {
        let mut form = ValuationForm::default();
        form.set(FormField::Soil, "lunar");
        form.set(FormField::Position, "floating");
        assert_eq!(
            form.to_input(),
            Err(ValuationError::UnknownCategoryCode {
                field: "soil",
                code: "lunar".to_string(),
            })
        );
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut form = ValuationForm::default();
        form.set(FormField::Roof, "laje");
        assert_eq!(form.get(FormField::Roof), "laje");
        assert_eq!(form.to_input().unwrap().roof, Roof::Slab);
        assert_eq!(form.get(FormField::Zone), "central");
    }
}
