//! Assessed-value (valor venal) calculation.
//!
//! ```text
//! VVT = VBT × AT × IO × FCT
//! VVE = VBE × AC × FCE        (0 when AC = 0)
//! VVI = VVT + VVE
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{
    categories::{
        BuildingType, Ceiling, Conservation, Electrical, Finish, Floor, Position, Roof,
        Sanitation, Situation, Soil, Structure, Topography, Zone,
    },
    error::ValuationError,
};

/// Typed property attributes for one calculation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValuationInput {
    /// Lot area (AT), square metres.
    pub land_area: Decimal,
    /// Built area (AC), square metres. Zero means vacant land.
    pub built_area: Decimal,
    pub zone: Zone,
    pub building_type: BuildingType,
    pub topography: Topography,
    pub situation: Situation,
    pub soil: Soil,
    pub finish: Finish,
    pub floor: Floor,
    pub ceiling: Ceiling,
    pub roof: Roof,
    pub sanitation: Sanitation,
    pub structure: Structure,
    pub electrical: Electrical,
    pub conservation: Conservation,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValuationResult {
    /// VVT
    pub land_value: Decimal,
    /// VVE
    pub building_value: Decimal,
    /// VVI
    pub total_value: Decimal,
    /// Built area over land area.
    pub occupancy_ratio: Decimal,
    /// IO
    pub idleness_index: Decimal,
    /// FCT
    pub terrain_correction_factor: Decimal,
    /// FCE
    pub building_correction_factor: Decimal,
    /// Sum of the seven building element weights, in percentage points.
    pub weight_sum: u32,
}

/// Runs the full valuation. Fails before computing anything if an area is out of range.
pub fn compute(input: &ValuationInput) -> Result<ValuationResult, ValuationError> {
    validate_areas(input.land_area, input.built_area)?;

    let occupancy_ratio = input
        .built_area
        .checked_div(input.land_area)
        .ok_or(ValuationError::OutOfRange)?;
    let idleness_index = idleness_index(occupancy_ratio);
    let terrain_correction_factor =
        terrain_correction_factor(input.topography, input.situation, input.soil);

    let land_value = product(&[
        input.zone.base_rate(),
        input.land_area,
        idleness_index,
        terrain_correction_factor,
    ])?;

    let weight_sum = weight_sum(input);
    let building_correction_factor =
        building_correction_factor(weight_sum, input.conservation, input.position);

    let building_value = if input.built_area > Decimal::ZERO {
        product(&[
            input.building_type.base_rate(),
            input.built_area,
            building_correction_factor,
        ])?
    } else {
        Decimal::ZERO
    };

    let total_value = land_value
        .checked_add(building_value)
        .ok_or(ValuationError::OutOfRange)?;

    tracing::debug!(
        %occupancy_ratio,
        %idleness_index,
        fct = %terrain_correction_factor,
        fce = %building_correction_factor,
        weight_sum,
        %total_value,
        "valuation computed"
    );

    Ok(ValuationResult {
        land_value,
        building_value,
        total_value,
        occupancy_ratio,
        idleness_index,
        terrain_correction_factor,
        building_correction_factor,
        weight_sum,
    })
}

fn product(factors: &[Decimal]) -> Result<Decimal, ValuationError> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, &factor| acc.checked_mul(factor))
        .ok_or(ValuationError::OutOfRange)
}

pub(crate) fn validate_areas(land_area: Decimal, built_area: Decimal) -> Result<(), ValuationError> {
    if land_area <= Decimal::ZERO {
        return Err(ValuationError::InvalidLandArea { value: land_area });
    }
    if built_area < Decimal::ZERO {
        return Err(ValuationError::InvalidBuiltArea { value: built_area });
    }
    Ok(())
}

/// Step function of the occupancy ratio; upper bounds are inclusive.
pub fn idleness_index(occupancy_ratio: Decimal) -> Decimal {
    if occupancy_ratio <= dec!(0.15) {
        dec!(1.00)
    } else if occupancy_ratio <= dec!(0.30) {
        dec!(0.90)
    } else if occupancy_ratio <= dec!(0.50) {
        dec!(0.80)
    } else {
        dec!(0.70)
    }
}

pub fn terrain_correction_factor(topography: Topography, situation: Situation, soil: Soil) -> Decimal {
    topography.multiplier() * situation.multiplier() * soil.multiplier()
}

/// Not capped: the tables happen to top out at 100, but nothing enforces it.
pub fn weight_sum(input: &ValuationInput) -> u32 {
    input.finish.weight()
        + input.floor.weight()
        + input.ceiling.weight()
        + input.roof.weight()
        + input.sanitation.weight()
        + input.structure.weight()
        + input.electrical.weight()
}

pub fn building_correction_factor(
    weight_sum: u32,
    conservation: Conservation,
    position: Position,
) -> Decimal {
    Decimal::from(weight_sum) / dec!(100) * conservation.multiplier() * position.multiplier()
}
