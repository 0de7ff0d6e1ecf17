//! Planta Genérica de Valores: base prices and correction tables.
//!
//! Every lookup is an exhaustive `match`, so a parsed category always has a value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::categories::{
    BuildingType, Ceiling, Conservation, Electrical, Finish, Floor, Position, Roof, Sanitation,
    Situation, Soil, Structure, Topography, Zone,
};
use crate::util::format::{format_brl, format_decimal_comma};

/// Value a category contributes to the formula, as shown next to its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableValue {
    /// Currency per square metre.
    PerSquareMetre(Decimal),
    /// Dimensionless multiplier.
    Multiplier(Decimal),
    /// Percentage points added to the building weight sum.
    Weight(u32),
}

impl TableValue {
    pub fn display(&self) -> String {
        match self {
            TableValue::PerSquareMetre(rate) => format!("{}/m²", format_brl(*rate)),
            TableValue::Multiplier(factor) => format_decimal_comma(*factor, 2),
            TableValue::Weight(points) => format!("{points}%"),
        }
    }
}

/// Categories that resolve to a table value.
pub trait Rated {
    fn table_value(self) -> TableValue;
}

impl Zone {
    /// Base land value (VBT) per square metre.
    pub fn base_rate(self) -> Decimal {
        match self {
            Zone::Central => dec!(700.00),
            Zone::MediumCentral => dec!(560.00),
            Zone::Intermediate => dec!(490.00),
            Zone::MediumIntermediate => dec!(350.00),
            Zone::IntermediatePeripheral => dec!(245.00),
            Zone::Peripheral => dec!(140.00),
        }
    }
}

impl BuildingType {
    /// Base construction value (VBE) per square metre.
    pub fn base_rate(self) -> Decimal {
        match self {
            BuildingType::House => dec!(1042.00),
            BuildingType::Apartment => dec!(1142.00),
            BuildingType::Shed => dec!(404.00),
            BuildingType::LeanTo => dec!(116.00),
            BuildingType::Shop => dec!(942.00),
            BuildingType::Industrial => dec!(500.00),
            BuildingType::Other => dec!(1118.99),
        }
    }
}

impl Topography {
    pub fn multiplier(self) -> Decimal {
        match self {
            Topography::Flat => dec!(1.00),
            Topography::Uphill => dec!(0.90),
            Topography::Downhill => dec!(0.80),
        }
    }
}

impl Situation {
    pub fn multiplier(self) -> Decimal {
        match self {
            Situation::OneFrontage => dec!(1.00),
            Situation::Corner => dec!(1.10),
            Situation::Landlocked => dec!(0.80),
        }
    }
}

impl Soil {
    pub fn multiplier(self) -> Decimal {
        match self {
            Soil::Normal => dec!(1.00),
            Soil::Sandy => dec!(0.90),
            Soil::Rocky => dec!(0.80),
            Soil::FloodProne => dec!(0.70),
            Soil::Waterlogged => dec!(0.60),
        }
    }
}

impl Finish {
    pub fn weight(self) -> u32 {
        match self {
            Finish::None => 0,
            Finish::OilPaint => 23,
            Finish::Whitewash => 17,
            Finish::Wood => 12,
            Finish::Other => 20,
        }
    }
}

impl Floor {
    pub fn weight(self) -> u32 {
        match self {
            Floor::BareEarth => 0,
            Floor::Cement => 10,
            Floor::Ceramic => 17,
            Floor::Other => 20,
        }
    }
}

impl Ceiling {
    pub fn weight(self) -> u32 {
        match self {
            Ceiling::None => 0,
            Ceiling::Wood => 3,
            Ceiling::Plaster => 3,
            Ceiling::Slab => 4,
        }
    }
}

impl Roof {
    pub fn weight(self) -> u32 {
        match self {
            Roof::Thatch => 3,
            Roof::FiberCement => 6,
            Roof::Tile => 8,
            Roof::Slab => 10,
        }
    }
}

impl Sanitation {
    pub fn weight(self) -> u32 {
        match self {
            Sanitation::None => 0,
            Sanitation::External => 1,
            Sanitation::Internal => 2,
            Sanitation::MultipleInternal => 3,
        }
    }
}

impl Structure {
    pub fn weight(self) -> u32 {
        match self {
            Structure::Wood => 11,
            Structure::Masonry => 18,
            Structure::Metal => 26,
            Structure::Concrete => 28,
        }
    }
}

impl Electrical {
    pub fn weight(self) -> u32 {
        match self {
            Electrical::None => 0,
            Electrical::Exposed => 8,
            Electrical::Embedded => 12,
        }
    }
}

impl Conservation {
    pub fn multiplier(self) -> Decimal {
        match self {
            Conservation::Good => dec!(1.00),
            Conservation::Fair => dec!(0.80),
            Conservation::Poor => dec!(0.50),
        }
    }
}

impl Position {
    pub fn multiplier(self) -> Decimal {
        match self {
            Position::IsolatedAligned => dec!(0.90),
            Position::IsolatedSetback => dec!(1.00),
            Position::TwinAligned => dec!(0.70),
            Position::TwinSetback => dec!(0.80),
            Position::SuperposedAligned => dec!(0.80),
            Position::SuperposedSetback => dec!(0.90),
            Position::AttachedAligned => dec!(0.80),
            Position::AttachedSetback => dec!(0.90),
        }
    }
}

macro_rules! rated {
    ($kind:ident: $($ty:ty => $method:ident),+ $(,)?) => {
        $(
            impl Rated for $ty {
                fn table_value(self) -> TableValue {
                    TableValue::$kind(self.$method())
                }
            }
        )+
    };
}

rated!(PerSquareMetre: Zone => base_rate, BuildingType => base_rate);
rated!(Multiplier:
    Topography => multiplier,
    Situation => multiplier,
    Soil => multiplier,
    Conservation => multiplier,
    Position => multiplier,
);
rated!(Weight:
    Finish => weight,
    Floor => weight,
    Ceiling => weight,
    Roof => weight,
    Sanitation => weight,
    Structure => weight,
    Electrical => weight,
);

/// Largest weight sum the tables allow (every element at its maximum).
pub fn max_weight_sum() -> u32 {
    fn max_of<T: Copy>(all: &[T], weight: fn(T) -> u32) -> u32 {
        all.iter().copied().map(weight).max().unwrap_or(0)
    }

    max_of(Finish::ALL, Finish::weight)
        + max_of(Floor::ALL, Floor::weight)
        + max_of(Ceiling::ALL, Ceiling::weight)
        + max_of(Roof::ALL, Roof::weight)
        + max_of(Sanitation::ALL, Sanitation::weight)
        + max_of(Structure::ALL, Structure::weight)
        + max_of(Electrical::ALL, Electrical::weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_rates_match_schedule() {
        assert_eq!(Zone::Central.base_rate(), dec!(700.00));
        assert_eq!(Zone::IntermediatePeripheral.base_rate(), dec!(245.00));
        assert_eq!(Zone::Peripheral.base_rate(), dec!(140.00));
        assert_eq!(BuildingType::House.base_rate(), dec!(1042.00));
        assert_eq!(BuildingType::LeanTo.base_rate(), dec!(116.00));
        assert_eq!(BuildingType::Other.base_rate(), dec!(1118.99));
    }

    #[test]
    fn terrain_multipliers_match_schedule() {
        assert_eq!(Topography::Downhill.multiplier(), dec!(0.80));
        assert_eq!(Situation::Corner.multiplier(), dec!(1.10));
        assert_eq!(Situation::Landlocked.multiplier(), dec!(0.80));
        assert_eq!(Soil::FloodProne.multiplier(), dec!(0.70));
        assert_eq!(Soil::Waterlogged.multiplier(), dec!(0.60));
    }

    #[test]
    fn building_weights_match_schedule() {
        assert_eq!(Finish::OilPaint.weight(), 23);
        assert_eq!(Floor::Other.weight(), 20);
        assert_eq!(Ceiling::Plaster.weight(), 3);
        assert_eq!(Roof::Slab.weight(), 10);
        assert_eq!(Sanitation::MultipleInternal.weight(), 3);
        assert_eq!(Structure::Concrete.weight(), 28);
        assert_eq!(Electrical::Exposed.weight(), 8);
    }

    #[test]
    fn position_multipliers_stay_in_range() {
        for &position in Position::ALL {
            let value = position.multiplier();
            assert!(value >= dec!(0.70) && value <= dec!(1.00), "{position:?}");
        }
        assert_eq!(Position::TwinAligned.multiplier(), dec!(0.70));
        assert_eq!(Position::IsolatedSetback.multiplier(), dec!(1.00));
    }

    #[test]
    fn weight_sum_ceiling_is_one_hundred() {
        assert_eq!(max_weight_sum(), 100);
    }

    #[test]
    fn table_values_render_for_option_labels() {
        assert_eq!(Zone::Central.table_value().display(), "R$ 700,00/m²");
        assert_eq!(BuildingType::Other.table_value().display(), "R$ 1.118,99/m²");
        assert_eq!(Situation::Corner.table_value().display(), "1,10");
        assert_eq!(Finish::OilPaint.table_value().display(), "23%");
    }
}
