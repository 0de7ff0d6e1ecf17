//! Valor venal calculation core. Nothing in here touches the UI.

pub mod app_state;
pub mod breakdown;
pub mod categories;
pub mod error;
pub mod form;
pub mod rates;
pub mod valuation;

pub use app_state::CalculatorState;
pub use breakdown::BreakdownSection;
pub use categories::{
    BuildingType, Category, Ceiling, Conservation, Electrical, Finish, Floor, Position, Roof,
    Sanitation, Situation, Soil, Structure, Topography, Zone,
};
pub use form::FormField;
pub use rates::Rated;
