pub mod calculator;
pub mod rate_tables;

pub use calculator::CalculatorPage;
pub use rate_tables::RateTablesPage;
