pub mod area_field;
pub mod breakdown_panel;
pub mod kpi_card;
pub mod select_field;
pub mod toast;
