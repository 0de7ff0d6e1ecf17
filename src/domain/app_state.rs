use super::{
    breakdown::{breakdown, BreakdownSection},
    categories::Category,
    error::ValuationError,
    form::{FormField, ValuationForm},
    valuation::{compute, ValuationInput, ValuationResult},
};

/// Last successful calculation together with the input that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    pub input: ValuationInput,
    pub result: ValuationResult,
}

impl Calculation {
    pub fn breakdown(&self) -> Vec<BreakdownSection> {
        breakdown(&self.input, &self.result)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CalculatorState {
    pub form: ValuationForm,
    pub calculation: Option<Calculation>,
    pub show_details: bool,
}

impl CalculatorState {
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Recomputes from the current form. A rejected form keeps the previous result on screen.
    pub fn calculate(&mut self) -> Result<&ValuationResult, ValuationError> {
        let input = self.form.to_input().inspect_err(|err| {
            tracing::warn!(error = %err, "valuation request rejected");
        })?;
        let result = compute(&input)?;

        tracing::info!(
            zone = input.zone.code(),
            land_area = %input.land_area,
            built_area = %input.built_area,
            total = %result.total_value,
            "valuation updated"
        );

        self.show_details = true;
        let calculation = self.calculation.insert(Calculation { input, result });
        Ok(&calculation.result)
    }

    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn initial_calculation_uses_default_form() {
        let mut state = CalculatorState::default();
        assert!(state.calculation.is_none());
        let total = state.calculate().unwrap().total_value;
        assert_eq!(total, dec!(213663.80));
        assert!(state.show_details);
    }

    #[test]
    fn rejected_form_keeps_previous_result() {
        let mut state = CalculatorState::default();
        state.calculate().unwrap();
        let before = state.calculation.clone();

        state.update(FormField::LandArea, "0");
        let err = state.calculate().unwrap_err();
        assert!(matches!(err, ValuationError::InvalidLandArea { .. }));
        assert_eq!(state.calculation, before);
    }

    #[test]
    fn form_edits_apply_on_next_calculation() {
        let mut state = CalculatorState::default();
        state.calculate().unwrap();
        state.update(FormField::BuiltArea, "0");
        assert_eq!(
            state.calculation.as_ref().unwrap().result.building_value,
            dec!(56163.80)
        );
        let result = state.calculate().unwrap();
        assert_eq!(result.building_value, dec!(0));
        assert_eq!(result.total_value, dec!(175000.00));
    }

    #[test]
    fn details_toggle_and_reset() {
        let mut state = CalculatorState::default();
        state.calculate().unwrap();
        state.toggle_details();
        assert!(!state.show_details);
        state.update(FormField::Zone, "periferico");
        state.reset();
        assert_eq!(state.form, ValuationForm::default());
        assert!(state.calculation.is_none());
    }
}
