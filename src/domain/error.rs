use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a valuation request is rejected before any value is computed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValuationError {
    #[error("land area must be greater than zero (got {value})")]
    InvalidLandArea { value: Decimal },
    #[error("built area cannot be negative (got {value})")]
    InvalidBuiltArea { value: Decimal },
    #[error("area values exceed the supported numeric range")]
    OutOfRange,
    #[error("unknown {field} code: {code:?}")]
    UnknownCategoryCode { field: &'static str, code: String },
}

impl ValuationError {
    /// Message shown to the person filling in the form.
    pub fn user_message(&self) -> String {
        match self {
            ValuationError::InvalidLandArea { .. } => {
                "Por favor, informe a área do terreno.".to_string()
            }
            ValuationError::InvalidBuiltArea { .. } => {
                "A área construída não pode ser negativa.".to_string()
            }
            ValuationError::OutOfRange => {
                "Os valores de área informados estão fora do intervalo suportado.".to_string()
            }
            ValuationError::UnknownCategoryCode { field, code } => {
                format!("Opção inválida para {field}: \"{code}\". Verifique os dados informados.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn land_area_message_asks_for_the_area() {
        let err = ValuationError::InvalidLandArea { value: dec!(0) };
        assert_eq!(err.user_message(), "Por favor, informe a área do terreno.");
        assert_eq!(
            err.to_string(),
            "land area must be greater than zero (got 0)"
        );
    }

    #[test]
    fn unknown_code_names_field_and_code() {
        let err = ValuationError::UnknownCategoryCode {
            field: "zone",
            code: "downtown".to_string(),
        };
        assert_eq!(err.to_string(), "unknown zone code: \"downtown\"");
        assert!(err.user_message().contains("downtown"));
    }

    #[test]
    fn out_of_range_has_a_user_message() {
        let err = ValuationError::OutOfRange;
        assert!(err.user_message().contains("fora do intervalo"));
    }
}
