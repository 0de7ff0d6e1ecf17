//! pt-BR display helpers for values produced by the valuation engine.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a currency value as Brazilian reais, e.g. `R$ 213.663,80`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_half_up(value, 2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}R$ {},{frac_part}", group_thousands(int_part))
}

/// Fixed number of decimals with a `.` separator, as printed in the calculation details.
pub fn format_fixed(value: Decimal, decimals: u32) -> String {
    format!(
        "{:.*}",
        decimals as usize,
        round_half_up(value, decimals)
    )
}

/// Fixed number of decimals with a `,` separator, used in option labels.
pub fn format_decimal_comma(value: Decimal, decimals: u32) -> String {
    format_fixed(value, decimals).replace('.', ",")
}

/// Shortest plain rendering of an area, e.g. `250` or `12.5`.
pub fn format_area(value: Decimal) -> String {
    value.normalize().to_string()
}

fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn brl_groups_thousands_and_uses_decimal_comma() {
        assert_eq!(format_brl(dec!(213663.80)), "R$ 213.663,80");
        assert_eq!(format_brl(dec!(157500)), "R$ 157.500,00");
        assert_eq!(format_brl(dec!(1042)), "R$ 1.042,00");
        assert_eq!(format_brl(dec!(1118.99)), "R$ 1.118,99");
        assert_eq!(format_brl(dec!(1234567.891)), "R$ 1.234.567,89");
    }

    #[test]
    fn brl_small_and_zero_values() {
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_brl(dec!(0.5)), "R$ 0,50");
        assert_eq!(format_brl(dec!(999.999)), "R$ 1.000,00");
        assert_eq!(format_brl(dec!(-0.001)), "R$ 0,00");
    }

    #[test]
    fn brl_negative_values_keep_sign_in_front() {
        assert_eq!(format_brl(dec!(-1500.25)), "-R$ 1.500,25");
    }

    #[test]
    fn brl_rounds_midpoint_away_from_zero() {
        assert_eq!(format_brl(dec!(0.125)), "R$ 0,13");
        assert_eq!(format_brl(dec!(0.135)), "R$ 0,14");
    }

    #[test]
    fn fixed_pads_and_rounds() {
        assert_eq!(format_fixed(dec!(0.28), 4), "0.2800");
        assert_eq!(format_fixed(dec!(0.9), 2), "0.90");
        assert_eq!(format_fixed(dec!(1.1), 2), "1.10");
        assert_eq!(format_fixed(dec!(0.12345), 4), "0.1235");
        assert_eq!(format_fixed(dec!(700), 2), "700.00");
    }

    #[test]
    fn decimal_comma_variant() {
        assert_eq!(format_decimal_comma(dec!(0.9), 2), "0,90");
        assert_eq!(format_decimal_comma(dec!(1.10), 2), "1,10");
    }

    #[test]
    fn area_drops_trailing_zeros() {
        assert_eq!(format_area(dec!(250.00)), "250");
        assert_eq!(format_area(dec!(12.50)), "12.5");
    }
}
