use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::error_code::{ErrorCode, ValidationErrors};
use super::input::ProductInput;

/// Checks every rule on the submitted fields and returns the failed ones.
///
/// Rules are reported in field order (name, price, stock) and, within a
/// field, presence before format before range. A field that failed to parse
/// is not range-checked. Never fails: an empty list means the input is valid.
pub fn validate(input: &ProductInput) -> Vec<ErrorCode> {
    let mut errors = ValidationErrors::new();
    parse_name(input.name.as_deref(), &mut errors);
    parse_price(input.price.as_deref(), &mut errors);
    parse_stock(input.stock.as_deref(), &mut errors);
    errors.into_inner()
}

/// Returns the trimmed value, or `None` when absent or whitespace only.
fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

pub(crate) fn parse_name(raw: Option<&str>, errors: &mut ValidationErrors) -> Option<String> {
    match non_blank(raw) {
        Some(name) => Some(name.to_string()),
        None => {
            errors.push(ErrorCode::MissingName);
            None
        }
    }
}

pub(crate) fn parse_price(raw: Option<&str>, errors: &mut ValidationErrors) -> Option<BigDecimal> {
    let Some(raw) = non_blank(raw) else {
        errors.push(ErrorCode::MissingPrice);
        return None;
    };

    let Some(price) = parse_decimal(raw) else {
        errors.push(ErrorCode::PriceNotANumber);
        return None;
    };

    if price <= BigDecimal::zero() {
        errors.push(ErrorCode::PriceNotGreaterThanZero);
        return None;
    }

    Some(price)
}

pub(crate) fn parse_stock(raw: Option<&str>, errors: &mut ValidationErrors) -> Option<i32> {
    let Some(raw) = non_blank(raw) else {
        errors.push(ErrorCode::MissingQuantity);
        return None;
    };

    let Ok(stock) = raw.parse::<i32>() else {
        errors.push(ErrorCode::StockNotAnInteger);
        return None;
    };

    if stock <= 0 {
        errors.push(ErrorCode::StockNotGreaterThanZero);
        return None;
    }

    Some(stock)
}

// Plain decimal notation only: sign, digits, one dot. No exponent.
fn parse_decimal(raw: &str) -> Option<BigDecimal> {
    let allowed = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'));
    if !allowed || !raw.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    BigDecimal::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn input(name: Option<&str>, price: Option<&str>, stock: Option<&str>) -> ProductInput {
        ProductInput {
            name: name.map(str::to_string),
            price: price.map(str::to_string),
            stock: stock.map(str::to_string),
            ..Default::default()
        }
    }

    fn price_errors(price: Option<&str>) -> Vec<ErrorCode> {
        validate(&input(Some("Lamp"), price, Some("1")))
    }

    fn stock_errors(stock: Option<&str>) -> Vec<ErrorCode> {
        validate(&input(Some("Lamp"), Some("1"), stock))
    }

    #[test]
    fn should_accept_valid_product() {
        let errors = validate(&input(Some("Arthur"), Some("9.95"), Some("420")));
        assert!(errors.is_empty());
    }

    #[test]
    fn should_report_every_missing_field_in_field_order() {
        let errors = validate(&input(None, None, None));
        assert_eq!(
            errors,
            vec![
                ErrorCode::MissingName,
                ErrorCode::MissingPrice,
                ErrorCode::MissingQuantity
            ]
        );
    }

    #[test]
    fn should_report_missing_name_when_blank() {
        for name in [None, Some(""), Some("  ")] {
            let errors = validate(&input(name, Some("1"), Some("1")));
            assert_eq!(errors, vec![ErrorCode::MissingName]);
        }
    }

    #[test]
    fn should_report_missing_price_when_blank() {
        for price in [None, Some(""), Some("  ")] {
            assert_eq!(price_errors(price), vec![ErrorCode::MissingPrice]);
        }
    }

    #[test]
    fn should_report_price_not_a_number_for_letters() {
        assert_eq!(price_errors(Some("abs")), vec![ErrorCode::PriceNotANumber]);
        assert_eq!(price_errors(Some("1.2.3")), vec![ErrorCode::PriceNotANumber]);
        assert_eq!(price_errors(Some("NaN")), vec![ErrorCode::PriceNotANumber]);
        assert_eq!(price_errors(Some("inf")), vec![ErrorCode::PriceNotANumber]);
        assert_eq!(price_errors(Some("1e5")), vec![ErrorCode::PriceNotANumber]);
        assert_eq!(price_errors(Some("2E-3")), vec![ErrorCode::PriceNotANumber]);
        assert_eq!(
            price_errors(Some("1e1000000000")),
            vec![ErrorCode::PriceNotANumber]
        );
    }

    #[test]
    fn should_report_price_not_greater_than_zero() {
        for price in ["0", "-1", "0.00", "-0.01"] {
            assert_eq!(
                price_errors(Some(price)),
                vec![ErrorCode::PriceNotGreaterThanZero]
            );
        }
    }

    #[test]
    fn should_report_missing_quantity_when_blank() {
        for stock in [None, Some(""), Some("  ")] {
            assert_eq!(stock_errors(stock), vec![ErrorCode::MissingQuantity]);
        }
    }

    #[test]
    fn should_report_stock_not_an_integer_for_letters_and_decimals() {
        for stock in ["abc", "1.5", "2,0", "99999999999"] {
            assert_eq!(
                stock_errors(Some(stock)),
                vec![ErrorCode::StockNotAnInteger]
            );
        }
    }

    #[test]
    fn should_report_stock_not_greater_than_zero() {
        for stock in ["0", "-1"] {
            assert_eq!(
                stock_errors(Some(stock)),
                vec![ErrorCode::StockNotGreaterThanZero]
            );
        }
    }

    #[test]
    fn should_trim_surrounding_whitespace_before_parsing() {
        let errors = validate(&input(Some(" Lamp "), Some(" 12.50 "), Some(" 3 ")));
        assert!(errors.is_empty());
    }

    #[test]
    fn should_combine_errors_across_fields() {
        let errors = validate(&input(Some(""), Some("-3"), Some("x")));
        assert_eq!(
            errors,
            vec![
                ErrorCode::MissingName,
                ErrorCode::PriceNotGreaterThanZero,
                ErrorCode::StockNotAnInteger
            ]
        );
    }

    proptest! {
        #[test]
        fn blank_name_always_reports_missing_name(name in "[ \t]{0,5}") {
            let errors = validate(&input(Some(&name), Some("1"), Some("1")));
            prop_assert_eq!(errors, vec![ErrorCode::MissingName]);
        }

        #[test]
        fn non_blank_name_never_reports_missing_name(name in "[a-zA-Z][a-zA-Z ]{0,20}") {
            let errors = validate(&input(Some(&name), None, None));
            prop_assert!(!errors.contains(&ErrorCode::MissingName));
        }

        #[test]
        fn letters_in_price_are_not_a_number(price in "[a-zA-Z]{1,8}") {
            let errors = price_errors(Some(&price));
            prop_assert!(errors.contains(&ErrorCode::PriceNotANumber));
            prop_assert!(!errors.contains(&ErrorCode::PriceNotGreaterThanZero));
        }

        #[test]
        fn non_positive_price_is_not_greater_than_zero(units in -100_000i64..=0, cents in 0u8..100) {
            let price = if units == 0 {
                format!("-0.{:02}", cents)
            } else {
                format!("{}.{:02}", units, cents)
            };
            let errors = price_errors(Some(&price));
            prop_assert!(errors.contains(&ErrorCode::PriceNotGreaterThanZero));
            prop_assert!(!errors.contains(&ErrorCode::PriceNotANumber));
        }

        #[test]
        fn positive_price_is_accepted(units in 0i64..100_000, cents in 1u8..100) {
            let price = format!("{}.{:02}", units, cents);
            prop_assert!(price_errors(Some(&price)).is_empty());
        }

        #[test]
        fn decimal_stock_is_not_an_integer(whole in 0u32..1000, fraction in 1u32..1000) {
            let stock = format!("{}.{}", whole, fraction);
            prop_assert_eq!(stock_errors(Some(&stock)), vec![ErrorCode::StockNotAnInteger]);
        }

        #[test]
        fn letters_in_stock_are_not_an_integer(stock in "[a-zA-Z]{1,8}") {
            prop_assert_eq!(stock_errors(Some(&stock)), vec![ErrorCode::StockNotAnInteger]);
        }

        #[test]
        fn non_positive_stock_is_not_greater_than_zero(stock in -1_000_000i32..=0) {
            prop_assert_eq!(
                stock_errors(Some(&stock.to_string())),
                vec![ErrorCode::StockNotGreaterThanZero]
            );
        }

        #[test]
        fn each_rule_fires_at_most_once(
            name in proptest::option::of(".{0,6}"),
            price in proptest::option::of(".{0,6}"),
            stock in proptest::option::of(".{0,6}"),
        ) {
            let errors = validate(&ProductInput { name, price, stock, ..Default::default() });
            let distinct: HashSet<ErrorCode> = errors.iter().copied().collect();
            prop_assert_eq!(errors.len(), distinct.len());
            prop_assert!(errors.len() <= 3);
        }
    }
}
