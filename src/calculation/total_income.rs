//! Total income aggregation.
//!
//! This module derives the annual total income from the figures entered on
//! the wizard's income step.

use rust_decimal::Decimal;

use crate::calculation::common::non_negative;
use crate::models::IncomeInputs;

/// Calculates the annual total income.
///
/// The total is the monthly salary annualized over twelve months plus the
/// annual bonus and any other annual income. Negative entries are clamped
/// to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use tax_engine::calculation::calculate_total_income;
/// use tax_engine::models::IncomeInputs;
///
/// let income = IncomeInputs {
///     monthly_salary: Decimal::from_str("50000").unwrap(),
///     annual_bonus: Decimal::from_str("100000").unwrap(),
///     other_income: Decimal::ZERO,
/// };
///
/// assert_eq!(
///     calculate_total_income(&income),
///     Decimal::from_str("700000").unwrap()
/// );
/// ```
pub fn calculate_total_income(income: &IncomeInputs) -> Decimal {
    let monthly_salary = non_negative(income.monthly_salary);
    let annual_bonus = non_negative(income.annual_bonus);
    let other_income = non_negative(income.other_income);

    monthly_salary * Decimal::from(12u32) + annual_bonus + other_income
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_salary_is_annualized() {
        let income = IncomeInputs {
            monthly_salary: dec("30000"),
            annual_bonus: Decimal::ZERO,
            other_income: Decimal::ZERO,
        };

        assert_eq!(calculate_total_income(&income), dec("360000"));
    }

    #[test]
    fn test_bonus_and_other_income_are_annual_amounts() {
        let income = IncomeInputs {
            monthly_salary: dec("30000"),
            annual_bonus: dec("60000"),
            other_income: dec("40000"),
        };

        assert_eq!(calculate_total_income(&income), dec("460000"));
    }

    #[test]
    fn test_all_zero_inputs_total_zero() {
        assert_eq!(
            calculate_total_income(&IncomeInputs::default()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_negative_entries_clamp_to_zero() {
        let income = IncomeInputs {
            monthly_salary: dec("-1000"),
            annual_bonus: dec("-500"),
            other_income: dec("25000"),
        };

        assert_eq!(calculate_total_income(&income), dec("25000"));
    }

    #[test]
    fn test_fractional_salary() {
        let income = IncomeInputs {
            monthly_salary: dec("12345.67"),
            annual_bonus: Decimal::ZERO,
            other_income: Decimal::ZERO,
        };

        assert_eq!(calculate_total_income(&income), dec("148148.04"));
    }
}
