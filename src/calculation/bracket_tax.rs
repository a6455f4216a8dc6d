//! Progressive bracket tax calculation.
//!
//! This module walks the ordered bracket table and accumulates the marginal
//! tax owed per bracket, together with a breakdown entry for every bracket
//! that contributes a non-zero amount.

use rust_decimal::Decimal;

use crate::config::TaxBracket;
use crate::models::BracketContribution;

/// The result of walking the bracket table for a taxable income.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTaxResult {
    /// Total tax accumulated across all brackets.
    pub total_tax: Decimal,
    /// Contributions of the brackets with non-zero tax, ascending.
    pub breakdown: Vec<BracketContribution>,
}

/// Calculates the progressive tax for a taxable income.
///
/// Income reaches into a bracket when it exceeds `min - 1`; the portion
/// taxed inside the bracket is `min(income, max) - min + 1`, with the
/// unbounded top bracket using the income itself as its upper bound. The
/// zero-rate bottom bracket contributes nothing and therefore never appears
/// in the breakdown.
///
/// The walk is pure and infallible; bracket-table validity is enforced by
/// the configuration loader.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use tax_engine::calculation::calculate_bracket_tax;
/// use tax_engine::config::TaxBracket;
///
/// fn dec(s: &str) -> Decimal {
///     Decimal::from_str(s).unwrap()
/// }
///
/// let brackets = vec![
///     TaxBracket { min: dec("0"), max: Some(dec("150000")), rate: dec("0") },
///     TaxBracket { min: dec("150001"), max: Some(dec("300000")), rate: dec("0.05") },
///     TaxBracket { min: dec("300001"), max: None, rate: dec("0.10") },
/// ];
///
/// let result = calculate_bracket_tax(dec("400000"), &brackets);
///
/// // 150,000 at 5% plus 100,000 at 10%
/// assert_eq!(result.total_tax, dec("17500"));
/// assert_eq!(result.breakdown.len(), 2);
/// ```
pub fn calculate_bracket_tax(taxable_income: Decimal, brackets: &[TaxBracket]) -> BracketTaxResult {
    let mut total_tax = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for bracket in brackets {
        // The table is ascending, so the first bracket the income does not
        // reach ends the walk.
        if taxable_income <= bracket.min - Decimal::ONE {
            break;
        }

        let reached = match bracket.max {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };
        let taxable_amount = reached - bracket.min + Decimal::ONE;
        let tax_amount = taxable_amount * bracket.rate;
        total_tax += tax_amount;

        if tax_amount > Decimal::ZERO {
            breakdown.push(BracketContribution {
                min: bracket.min,
                max: bracket.max,
                rate: bracket.rate,
                taxable_amount,
                tax_amount,
            });
        }
    }

    BracketTaxResult {
        total_tax,
        breakdown,
    }
}
