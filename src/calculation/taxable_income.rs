//! Taxable income derivation.

use rust_decimal::Decimal;

use crate::models::DeductionTotals;

/// Calculates taxable income: total income minus the three deduction
/// category totals, floored at zero.
pub fn calculate_taxable_income(total_income: Decimal, deductions: &DeductionTotals) -> Decimal {
    let taxable = total_income - deductions.family - deductions.insurance - deductions.fund;
    taxable.max(Decimal::ZERO)
}
