//! Investment fund deduction calculation.
//!
//! This module computes the fund deduction category. The provident fund has
//! its own cap; the retirement and long-term funds are first limited by
//! their individual caps and then share a combined cap.

use crate::calculation::common::{apply_cap, non_negative};
use crate::config::FundRules;
use crate::models::{FundAllowance, FundInputs};

/// Calculates the fund deduction for a taxpayer.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use tax_engine::calculation::calculate_fund_allowance;
/// use tax_engine::config::FundRules;
/// use tax_engine::models::FundInputs;
///
/// let rules = FundRules {
///     provident_cap: Decimal::from_str("500000").unwrap(),
///     retirement_cap: Decimal::from_str("300000").unwrap(),
///     long_term_cap: Decimal::from_str("200000").unwrap(),
///     retirement_long_term_combined_cap: Decimal::from_str("500000").unwrap(),
/// };
///
/// let inputs = FundInputs {
///     provident: Decimal::from_str("100000").unwrap(),
///     retirement: Decimal::from_str("400000").unwrap(),
///     long_term: Decimal::from_str("400000").unwrap(),
/// };
///
/// // Retirement caps at 300,000 and long-term at 200,000; the combined
/// // amount from those two fields is 500,000, not 800,000.
/// let allowance = calculate_fund_allowance(&inputs, &rules);
/// assert_eq!(
///     allowance.retirement_long_term,
///     Decimal::from_str("500000").unwrap()
/// );
/// assert_eq!(allowance.total, Decimal::from_str("600000").unwrap());
/// ```
pub fn calculate_fund_allowance(inputs: &FundInputs, rules: &FundRules) -> FundAllowance {
    let provident = non_negative(inputs.provident).min(rules.provident_cap);
    let retirement = non_negative(inputs.retirement).min(rules.retirement_cap);
    let long_term = non_negative(inputs.long_term).min(rules.long_term_cap);

    let (retirement_long_term, combined_cap_applied) = apply_cap(
        retirement + long_term,
        rules.retirement_long_term_combined_cap,
    );

    FundAllowance {
        provident,
        retirement_long_term,
        total: provident + retirement_long_term,
        combined_cap_applied,
    }
}
