//! Insurance deduction calculation.
//!
//! This module computes the insurance deduction category: the life and
//! health insurance premiums after their individual caps, plus the derived
//! social security contribution.

use rust_decimal::Decimal;

use crate::calculation::common::non_negative;
use crate::calculation::social_security::calculate_social_security;
use crate::config::InsuranceRules;
use crate::models::{InsuranceAllowance, InsuranceInputs};

/// Calculates the insurance deduction for a taxpayer.
///
/// Life and health premiums are clamped to zero or above and limited by
/// their individual caps. The social security contribution is derived from
/// the monthly salary, not taken from user input.
pub fn calculate_insurance_allowance(
    inputs: &InsuranceInputs,
    monthly_salary: Decimal,
    rules: &InsuranceRules,
) -> InsuranceAllowance {
    let life = non_negative(inputs.life_premium).min(rules.life_premium_cap);
    let health = non_negative(inputs.health_premium).min(rules.health_premium_cap);
    let social_security = calculate_social_security(monthly_salary, &rules.social_security);

    let total = life + health + social_security.amount;

    InsuranceAllowance {
        life,
        health,
        social_security,
        total,
    }
}
