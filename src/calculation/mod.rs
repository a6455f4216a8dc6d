//! Calculation logic for the Personal Income Tax Engine.
//!
//! This module contains all the calculation functions for determining tax,
//! including total income aggregation, the family allowance, the derived
//! social security contribution, the capped insurance and fund deductions,
//! taxable income derivation, and the progressive bracket walk.

mod bracket_tax;
mod common;
mod engine;
mod family_allowance;
mod fund_allowance;
mod insurance_allowance;
mod social_security;
mod taxable_income;
mod total_income;

pub use bracket_tax::{BracketTaxResult, calculate_bracket_tax};
pub use engine::{calculate_tax, compute_deductions};
pub use family_allowance::calculate_family_allowance;
pub use fund_allowance::calculate_fund_allowance;
pub use insurance_allowance::calculate_insurance_allowance;
pub use social_security::calculate_social_security;
pub use taxable_income::calculate_taxable_income;
pub use total_income::calculate_total_income;
