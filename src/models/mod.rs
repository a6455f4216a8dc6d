//! Core data models for the Personal Income Tax Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod deductions;
mod tax_result;
mod taxpayer;

pub use deductions::{
    DeductionBreakdown, DeductionTotals, FamilyAllowance, FundAllowance, InsuranceAllowance,
    SocialSecurityContribution,
};
pub use tax_result::{BracketContribution, TaxAssessment, TaxResult};
pub use taxpayer::{FamilyProfile, FundInputs, IncomeInputs, InsuranceInputs, MaritalStatus};
