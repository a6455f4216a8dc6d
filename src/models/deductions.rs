//! Deduction models.
//!
//! This module contains the per-category deduction results produced by the
//! aggregator and the [`DeductionTotals`] structure handed to the bracket
//! calculator. The totals are a first-class in-memory value passed directly
//! between the two, never reconstructed from rendered text.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The family allowance category, broken down by component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyAllowance {
    /// Personal allowance, granted unconditionally.
    pub personal: Decimal,
    /// Spouse allowance, zero unless married to a spouse without income.
    pub spouse: Decimal,
    /// Total allowance for dependent children.
    pub children: Decimal,
    /// Total allowance for dependent parents.
    pub parents: Decimal,
    /// Sum of the components.
    pub total: Decimal,
}

/// The derived social security contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityContribution {
    /// The contribution before the annual cap.
    pub uncapped: Decimal,
    /// The deductible contribution after the annual cap.
    pub amount: Decimal,
    /// Whether the annual cap reduced the contribution.
    pub cap_applied: bool,
}

/// The insurance deduction category, broken down by component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceAllowance {
    /// Life insurance premium after its cap.
    pub life: Decimal,
    /// Health insurance premium after its cap.
    pub health: Decimal,
    /// The derived social security contribution.
    pub social_security: SocialSecurityContribution,
    /// Sum of the components.
    pub total: Decimal,
}

/// The investment fund deduction category, broken down by component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundAllowance {
    /// Provident fund contribution after its cap.
    pub provident: Decimal,
    /// Retirement plus long-term fund contributions after their individual
    /// caps and the shared combined cap.
    pub retirement_long_term: Decimal,
    /// Sum of the components.
    pub total: Decimal,
    /// Whether the shared combined cap reduced the retirement plus
    /// long-term amount.
    pub combined_cap_applied: bool,
}

/// The three capped category totals subtracted from total income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionTotals {
    /// Family allowance total.
    pub family: Decimal,
    /// Insurance deduction total.
    pub insurance: Decimal,
    /// Investment fund deduction total.
    pub fund: Decimal,
}

impl DeductionTotals {
    /// Returns the sum of the three category totals.
    pub fn total(&self) -> Decimal {
        self.family + self.insurance + self.fund
    }
}

/// Per-category deduction detail for the wizard's deduction steps.
///
/// Each category is recomputed independently whenever its inputs change;
/// this structure carries all three so a single response can refresh every
/// subtotal the wizard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// The tax year whose rules produced these figures.
    pub tax_year: i32,
    /// The family allowance category.
    pub family: FamilyAllowance,
    /// The insurance deduction category.
    pub insurance: InsuranceAllowance,
    /// The investment fund deduction category.
    pub fund: FundAllowance,
}

impl DeductionBreakdown {
    /// Collapses the breakdown into the three category totals.
    pub fn totals(&self) -> DeductionTotals {
        DeductionTotals {
            family: self.family.total,
            insurance: self.insurance.total,
            fund: self.fund.total,
        }
    }
}
