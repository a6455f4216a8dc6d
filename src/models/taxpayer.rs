//! Taxpayer input models.
//!
//! This module defines the raw figures a taxpayer enters in the wizard:
//! income, family situation, insurance premiums and fund contributions.
//! Absent fields default to zero (or their neutral value); negative amounts
//! are clamped to zero by the calculation layer rather than rejected.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Marital status of the taxpayer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Unmarried taxpayer.
    #[default]
    Single,
    /// Married taxpayer.
    Married,
}

/// Income figures entered on the income step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeInputs {
    /// Monthly salary.
    pub monthly_salary: Decimal,
    /// Annual bonus.
    pub annual_bonus: Decimal,
    /// Other annual income.
    pub other_income: Decimal,
}

/// Family situation entered on the family step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyProfile {
    /// The taxpayer's marital status.
    pub marital_status: MaritalStatus,
    /// Whether the spouse has income of their own.
    pub spouse_has_income: bool,
    /// Number of dependent children.
    pub children: u32,
    /// Number of dependent parents.
    pub parents: u32,
}

impl FamilyProfile {
    /// Returns true if the spouse allowance applies: the taxpayer is
    /// married and the spouse has no income of their own.
    ///
    /// # Examples
    ///
    /// ```
    /// use tax_engine::models::{FamilyProfile, MaritalStatus};
    ///
    /// let profile = FamilyProfile {
    ///     marital_status: MaritalStatus::Married,
    ///     spouse_has_income: false,
    ///     children: 0,
    ///     parents: 0,
    /// };
    /// assert!(profile.spouse_allowance_eligible());
    /// ```
    pub fn spouse_allowance_eligible(&self) -> bool {
        self.marital_status == MaritalStatus::Married && !self.spouse_has_income
    }
}

/// Insurance premiums entered on the insurance step.
///
/// The social security contribution is not part of these inputs: it is
/// derived from the monthly salary and never entered directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceInputs {
    /// Annual life insurance premium.
    pub life_premium: Decimal,
    /// Annual health insurance premium.
    pub health_premium: Decimal,
}

/// Fund contributions entered on the funds step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundInputs {
    /// Provident fund contribution.
    pub provident: Decimal,
    /// Retirement fund contribution.
    pub retirement: Decimal,
    /// Long-term fund contribution.
    pub long_term: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spouse_allowance_eligible_when_married_without_spouse_income() {
        let profile = FamilyProfile {
            marital_status: MaritalStatus::Married,
            spouse_has_income: false,
            children: 0,
            parents: 0,
        };
        assert!(profile.spouse_allowance_eligible());
    }

    #[test]
    fn test_spouse_allowance_not_eligible_when_spouse_has_income() {
        let profile = FamilyProfile {
            marital_status: MaritalStatus::Married,
            spouse_has_income: true,
            children: 0,
            parents: 0,
        };
        assert!(!profile.spouse_allowance_eligible());
    }

    #[test]
    fn test_spouse_allowance_not_eligible_when_single() {
        let profile = FamilyProfile {
            marital_status: MaritalStatus::Single,
            spouse_has_income: false,
            children: 0,
            parents: 0,
        };
        assert!(!profile.spouse_allowance_eligible());
    }

    #[test]
    fn test_marital_status_serialization() {
        assert_eq!(
            serde_json::to_string(&MaritalStatus::Single).unwrap(),
            "\"single\""
        );
        assert_eq!(
            serde_json::to_string(&MaritalStatus::Married).unwrap(),
            "\"married\""
        );
    }

    #[test]
    fn test_defaults_are_all_zero() {
        let income = IncomeInputs::default();
        assert_eq!(income.monthly_salary, Decimal::ZERO);
        assert_eq!(income.annual_bonus, Decimal::ZERO);
        assert_eq!(income.other_income, Decimal::ZERO);

        let family = FamilyProfile::default();
        assert_eq!(family.marital_status, MaritalStatus::Single);
        assert_eq!(family.children, 0);
        assert_eq!(family.parents, 0);
    }

    #[test]
    fn test_deserialize_family_profile() {
        let json = r#"{
            "marital_status": "married",
            "spouse_has_income": false,
            "children": 2,
            "parents": 1
        }"#;

        let profile: FamilyProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.marital_status, MaritalStatus::Married);
        assert!(!profile.spouse_has_income);
        assert_eq!(profile.children, 2);
        assert_eq!(profile.parents, 1);
    }
}
