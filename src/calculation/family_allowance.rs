//! Family allowance calculation.
//!
//! This module computes the family deduction category: the unconditional
//! personal allowance, the spouse allowance for a married taxpayer whose
//! spouse has no income, and fixed allowances per dependent child and
//! dependent parent.

use rust_decimal::Decimal;

use crate::config::FamilyAllowances;
use crate::models::{FamilyAllowance, FamilyProfile};

/// Calculates the family allowance for a taxpayer.
///
/// The personal allowance always applies. The spouse allowance applies only
/// when the taxpayer is married and the spouse has no income of their own.
/// Dependent children and parents each add a fixed amount.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use tax_engine::calculation::calculate_family_allowance;
/// use tax_engine::config::FamilyAllowances;
/// use tax_engine::models::{FamilyProfile, MaritalStatus};
///
/// let rules = FamilyAllowances {
///     personal: Decimal::from_str("60000").unwrap(),
///     spouse: Decimal::from_str("60000").unwrap(),
///     per_child: Decimal::from_str("30000").unwrap(),
///     per_parent: Decimal::from_str("30000").unwrap(),
/// };
///
/// let profile = FamilyProfile {
///     marital_status: MaritalStatus::Married,
///     spouse_has_income: false,
///     children: 2,
///     parents: 1,
/// };
///
/// let allowance = calculate_family_allowance(&profile, &rules);
/// assert_eq!(allowance.total, Decimal::from_str("210000").unwrap());
/// ```
pub fn calculate_family_allowance(
    profile: &FamilyProfile,
    rules: &FamilyAllowances,
) -> FamilyAllowance {
    let personal = rules.personal;

    let spouse = if profile.spouse_allowance_eligible() {
        rules.spouse
    } else {
        Decimal::ZERO
    };

    let children = rules.per_child * Decimal::from(profile.children);
    let parents = rules.per_parent * Decimal::from(profile.parents);

    FamilyAllowance {
        personal,
        spouse,
        children,
        parents,
        total: personal + spouse + children + parents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaritalStatus;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> FamilyAllowances {
        FamilyAllowances {
            personal: dec("60000"),
            spouse: dec("60000"),
            per_child: dec("30000"),
            per_parent: dec("30000"),
        }
    }

    fn profile(
        marital_status: MaritalStatus,
        spouse_has_income: bool,
        children: u32,
        parents: u32,
    ) -> FamilyProfile {
        FamilyProfile {
            marital_status,
            spouse_has_income,
            children,
            parents,
        }
    }

    /// FA-001: single taxpayer receives only the personal allowance
    #[test]
    fn test_fa_001_single_taxpayer_gets_personal_allowance_only() {
        let result =
            calculate_family_allowance(&profile(MaritalStatus::Single, false, 0, 0), &rules());

        assert_eq!(result.personal, dec("60000"));
        assert_eq!(result.spouse, dec("0"));
        assert_eq!(result.children, dec("0"));
        assert_eq!(result.parents, dec("0"));
        assert_eq!(result.total, dec("60000"));
    }

    /// FA-002: married with spouse without income adds the spouse allowance
    #[test]
    fn test_fa_002_married_without_spouse_income_adds_spouse_allowance() {
        let result =
            calculate_family_allowance(&profile(MaritalStatus::Married, false, 0, 0), &rules());

        assert_eq!(result.spouse, dec("60000"));
        assert_eq!(result.total, dec("120000"));
    }

    /// FA-003: married with earning spouse must not add the spouse allowance
    #[test]
    fn test_fa_003_married_with_spouse_income_has_no_spouse_allowance() {
        let result =
            calculate_family_allowance(&profile(MaritalStatus::Married, true, 0, 0), &rules());

        assert_eq!(result.spouse, dec("0"));
        assert_eq!(result.total, dec("60000"));
    }

    /// FA-004: children and parents each add a fixed amount
    #[test]
    fn test_fa_004_dependents_add_fixed_amounts() {
        let result =
            calculate_family_allowance(&profile(MaritalStatus::Single, false, 3, 2), &rules());

        assert_eq!(result.children, dec("90000"));
        assert_eq!(result.parents, dec("60000"));
        assert_eq!(result.total, dec("210000"));
    }

    #[test]
    fn test_full_household() {
        let result =
            calculate_family_allowance(&profile(MaritalStatus::Married, false, 2, 2), &rules());

        // 60000 + 60000 + 2 * 30000 + 2 * 30000
        assert_eq!(result.total, dec("240000"));
    }

    #[test]
    fn test_spouse_income_flag_is_ignored_for_single_taxpayer() {
        let result =
            calculate_family_allowance(&profile(MaritalStatus::Single, true, 0, 0), &rules());

        assert_eq!(result.spouse, dec("0"));
    }
}
