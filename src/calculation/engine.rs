//! The two operations the engine exposes to its callers.
//!
//! [`compute_deductions`] aggregates the raw wizard fields into the three
//! capped deduction categories; [`calculate_tax`] turns a total income and
//! the category totals into a full assessment. Both are pure: they take
//! already-parsed numbers, never raise errors, and leave all display
//! formatting to the rendering layer.

use rust_decimal::Decimal;

use crate::calculation::bracket_tax::calculate_bracket_tax;
use crate::calculation::family_allowance::calculate_family_allowance;
use crate::calculation::fund_allowance::calculate_fund_allowance;
use crate::calculation::insurance_allowance::calculate_insurance_allowance;
use crate::calculation::taxable_income::calculate_taxable_income;
use crate::config::{TaxBracket, TaxYearRates};
use crate::models::{
    DeductionBreakdown, DeductionTotals, FamilyProfile, FundInputs, IncomeInputs, InsuranceInputs,
    TaxAssessment,
};

/// Aggregates the raw wizard fields into the three deduction categories.
///
/// Each category is computed independently from its own inputs; the monthly
/// salary feeds the derived social security contribution inside the
/// insurance category.
pub fn compute_deductions(
    income: &IncomeInputs,
    family: &FamilyProfile,
    insurance: &InsuranceInputs,
    funds: &FundInputs,
    rules: &TaxYearRates,
) -> DeductionBreakdown {
    DeductionBreakdown {
        tax_year: rules.tax_year,
        family: calculate_family_allowance(family, &rules.allowances),
        insurance: calculate_insurance_allowance(
            insurance,
            income.monthly_salary,
            &rules.insurance,
        ),
        fund: calculate_fund_allowance(funds, &rules.funds),
    }
}

/// Calculates the full tax assessment for a total income and the three
/// deduction category totals.
///
/// Taxable income is floored at zero, walked through the bracket table, and
/// the net income is the total income minus the tax owed.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use tax_engine::calculation::calculate_tax;
/// use tax_engine::config::TaxBracket;
/// use tax_engine::models::DeductionTotals;
///
/// fn dec(s: &str) -> Decimal {
///     Decimal::from_str(s).unwrap()
/// }
///
/// let brackets = vec![
///     TaxBracket { min: dec("0"), max: Some(dec("150000")), rate: dec("0") },
///     TaxBracket { min: dec("150001"), max: None, rate: dec("0.05") },
/// ];
///
/// let deductions = DeductionTotals {
///     family: dec("60000"),
///     insurance: dec("0"),
///     fund: dec("0"),
/// };
///
/// let assessment = calculate_tax(dec("300000"), &deductions, &brackets);
///
/// assert_eq!(assessment.taxable_income, dec("240000"));
/// assert_eq!(assessment.tax, dec("4500"));
/// assert_eq!(assessment.net_income, dec("295500"));
/// ```
pub fn calculate_tax(
    total_income: Decimal,
    deductions: &DeductionTotals,
    brackets: &[TaxBracket],
) -> TaxAssessment {
    let taxable_income = calculate_taxable_income(total_income, deductions);
    let bracket_tax = calculate_bracket_tax(taxable_income, brackets);

    TaxAssessment {
        total_income,
        taxable_income,
        tax: bracket_tax.total_tax,
        net_income: total_income - bracket_tax.total_tax,
        breakdown: bracket_tax.breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::MaritalStatus;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rules() -> TaxYearRates {
        let loader = ConfigLoader::load("./config/th-pit").unwrap();
        loader.year(2024).unwrap().clone()
    }

    fn zero_deductions() -> DeductionTotals {
        DeductionTotals {
            family: Decimal::ZERO,
            insurance: Decimal::ZERO,
            fund: Decimal::ZERO,
        }
    }

    #[test]
    fn test_zero_income_and_deductions_yields_all_zero() {
        let rules = rules();

        let assessment = calculate_tax(Decimal::ZERO, &zero_deductions(), &rules.brackets);

        assert_eq!(assessment.taxable_income, Decimal::ZERO);
        assert_eq!(assessment.tax, Decimal::ZERO);
        assert_eq!(assessment.net_income, Decimal::ZERO);
        assert!(assessment.breakdown.is_empty());
    }

    #[test]
    fn test_one_million_with_no_deductions() {
        let rules = rules();

        let assessment = calculate_tax(dec("1000000"), &zero_deductions(), &rules.brackets);

        assert_eq!(assessment.taxable_income, dec("1000000"));
        assert_eq!(assessment.tax, dec("115000"));
        assert_eq!(assessment.net_income, dec("885000"));
    }

    #[test]
    fn test_deductions_reduce_taxable_income() {
        let rules = rules();
        let deductions = DeductionTotals {
            family: dec("60000"),
            insurance: dec("15000"),
            fund: Decimal::ZERO,
        };

        let assessment = calculate_tax(dec("600000"), &deductions, &rules.brackets);

        assert_eq!(assessment.taxable_income, dec("525000"));
        // 7,500 + 20,000 + 25,000 * 0.15
        assert_eq!(assessment.tax, dec("31250"));
        assert_eq!(assessment.net_income, dec("568750"));
    }

    #[test]
    fn test_deductions_exceeding_income_yield_no_tax() {
        let rules = rules();
        let deductions = DeductionTotals {
            family: dec("120000"),
            insurance: dec("50000"),
            fund: dec("100000"),
        };

        let assessment = calculate_tax(dec("200000"), &deductions, &rules.brackets);

        assert_eq!(assessment.taxable_income, Decimal::ZERO);
        assert_eq!(assessment.tax, Decimal::ZERO);
        assert_eq!(assessment.net_income, dec("200000"));
    }

    #[test]
    fn test_compute_deductions_aggregates_all_three_categories() {
        let rules = rules();
        let income = IncomeInputs {
            monthly_salary: dec("50000"),
            annual_bonus: Decimal::ZERO,
            other_income: Decimal::ZERO,
        };
        let family = FamilyProfile {
            marital_status: MaritalStatus::Married,
            spouse_has_income: false,
            children: 1,
            parents: 0,
        };
        let insurance = InsuranceInputs {
            life_premium: dec("120000"),
            health_premium: dec("20000"),
        };
        let funds = FundInputs {
            provident: dec("50000"),
            retirement: dec("100000"),
            long_term: Decimal::ZERO,
        };

        let breakdown = compute_deductions(&income, &family, &insurance, &funds, &rules);

        assert_eq!(breakdown.tax_year, 2024);
        // 60,000 + 60,000 + 30,000
        assert_eq!(breakdown.family.total, dec("150000"));
        // 100,000 (capped) + 20,000 + 15,000 (capped social security)
        assert_eq!(breakdown.insurance.total, dec("135000"));
        assert_eq!(breakdown.fund.total, dec("150000"));

        let totals = breakdown.totals();
        assert_eq!(totals.total(), dec("435000"));
    }

    #[test]
    fn test_compute_deductions_with_empty_inputs_keeps_personal_allowance() {
        let rules = rules();

        let breakdown = compute_deductions(
            &IncomeInputs::default(),
            &FamilyProfile::default(),
            &InsuranceInputs::default(),
            &FundInputs::default(),
            &rules,
        );

        assert_eq!(breakdown.family.total, dec("60000"));
        assert_eq!(breakdown.insurance.total, Decimal::ZERO);
        assert_eq!(breakdown.fund.total, Decimal::ZERO);
    }
}
