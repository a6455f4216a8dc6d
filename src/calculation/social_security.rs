//! Social security contribution derivation.
//!
//! The social security contribution is never entered by the taxpayer: it is
//! derived from the monthly salary as a fixed withholding fraction of the
//! annualized salary, limited by an annual cap.

use rust_decimal::Decimal;

use crate::calculation::common::{apply_cap, non_negative};
use crate::config::SocialSecurityRules;
use crate::models::SocialSecurityContribution;

/// Derives the social security contribution from the monthly salary.
///
/// The contribution is `monthly_salary * 12 * rate`, capped at the
/// configured annual maximum.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use tax_engine::calculation::calculate_social_security;
/// use tax_engine::config::SocialSecurityRules;
///
/// let rules = SocialSecurityRules {
///     rate: Decimal::from_str("0.05").unwrap(),
///     annual_cap: Decimal::from_str("15000").unwrap(),
/// };
///
/// // 20,000 * 12 * 0.05 = 12,000, below the cap
/// let contribution =
///     calculate_social_security(Decimal::from_str("20000").unwrap(), &rules);
/// assert_eq!(contribution.amount, Decimal::from_str("12000").unwrap());
/// assert!(!contribution.cap_applied);
/// ```
pub fn calculate_social_security(
    monthly_salary: Decimal,
    rules: &SocialSecurityRules,
) -> SocialSecurityContribution {
    let annual_salary = non_negative(monthly_salary) * Decimal::from(12u32);
    let uncapped = annual_salary * rules.rate;
    let (amount, cap_applied) = apply_cap(uncapped, rules.annual_cap);

    SocialSecurityContribution {
        uncapped,
        amount,
        cap_applied,
    }
}
