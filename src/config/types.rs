//! Configuration types for tax computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the tax profile.
///
/// Contains identifying information about the jurisdiction and revision
/// of the configured tax rules.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxProfile {
    /// Short identifier for the profile (e.g., "th-pit").
    pub code: String,
    /// The human-readable name of the tax regime.
    pub name: String,
    /// The revision of the configured rules.
    pub version: String,
    /// URL to the official documentation of the rules.
    pub source_url: String,
}

/// A single progressive tax bracket.
///
/// Brackets are ordered ascending by `min`, contiguous and non-overlapping
/// (`bracket[i].max + 1 == bracket[i + 1].min`). The last bracket carries
/// `max: None` and is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket (inclusive).
    pub min: Decimal,
    /// Upper bound of the bracket (inclusive), `None` for the unbounded
    /// top bracket.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Marginal rate applied to income inside this bracket, in `[0, 1)`.
    pub rate: Decimal,
}

/// Fixed family allowance amounts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FamilyAllowances {
    /// Personal allowance granted to every taxpayer.
    pub personal: Decimal,
    /// Spouse allowance, granted only when married to a spouse without
    /// income of their own.
    pub spouse: Decimal,
    /// Allowance per dependent child.
    pub per_child: Decimal,
    /// Allowance per dependent parent.
    pub per_parent: Decimal,
}

/// Parameters for the derived social security contribution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialSecurityRules {
    /// Fraction of annual salary withheld for social security.
    pub rate: Decimal,
    /// Annual cap on the withheld amount.
    pub annual_cap: Decimal,
}

/// Caps for the insurance deduction category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InsuranceRules {
    /// Cap on deductible life insurance premiums.
    pub life_premium_cap: Decimal,
    /// Cap on deductible health insurance premiums.
    pub health_premium_cap: Decimal,
    /// Derivation parameters for the social security contribution.
    pub social_security: SocialSecurityRules,
}

/// Caps for the investment fund deduction category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FundRules {
    /// Cap on provident fund contributions.
    pub provident_cap: Decimal,
    /// Cap on retirement fund contributions.
    pub retirement_cap: Decimal,
    /// Cap on long-term fund contributions.
    pub long_term_cap: Decimal,
    /// Combined cap shared by the retirement and long-term funds after
    /// their individual caps.
    pub retirement_long_term_combined_cap: Decimal,
}

/// The complete rule set for one tax year, loaded from `years/<year>.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxYearRates {
    /// The tax year these rules apply to.
    pub tax_year: i32,
    /// The progressive bracket table, ascending.
    pub brackets: Vec<TaxBracket>,
    /// Family allowance amounts.
    pub allowances: FamilyAllowances,
    /// Insurance deduction caps and social security derivation.
    pub insurance: InsuranceRules,
    /// Investment fund caps.
    pub funds: FundRules,
}

/// The complete tax configuration loaded from a profile directory.
///
/// Aggregates the profile metadata with every configured tax year,
/// sorted ascending by year.
#[derive(Debug, Clone)]
pub struct TaxConfig {
    /// Profile metadata.
    profile: TaxProfile,
    /// Year rule sets, sorted ascending by tax year.
    years: Vec<TaxYearRates>,
}

impl TaxConfig {
    /// Creates a new TaxConfig from its component parts.
    pub fn new(profile: TaxProfile, years: Vec<TaxYearRates>) -> Self {
        let mut sorted_years = years;
        sorted_years.sort_by_key(|y| y.tax_year);
        Self {
            profile,
            years: sorted_years,
        }
    }

    /// Returns the profile metadata.
    pub fn profile(&self) -> &TaxProfile {
        &self.profile
    }

    /// Returns all configured year rule sets, oldest first.
    pub fn years(&self) -> &[TaxYearRates] {
        &self.years
    }

    /// Returns the rule set for a specific year, if configured.
    pub fn year(&self, tax_year: i32) -> Option<&TaxYearRates> {
        self.years.iter().find(|y| y.tax_year == tax_year)
    }

    /// Returns the most recent configured year, if any.
    pub fn latest(&self) -> Option<&TaxYearRates> {
        self.years.last()
    }
}
