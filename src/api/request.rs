//! Request types for the Personal Income Tax Engine API.
//!
//! This module defines the JSON request structure shared by the
//! `/deductions` and `/calculate` endpoints. Every field is optional:
//! absent sections and absent numeric fields default to zero, matching the
//! wizard's empty form fields. Coercing user text into numbers is the
//! frontend's job; the API consumes already-parsed values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FamilyProfile, FundInputs, IncomeInputs, InsuranceInputs, MaritalStatus};

/// Request body for the `/deductions` and `/calculate` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Income figures from the income step.
    #[serde(default)]
    pub income: IncomeRequest,
    /// Family situation from the family step.
    #[serde(default)]
    pub family: FamilyRequest,
    /// Insurance premiums from the insurance step.
    #[serde(default)]
    pub insurance: InsuranceRequest,
    /// Fund contributions from the funds step.
    #[serde(default)]
    pub funds: FundRequest,
    /// Tax year to apply; the latest configured year when absent.
    #[serde(default)]
    pub tax_year: Option<i32>,
}

/// Income figures in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeRequest {
    /// Monthly salary.
    #[serde(default)]
    pub monthly_salary: Decimal,
    /// Annual bonus.
    #[serde(default)]
    pub annual_bonus: Decimal,
    /// Other annual income.
    #[serde(default)]
    pub other_income: Decimal,
}

/// Family situation in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamilyRequest {
    /// Marital status; single when absent.
    #[serde(default)]
    pub marital_status: MaritalStatus,
    /// Whether the spouse has income of their own.
    #[serde(default)]
    pub spouse_has_income: bool,
    /// Number of dependent children.
    #[serde(default)]
    pub children: u32,
    /// Number of dependent parents.
    #[serde(default)]
    pub parents: u32,
}

/// Insurance premiums in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsuranceRequest {
    /// Annual life insurance premium.
    #[serde(default)]
    pub life_premium: Decimal,
    /// Annual health insurance premium.
    #[serde(default)]
    pub health_premium: Decimal,
}

/// Fund contributions in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FundRequest {
    /// Provident fund contribution.
    #[serde(default)]
    pub provident: Decimal,
    /// Retirement fund contribution.
    #[serde(default)]
    pub retirement: Decimal,
    /// Long-term fund contribution.
    #[serde(default)]
    pub long_term: Decimal,
}

impl From<IncomeRequest> for IncomeInputs {
    fn from(req: IncomeRequest) -> Self {
        IncomeInputs {
            monthly_salary: req.monthly_salary,
            annual_bonus: req.annual_bonus,
            other_income: req.other_income,
        }
    }
}

impl From<FamilyRequest> for FamilyProfile {
    fn from(req: FamilyRequest) -> Self {
        FamilyProfile {
            marital_status: req.marital_status,
            spouse_has_income: req.spouse_has_income,
            children: req.children,
            parents: req.parents,
        }
    }
}

impl From<InsuranceRequest> for InsuranceInputs {
    fn from(req: InsuranceRequest) -> Self {
        InsuranceInputs {
            life_premium: req.life_premium,
            health_premium: req.health_premium,
        }
    }
}

impl From<FundRequest> for FundInputs {
    fn from(req: FundRequest) -> Self {
        FundInputs {
            provident: req.provident,
            retirement: req.retirement,
            long_term: req.long_term,
        }
    }
}
