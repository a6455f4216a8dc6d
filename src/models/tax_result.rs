//! Tax result models.
//!
//! This module contains the [`TaxAssessment`] produced by the bracket
//! calculator and the [`TaxResult`] returned over the API, which stamps an
//! assessment with a calculation id, timestamp and engine version.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DeductionTotals;

/// The contribution of a single bracket to the total tax.
///
/// Only brackets that contribute a non-zero tax amount appear in a
/// breakdown; the zero-rate bottom bracket never does. Formatting of the
/// range and rate for display is the rendering layer's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketContribution {
    /// Lower bound of the bracket (inclusive).
    pub min: Decimal,
    /// Upper bound of the bracket (inclusive), `None` for the unbounded
    /// top bracket.
    pub max: Option<Decimal>,
    /// Marginal rate of the bracket.
    pub rate: Decimal,
    /// Taxable income that fell inside this bracket.
    pub taxable_amount: Decimal,
    /// Tax owed for this bracket.
    pub tax_amount: Decimal,
}

/// The outcome of a full tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// Total annual income before deductions.
    pub total_income: Decimal,
    /// Income remaining after deductions, floored at zero.
    pub taxable_income: Decimal,
    /// Total tax owed.
    pub tax: Decimal,
    /// Total income minus tax.
    pub net_income: Decimal,
    /// Per-bracket contributions, ascending, non-zero only.
    pub breakdown: Vec<BracketContribution>,
}

/// The complete result of a tax calculation as returned over the API.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use tax_engine::models::{DeductionTotals, TaxResult};
/// use uuid::Uuid;
///
/// let result = TaxResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     tax_year: 2024,
///     total_income: Decimal::ZERO,
///     deductions: DeductionTotals {
///         family: Decimal::ZERO,
///         insurance: Decimal::ZERO,
///         fund: Decimal::ZERO,
///     },
///     taxable_income: Decimal::ZERO,
///     tax: Decimal::ZERO,
///     net_income: Decimal::ZERO,
///     breakdown: vec![],
/// };
/// assert!(result.breakdown.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The tax year whose rules were applied.
    pub tax_year: i32,
    /// Total annual income before deductions.
    pub total_income: Decimal,
    /// The three category totals that were subtracted.
    pub deductions: DeductionTotals,
    /// Income remaining after deductions, floored at zero.
    pub taxable_income: Decimal,
    /// Total tax owed.
    pub tax: Decimal,
    /// Total income minus tax.
    pub net_income: Decimal,
    /// Per-bracket contributions, ascending, non-zero only.
    pub breakdown: Vec<BracketContribution>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_assessment() -> TaxAssessment {
        TaxAssessment {
            total_income: dec("1000000"),
            taxable_income: dec("1000000"),
            tax: dec("115000"),
            net_income: dec("885000"),
            breakdown: vec![BracketContribution {
                min: dec("150001"),
                max: Some(dec("300000")),
                rate: dec("0.05"),
                taxable_amount: dec("150000"),
                tax_amount: dec("7500"),
            }],
        }
    }

    #[test]
    fn test_assessment_serialization() {
        let assessment = sample_assessment();

        let json = serde_json::to_string(&assessment).unwrap();
        assert!(json.contains("\"total_income\":\"1000000\""));
        assert!(json.contains("\"tax\":\"115000\""));
        assert!(json.contains("\"net_income\":\"885000\""));
        assert!(json.contains("\"breakdown\":["));
    }

    #[test]
    fn test_unbounded_bracket_serializes_max_as_null() {
        let contribution = BracketContribution {
            min: dec("5000001"),
            max: None,
            rate: dec("0.35"),
            taxable_amount: dec("1000000"),
            tax_amount: dec("350000"),
        };

        let json = serde_json::to_string(&contribution).unwrap();
        assert!(json.contains("\"max\":null"));
    }

    #[test]
    fn test_tax_result_deserialization() {
        let json = r#"{
            "calculation_id": "12345678-1234-1234-1234-123456789012",
            "timestamp": "2024-06-15T10:00:00Z",
            "engine_version": "0.1.0",
            "tax_year": 2024,
            "total_income": "600000",
            "deductions": {
                "family": "60000",
                "insurance": "15000",
                "fund": "0"
            },
            "taxable_income": "525000",
            "tax": "31250",
            "net_income": "568750",
            "breakdown": []
        }"#;

        let result: TaxResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.tax_year, 2024);
        assert_eq!(result.taxable_income, dec("525000"));
        assert_eq!(result.deductions.total(), dec("75000"));
        assert!(result.breakdown.is_empty());
    }
}
