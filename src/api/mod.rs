//! HTTP API module for the Personal Income Tax Engine.
//!
//! This module provides the REST API endpoints the browser wizard calls:
//! `/deductions` to refresh the capped deduction subtotals and
//! `/calculate` to run the full tax calculation on the final step.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculationRequest, FamilyRequest, FundRequest, IncomeRequest, InsuranceRequest,
};
pub use response::ApiError;
pub use state::AppState;
