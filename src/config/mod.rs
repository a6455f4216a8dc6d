//! Configuration loading and management for the Personal Income Tax Engine.
//!
//! This module provides functionality to load the tax configuration from
//! YAML files: the jurisdiction profile, the progressive bracket table and
//! the allowance caps for every configured tax year. The bracket table is
//! loaded once at startup as an explicit, ordered, immutable structure so
//! that new tax years are data additions rather than code changes.
//!
//! # Example
//!
//! ```no_run
//! use tax_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/th-pit").unwrap();
//! println!("Loaded profile: {}", config.profile().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, validate_brackets};
pub use types::{
    FamilyAllowances, FundRules, InsuranceRules, SocialSecurityRules, TaxBracket, TaxConfig,
    TaxProfile, TaxYearRates,
};
