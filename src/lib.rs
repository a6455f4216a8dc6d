//! Progressive Personal Income Tax Engine
//!
//! This crate computes Thai personal income tax (PIT) from income and
//! deduction figures using the progressive bracket table for a configured
//! tax year, and backs the browser step wizard through a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod wizard;
