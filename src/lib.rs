//! Household childcare calculator
//!
//! This crate estimates a two-parent household's annual take-home pay after
//! income tax, Medicare levy and childcare costs net of the Child Care
//! Subsidy, accounting for reduced work days, nannying income and the value
//! of paid parental leave. Results come with a numbered, human-readable
//! explanation of every step.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
