//! Salary Input Validation Service
//!
//! This crate validates salary-related user input and enriches valid records
//! with derived figures (month number, age group, income totals) before they
//! are handed to downstream tax-table, calculation and feedback services.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod downstream;
pub mod error;
pub mod models;
pub mod validation;
