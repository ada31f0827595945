//! Split Allocation Engine for dormitory shared expenses.
//!
//! This crate divides a total monetary charge among a variable set of
//! participants under several weighting schemes (equal shares, custom
//! amounts, percentages, and presence-day weighted shares derived from
//! calendar absence records) while guaranteeing the parts sum exactly to
//! the whole despite finite-precision decimal arithmetic.

#![warn(missing_docs)]

pub mod allocation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
