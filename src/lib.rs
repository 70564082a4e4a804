//! Shift Pay Engine for statutory surcharges
//!
//! This crate classifies every minute of a work shift into one of eight pay
//! categories (ordinary or overtime, day or night, ordinary or special day),
//! aggregates the minutes into rounded hours, and prices them against a base
//! hourly rate. An axum HTTP API exposes the calculation with an audit trace.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
