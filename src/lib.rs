//! Hourly shift payroll with quarter-hour billing.
//!
//! This crate converts clock-in/clock-out times into worked minutes, truncates
//! them to completed quarter hours, and computes base and total pay. Around
//! that pure calculation core it provides an employee registry, an
//! append-only work log, key-value persistence and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod payroll;
pub mod registry;
pub mod store;
