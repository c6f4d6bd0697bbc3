//! Salary Tracker
//!
//! This crate computes an individual's gross and after-tax salary from
//! daily work-shift records, aggregated by calendar month. Records are
//! read from a flat text file (`DD.MM: HH-HH`, one shift per line),
//! accumulated into per-month totals, and queried for salary figures.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod parser;
pub mod storage;
pub mod tracker;
