#![forbid(unsafe_code)]

//! Core domain model and computation for the Pulse workout calculator.
//!
//! This crate provides:
//! - Domain types (activities, samples, workouts, reports)
//! - Distance, speed and calorie formulas per activity
//! - Package dispatch from activity codes
//! - Report rendering
//! - Package files and batch processing

pub mod types;
pub mod error;
pub mod training;
pub mod dispatch;
pub mod report;
pub mod packages;
pub mod batch;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use training::floor_div;
pub use dispatch::read_package;
pub use report::{render, OutputFormat};
pub use packages::{default_packages, load_packages, parse_params, Package};
pub use batch::{process_package, run_batch, run_batch_with, BatchFailure, BatchSummary, OnError};
pub use config::Config;
