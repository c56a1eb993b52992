//! Core domain types and logic.

pub mod snapshot;
pub mod universe;
pub mod sentiment;
pub mod aggregate;
pub mod profile;
pub mod pulse;
pub mod simulation;
pub mod portfolio;
pub mod chunk;
pub mod config_validation;
pub mod error;
