//! Orrery library
//!
//! This provides the core functionality of orrery as a library
//! to enable integration testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod physics;
pub mod prelude;
pub mod simulation;
