//! Utility functions shared across modules.

pub mod stats;

pub use stats::mean;
