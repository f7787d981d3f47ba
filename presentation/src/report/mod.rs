//! Human-readable reports

pub mod config;
