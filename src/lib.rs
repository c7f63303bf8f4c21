//! FraudShield - operator dashboard for a fraud detection service
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod input;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod ui;
