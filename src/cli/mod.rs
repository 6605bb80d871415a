// Rockfall AI 🚀 AGPL-3.0 License - https://rockfall-ai.com/license

//! CLI module for running predictions.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the `predict` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Verbosity flag and output macros.
pub mod logging;

/// Prediction logic.
pub mod predict;
