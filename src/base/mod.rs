//! Core components, types, and utilities for the homework-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Log line formatting.
//! - User-facing message texts.
//! - Common types, the poll error, and result handling.

pub mod config;
pub mod logging;
pub mod types;
pub mod verdicts;
