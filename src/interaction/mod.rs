//! Per-cycle logic of the homework-bot.
//!
//! - Validating status API answers and extracting verdicts
//! - Delivering notifications without letting delivery errors escape

pub mod notify;
pub mod status;
