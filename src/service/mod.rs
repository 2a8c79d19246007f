//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by the homework-bot:
//! - Chat services (e.g., Telegram)
//! - Homework status services (e.g., the Practicum API)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod homework;
