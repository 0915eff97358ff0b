//! Infrastructure - record loading and process configuration.

pub mod config;
pub mod record;
