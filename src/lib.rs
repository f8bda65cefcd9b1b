//! Exact-decimal calculator engine and its keyboard front end.

pub mod calculator;
pub mod config;
pub mod input;
pub mod logging;
pub mod session;
