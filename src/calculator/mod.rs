//! Calculator engine with exact decimal arithmetic.
//!
//! This module provides:
//! - The [`Calculator`] state machine that digit, operator and command keys drive
//! - Binary and scientific operation kinds
//! - Display formatting and half-up rounded division
//! - A bounded calculation history

mod engine;
mod error;
mod evaluation;
mod history;
mod operation;

pub use engine::{Calculator, DEFAULT_SCALE, EngineSettings};
pub use error::CalcError;
pub use evaluation::{format_value, parse_display};
pub use history::{DEFAULT_HISTORY_LIMIT, History};
pub use operation::{Operation, ScientificOperation};
