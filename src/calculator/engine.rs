//! The calculator's arithmetic state machine.
//!
//! The engine holds two operands and one pending operator. Which of the three
//! entry states it is in (entering the first operand, operator just selected,
//! entering the second operand) follows from the pending operation together
//! with the "start new number" flag.

use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use super::error::CalcError;
use super::evaluation::{divide_rounded, format_value, from_f64, parse_display};
use super::history::{DEFAULT_HISTORY_LIMIT, History};
use super::operation::{Operation, ScientificOperation};

/// Fractional digits kept by division and percentage.
pub const DEFAULT_SCALE: u32 = 10;

/// Tunables for an engine instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Fractional digits kept by division and percentage (round half-up).
    pub scale: u32,
    /// Maximum number of history records.
    pub history_limit: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Calculator state and the operations that drive it.
#[derive(Clone, Debug)]
pub struct Calculator {
    /// Text on the display; may end in a point the user just typed.
    display: String,
    current: BigDecimal,
    stored: BigDecimal,
    operation: Option<Operation>,
    start_new_number: bool,
    memory: BigDecimal,
    history: History,
    scale: u32,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_settings(&EngineSettings::default())
    }

    pub fn with_settings(settings: &EngineSettings) -> Self {
        let mut calculator = Self {
            display: String::new(),
            current: BigDecimal::zero(),
            stored: BigDecimal::zero(),
            operation: None,
            start_new_number: true,
            memory: BigDecimal::zero(),
            history: History::new(settings.history_limit),
            scale: settings.scale,
        };
        calculator.reset();
        calculator
    }

    /// Clear the calculation in progress. Memory and history are kept.
    pub fn reset(&mut self) {
        self.display = "0".to_string();
        self.current = BigDecimal::zero();
        self.stored = BigDecimal::zero();
        self.operation = None;
        self.start_new_number = true;
    }

    /// Clear everything, including memory and history.
    pub fn full_reset(&mut self) {
        self.reset();
        self.memory = BigDecimal::zero();
        self.history.clear();
    }

    // ---- entry ----

    /// Type a digit. Anything other than `0`-`9` is ignored.
    pub fn append_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }

        if self.start_new_number {
            self.display = digit.to_string();
            self.start_new_number = false;
        } else {
            self.display.push(digit);
        }
        self.update_current_value();
    }

    /// Type a decimal point. A second point in the same number is ignored.
    pub fn append_decimal_point(&mut self) {
        if self.start_new_number {
            self.display = "0.".to_string();
            self.start_new_number = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        // current value stays put until a fractional digit arrives
    }

    fn update_current_value(&mut self) {
        self.current = parse_display(&self.display).unwrap_or_else(BigDecimal::zero);
    }

    fn show(&mut self, value: BigDecimal) {
        self.display = format_value(&value);
        self.current = value;
    }

    // ---- arithmetic ----

    /// Select a binary operator.
    ///
    /// If an operator is already pending and a second operand has been typed,
    /// the pending calculation is evaluated first so `5 + 3 ×` multiplies `8`.
    /// A failure in that evaluation leaves the engine reset and the new
    /// operator unapplied.
    pub fn set_operation(&mut self, operation: Operation) -> Result<(), CalcError> {
        self.update_current_value();

        if self.operation.is_some() && !self.start_new_number {
            tracing::debug!("Chaining pending operation before {}", operation);
            self.calculate_result()?;
        }

        self.stored = self.current.clone();
        self.operation = Some(operation);
        self.start_new_number = true;
        Ok(())
    }

    /// Evaluate the pending operation.
    ///
    /// With nothing pending the current value is returned untouched. On error
    /// the calculation in progress is discarded before the error is returned.
    pub fn calculate_result(&mut self) -> Result<BigDecimal, CalcError> {
        self.update_current_value();

        let Some(operation) = self.operation else {
            return Ok(self.current.clone());
        };

        let result = match operation.apply(&self.stored, &self.current, self.scale) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Evaluation failed, resetting: {}", e);
                self.reset();
                return Err(e);
            }
        };

        let record = format!(
            "{} {} {} = {}",
            format_value(&self.stored),
            operation.symbol(),
            format_value(&self.current),
            format_value(&result)
        );
        tracing::debug!("{}", record);
        self.history.push(record);

        self.show(result.clone());
        self.stored = BigDecimal::zero();
        self.operation = None;
        self.start_new_number = true;
        Ok(result)
    }

    /// Apply a scientific function or constant to the current value.
    ///
    /// The work is done in `f64`, so the result is only as exact as a double.
    pub fn perform_scientific_operation(
        &mut self,
        operation: &ScientificOperation,
    ) -> Result<BigDecimal, CalcError> {
        self.update_current_value();

        let input = self.current.to_f64().unwrap_or(f64::NAN);
        let result = match operation.evaluate(input).and_then(|value| {
            from_f64(value).ok_or_else(|| CalcError::domain("Result is not a finite number"))
        }) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("{} failed, resetting: {}", operation, e);
                self.reset();
                return Err(e);
            }
        };

        let record = operation.describe(&format_value(&self.current), &format_value(&result));
        tracing::debug!("{}", record);
        self.history.push(record);

        self.show(result.clone());
        self.start_new_number = true;
        Ok(result)
    }

    /// Raise the current value to `exponent`.
    pub fn calculate_power(&mut self, exponent: BigDecimal) -> Result<BigDecimal, CalcError> {
        self.perform_scientific_operation(&ScientificOperation::Power(exponent))
    }

    /// Negate the current value. Entry mode is unchanged so the sign can be
    /// flipped mid-number.
    pub fn toggle_sign(&mut self) {
        self.update_current_value();
        let negated = -self.current.clone();
        self.show(negated);
    }

    /// Turn the current value into a percentage (divide by 100).
    pub fn calculate_percentage(&mut self) {
        self.update_current_value();
        let original = format_value(&self.current);
        let result = divide_rounded(&self.current, &BigDecimal::from(100), self.scale);
        self.show(result);
        self.history.push(format!("{}% = {}", original, self.display));
    }

    // ---- memory ----

    pub fn memory_store(&mut self) {
        self.update_current_value();
        self.memory = self.current.clone();
        tracing::debug!("Memory stored: {}", format_value(&self.memory));
    }

    /// Put the memory value on the display and start a new number.
    pub fn memory_recall(&mut self) -> BigDecimal {
        self.show(self.memory.clone());
        self.start_new_number = true;
        self.memory.clone()
    }

    pub fn memory_add(&mut self) {
        self.update_current_value();
        self.memory += &self.current;
        tracing::debug!("Memory now: {}", format_value(&self.memory));
    }

    pub fn memory_subtract(&mut self) {
        self.update_current_value();
        self.memory -= &self.current;
        tracing::debug!("Memory now: {}", format_value(&self.memory));
    }

    pub fn memory_clear(&mut self) {
        self.memory = BigDecimal::zero();
    }

    /// Whether a non-zero value is held in memory (for the "M" indicator).
    pub fn has_memory(&self) -> bool {
        !self.memory.is_zero()
    }

    pub fn memory_value(&self) -> &BigDecimal {
        &self.memory
    }

    // ---- history ----

    /// Copy of the history, newest first.
    pub fn history(&self) -> Vec<String> {
        self.history.snapshot()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ---- display & state ----

    pub fn display_value(&self) -> &str {
        &self.display
    }

    /// The current value as parsed from the display.
    pub fn current_value(&mut self) -> BigDecimal {
        self.update_current_value();
        self.current.clone()
    }

    /// Replace the current value outright and start a new number.
    pub fn set_current_value(&mut self, value: BigDecimal) {
        self.show(value);
        self.start_new_number = true;
    }

    pub fn current_operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn is_start_new_number(&self) -> bool {
        self.start_new_number
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
