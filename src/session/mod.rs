//! Presentation-side driver for the calculator engine.
//!
//! A [`Session`] applies decoded commands to one [`Calculator`], turns engine
//! failures into user-facing messages and implements delete-last-character.

mod snapshot;

pub use snapshot::DisplaySnapshot;

use crate::calculator::{CalcError, Calculator, EngineSettings, parse_display};
use crate::input::Command;

pub struct Session {
    calculator: Calculator,
    last_error: Option<String>,
}

impl Session {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            calculator: Calculator::with_settings(settings),
            last_error: None,
        }
    }

    /// Apply one command.
    ///
    /// A failing command leaves its message in the next snapshot and the
    /// calculator cleared.
    pub fn apply(&mut self, command: &Command) {
        self.last_error = None;
        if let Err(e) = self.dispatch(command) {
            tracing::info!("Command {:?} failed: {}", command, e);
            self.last_error = Some(e.to_string());
            self.calculator.reset();
        }
    }

    fn dispatch(&mut self, command: &Command) -> Result<(), CalcError> {
        let calc = &mut self.calculator;
        match command {
            Command::Digit(d) => calc.append_digit(*d),
            Command::DecimalPoint => calc.append_decimal_point(),
            Command::Operator(op) => calc.set_operation(*op)?,
            Command::Evaluate => {
                calc.calculate_result()?;
            }
            Command::Clear => calc.reset(),
            Command::FullClear => calc.full_reset(),
            Command::DeleteLast => self.delete_last(),
            Command::ToggleSign => calc.toggle_sign(),
            Command::Percent => calc.calculate_percentage(),
            Command::Scientific(op) => {
                calc.perform_scientific_operation(op)?;
            }
            Command::MemoryStore => calc.memory_store(),
            Command::MemoryRecall => {
                calc.memory_recall();
            }
            Command::MemoryAdd => calc.memory_add(),
            Command::MemorySubtract => calc.memory_subtract(),
            Command::MemoryClear => calc.memory_clear(),
            Command::ClearHistory => calc.clear_history(),
            // rendered by the front end
            Command::ShowHistory => {}
        }
        Ok(())
    }

    /// Drop the last character of the display.
    ///
    /// The shortened text is assigned as a fresh value; a single character or
    /// an unparsable remainder (such as a lone `-`) clears instead.
    pub fn delete_last(&mut self) {
        let display = self.calculator.display_value();
        let mut chars = display.chars();
        chars.next_back();
        let remainder = chars.as_str();

        let value = if display.chars().count() > 1 {
            parse_display(remainder)
        } else {
            None
        };

        match value {
            Some(value) => self.calculator.set_current_value(value),
            None => self.calculator.reset(),
        }
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::capture(&self.calculator, self.last_error.clone())
    }

    pub fn history(&self) -> Vec<String> {
        self.calculator.history()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&EngineSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operation;
    use crate::input::{decode_token, tokenize};

    fn run(session: &mut Session, line: &str) {
        for token in tokenize(line) {
            if let Some(command) = decode_token(&token) {
                session.apply(&command);
            }
        }
    }

    #[test]
    fn test_keyed_calculation() {
        let mut session = Session::default();
        run(&mut session, "5+3*2=");
        assert_eq!(session.snapshot().display, "16");
        run(&mut session, "10+5x2-5=");
        assert_eq!(session.snapshot().display, "25");
    }

    #[test]
    fn test_division_by_zero_message() {
        let mut session = Session::default();
        run(&mut session, "5/0=");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.error.as_deref(), Some("Cannot divide by zero"));
        assert_eq!(snapshot.display, "0");
        assert_eq!(snapshot.pending, None);

        // next command clears the message
        run(&mut session, "4");
        let snapshot = session.snapshot();
        assert!(!snapshot.is_error());
        assert_eq!(snapshot.display, "4");
    }

    #[test]
    fn test_domain_error_message() {
        let mut session = Session::default();
        run(&mut session, "9 neg sqrt");
        let snapshot = session.snapshot();
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Cannot calculate square root of negative number")
        );
        assert_eq!(snapshot.display, "0");
    }

    #[test]
    fn test_delete_last() {
        let mut session = Session::default();
        run(&mut session, "123");
        session.apply(&Command::DeleteLast);
        assert_eq!(session.snapshot().display, "12");
        // the shortened value is a finished number
        run(&mut session, "4");
        assert_eq!(session.snapshot().display, "4");
    }

    #[test]
    fn test_delete_last_falls_back_to_clear() {
        let mut session = Session::default();
        run(&mut session, "7");
        session.apply(&Command::DeleteLast);
        assert_eq!(session.snapshot().display, "0");

        run(&mut session, "5 neg");
        assert_eq!(session.snapshot().display, "-5");
        session.apply(&Command::DeleteLast);
        assert_eq!(session.snapshot().display, "0");
    }

    #[test]
    fn test_delete_last_keeps_pending_operation() {
        let mut session = Session::default();
        run(&mut session, "8+25");
        session.apply(&Command::DeleteLast);
        assert_eq!(session.snapshot().pending, Some(Operation::Add));
        run(&mut session, "=");
        assert_eq!(session.snapshot().display, "10");
    }

    #[test]
    fn test_delete_trailing_point() {
        let mut session = Session::default();
        run(&mut session, "3.");
        session.apply(&Command::DeleteLast);
        assert_eq!(session.snapshot().display, "3");
    }

    #[test]
    fn test_memory_and_history_commands() {
        let mut session = Session::default();
        run(&mut session, "6 ms c 2 m+ mr");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.display, "8");
        assert!(snapshot.memory);

        run(&mut session, "pow 2");
        assert_eq!(session.snapshot().display, "64");
        assert_eq!(session.history(), vec!["8^2 = 64"]);

        run(&mut session, "hc mc");
        assert!(session.history().is_empty());
        assert!(!session.snapshot().memory);
    }

    #[test]
    fn test_full_clear() {
        let mut session = Session::default();
        run(&mut session, "4 ms 50%");
        assert_eq!(session.history().len(), 1);
        run(&mut session, "ac");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.display, "0");
        assert!(!snapshot.memory);
        assert!(session.history().is_empty());
        assert!(!session.calculator().has_memory());
    }
}
