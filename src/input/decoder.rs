//! Keystroke decoding for the calculator.
//!
//! Maps raw keys and typed tokens onto [`Command`]s. Anything that does not
//! decode is ignored by the caller.

use bigdecimal::BigDecimal;
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

use crate::calculator::{Operation, ScientificOperation};

/// One calculator action, as produced by a button or key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Digit(char),
    DecimalPoint,
    Operator(Operation),
    Evaluate,
    /// Clear the calculation in progress (C / Escape).
    Clear,
    /// Clear everything, memory and history included (AC).
    FullClear,
    /// Drop the last character of the display (Backspace).
    DeleteLast,
    ToggleSign,
    Percent,
    Scientific(ScientificOperation),
    MemoryStore,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    MemoryClear,
    ShowHistory,
    ClearHistory,
}

/// A raw key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
}

lazy_static! {
    /// A power token with its exponent: `pow3`, `pow 0.5`, `^2`, `^-1`.
    static ref POWER_TOKEN: Regex = Regex::new(
        r"(?i)^(?:pow|\^)\s*(-?\d+(?:\.\d+)?)$"
    ).unwrap();

    /// A run of keypad characters that can be split into single keys,
    /// e.g. `12.5+3=`.
    static ref KEYPAD_RUN: Regex = Regex::new(
        r"^[\d\.,\+\-\*/xX×÷=%cC]+$"
    ).unwrap();
}

/// Decode a single key press.
///
/// Digits, `+ - * /` (and `x`, `×`, `÷`), `=`/Enter, `.`/`,`, Backspace,
/// Escape/`c` and `%` are understood.
pub fn decode_key(key: Key) -> Option<Command> {
    match key {
        Key::Enter => Some(Command::Evaluate),
        Key::Backspace => Some(Command::DeleteLast),
        Key::Escape => Some(Command::Clear),
        Key::Char(c) => match c {
            '0'..='9' => Some(Command::Digit(c)),
            '+' => Some(Command::Operator(Operation::Add)),
            '-' | '−' => Some(Command::Operator(Operation::Subtract)),
            '*' | 'x' | 'X' | '×' => Some(Command::Operator(Operation::Multiply)),
            '/' | '÷' => Some(Command::Operator(Operation::Divide)),
            '=' | '\n' | '\r' => Some(Command::Evaluate),
            '.' | ',' => Some(Command::DecimalPoint),
            'c' | 'C' => Some(Command::Clear),
            '%' => Some(Command::Percent),
            '\u{8}' | '\u{7f}' => Some(Command::DeleteLast),
            '\u{1b}' => Some(Command::Clear),
            _ => None,
        },
    }
}

/// Decode a typed token: a single key, a named key (`enter`, `bs`, `esc`) or
/// a named function (`sqrt`, `pow3`, `m+`, ...).
pub fn decode_token(token: &str) -> Option<Command> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && let Some(command) = decode_key(Key::Char(c))
    {
        return Some(command);
    }

    if let Some(command) = decode_named(&trimmed.to_lowercase()) {
        return Some(command);
    }

    if let Some(op) = ScientificOperation::from_symbol(trimmed) {
        return Some(Command::Scientific(op));
    }

    POWER_TOKEN
        .captures(trimmed)
        .and_then(|caps| BigDecimal::from_str(&caps[1]).ok())
        .map(|exponent| Command::Scientific(ScientificOperation::Power(exponent)))
}

fn decode_named(word: &str) -> Option<Command> {
    let command = match word {
        "enter" | "equals" => Command::Evaluate,
        "backspace" | "bs" | "del" => Command::DeleteLast,
        "esc" | "escape" | "clear" => Command::Clear,
        "ac" => Command::FullClear,
        "neg" | "+/-" | "±" => Command::ToggleSign,
        "sin" => Command::Scientific(ScientificOperation::Sin),
        "cos" => Command::Scientific(ScientificOperation::Cos),
        "tan" => Command::Scientific(ScientificOperation::Tan),
        "sq" | "square" => Command::Scientific(ScientificOperation::Square),
        "sqrt" => Command::Scientific(ScientificOperation::Sqrt),
        "log" => Command::Scientific(ScientificOperation::Log10),
        "ln" => Command::Scientific(ScientificOperation::Ln),
        "pi" => Command::Scientific(ScientificOperation::Pi),
        "e" => Command::Scientific(ScientificOperation::E),
        "ms" => Command::MemoryStore,
        "mr" => Command::MemoryRecall,
        "m+" => Command::MemoryAdd,
        "m-" => Command::MemorySubtract,
        "mc" => Command::MemoryClear,
        "history" | "hist" => Command::ShowHistory,
        "hc" => Command::ClearHistory,
        _ => return None,
    };
    Some(command)
}

/// Split a line of input into tokens for [`decode_token`].
///
/// Words are whitespace separated. A word made only of keypad characters is
/// split into single keys, and `pow` followed by a number is joined back
/// into one token.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut words = line.split_whitespace().peekable();

    while let Some(word) = words.next() {
        let lower = word.to_lowercase();
        if (lower == "pow" || lower == "^")
            && let Some(next) = words.peek()
        {
            let joined = format!("{lower}{next}");
            if POWER_TOKEN.is_match(&joined) {
                tokens.push(joined);
                words.next();
                continue;
            }
        }

        if decode_named(&lower).is_none() && KEYPAD_RUN.is_match(word) {
            tokens.extend(word.chars().map(String::from));
        } else {
            tokens.push(word.to_string());
        }
    }

    tokens
}
