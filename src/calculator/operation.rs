//! Operation kinds understood by the engine.
//!
//! Binary operators work on exact decimals; scientific functions go through
//! `f64` and lose exactness on the way.

use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};

use super::error::CalcError;
use super::evaluation::divide_rounded;

/// A binary operator waiting for its right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All binary operators, in keypad order.
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Symbol shown on the keypad and in history records.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Look up an operator by its keypad symbol.
    ///
    /// ASCII `*` and `/` are accepted alongside `×` and `÷`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// Division rounds half-up to `scale` fractional digits and rejects an
    /// exactly-zero divisor.
    pub fn apply(
        self,
        lhs: &BigDecimal,
        rhs: &BigDecimal,
        scale: u32,
    ) -> Result<BigDecimal, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs.is_zero() {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(divide_rounded(lhs, rhs, scale))
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A unary function or constant applied to the current value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScientificOperation {
    Sin,
    Cos,
    Tan,
    Square,
    Sqrt,
    /// Raise the current value to the given exponent.
    Power(BigDecimal),
    Log10,
    Ln,
    Pi,
    E,
}

impl ScientificOperation {
    /// Keypad label.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Square => "x²",
            Self::Sqrt => "√",
            Self::Power(_) => "xʸ",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Pi => "π",
            Self::E => "e",
        }
    }

    /// Tooltip text for the keypad.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Sin => "Sine of an angle in radians",
            Self::Cos => "Cosine of an angle in radians",
            Self::Tan => "Tangent of an angle in radians",
            Self::Square => "Multiplies the number by itself",
            Self::Sqrt => "Number that, squared, equals the input",
            Self::Power(_) => "Raises x to the power of y",
            Self::Log10 => "Logarithm base 10",
            Self::Ln => "Natural logarithm (base e)",
            Self::Pi => "Pi constant (3.14159...)",
            Self::E => "Euler's number (2.71828...)",
        }
    }

    /// Look up a function by its keypad label.
    ///
    /// `xʸ` needs an exponent and is never returned here; build
    /// [`ScientificOperation::Power`] directly.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "x²" => Some(Self::Square),
            "√" => Some(Self::Sqrt),
            "log" => Some(Self::Log10),
            "ln" => Some(Self::Ln),
            "π" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    /// Evaluate the function at `x`.
    ///
    /// Constants ignore `x`. Results that are NaN or infinite are reported
    /// as domain errors so they never reach the display.
    pub fn evaluate(&self, x: f64) -> Result<f64, CalcError> {
        let value = match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Square => x.powi(2),
            Self::Sqrt => {
                if x < 0.0 {
                    return Err(CalcError::domain(
                        "Cannot calculate square root of negative number",
                    ));
                }
                x.sqrt()
            }
            Self::Power(exponent) => x.powf(exponent.to_f64().unwrap_or(f64::NAN)),
            Self::Log10 => {
                if x <= 0.0 {
                    return Err(CalcError::domain(
                        "Cannot calculate logarithm of non-positive number",
                    ));
                }
                x.log10()
            }
            Self::Ln => {
                if x <= 0.0 {
                    return Err(CalcError::domain(
                        "Cannot calculate natural logarithm of non-positive number",
                    ));
                }
                x.ln()
            }
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::domain("Result is not a finite number"))
        }
    }

    /// History record for applying this function to `operand`.
    ///
    /// Both arguments are already in display format.
    pub fn describe(&self, operand: &str, result: &str) -> String {
        match self {
            Self::Sin | Self::Cos | Self::Tan | Self::Log10 | Self::Ln => {
                format!("{}({}) = {}", self.symbol(), operand, result)
            }
            Self::Square => format!("{operand}² = {result}"),
            Self::Sqrt => format!("√{operand} = {result}"),
            Self::Power(exponent) => format!(
                "{}^{} = {}",
                operand,
                super::evaluation::format_value(exponent),
                result
            ),
            Self::Pi | Self::E => format!("{} = {}", self.symbol(), result),
        }
    }
}

impl std::fmt::Display for ScientificOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
