//! Button and keyboard input.
//!
//! Every key on the scientific keypad is identified by an action name
//! (`sin`, `deg-rad`, `clear-entry`, ...). This module maps those names and
//! plain keyboard characters to typed [`Input`] values for the session.

mod keyboard;

pub use keyboard::parse_line;

use crate::calculator::Function;
use std::f64::consts::{E, PI};
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error("no key bound to '{0}'")]
    UnknownKey(char),
}

/// One user interaction with the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// A digit `0`-`9`.
    Digit(char),
    Point,
    Operator(Operator),
    Function(FunctionKey),
    Evaluate,
    ClearAll,
    ClearEntry,
    Backspace,
    ToggleSign,
}

impl Input {
    /// Map a button action name to an input.
    pub fn from_action(name: &str) -> Result<Self, InputError> {
        let input = match name {
            "clear" => Self::ClearAll,
            "clear-entry" => Self::ClearEntry,
            "backspace" => Self::Backspace,
            "decimal" => Self::Point,
            "calculate" => Self::Evaluate,
            "plus-minus" => Self::ToggleSign,
            _ => {
                if let Ok(op) = name.parse::<Operator>() {
                    Self::Operator(op)
                } else if let Ok(key) = name.parse::<FunctionKey>() {
                    Self::Function(key)
                } else {
                    let mut chars = name.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if c.is_ascii_digit() => Self::Digit(c),
                        _ => return Err(InputError::UnknownAction(name.to_string())),
                    }
                }
            }
        };
        Ok(input)
    }
}

/// Binary arithmetic operators. Their effect is deferred until evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The evaluable symbol appended to the expression.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            _ => Err(InputError::UnknownAction(s.to_string())),
        }
    }
}

/// Function buttons of the scientific keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKey {
    Pi,
    E,
    Square,
    Cube,
    Power,
    PowerTen,
    Percent,
    Mod,
    Sqrt,
    Cbrt,
    Log,
    Ln,
    Exp,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Factorial,
    ParenOpen,
    ParenClose,
    DegRad,
    Second,
}

/// How a function button affects the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FunctionKind {
    /// Appends the decimal text of a constant.
    Constant(f64),
    /// Appends an operator-like token, realised on evaluation.
    Deferred(&'static str),
    /// Evaluates the raw input as the argument right away.
    Immediate(Function),
    /// Appends a literal parenthesis.
    Paren(char),
    ToggleAngle,
    ToggleSecond,
}

impl FunctionKey {
    pub const ALL: [FunctionKey; 24] = [
        Self::Pi,
        Self::E,
        Self::Square,
        Self::Cube,
        Self::Power,
        Self::PowerTen,
        Self::Percent,
        Self::Mod,
        Self::Sqrt,
        Self::Cbrt,
        Self::Log,
        Self::Ln,
        Self::Exp,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Factorial,
        Self::ParenOpen,
        Self::ParenClose,
        Self::DegRad,
        Self::Second,
    ];

    /// The button's action name.
    pub fn action(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Power => "power",
            Self::PowerTen => "power-ten",
            Self::Percent => "percent",
            Self::Mod => "mod",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Factorial => "factorial",
            Self::ParenOpen => "parenthesis",
            Self::ParenClose => "parenthesis-close",
            Self::DegRad => "deg-rad",
            Self::Second => "second",
        }
    }

    pub fn kind(self) -> FunctionKind {
        match self {
            Self::Pi => FunctionKind::Constant(PI),
            Self::E => FunctionKind::Constant(E),
            Self::Square => FunctionKind::Deferred("²"),
            Self::Cube => FunctionKind::Deferred("³"),
            Self::Power => FunctionKind::Deferred("^"),
            Self::PowerTen => FunctionKind::Deferred("*10^"),
            Self::Percent => FunctionKind::Deferred("%"),
            Self::Mod => FunctionKind::Deferred("mod"),
            Self::Sqrt => FunctionKind::Immediate(Function::Sqrt),
            Self::Cbrt => FunctionKind::Immediate(Function::Cbrt),
            Self::Log => FunctionKind::Immediate(Function::Log),
            Self::Ln => FunctionKind::Immediate(Function::Ln),
            Self::Exp => FunctionKind::Immediate(Function::Exp),
            Self::Sin => FunctionKind::Immediate(Function::Sin),
            Self::Cos => FunctionKind::Immediate(Function::Cos),
            Self::Tan => FunctionKind::Immediate(Function::Tan),
            Self::Sinh => FunctionKind::Immediate(Function::Sinh),
            Self::Cosh => FunctionKind::Immediate(Function::Cosh),
            Self::Tanh => FunctionKind::Immediate(Function::Tanh),
            Self::Factorial => FunctionKind::Immediate(Function::Factorial),
            Self::ParenOpen => FunctionKind::Paren('('),
            Self::ParenClose => FunctionKind::Paren(')'),
            Self::DegRad => FunctionKind::ToggleAngle,
            Self::Second => FunctionKind::ToggleSecond,
        }
    }
}

impl FromStr for FunctionKey {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.action() == s)
            .ok_or_else(|| InputError::UnknownAction(s.to_string()))
    }
}
