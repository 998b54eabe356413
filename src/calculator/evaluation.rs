//! Expression evaluation.
//!
//! A recursive-descent evaluator over the token stream produced by the
//! lexer. Values are computed while parsing; there is no intermediate tree.
//!
//! Precedence, lowest first: `+ -`, `* / mod`, unary sign, `^` (right
//! associative), postfix `² ³ % !`, then numbers, constants, calls and
//! parenthesised groups.

use super::error::EvalError;
use super::format::format_number;
use super::functions::{AngleMode, Function, factorial};
use super::lexer::{Lexer, Spanned, Token};
use std::f64::consts::{E, PI};

/// Guard against pathological nesting such as thousands of `(`.
const MAX_DEPTH: usize = 256;

/// Outcome of evaluating a standalone expression.
#[derive(Clone, Debug)]
pub enum CalcResult {
    /// The expression parsed; the value may still be non-finite.
    Success {
        /// The expression as entered, trimmed.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted the way the raw input shows it.
        display_result: String,
    },
    /// The expression could not be evaluated.
    Error {
        /// The expression as entered, trimmed.
        expression: String,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }
}

/// Evaluate an expression and package the outcome for display.
pub fn calculate(input: &str, mode: AngleMode) -> CalcResult {
    let expression = input.trim().to_string();
    match evaluate_expression(&expression, mode) {
        Ok(value) => CalcResult::Success {
            display_result: format_number(value),
            expression,
            value,
        },
        Err(err) => CalcResult::Error {
            expression,
            message: err.to_string(),
        },
    }
}

/// Evaluate an arithmetic expression to a number.
///
/// Only malformed input is an error. Division by zero, `log(0)`,
/// `factorial(-1)` and friends evaluate to `Infinity`/`NaN`.
pub fn evaluate_expression(input: &str, mode: AngleMode) -> Result<f64, EvalError> {
    let tokens = Lexer::tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
        mode,
    };
    let value = parser.expr()?;

    match parser.tokens.get(parser.pos) {
        None => Ok(value),
        Some((at, Token::RParen)) => Err(EvalError::UnmatchedParen(*at)),
        Some((at, tok)) => Err(EvalError::UnexpectedToken {
            found: tok.describe(),
            pos: *at,
        }),
    }
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    depth: usize,
    mode: AngleMode,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(_, t)| t)
    }

    fn advance(&mut self) -> Option<Spanned> {
        let next = self.tokens.get(self.pos).cloned();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    fn peek_is_mod(&self) -> bool {
        matches!(self.peek(), Some(Token::Ident(name)) if name == "mod")
    }

    fn expect_close(&mut self) -> Result<(), EvalError> {
        match self.advance() {
            Some((_, Token::RParen)) => Ok(()),
            None => Err(EvalError::UnclosedParen),
            Some((at, tok)) => Err(EvalError::UnexpectedToken {
                found: tok.describe(),
                pos: at,
            }),
        }
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep);
        }

        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => break,
            }
        }

        self.depth -= 1;
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    value /= self.unary()?;
                }
                _ if self.peek_is_mod() => {
                    self.pos += 1;
                    value %= self.unary()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(-self.nested(Self::unary)?)
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.nested(Self::unary)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, EvalError> {
        let base = self.postfix()?;
        if self.peek() == Some(&Token::Caret) {
            self.pos += 1;
            let exponent = self.nested(Self::unary)?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn postfix(&mut self) -> Result<f64, EvalError> {
        let mut value = self.primary()?;
        loop {
            match self.peek() {
                Some(Token::Square) => value = value.powi(2),
                Some(Token::Cube) => value = value.powi(3),
                Some(Token::Percent) => value /= 100.0,
                Some(Token::Bang) => value = factorial(value),
                _ => break,
            }
            self.pos += 1;
        }
        Ok(value)
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        let (at, tok) = self.advance().ok_or(EvalError::UnexpectedEnd)?;
        match tok {
            Token::Number(n) => Ok(n),
            Token::Pi => Ok(PI),
            Token::LParen => {
                let value = self.expr()?;
                self.expect_close()?;
                Ok(value)
            }
            Token::Sqrt => Ok(self.nested(Self::primary)?.sqrt()),
            Token::Cbrt => Ok(self.nested(Self::primary)?.cbrt()),
            Token::Ident(name) => self.ident(name),
            Token::RParen => Err(EvalError::UnmatchedParen(at)),
            other => Err(EvalError::UnexpectedToken {
                found: other.describe(),
                pos: at,
            }),
        }
    }

    fn ident(&mut self, name: String) -> Result<f64, EvalError> {
        match name.as_str() {
            "pi" => return Ok(PI),
            "e" => return Ok(E),
            "Infinity" => return Ok(f64::INFINITY),
            "NaN" => return Ok(f64::NAN),
            _ => {}
        }

        let func = Function::from_name(&name).ok_or(EvalError::UnknownIdent(name))?;
        if self.peek() != Some(&Token::LParen) {
            return Err(EvalError::MissingArgument(func.name().to_string()));
        }
        self.pos += 1;
        let arg = self.expr()?;
        self.expect_close()?;
        Ok(func.apply(arg, self.mode))
    }

    /// Run a recursive rule that does not pass through `expr`, keeping the
    /// depth guard honest for chains like `------1` or `√√√√2`.
    fn nested(&mut self, rule: fn(&mut Self) -> Result<f64, EvalError>) -> Result<f64, EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep);
        }
        let value = rule(self)?;
        self.depth -= 1;
        Ok(value)
    }
}
