//! Calculator module for evaluating mathematical expressions.
//!
//! This module provides functionality to:
//! - Tokenize expressions typed on the keypad or keyboard
//! - Evaluate them with a recursive-descent evaluator
//! - Format results the way the display shows them

mod error;
mod evaluation;
mod format;
mod functions;
mod lexer;

pub use error::EvalError;
pub use evaluation::{CalcResult, calculate, evaluate_expression};
pub use format::{format_grouped, format_number};
pub use functions::{AngleMode, Function, factorial};
pub use lexer::{Lexer, Token};
