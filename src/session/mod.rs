//! The scientific calculator session.
//!
//! A [`Session`] owns the raw input (what the main display shows), the
//! display expression (the running summary above it), the angle mode and
//! the alternate-function flag. Every operation runs to completion and never
//! fails outward: malformed expressions put the session into the error
//! state, non-finite results are simply displayed.

mod handle;
mod text;

pub use handle::SessionHandle;

use crate::calculator::{AngleMode, EvalError, Function, evaluate_expression, format_number};
use crate::input::{FunctionKey, FunctionKind, Input, Operator};
use std::time::Duration;
use text::{active_number, toggle_trailing_sign};
use tracing::{debug, warn};

/// Raw input shown when nothing has been entered.
pub const PLACEHOLDER: &str = "0";
/// Text shown on both lines while in the error state.
pub const ERROR_TEXT: &str = "Error";
/// Delay before the error state clears itself.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(1500);

/// Side effects a collaborator should act on after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Function buttons should switch to their alternate labels (or back).
    Relabel { second: bool },
    /// The angle mode changed.
    AngleMode(AngleMode),
}

/// A copy of the observable session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub raw_input: String,
    pub expression: String,
    pub angle_mode: AngleMode,
    pub second: bool,
    pub error: bool,
}

#[derive(Clone, Debug)]
pub struct Session {
    raw_input: String,
    expression: String,
    angle_mode: AngleMode,
    second: bool,
    error: bool,
    /// A result is on display; the next digit starts a new entry.
    settled: bool,
    reset_delay: Duration,
    scheduled_reset: Option<Duration>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AngleMode::default(), DEFAULT_RESET_DELAY)
    }
}

impl Session {
    pub fn new(angle_mode: AngleMode, reset_delay: Duration) -> Self {
        Self {
            raw_input: PLACEHOLDER.to_string(),
            expression: String::new(),
            angle_mode,
            second: false,
            error: false,
            settled: false,
            reset_delay,
            scheduled_reset: None,
        }
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn is_second(&self) -> bool {
        self.second
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            raw_input: self.raw_input.clone(),
            expression: self.expression.clone(),
            angle_mode: self.angle_mode,
            second: self.second,
            error: self.error,
        }
    }

    /// Apply one input.
    pub fn apply(&mut self, input: Input) -> Option<Notice> {
        debug!(?input, raw = %self.raw_input, expression = %self.expression, "input");
        match input {
            Input::Digit(digit) => self.append_digit(digit),
            Input::Point => self.append_point(),
            Input::Operator(op) => self.append_operator(op),
            Input::Function(key) => return self.append_function(key),
            Input::Evaluate => self.evaluate(),
            Input::ClearAll => self.clear_all(),
            Input::ClearEntry => self.clear_entry(),
            Input::Backspace => self.backspace(),
            Input::ToggleSign => self.toggle_sign(),
        }
        None
    }

    /// Append a digit, replacing the `0` placeholder.
    pub fn append_digit(&mut self, digit: char) {
        if self.error {
            return;
        }
        if digit == '.' {
            return self.append_point();
        }
        if !digit.is_ascii_digit() {
            return;
        }
        if self.settled {
            self.start_entry();
        }

        if self.raw_input == PLACEHOLDER {
            self.raw_input.clear();
            if active_number(&self.expression) == PLACEHOLDER {
                self.expression.pop();
            }
        }
        self.raw_input.push(digit);
        self.expression.push(digit);
    }

    /// Append a decimal point unless the current number already has one.
    pub fn append_point(&mut self) {
        if self.error {
            return;
        }
        if self.settled {
            self.start_entry();
        }
        if active_number(&self.raw_input).contains('.') {
            return;
        }

        if active_number(&self.expression).is_empty() {
            self.expression.push('0');
        }
        self.raw_input.push('.');
        self.expression.push('.');
    }

    /// Append a binary operator. Nothing is computed until [`Self::evaluate`].
    pub fn append_operator(&mut self, op: Operator) {
        if self.error {
            return;
        }
        self.continue_from_result();
        self.seed_placeholder();
        self.raw_input.push_str(op.symbol());
        self.expression.push_str(op.symbol());
    }

    /// Press a function button.
    pub fn append_function(&mut self, key: FunctionKey) -> Option<Notice> {
        if self.error {
            return None;
        }

        match key.kind() {
            FunctionKind::Constant(value) => {
                if self.settled {
                    self.start_entry();
                }
                let text = format_number(value);
                if self.raw_input == PLACEHOLDER {
                    self.raw_input = text.clone();
                } else {
                    self.raw_input.push_str(&text);
                }
                self.expression.push_str(&text);
            }
            FunctionKind::Deferred(token) => {
                self.continue_from_result();
                self.seed_placeholder();
                self.raw_input.push_str(token);
                self.expression.push_str(token);
            }
            FunctionKind::Paren(paren) => {
                if paren == '(' && self.settled {
                    self.start_entry();
                } else {
                    self.continue_from_result();
                }
                if paren == '(' && self.raw_input == PLACEHOLDER {
                    self.raw_input.clear();
                }
                self.raw_input.push(paren);
                self.expression.push(paren);
            }
            FunctionKind::Immediate(func) => self.apply_immediate(func),
            FunctionKind::ToggleAngle => {
                self.angle_mode = self.angle_mode.toggle();
                debug!(mode = ?self.angle_mode, "angle mode toggled");
                return Some(Notice::AngleMode(self.angle_mode));
            }
            FunctionKind::ToggleSecond => {
                self.second = !self.second;
                return Some(Notice::Relabel {
                    second: self.second,
                });
            }
        }
        None
    }

    /// Use the whole raw input as the argument of `func` and show the result.
    fn apply_immediate(&mut self, func: Function) {
        let argument = self.raw_input.clone();
        match evaluate_expression(&argument, self.angle_mode) {
            Ok(value) => {
                let result = format_number(func.apply(value, self.angle_mode));
                self.expression = format!("{}({}) = {}", func.symbol(), argument, result);
                self.raw_input = result;
                self.settled = true;
            }
            Err(err) => self.enter_error(err),
        }
    }

    /// Evaluate the accumulated display expression.
    pub fn evaluate(&mut self) {
        if self.error || self.settled || self.expression.is_empty() {
            return;
        }

        match evaluate_expression(&self.expression, self.angle_mode) {
            Ok(value) => {
                let result = format_number(value);
                debug!(expression = %self.expression, %result, "evaluated");
                self.expression = format!("{} = {}", self.expression, result);
                self.raw_input = result;
                self.settled = true;
            }
            Err(err) => self.enter_error(err),
        }
    }

    /// Reset both lines and leave the error state. Modes are kept.
    pub fn clear_all(&mut self) {
        self.raw_input = PLACEHOLDER.to_string();
        self.expression.clear();
        self.error = false;
        self.settled = false;
    }

    /// Reset the raw input only.
    pub fn clear_entry(&mut self) {
        if self.error {
            return self.clear_all();
        }
        self.raw_input = PLACEHOLDER.to_string();
    }

    /// Remove the last character of both lines.
    pub fn backspace(&mut self) {
        if self.error {
            return self.clear_all();
        }

        self.raw_input.pop();
        if self.settled {
            // The display holds "a = b"; trimming it would leave an
            // unevaluable expression, so restart it from the edited result.
            self.settled = false;
            self.expression = self.raw_input.clone();
        } else {
            self.expression.pop();
        }

        if self.raw_input.is_empty() || self.raw_input == "-" {
            self.clear_all();
        }
    }

    /// Negate the number at the end of the input.
    pub fn toggle_sign(&mut self) {
        if self.error || self.raw_input == PLACEHOLDER {
            return;
        }
        if let Some(raw) = toggle_trailing_sign(&self.raw_input) {
            self.raw_input = raw;
            if let Some(expression) = toggle_trailing_sign(&self.expression) {
                self.expression = expression;
            }
        }
    }

    /// Apply the deferred error reset.
    ///
    /// Runs unconditionally: if the user already cleared, this re-applies
    /// the same values.
    pub fn auto_reset(&mut self) {
        debug!("auto reset");
        self.clear_all();
    }

    /// Take the pending reset request, if the last input entered the error state.
    pub fn take_scheduled_reset(&mut self) -> Option<Duration> {
        self.scheduled_reset.take()
    }

    fn enter_error(&mut self, err: EvalError) {
        warn!(expression = %self.expression, raw = %self.raw_input, error = %err, "evaluation failed");
        self.raw_input = ERROR_TEXT.to_string();
        self.expression = ERROR_TEXT.to_string();
        self.error = true;
        self.settled = false;
        self.scheduled_reset = Some(self.reset_delay);
    }

    /// Drop a shown result and begin a fresh entry.
    fn start_entry(&mut self) {
        self.raw_input = PLACEHOLDER.to_string();
        self.expression.clear();
        self.settled = false;
    }

    /// The `0` placeholder becomes a real operand once something is appended to it.
    fn seed_placeholder(&mut self) {
        if self.raw_input == PLACEHOLDER && self.expression.is_empty() {
            self.expression.push_str(PLACEHOLDER);
        }
    }

    /// Keep a shown result as the start of a new expression.
    fn continue_from_result(&mut self) {
        if self.settled {
            self.expression = self.raw_input.clone();
            self.settled = false;
        }
    }
}
