//! Scientific calculator session engine.
//!
//! The [`session::Session`] accumulates key presses into an expression,
//! evaluates it with the recursive-descent evaluator in [`calculator`], and
//! recovers from malformed input through a self-clearing error state.

pub mod calculator;
pub mod config;
pub mod input;
pub mod session;
pub mod ui;
