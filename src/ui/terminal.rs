//! Plain-text surface for the terminal front end.
//!
//! Renders the session as two lines, like the calculator display:
//! - The display expression, muted above
//! - The raw input with a "= " prefix, followed by the mode indicators

use super::Surface;
use crate::calculator::{format_grouped, format_number};
use crate::input::FunctionKey;
use crate::session::SessionSnapshot;
use std::io::Write;
use std::sync::Mutex;
use tracing::warn;

pub struct TerminalSurface<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn write_lines(&self, lines: &[String]) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let result = lines
            .iter()
            .try_for_each(|line| writeln!(out, "{}", line))
            .and_then(|_| out.flush());
        if let Err(err) = result {
            warn!(error = %err, "failed to write to terminal");
        }
    }
}

/// The two display lines for a snapshot.
pub fn render_lines(snapshot: &SessionSnapshot) -> [String; 2] {
    let expression = format!("  {}", snapshot.expression);

    let mut indicators = snapshot.angle_mode.label().to_string();
    if snapshot.second {
        indicators.push_str(" 2nd");
    }

    let result = if snapshot.error {
        format!("= {}  (!)", snapshot.raw_input)
    } else {
        format!("= {}", display_value(&snapshot.raw_input))
    };

    [expression, format!("{:<32}{}", result, indicators)]
}

/// Group thousands when the raw input is a finished number.
fn display_value(raw: &str) -> String {
    match raw.parse::<f64>() {
        Ok(value) if format_number(value) == raw => format_grouped(value),
        _ => raw.to_string(),
    }
}

impl<W: Write + Send> Surface for TerminalSurface<W> {
    fn render(&self, snapshot: &SessionSnapshot) {
        self.write_lines(&render_lines(snapshot));
    }

    fn relabel(&self, labels: &[(FunctionKey, &'static str)]) {
        let names: Vec<&str> = labels.iter().map(|(_, label)| *label).collect();
        self.write_lines(&[format!("  [{}]", names.join(" "))]);
    }
}
