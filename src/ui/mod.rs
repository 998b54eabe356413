pub mod labels;
pub mod terminal;

pub use labels::button_labels;
pub use terminal::TerminalSurface;

use crate::input::FunctionKey;
use crate::session::SessionSnapshot;

/// Where a session is shown.
///
/// Implementations are called after every input and after the deferred
/// error reset, possibly from a background task.
pub trait Surface: Send + Sync {
    /// Show the current raw input and display expression.
    fn render(&self, snapshot: &SessionSnapshot);

    /// Relabel function buttons after the alternate-function toggle.
    fn relabel(&self, _labels: &[(FunctionKey, &'static str)]) {}
}
