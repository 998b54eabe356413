//! Function button labels for the alternate-function (2nd) mode.

use crate::input::FunctionKey;

/// Buttons that change label in 2nd mode: (key, primary, alternate).
const SECOND_FUNCTIONS: [(FunctionKey, &str, &str); 11] = [
    (FunctionKey::Sin, "sin", "sin⁻¹"),
    (FunctionKey::Cos, "cos", "cos⁻¹"),
    (FunctionKey::Tan, "tan", "tan⁻¹"),
    (FunctionKey::Sinh, "sinh", "sinh⁻¹"),
    (FunctionKey::Cosh, "cosh", "cosh⁻¹"),
    (FunctionKey::Tanh, "tanh", "tanh⁻¹"),
    (FunctionKey::Log, "log", "log₂"),
    (FunctionKey::Ln, "ln", "logy"),
    (FunctionKey::Sqrt, "sqrt", "x√y"),
    (FunctionKey::Square, "square", "x²"),
    (FunctionKey::Cube, "cube", "x³"),
];

/// Labels for every relabelable button in the given mode.
pub fn button_labels(second: bool) -> Vec<(FunctionKey, &'static str)> {
    SECOND_FUNCTIONS
        .iter()
        .map(|&(key, primary, alternate)| (key, if second { alternate } else { primary }))
        .collect()
}
