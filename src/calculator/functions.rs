//! Named functions and the angle mode that governs the trigonometric ones.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// How trigonometric arguments are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    /// Button label for the mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::Degrees => "DEG",
            Self::Radians => "RAD",
        }
    }

    /// Convert an angle in this mode to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle * PI / 180.0,
            Self::Radians => angle,
        }
    }
}

/// A unary function callable as `name(arg)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Log,
    Ln,
    Sqrt,
    Cbrt,
    Exp,
    Factorial,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "log" => Self::Log,
            "ln" => Self::Ln,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "exp" => Self::Exp,
            "factorial" => Self::Factorial,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Exp => "exp",
            Self::Factorial => "factorial",
        }
    }

    /// Prefix shown on the display, e.g. `√` in `√(9) = 3`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Cbrt => "∛",
            other => other.name(),
        }
    }

    pub fn is_trigonometric(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Apply the function. Only `sin`, `cos` and `tan` look at the angle mode.
    pub fn apply(self, x: f64, mode: AngleMode) -> f64 {
        let x = if self.is_trigonometric() {
            mode.to_radians(x)
        } else {
            x
        };
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
            Self::Cbrt => x.cbrt(),
            Self::Exp => x.exp(),
            Self::Factorial => factorial(x),
        }
    }
}

/// Largest n whose factorial is finite in an `f64`.
const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// n! for non-negative integers, NaN for anything else.
pub fn factorial(n: f64) -> f64 {
    if n.is_nan() || n < 0.0 || (n.is_finite() && n.fract() != 0.0) {
        return f64::NAN;
    }
    if n > MAX_FINITE_FACTORIAL {
        return f64::INFINITY;
    }

    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(10.0), 3_628_800.0);
        assert!(factorial(170.0).is_finite());
        assert_eq!(factorial(171.0), f64::INFINITY);
        assert_eq!(factorial(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_factorial_domain() {
        assert!(factorial(-1.0).is_nan());
        assert!(factorial(2.5).is_nan());
        assert!(factorial(f64::NAN).is_nan());
        assert!(factorial(f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_trig_respects_angle_mode() {
        assert!(close(Function::Sin.apply(90.0, AngleMode::Degrees), 1.0));
        assert!(close(Function::Cos.apply(180.0, AngleMode::Degrees), -1.0));
        assert!(close(Function::Tan.apply(45.0, AngleMode::Degrees), 1.0));
        assert!(close(Function::Sin.apply(90.0, AngleMode::Radians), 90f64.sin()));
    }

    #[test]
    fn test_hyperbolic_ignores_angle_mode() {
        assert_eq!(
            Function::Sinh.apply(1.0, AngleMode::Degrees),
            Function::Sinh.apply(1.0, AngleMode::Radians)
        );
        assert!(!Function::Sinh.is_trigonometric());
        assert!(!Function::Exp.is_trigonometric());
        assert!(Function::Tan.is_trigonometric());
    }

    #[test]
    fn test_logs_and_roots() {
        assert!(close(Function::Log.apply(1000.0, AngleMode::Radians), 3.0));
        assert!(close(Function::Ln.apply(std::f64::consts::E, AngleMode::Radians), 1.0));
        assert_eq!(Function::Sqrt.apply(9.0, AngleMode::Radians), 3.0);
        assert_eq!(Function::Cbrt.apply(-27.0, AngleMode::Radians), -3.0);
        assert_eq!(Function::Log.apply(0.0, AngleMode::Radians), f64::NEG_INFINITY);
        assert!(Function::Sqrt.apply(-1.0, AngleMode::Radians).is_nan());
    }

    #[test]
    fn test_names_round_trip() {
        for name in [
            "sin", "cos", "tan", "sinh", "cosh", "tanh", "log", "ln", "sqrt", "cbrt", "exp",
            "factorial",
        ] {
            assert_eq!(Function::from_name(name).map(Function::name), Some(name));
        }
        assert_eq!(Function::from_name("asin"), None);
        assert_eq!(Function::Sqrt.symbol(), "√");
        assert_eq!(Function::Ln.symbol(), "ln");
    }

    #[test]
    fn test_angle_mode_toggle() {
        assert_eq!(AngleMode::default(), AngleMode::Degrees);
        assert_eq!(AngleMode::Degrees.toggle(), AngleMode::Radians);
        assert_eq!(AngleMode::Radians.toggle().label(), "DEG");
    }
}
