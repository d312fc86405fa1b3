//! Scientific functions offered by the extended keypad.

/// Largest n whose factorial is finite in an f64.
const MAX_FACTORIAL: f64 = 170.0;

/// A scientific keypad function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
    Factorial,
    /// Two-phase `x ^ y`.
    Power,
    OpenParen,
    CloseParen,
    Pi,
    E,
}

impl ScientificFn {
    /// Name shown in the history trace, e.g. `sqrt` in `sqrt(16)` or `!` in `!(5)`.
    ///
    /// Matches the keypad label, except `log` which is base 10.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Factorial => "!",
            Self::Power => "^",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Check if this function maps one operand to one result.
    pub fn is_unary(self) -> bool {
        self.unary().is_some()
    }

    /// The unary implementation, if this function has one.
    pub fn unary(self) -> Option<fn(f64) -> f64> {
        match self {
            Self::Sin => Some(|x: f64| x.to_radians().sin()),
            Self::Cos => Some(|x: f64| x.to_radians().cos()),
            Self::Tan => Some(|x: f64| x.to_radians().tan()),
            Self::Log10 => Some(f64::log10),
            Self::Ln => Some(f64::ln),
            Self::Sqrt => Some(f64::sqrt),
            Self::Factorial => Some(factorial),
            Self::Power
            | Self::OpenParen
            | Self::CloseParen
            | Self::Pi
            | Self::E => None,
        }
    }

    /// The constant this key enters, for `pi` and `e`.
    pub fn constant(self) -> Option<f64> {
        match self {
            Self::Pi => Some(std::f64::consts::PI),
            Self::E => Some(std::f64::consts::E),
            _ => None,
        }
    }
}

/// Factorial of a non-negative integer.
///
/// Negative and fractional inputs give NaN. Inputs past 170 give infinity
/// without iterating, since the product overflows there.
pub fn factorial(n: f64) -> f64 {
    if n.is_nan() || n < 0.0 || n.fract() != 0.0 {
        return f64::NAN;
    }
    if n > MAX_FACTORIAL {
        return f64::INFINITY;
    }

    (2..=n as u32).fold(1.0, |acc, i| acc * f64::from(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_values() {
        assert_eq!(factorial(0.0), 1.0);
        assert_eq!(factorial(1.0), 1.0);
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(10.0), 3_628_800.0);
        assert!(factorial(170.0).is_finite());
    }

    #[test]
    fn test_factorial_rejects_bad_input() {
        assert!(factorial(-1.0).is_nan());
        assert!(factorial(2.5).is_nan());
        assert!(factorial(f64::NAN).is_nan());
        assert!(factorial(171.0).is_infinite());
        assert!(factorial(f64::INFINITY).is_infinite());
    }

    #[test]
    fn test_trig_uses_degrees() {
        let sin = ScientificFn::Sin.unary().unwrap();
        let cos = ScientificFn::Cos.unary().unwrap();
        assert!((sin(30.0) - 0.5).abs() < 1e-12);
        assert!((cos(60.0) - 0.5).abs() < 1e-12);
        assert!(sin(0.0).abs() < 1e-12);
    }

    #[test]
    fn test_logs_and_roots() {
        assert_eq!(ScientificFn::Log10.unary().unwrap()(1000.0), 3.0);
        assert_eq!(ScientificFn::Ln.unary().unwrap()(1.0), 0.0);
        assert_eq!(ScientificFn::Sqrt.unary().unwrap()(16.0), 4.0);
        assert!(ScientificFn::Sqrt.unary().unwrap()(-1.0).is_nan());
    }

    #[test]
    fn test_non_unary_keys() {
        assert!(!ScientificFn::Power.is_unary());
        assert!(!ScientificFn::OpenParen.is_unary());
        assert!(ScientificFn::Factorial.is_unary());
        assert_eq!(ScientificFn::Pi.constant(), Some(std::f64::consts::PI));
        assert_eq!(ScientificFn::Sqrt.constant(), None);
    }
}
