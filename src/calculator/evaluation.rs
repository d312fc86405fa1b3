//! Evaluation of pending operations and scientific functions.
//!
//! Every computation produces a [`CalcResult`] carrying the expression it
//! evaluated, so the engine can update the display and the history trace
//! in one place.

use super::format::{format_number, parse_operand, round_result};
use super::scientific::ScientificFn;
use super::state::{ERROR_TOKEN, Operator};

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CalcResult {
    /// Finite result.
    Success {
        /// The expression as shown in the history trace.
        expression: String,
        /// The value in display form.
        display_result: String,
    },
    /// NaN or infinite result.
    Error {
        /// The expression as shown in the history trace.
        expression: String,
    },
}

impl CalcResult {
    /// Classify a raw result, rounding it when it is finite.
    pub fn from_value(expression: String, value: f64) -> Self {
        if !value.is_finite() {
            return Self::Error { expression };
        }

        Self::Success {
            expression,
            display_result: format_number(round_result(value)),
        }
    }

    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the display string (result or the error sentinel).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { .. } => ERROR_TOKEN,
        }
    }

    /// Split into the display and history strings.
    pub fn into_parts(self) -> (String, String) {
        match self {
            Self::Success {
                expression,
                display_result,
            } => (display_result, expression),
            Self::Error { expression } => (ERROR_TOKEN.to_string(), expression),
        }
    }
}

/// Evaluate `previous op current`.
///
/// The trace keeps both operands as typed, e.g. `"5 + 3"`.
pub fn evaluate_binary(previous: &str, op: Operator, current: &str) -> CalcResult {
    let value = op.apply(parse_operand(previous), parse_operand(current));
    let expression = format!("{} {} {}", previous, op.symbol(), current);
    CalcResult::from_value(expression, value)
}

/// Evaluate `previous ^ current`.
///
/// The exponent is shown in parsed form, the base as typed.
pub fn evaluate_power(previous: &str, current: &str) -> CalcResult {
    let exponent = parse_operand(current);
    let value = parse_operand(previous).powf(exponent);
    let expression = format!("{} ^ {}", previous, format_number(exponent));
    CalcResult::from_value(expression, value)
}

/// Apply a unary scientific function to an operand.
///
/// Returns `None` for keys that are not unary functions.
pub fn evaluate_unary(func: ScientificFn, operand: &str) -> Option<CalcResult> {
    let apply = func.unary()?;
    let input = parse_operand(operand);
    let expression = format!("{}({})", func.name(), format_number(input));
    Some(CalcResult::from_value(expression, apply(input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        let result = evaluate_binary("5", Operator::Add, "3");
        assert!(result.is_success());
        assert_eq!(result.display(), "8");
        assert_eq!(result.expression(), "5 + 3");
    }

    #[test]
    fn test_decimal_noise_is_rounded() {
        let result = evaluate_binary("0.1", Operator::Add, "0.2");
        assert_eq!(result.display(), "0.3");

        let result = evaluate_binary("1", Operator::Div, "3");
        assert_eq!(result.display(), "0.3333333333");
    }

    #[test]
    fn test_division_by_zero() {
        let result = evaluate_binary("1", Operator::Div, "0");
        assert!(!result.is_success());
        assert_eq!(result.display(), "Erro");
        assert_eq!(result.expression(), "1 \u{00f7} 0");
    }

    #[test]
    fn test_zero_over_zero() {
        let result = evaluate_binary("0", Operator::Div, "0");
        assert_eq!(result.display(), "Erro");
    }

    #[test]
    fn test_error_operand_propagates() {
        let result = evaluate_binary("Erro", Operator::Mul, "2");
        assert_eq!(result.display(), "Erro");
    }

    #[test]
    fn test_overflow_is_error() {
        let result = evaluate_binary("1e308", Operator::Mul, "10");
        assert_eq!(result.display(), "Erro");
    }

    #[test]
    fn test_power() {
        let result = evaluate_power("2", "3");
        assert_eq!(result.display(), "8");
        assert_eq!(result.expression(), "2 ^ 3");

        let result = evaluate_power("-8", "0.5");
        assert_eq!(result.display(), "Erro");
    }

    #[test]
    fn test_unary_functions() {
        let result = evaluate_unary(ScientificFn::Sqrt, "16").unwrap();
        assert_eq!(result.display(), "4");
        assert_eq!(result.expression(), "sqrt(16)");

        let result = evaluate_unary(ScientificFn::Sin, "180").unwrap();
        assert_eq!(result.display(), "0");

        let result = evaluate_unary(ScientificFn::Log10, "0").unwrap();
        assert_eq!(result.display(), "Erro");
        assert_eq!(result.expression(), "log(0)");
    }

    #[test]
    fn test_non_unary_key() {
        assert!(evaluate_unary(ScientificFn::Pi, "1").is_none());
        assert!(evaluate_unary(ScientificFn::Power, "1").is_none());
    }

    #[test]
    fn test_into_parts() {
        let (display, history) = evaluate_binary("6", Operator::Mul, "7").into_parts();
        assert_eq!(display, "42");
        assert_eq!(history, "6 \u{00d7} 7");
    }
}
