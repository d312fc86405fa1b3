//! Calculator state and the pending-operation slot.

/// The error sentinel shown when a computation has no finite result.
pub const ERROR_TOKEN: &str = "Erro";

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Symbol used in the history trace.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "\u{2212}",
            Self::Mul => "\u{00d7}",
            Self::Div => "\u{00f7}",
        }
    }

    /// Apply the operator to two operands.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

/// An operation waiting for its second operand.
///
/// Holding the captured operand inside the variant means an operator can
/// never be pending without a left-hand side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Pending {
    #[default]
    Idle,
    /// `previous op ?`
    Binary { op: Operator, previous: String },
    /// `previous ^ ?`, armed by the power button.
    Power { previous: String },
}

impl Pending {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The captured left-hand operand, empty when nothing is pending.
    pub fn previous(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Binary { previous, .. } | Self::Power { previous } => previous,
        }
    }

    /// History text for a pending operation, e.g. `"5 +"`.
    pub fn trace(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Binary { op, previous } => format!("{} {}", previous, op.symbol()),
            Self::Power { previous } => format!("{} ^", previous),
        }
    }
}

/// Complete state of the calculator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorState {
    /// The operand being typed or the last result.
    pub current: String,
    pub pending: Pending,
    /// Set after an operator or result; the next digit starts a new operand.
    pub awaiting_new_operand: bool,
    /// Only controls which input surface the front end shows.
    pub scientific_mode: bool,
    /// Expression trace shown above the display.
    pub history: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current: "0".to_string(),
            pending: Pending::Idle,
            awaiting_new_operand: false,
            scientific_mode: false,
            history: String::new(),
        }
    }
}

impl CalculatorState {
    /// Check if the display currently shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.current == ERROR_TOKEN
    }
}
