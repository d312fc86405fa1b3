//! The calculator engine: input events in, display strings out.
//!
//! The engine is a state transition over [`CalculatorState`]. The front end
//! translates clicks and key presses into [`Event`]s, feeds them in one at a
//! time and renders the returned [`Outputs`].

use serde::Serialize;
use tracing::debug;

use super::evaluation::{CalcResult, evaluate_binary, evaluate_power, evaluate_unary};
use super::format::{format_number, parse_operand};
use super::scientific::ScientificFn;
use super::state::{CalculatorState, ERROR_TOKEN, Operator, Pending};

/// A discrete input delivered by the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A digit key, `'0'..='9'`. Other characters are ignored.
    Digit(char),
    /// The decimal point key.
    Point,
    Operator(Operator),
    Clear,
    Backspace,
    Percent,
    Equals,
    Scientific(ScientificFn),
    /// Switch between the basic and scientific keypads.
    ModeToggle(bool),
}

/// What the front end shows after an event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Outputs {
    /// The main display value.
    pub display: String,
    /// The expression trace above the display.
    pub history: String,
    /// Whether the scientific keypad should be visible.
    pub scientific_mode: bool,
}

impl CalculatorState {
    /// Apply one event.
    pub fn apply(&mut self, event: Event) {
        debug!(?event, current = %self.current, "Handling calculator event");

        match event {
            Event::Digit(d) if d.is_ascii_digit() => self.append_digit(d),
            Event::Digit(_) => {}
            Event::Point => self.append_digit('.'),
            Event::Operator(op) => self.set_operator(op),
            Event::Clear => self.clear(),
            Event::Backspace => self.backspace(),
            Event::Percent => self.percentage(),
            Event::Equals => self.evaluate(),
            Event::Scientific(func) => self.scientific_apply(func),
            Event::ModeToggle(enabled) => self.scientific_mode = enabled,
        }
    }

    /// Type a character into the current operand.
    ///
    /// In replace mode (and over the error sentinel) the character starts a
    /// fresh operand. A second decimal point is ignored.
    pub fn append_digit(&mut self, d: char) {
        if self.awaiting_new_operand || self.is_error() {
            self.current = if d == '.' {
                "0.".to_string()
            } else {
                d.to_string()
            };
            self.awaiting_new_operand = false;
            return;
        }

        if self.current == "0" && d != '.' {
            self.current = d.to_string();
        } else if d == '.' && self.current.contains('.') {
            return;
        } else {
            self.current.push(d);
        }
    }

    /// Start a binary operation, folding any pending one first.
    pub fn set_operator(&mut self, op: Operator) {
        if !self.pending.is_idle() && !self.awaiting_new_operand {
            self.evaluate();
        }

        self.pending = Pending::Binary {
            op,
            previous: self.current.clone(),
        };
        self.awaiting_new_operand = true;
        self.history = self.pending.trace();
    }

    /// Complete the pending operation. Does nothing when none is pending.
    pub fn evaluate(&mut self) {
        let result = match std::mem::take(&mut self.pending) {
            Pending::Idle => return,
            Pending::Binary { op, previous } => evaluate_binary(&previous, op, &self.current),
            Pending::Power { previous } => evaluate_power(&previous, &self.current),
        };
        self.finish(result);
    }

    /// Dispatch a scientific keypad function.
    pub fn scientific_apply(&mut self, func: ScientificFn) {
        match func {
            ScientificFn::Power => self.power(),
            ScientificFn::OpenParen => self.append_digit('('),
            ScientificFn::CloseParen => self.append_digit(')'),
            ScientificFn::Pi | ScientificFn::E => {
                if let Some(constant) = func.constant() {
                    self.current = format_number(constant);
                    self.awaiting_new_operand = true;
                }
            }
            ScientificFn::Sin
            | ScientificFn::Cos
            | ScientificFn::Tan
            | ScientificFn::Log10
            | ScientificFn::Ln
            | ScientificFn::Sqrt
            | ScientificFn::Factorial => {
                if let Some(result) = evaluate_unary(func, &self.current) {
                    self.finish(result);
                }
            }
        }
    }

    /// First press arms `x ^ y`; a press after a new exponent commits it.
    fn power(&mut self) {
        match self.pending {
            Pending::Power { .. } if !self.awaiting_new_operand => self.evaluate(),
            Pending::Binary { .. } if !self.awaiting_new_operand => {
                self.evaluate();
                self.arm_power();
            }
            _ => self.arm_power(),
        }
    }

    fn arm_power(&mut self) {
        self.pending = Pending::Power {
            previous: self.current.clone(),
        };
        self.awaiting_new_operand = true;
        self.history = self.pending.trace();
    }

    /// Divide the current operand by 100 in place.
    pub fn percentage(&mut self) {
        let value = parse_operand(&self.current) / 100.0;
        self.current = if value.is_finite() {
            format_number(value)
        } else {
            ERROR_TOKEN.to_string()
        };
    }

    /// Reset everything except the keypad mode.
    pub fn clear(&mut self) {
        *self = Self {
            scientific_mode: self.scientific_mode,
            ..Self::default()
        };
    }

    /// Remove the last typed character.
    pub fn backspace(&mut self) {
        if self.is_error() {
            self.current = "0".to_string();
            return;
        }

        self.current.pop();
        if self.current.is_empty() || self.current == "-" {
            self.current = "0".to_string();
        }
    }

    pub fn render_display(&self) -> &str {
        &self.current
    }

    pub fn render_history(&self) -> &str {
        &self.history
    }

    /// Snapshot of everything the front end renders.
    pub fn outputs(&self) -> Outputs {
        Outputs {
            display: self.current.clone(),
            history: self.history.clone(),
            scientific_mode: self.scientific_mode,
        }
    }

    fn finish(&mut self, result: CalcResult) {
        if !result.is_success() {
            debug!(expression = result.expression(), "Calculation has no finite result");
        }

        let (display, history) = result.into_parts();
        self.current = display;
        self.history = history;
        self.awaiting_new_operand = true;
    }
}

/// Pure transition: consume a state and an event, return the next state
/// along with what to render.
pub fn step(mut state: CalculatorState, event: Event) -> (CalculatorState, Outputs) {
    state.apply(event);
    let outputs = state.outputs();
    (state, outputs)
}

/// A calculator owned by a front end.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator that starts on the scientific keypad.
    pub fn with_scientific_mode(enabled: bool) -> Self {
        let mut calc = Self::new();
        calc.state.scientific_mode = enabled;
        calc
    }

    /// Handle one event and return what to render.
    pub fn handle(&mut self, event: Event) -> Outputs {
        self.state.apply(event);
        self.state.outputs()
    }

    /// Handle a batch of events, returning the outputs after the last one.
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = Event>) -> Outputs {
        for event in events {
            self.state.apply(event);
        }
        self.state.outputs()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.render_display()
    }

    pub fn history(&self) -> &str {
        self.state.render_history()
    }
}
