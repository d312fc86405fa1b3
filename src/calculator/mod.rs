//! Calculator module for the keypad-driven calculator.
//!
//! This module provides functionality to:
//! - Track the operand being typed and any pending operation
//! - Evaluate arithmetic and scientific functions with rounding
//! - Translate keys and button labels into events
//! - Copy results to the clipboard

mod clipboard;
mod engine;
mod evaluation;
mod format;
mod input;
mod scientific;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use engine::{Calculator, Event, Outputs, step};
pub use evaluation::CalcResult;
pub use format::{format_number, group_digits, parse_operand, round_result};
pub use input::{InputError, event_for_key, parse_line, parse_token};
pub use scientific::{ScientificFn, factorial};
pub use state::{CalculatorState, ERROR_TOKEN, Operator, Pending};
