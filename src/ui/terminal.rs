//! Terminal rendering of the calculator display.
//!
//! Renders the history trace as a muted line above the result, the result
//! with an "= " prefix, and the scientific keypad when it is enabled.

use crate::calculator::{ERROR_TOKEN, Outputs, group_digits};

/// Button labels on the scientific keypad, in panel order.
pub const SCIENTIFIC_KEYS: &[&str] = &[
    "sin", "cos", "tan", "log", "ln", "sqrt", "!", "^", "(", ")", "pi", "e",
];

/// Display options for the panel.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelOptions {
    /// Insert thousands separators into the result.
    pub group_digits: bool,
}

/// Render outputs as a block of text lines.
pub fn render_panel(outputs: &Outputs, options: PanelOptions) -> String {
    let mut lines = Vec::new();

    if !outputs.history.is_empty() {
        lines.push(format!("  {}", outputs.history));
    }

    lines.push(format!("= {}", render_result(&outputs.display, options)));

    if outputs.scientific_mode {
        lines.push(format!("[ {} ]", SCIENTIFIC_KEYS.join(" ")));
    }

    lines.join("\n")
}

fn render_result(display: &str, options: PanelOptions) -> String {
    if display == ERROR_TOKEN || !options.group_digits {
        display.to_string()
    } else {
        group_digits(display)
    }
}
