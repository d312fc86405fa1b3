//! Translation of raw key names and button labels into engine events.
//!
//! Two surfaces feed the engine: keyboard keys, which only cover the basic
//! keypad, and button tokens, which cover every key on both keypads and
//! accept whole numbers such as `12.5` as shorthand for their digits.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::engine::Event;
use super::scientific::ScientificFn;
use super::state::Operator;

lazy_static! {
    /// A run of digits with at most one decimal point, e.g. `12`, `0.5`, `.5`, `3.`.
    static ref NUMBER_TOKEN: Regex = Regex::new(
        r"^(?:\d+\.?\d*|\.\d+)$"
    ).unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown key: {0:?}")]
    UnknownToken(String),
}

/// Map a keyboard key name to an event.
///
/// Keys without a binding return `None` and are meant to be ignored.
pub fn event_for_key(key: &str) -> Option<Event> {
    let event = match key {
        "." => Event::Point,
        "+" => Event::Operator(Operator::Add),
        "-" => Event::Operator(Operator::Sub),
        "*" => Event::Operator(Operator::Mul),
        "/" => Event::Operator(Operator::Div),
        "Enter" | "=" => Event::Equals,
        "Escape" => Event::Clear,
        "Backspace" => Event::Backspace,
        "%" => Event::Percent,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(d), None) if d.is_ascii_digit() => Event::Digit(d),
                _ => return None,
            }
        }
    };
    Some(event)
}

/// Map a single button label to its event.
fn event_for_button(label: &str) -> Option<Event> {
    let event = match label {
        "C" | "c" | "clear" => Event::Clear,
        "\u{232b}" | "bs" | "back" => Event::Backspace,
        "%" => Event::Percent,
        "=" => Event::Equals,
        "+" => Event::Operator(Operator::Add),
        "-" | "\u{2212}" => Event::Operator(Operator::Sub),
        "*" | "\u{00d7}" | "x" => Event::Operator(Operator::Mul),
        "/" | "\u{00f7}" => Event::Operator(Operator::Div),
        "sin" => Event::Scientific(ScientificFn::Sin),
        "cos" => Event::Scientific(ScientificFn::Cos),
        "tan" => Event::Scientific(ScientificFn::Tan),
        "log" => Event::Scientific(ScientificFn::Log10),
        "ln" => Event::Scientific(ScientificFn::Ln),
        "sqrt" | "\u{221a}" => Event::Scientific(ScientificFn::Sqrt),
        "!" | "fact" => Event::Scientific(ScientificFn::Factorial),
        "^" | "pow" => Event::Scientific(ScientificFn::Power),
        "(" => Event::Scientific(ScientificFn::OpenParen),
        ")" => Event::Scientific(ScientificFn::CloseParen),
        "pi" | "\u{03c0}" => Event::Scientific(ScientificFn::Pi),
        "e" => Event::Scientific(ScientificFn::E),
        "sci" => Event::ModeToggle(true),
        "basic" => Event::ModeToggle(false),
        _ => return None,
    };
    Some(event)
}

/// Parse one button token into the events it stands for.
///
/// A number token expands to one event per character. Tokens that are not
/// button labels are tried as keyboard key names, so `Enter` or `Escape`
/// work too.
pub fn parse_token(token: &str) -> Result<Vec<Event>, InputError> {
    if NUMBER_TOKEN.is_match(token) {
        return Ok(token
            .chars()
            .map(|c| if c == '.' { Event::Point } else { Event::Digit(c) })
            .collect());
    }

    event_for_button(token)
        .or_else(|| event_for_key(token))
        .map(|event| vec![event])
        .ok_or_else(|| InputError::UnknownToken(token.to_string()))
}

/// Parse a whitespace-separated line of button tokens.
///
/// Stops at the first unknown token.
pub fn parse_line(line: &str) -> Result<Vec<Event>, InputError> {
    let mut events = Vec::new();
    for token in line.split_whitespace() {
        events.extend(parse_token(token)?);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_digits_and_operators() {
        assert_eq!(event_for_key("7"), Some(Event::Digit('7')));
        assert_eq!(event_for_key("."), Some(Event::Point));
        assert_eq!(event_for_key("*"), Some(Event::Operator(Operator::Mul)));
        assert_eq!(event_for_key("-"), Some(Event::Operator(Operator::Sub)));
    }

    #[test]
    fn test_keyboard_commands() {
        assert_eq!(event_for_key("Enter"), Some(Event::Equals));
        assert_eq!(event_for_key("="), Some(Event::Equals));
        assert_eq!(event_for_key("Escape"), Some(Event::Clear));
        assert_eq!(event_for_key("Backspace"), Some(Event::Backspace));
        assert_eq!(event_for_key("%"), Some(Event::Percent));
    }

    #[test]
    fn test_keyboard_unbound_keys() {
        assert_eq!(event_for_key("a"), None);
        assert_eq!(event_for_key("12"), None);
        assert_eq!(event_for_key("Shift"), None);
        assert_eq!(event_for_key(""), None);
    }

    #[test]
    fn test_number_tokens_expand() {
        assert_eq!(
            parse_token("12.5").unwrap(),
            vec![
                Event::Digit('1'),
                Event::Digit('2'),
                Event::Point,
                Event::Digit('5'),
            ]
        );
        assert_eq!(parse_token(".5").unwrap(), vec![Event::Point, Event::Digit('5')]);
    }

    #[test]
    fn test_button_tokens() {
        assert_eq!(
            parse_token("\u{00d7}").unwrap(),
            vec![Event::Operator(Operator::Mul)]
        );
        assert_eq!(
            parse_token("!").unwrap(),
            vec![Event::Scientific(ScientificFn::Factorial)]
        );
        assert_eq!(parse_token("sci").unwrap(), vec![Event::ModeToggle(true)]);
        assert_eq!(parse_token("\u{232b}").unwrap(), vec![Event::Backspace]);
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(
            parse_token("1.2.3"),
            Err(InputError::UnknownToken("1.2.3".to_string()))
        );
        assert!(parse_token("cosh").is_err());
    }

    #[test]
    fn test_parse_line() {
        let events = parse_line("5 + 3 =").unwrap();
        assert_eq!(
            events,
            vec![
                Event::Digit('5'),
                Event::Operator(Operator::Add),
                Event::Digit('3'),
                Event::Equals,
            ]
        );
        assert!(parse_line("   ").unwrap().is_empty());
        assert!(parse_line("5 foo =").is_err());
    }

    #[test]
    fn test_keyboard_names_in_lines() {
        assert_eq!(parse_token("Enter").unwrap(), vec![Event::Equals]);
        assert_eq!(parse_token("Escape").unwrap(), vec![Event::Clear]);
        assert_eq!(
            parse_line("12 Backspace").unwrap(),
            vec![Event::Digit('1'), Event::Digit('2'), Event::Backspace]
        );
    }
}
