//! A keypad-driven scientific calculator.
//!
//! The [`calculator`] module holds the engine; [`ui`] renders its outputs
//! for a terminal and [`config`] loads user preferences.

pub mod calculator;
pub mod config;
pub mod ui;
