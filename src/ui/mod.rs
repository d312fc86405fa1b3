pub mod terminal;

pub use terminal::{PanelOptions, SCIENTIFIC_KEYS, render_panel};
