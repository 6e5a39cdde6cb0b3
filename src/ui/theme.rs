use crossterm::style::Color;

/// Design tokens for the assistant's terminal output.
///
/// Design constraints:
/// - Only 4 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const BULLET: &str = "•";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[ERROR]";
    pub const BULLET: &str = "-";
}

/// Prompt shown before each command in an interactive session
pub const PROMPT: &str = "Enter a command: ";

pub const WELCOME: &str = "Welcome to the assistant bot!";
