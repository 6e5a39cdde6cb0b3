use crossterm::style::Stylize;

use crate::ui::theme;

/// Meaning of a piece of output, mapped to a theme color when color is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Info,
    Dim,
}

pub fn paint(text: &str, tone: Tone, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    let color = match tone {
        Tone::Success => theme::colors::SUCCESS,
        Tone::Error => theme::colors::ERROR,
        Tone::Info => theme::colors::INFO,
        Tone::Dim => theme::colors::DIM,
    };
    format!("{}", text.with(color))
}

pub fn bold(text: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.bold())
    } else {
        text.to_string()
    }
}
