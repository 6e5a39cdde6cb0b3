use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Error,
    Bullet,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Bullet) => theme::icons::BULLET,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Bullet) => theme::icons_ascii::BULLET,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Error => theme::colors::ERROR,
            Icon::Bullet => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Error.render(false), "[ERROR]");
        assert_eq!(Icon::Bullet.render(false), "-");
    }

    #[test]
    fn colored_without_color_is_plain() {
        assert_eq!(Icon::Bullet.colored(false, true), "•");
    }

    #[test]
    fn colored_error_is_styled() {
        assert!(Icon::Error.colored(true, true).contains("\u{1b}["));
    }
}
