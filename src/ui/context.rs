use assistant_bot::config::{ColorMode, Config};
use assistant_bot::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let mode = match cli_color {
            Some(ColorWhen::Never) => ColorMode::Never,
            Some(ColorWhen::Always) => ColorMode::Always,
            Some(ColorWhen::Auto) => ColorMode::Auto,
            None => config.output.color,
        };
        let color = !json
            && match mode {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            };

        Self {
            json,
            color,
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }
}
