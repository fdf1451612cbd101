use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Style;

/// `--color` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Console styles for the messages kodkafa prints.
#[derive(Debug, Clone)]
pub struct Colors {
    pub error: Style,
    pub success: Style,
    pub info: Style,
    pub added: Style,
    pub removed: Style,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        let style = |s: Style| s.force_styling(enabled);
        Self {
            error: style(Style::new().red()),
            success: style(Style::new().green()),
            info: style(Style::new().cyan()),
            added: style(Style::new().green()),
            removed: style(Style::new().red()),
        }
    }
}

/// Whether stdout output should be styled.
pub fn should_use_colors(choice: ColorChoice) -> bool {
    colors_enabled(choice, &io::stdout())
}

/// Apply the `--color` choice to `stream`.
pub fn colors_enabled(choice: ColorChoice, stream: &impl IsTerminal) -> bool {
    // Priority: --color > NO_COLOR env > TTY detection
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && stream.is_terminal(),
    }
}
