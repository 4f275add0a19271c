//! ANSI terminal colors and text attributes.
//!
//! Nothing here is global: a [`Palette`] is built once, usually through
//! [`ColorChoice::palette`], and handed to whatever prints. A disabled
//! palette has every field set to the empty string, so it can be used with
//! `format!` exactly like an enabled one.
//!
//! ```
//! use titleize::colors::Palette;
//!
//! let palette = Palette::on();
//! let message = format!("{}error{}", palette.fg.bright_red, palette.attr.reset);
//! assert_eq!(message, "\x1b[91merror\x1b[0m");
//!
//! let palette = Palette::off();
//! let message = format!("{}error{}", palette.fg.bright_red, palette.attr.reset);
//! assert_eq!(message, "error");
//! ```

use std::env;
use std::io::{stderr, IsTerminal};
use std::str::FromStr;

use crate::errors::UnknownColorChoice;

/// Text style attributes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Attributes {
    pub blink: &'static str,
    pub bold: &'static str,
    pub italic: &'static str,
    pub reset: &'static str,
    pub reverse: &'static str,
    pub underline: &'static str,
}

/// The 16 ANSI colors, either as foreground or as background.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Colors {
    pub black: &'static str,
    pub blue: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub magenta: &'static str,
    pub red: &'static str,
    pub white: &'static str,
    pub yellow: &'static str,

    pub bright_black: &'static str,
    pub bright_blue: &'static str,
    pub bright_cyan: &'static str,
    pub bright_green: &'static str,
    pub bright_magenta: &'static str,
    pub bright_red: &'static str,
    pub bright_white: &'static str,
    pub bright_yellow: &'static str,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Palette {
    pub attr: Attributes,
    pub bg: Colors,
    pub fg: Colors,
}

impl Palette {
    /// Palette with every escape sequence filled in.
    pub fn on() -> Self {
        Palette {
            attr: Attributes {
                reset: "\x1b[0m",
                bold: "\x1b[1m",
                italic: "\x1b[3m",
                underline: "\x1b[4m",
                blink: "\x1b[5m",
                reverse: "\x1b[7m",
            },
            bg: Colors {
                black: "\x1b[40m",
                red: "\x1b[41m",
                green: "\x1b[42m",
                yellow: "\x1b[43m",
                blue: "\x1b[44m",
                magenta: "\x1b[45m",
                cyan: "\x1b[46m",
                white: "\x1b[47m",

                bright_black: "\x1b[100m",
                bright_red: "\x1b[101m",
                bright_green: "\x1b[102m",
                bright_yellow: "\x1b[103m",
                bright_blue: "\x1b[104m",
                bright_magenta: "\x1b[105m",
                bright_cyan: "\x1b[106m",
                bright_white: "\x1b[107m",
            },
            fg: Colors {
                black: "\x1b[30m",
                red: "\x1b[31m",
                green: "\x1b[32m",
                yellow: "\x1b[33m",
                blue: "\x1b[34m",
                magenta: "\x1b[35m",
                cyan: "\x1b[36m",
                white: "\x1b[37m",

                bright_black: "\x1b[90m",
                bright_red: "\x1b[91m",
                bright_green: "\x1b[92m",
                bright_yellow: "\x1b[93m",
                bright_blue: "\x1b[94m",
                bright_magenta: "\x1b[95m",
                bright_cyan: "\x1b[96m",
                bright_white: "\x1b[97m",
            },
        }
    }

    /// Palette where every value is empty.
    pub fn off() -> Self {
        Self::default()
    }

    /// Enable colors only on an interactive terminal without `NO_COLOR` set.
    pub fn auto(is_terminal: bool, no_color: bool) -> Self {
        if is_terminal && !no_color {
            Self::on()
        } else {
            Self::off()
        }
    }

    /// Same as [`Palette::auto`], looking at stderr and the environment.
    pub fn detect() -> Self {
        Self::auto(stderr().is_terminal(), env::var_os("NO_COLOR").is_some())
    }
}

/// Value of a `--color` command line option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn palette(self) -> Palette {
        match self {
            ColorChoice::Auto => Palette::detect(),
            ColorChoice::Always => Palette::on(),
            ColorChoice::Never => Palette::off(),
        }
    }
}

impl Default for ColorChoice {
    fn default() -> Self {
        ColorChoice::Auto
    }
}

impl FromStr for ColorChoice {
    type Err = UnknownColorChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" | "on" => Ok(ColorChoice::Always),
            "never" | "off" => Ok(ColorChoice::Never),
            _ => Err(UnknownColorChoice(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_needs_terminal_without_no_color() {
        assert_eq!(Palette::auto(true, false), Palette::on());
        assert_eq!(Palette::auto(true, true), Palette::off());
        assert_eq!(Palette::auto(false, false), Palette::off());
        assert_eq!(Palette::auto(false, true), Palette::off());
    }

    #[test]
    fn off_is_all_empty() {
        let palette = Palette::off();
        assert_eq!(palette.attr.bold, "");
        assert_eq!(palette.fg.red, "");
        assert_eq!(palette.bg.bright_white, "");
    }

    #[test]
    fn on_has_escape_codes() {
        let palette = Palette::on();
        assert_eq!(palette.attr.bold, "\x1b[1m");
        assert_eq!(palette.fg.red, "\x1b[31m");
        assert_eq!(palette.bg.bright_white, "\x1b[107m");
    }

    #[test]
    fn parse_color_choice() {
        assert_eq!("auto".parse::<ColorChoice>(), Ok(ColorChoice::Auto));
        assert_eq!("ALWAYS".parse::<ColorChoice>(), Ok(ColorChoice::Always));
        assert_eq!("never".parse::<ColorChoice>(), Ok(ColorChoice::Never));
        assert_eq!("off".parse::<ColorChoice>(), Ok(ColorChoice::Never));
        assert_eq!(
            "sometimes".parse::<ColorChoice>(),
            Err(UnknownColorChoice("sometimes".to_owned()))
        );
    }

    #[test]
    fn explicit_choices_ignore_the_environment() {
        assert_eq!(ColorChoice::Always.palette(), Palette::on());
        assert_eq!(ColorChoice::Never.palette(), Palette::off());
    }
}
