//! Style constants and clap help styling.

use anstyle::{AnsiColor, Color, Effects, Style};

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// Red, for errors.
pub(crate) const ERROR: Style = fg(AnsiColor::Red);

/// Yellow, for warnings.
pub(crate) const WARNING: Style = fg(AnsiColor::Yellow);

/// Bold section headers and labels.
pub(crate) const HEADER: Style = Style::new().effects(Effects::BOLD);
pub(crate) const LABEL: Style = Style::new().effects(Effects::BOLD);

/// Absent row values in batch output.
pub(crate) const NULL: Style = Style::new().effects(Effects::DIMMED.insert(Effects::ITALIC));

pub(crate) const DIM: Style = Style::new().effects(Effects::DIMMED);

pub(crate) fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(fg(AnsiColor::Green).effects(Effects::BOLD))
        .usage(fg(AnsiColor::Green).effects(Effects::BOLD))
        .literal(fg(AnsiColor::Cyan))
        .placeholder(fg(AnsiColor::Cyan))
        .error(fg(AnsiColor::Red).effects(Effects::BOLD))
        .valid(fg(AnsiColor::Green))
        .invalid(fg(AnsiColor::Yellow))
}
