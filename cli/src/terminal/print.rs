use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::commands::demo::Line;
use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;
use crate::terminal::messages::Messages;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ ABACUS v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

/// Prints a centered section title. Quiet mode prints the bare title instead.
pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        print(msg);
        return;
    }

    let line = header_line(msg);
    print(&format!("{}", line.bright_black()));
}

fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
}

/// Renders one demonstration line, coloured unless colours are disabled.
pub fn format_line(line: &Line, text: &Messages) -> String {
    match line {
        Line::Result { expression, value } => format!(
            "{} {} {}",
            expression.color(colors::TEXT_DEFAULT),
            "=".color(colors::SEPARATOR),
            value.color(colors::ACCENT)
        ),
        Line::Labeled { label, value } => format!(
            "{}{} {}",
            label.color(colors::TEXT_DEFAULT),
            ":".color(colors::SEPARATOR),
            value.color(colors::ACCENT)
        ),
        Line::Failure { expression, reason } => format!(
            "{} {} {}",
            expression.color(colors::TEXT_DEFAULT),
            "=".color(colors::SEPARATOR),
            format!("{}: {}", text.error_label, reason)
                .color(colors::ERROR)
                .bold()
        ),
        Line::Blank => String::new(),
    }
}

pub fn line(line: &Line, text: &Messages) {
    print(&format_line(line, text));
}

/// Like [`header`], but dropped entirely in quiet mode.
pub fn closing_header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    header(msg, q_level);
}

pub fn end_of_program(q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
