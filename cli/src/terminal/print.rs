//! Builders for the decorated console lines. They return strings instead of
//! printing so the reporter can mirror every console line into the log.

use colored::*;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    )
}

pub fn fat_separator() -> String {
    format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR))
}

pub fn centered(msg: &str) -> String {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(visible_width(msg)) / 2);
    format!("{}{}", space, msg)
}

/// The line as it reads on screen: SGR escape sequences removed, text kept.
/// This is what goes into the log file.
pub fn strip_codes(msg: &str) -> String {
    let mut plain = String::with_capacity(msg.len());
    let mut in_escape = false;
    for c in msg.chars() {
        match (in_escape, c) {
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, '\u{1b}') => in_escape = true,
            (false, _) => plain.push(c),
        }
    }
    plain
}

fn visible_width(msg: &str) -> usize {
    strip_codes(msg).chars().count()
}
