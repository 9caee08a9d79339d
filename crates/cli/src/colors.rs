// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help output.
//!
//! `NO_COLOR=1` disables colors and `COLOR=1` forces them without a TTY.

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and descriptions: medium grey
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples block when colors are enabled.
///
/// ```text
/// Examples:
///   sq compile "name:bob"     Search one field
/// ```
///
/// Lines ending in `:` are headers. In other lines the command (everything
/// before the first run of two spaces) is a literal, except for `<placeholders>`
/// and quoted arguments which are context.
pub fn examples(text: &str) -> String {
    if should_colorize() {
        colorize_examples(text)
    } else {
        text.to_string()
    }
}

fn colorize_examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match trimmed.find("  ") {
                Some(end) => {
                    let (cmd, desc) = trimmed.split_at(end);
                    format!("{indent}{}{desc}", colorize_command(cmd))
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize one example command word by word.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            let is_context = word.starts_with('<') || word.starts_with('"') || word.starts_with('\'');
            if word.is_empty() {
                String::new()
            } else if is_context {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
