// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Clap styles matching the color codes in [`colors::codes`].
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header}
  {compile}   Compile a search query into a predicate
  {fields}    List searchable fields
  {schema}    Output JSON Schema for command output
",
        header = colors::header("Commands:"),
        compile = colors::literal("compile"),
        fields = colors::literal("fields"),
        schema = colors::literal("schema"),
    )
}

/// Query syntax summary shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Query syntax:
  bob                      Search every string and numeric field
  name:bob                 Field contains value
  -status=archived         Exclude exact matches
  age>=30                  Compare with > >= < <=
  created:jan_2024         Whole month, year or day
  price=[1,2,3]            Any of a list
  active:none              Field is empty",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
