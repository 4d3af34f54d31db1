//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::{self, Write};

use colored::Colorize;

use crate::application::services::LevelCount;

const COLUMN_WIDTH: usize = 10;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Level/count table rows, without colour.
pub fn format_count_table(rows: &[LevelCount]) -> Vec<String> {
    rows.iter()
        .map(|row| format!("{:<width$} {}", row.level, row.count, width = COLUMN_WIDTH))
        .collect()
}

/// Write the level/count table with a highlighted header to `out`.
pub fn write_count_table(out: &mut dyn Write, rows: &[LevelCount]) -> io::Result<()> {
    let header = format!("{:<width$} {}", "Level", "Count", width = COLUMN_WIDTH);
    writeln!(out, "{}", header.cyan().bold())?;
    for line in format_count_table(rows) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
