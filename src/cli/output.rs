//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// One row of the `list` table
#[derive(Debug, Clone)]
pub struct ConfigFileRow {
    pub name: String,
    pub size: u64,
    pub has_default: bool,
}

/// Human readable byte size
pub fn format_size(bytes: u64) -> String {
    match bytes {
        0 => "empty".to_string(),
        b if b < 1024 => format!("{} B", b),
        b => format!("{:.1} KiB", b as f64 / 1024.0),
    }
}

/// Print a table of config files
pub fn print_config_table(rows: &[ConfigFileRow]) {
    if rows.is_empty() {
        info("No config files found. Create one with 'cfgstore create <name>'");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").fg(Color::Cyan),
            Cell::new("Size").fg(Color::Cyan),
            Cell::new("Bundled default").fg(Color::Cyan),
        ]);

    for row in rows {
        let size_color = if row.size == 0 {
            Color::Yellow
        } else {
            Color::Reset
        };

        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(format_size(row.size)).fg(size_color),
            Cell::new(if row.has_default { "yes" } else { "-" }),
        ]);
    }

    println!("{table}");
}
