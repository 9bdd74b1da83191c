//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command. Verbose messages go to
//! stderr and are dropped unless enabled via `set_verbose` (the CLI
//! `--verbose` flag), keeping stdout machine-readable for `resolve`.

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{ContentArrangement, Table};
use console::style;

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable verbose output for the whole process.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Print a dim verbose message to stderr, or nothing when verbose is off.
pub fn verbose(msg: &str) {
    if VERBOSE.load(Ordering::Relaxed) {
        eprintln!("{}", style(msg).dim());
    }
}

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a table of variable names and the file each came from.
///
/// Values are never shown here; sensitive entries must not leak.
pub fn print_variables_table(rows: &[(String, String)]) {
    if rows.is_empty() {
        info("No variables resolved.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Source"]);

    for (name, source) in rows {
        table.add_row(vec![name.clone(), source.clone()]);
    }

    println!("{table}");
}
