//! Run summary rendering.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use vpce_hosts_core::RunSummary;

/// Human-readable summary of a finished run, ending with the `Done` line.
pub fn render_summary(summary: &RunSummary, output: &Path) -> String {
    let mut out = String::new();

    for skipped in &summary.skipped {
        let _ = writeln!(
            out,
            "skipped {} ({}): {}",
            skipped.id, skipped.service_name, skipped.reason
        );
    }

    let _ = writeln!(
        out,
        "{} endpoints, {} skipped, {} best-guess hostnames",
        summary.endpoints_listed,
        summary.skipped.len(),
        summary.best_guesses
    );
    let _ = write!(
        out,
        "Done: {} entries written to {}",
        summary.entries_written,
        output.display()
    );
    out
}

/// Print rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}
