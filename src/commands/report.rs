// src/commands/report.rs

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::infra::executor::InterpreterSession;
use crate::infra::fs::existing_run_root;
use crate::reporting::{generate_html_report, print_summary, ReportContext, SUMMARY_FILE_NAME};

/// Executes every test notebook under `<root>/<name>/<version>`, prints the
/// console summary and writes `summary.html` into the run root.
pub fn execute(name: &str, version: &str, root: &Path, interpreter: &str) -> Result<()> {
    let run_root = existing_run_root(root, name, version)?;

    println!("Executing test notebooks under {}", run_root.display());

    let mut session = InterpreterSession::new(interpreter);
    let rows = ReportContext::new(&mut session)
        .explore(&run_root)
        .with_context(|| format!("failed to execute the test tree for {name} {version}"))?;

    print_summary(&rows);

    let title = format!("Test summary for {name} {version}");
    let report_path = run_root.join(SUMMARY_FILE_NAME);
    generate_html_report(&title, &rows, &report_path)
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    println!(
        "{}",
        format!(
            "Summary report generated successfully at {}",
            report_path.display()
        )
        .green()
    );
    Ok(())
}
