//! Terminal and JSON rendering of query results.

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;

use crate::error::Result;
use crate::import::ImportReport;
use crate::record::Student;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One line per student: name, mark, email, phone and any extras.
pub fn format_student(student: &Student) -> String {
    let mut line = format!(
        "  • {} {} {} {}",
        student.name.cyan().bold(),
        format!("{:.2}", student.mark).green(),
        student.email,
        student.phone.dimmed()
    );
    if !student.extra.is_empty() {
        line.push_str(&format!(" [{}]", student.extra.join(", ")));
    }
    line
}

pub fn render_students(title: &str, students: &[Student]) -> String {
    let mut out = format!("{}\n", title.blue().bold());
    if students.is_empty() {
        out.push_str(&format!("  {}\n", "No students recorded.".yellow()));
        return out;
    }
    for student in students {
        out.push_str(&format_student(student));
        out.push('\n');
    }
    out.push_str(&format!(
        "Total: {} student(s)\n",
        students.len().to_string().green()
    ));
    out
}

pub fn render_average(average: f64, count: usize) -> String {
    if count == 0 {
        return format!(
            "{}\nAverage mark: {:.2}\n",
            "Not enough marks provided to compute an average".yellow(),
            average
        );
    }
    format!(
        "Average mark: {} ({} student(s))\n",
        format!("{average:.2}").green().bold(),
        count
    )
}

pub fn render_deleted(removed: usize) -> String {
    format!(
        "{} The number of students deleted is: {}\n",
        "→".green(),
        removed.to_string().yellow()
    )
}

pub fn render_import_report(report: &ImportReport) -> String {
    if let Some(error) = &report.read_error {
        return format!("{} {}\n", "⚠".yellow(), error);
    }

    let mut out = String::new();
    for skipped in &report.skipped {
        out.push_str(&format!(
            "{} Line {} ({}): {}\n",
            "⚠".yellow(),
            skipped.line,
            skipped.name.cyan(),
            skipped.reason
        ));
    }
    out.push_str(&format!(
        "{} Imported: {} added, {} updated, {} skipped\n",
        "→".green(),
        report.added.to_string().green(),
        report.updated.to_string().green(),
        report.skipped.len().to_string().yellow()
    ));
    out
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
    Ok(format!("{json}\n"))
}
