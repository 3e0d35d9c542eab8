//! Next-step hints shown after commands.

/// Hint for a unit directory without a report.
pub fn generate_report(day: Option<u32>, unit: &str) -> String {
    match day {
        Some(day) => format!("Run `daykit readme {}` to generate it.", day),
        None => format!("`{}` does not look like a unit directory; add a report or move it.", unit),
    }
}

/// Hint after a unit was scaffolded.
pub fn after_scaffold(day: u32) -> String {
    format!("Implement the solution, then run `daykit readme {}`.", day)
}

/// Hint when a registry lacks the line a unit needs.
pub fn missing_marker(file: &str, expected: &str) -> String {
    format!("Add `{}` to {} and re-run.", expected, file)
}
