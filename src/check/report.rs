use colored::Colorize;

use super::ResolvedDependency;

/// Render the report line for one resolved dependency.
///
/// The line has the form `<name>: <spec> matches <actual>` when the range
/// is satisfied and `<name>: <spec> doesn't match <actual>` otherwise,
/// colorized green/red. Color is presentation only and is dropped
/// automatically when stdout is not a terminal.
pub fn render_line(dep: &ResolvedDependency) -> String {
    let relation = if dep.matches { "matches" } else { "doesn't match" };
    let line = format!(
        "{}: {} {} {}",
        dep.name, dep.spec_tag, relation, dep.actual_tag
    );
    if dep.matches {
        line.green().to_string()
    } else {
        line.red().to_string()
    }
}

/// Message printed when no symlinked entry overlaps the manifest
/// declarations, instead of an empty report.
pub fn render_nothing_to_check() -> String {
    "no linked dependencies to check".to_string()
}
