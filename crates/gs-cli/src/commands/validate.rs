use std::path::Path;

use colored::Colorize;
use gs_story::narrative::Severity;

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let content = super::load_content(path)?;
    let issues = content.validate();

    for issue in &issues {
        let line = issue.to_string();
        match issue.severity {
            Severity::Error => eprintln!("  {}", line.red()),
            Severity::Warning => eprintln!("  {}", line.yellow()),
        }
    }

    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    if errors > 0 {
        return Err(format!("{errors} error(s) found"));
    }

    println!(
        "  {} '{}': {} scenes, {} warning(s)",
        "Valid".green().bold(),
        content.character.name,
        content.narrative.scenes.len(),
        issues.len()
    );
    Ok(())
}
