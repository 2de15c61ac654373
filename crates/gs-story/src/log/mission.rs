//! Mission log storage and export.

use gs_mechanics::CheckOutcome;
use serde::{Deserialize, Serialize};

use super::entry::LogEntry;

/// A chronological, append-only log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionLog {
    entries: Vec<LogEntry>,
}

impl MissionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the log.
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every check outcome, oldest first.
    pub fn checks(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.entries.iter().filter_map(|e| match e {
            LogEntry::CheckResolved { outcome, .. } => Some(outcome),
            _ => None,
        })
    }

    /// Export the log as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Mission Log\n\n");
        for entry in &self.entries {
            match entry {
                LogEntry::SceneEntered { scene, title, .. } => {
                    let heading = if title.is_empty() { scene } else { title };
                    out.push_str(&format!("## {heading}\n\n"));
                }
                LogEntry::ChoiceMade { label, .. } => {
                    out.push_str(&format!("**Choice**: {label}\n\n"));
                }
                LogEntry::CheckResolved { outcome, .. } => {
                    out.push_str(&format!(
                        "**Check** ({}): {} + {} = {} vs {} — **{}**\n\n",
                        outcome.attribute,
                        outcome.attribute_value,
                        outcome.roll,
                        outcome.total,
                        outcome.target,
                        verdict(outcome)
                    ));
                }
                LogEntry::TrackAdjusted {
                    track,
                    delta,
                    value,
                    ..
                } => {
                    out.push_str(&format!("*{track}* {delta:+} → {value}\n\n"));
                }
                LogEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out
    }

    /// Export the log as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Mission Log\n===========\n\n");
        for entry in &self.entries {
            match entry {
                LogEntry::SceneEntered { scene, title, .. } => {
                    let heading = if title.is_empty() { scene } else { title };
                    out.push_str(&format!("--- {heading} ---\n"));
                }
                LogEntry::ChoiceMade { label, .. } => {
                    out.push_str(&format!("Choice: {label}\n"));
                }
                LogEntry::CheckResolved { outcome, .. } => {
                    out.push_str(&format!("Check {outcome}\n"));
                }
                LogEntry::TrackAdjusted {
                    track,
                    delta,
                    value,
                    ..
                } => {
                    out.push_str(&format!("{track} {delta:+} -> {value}\n"));
                }
                LogEntry::Note { text, .. } => {
                    out.push_str(&format!("Note: {text}\n"));
                }
            }
        }
        out
    }
}

fn verdict(outcome: &CheckOutcome) -> &'static str {
    if outcome.success { "Success" } else { "Failure" }
}
