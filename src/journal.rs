// journal.rs

use serde::{Deserialize, Deserializer, Serialize};

use crate::effect::Effect;

/// One recorded event, newest first in the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub enum LogEntry {
    Action {
        action: String,
        time: String,
        // The deltas that actually took effect, so deleting the entry undoes exactly this.
        effects: Effect,
    },
    Task {
        task: String,
        time: String,
    },
}

impl LogEntry {
    pub fn time(&self) -> &str {
        match self {
            LogEntry::Action { time, .. } | LogEntry::Task { time, .. } => time,
        }
    }

    // The action or task name shown in the history.
    pub fn label(&self) -> &str {
        match self {
            LogEntry::Action { action, .. } => action,
            LogEntry::Task { task, .. } => task,
        }
    }

    pub fn is_action(&self, name: &str) -> bool {
        matches!(self, LogEntry::Action { action, .. } if action == name)
    }

    pub fn is_task(&self, name: &str) -> bool {
        matches!(self, LogEntry::Task { task, .. } if task == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EntryKind {
    Action,
    Task,
}

// Wire shape of an entry. Records written before tasks existed have no "type" and are actions.
#[derive(Serialize, Deserialize)]
struct RawEntry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<EntryKind>,
    #[serde(default)]
    time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    task: Option<String>,
    #[serde(default)]
    effects: Effect,
}

impl TryFrom<RawEntry> for LogEntry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        match raw.kind.unwrap_or(EntryKind::Action) {
            EntryKind::Action => {
                let action = raw
                    .action
                    .ok_or_else(|| "action entry without an action name".to_string())?;
                Ok(LogEntry::Action {
                    action,
                    time: raw.time,
                    effects: raw.effects,
                })
            }
            EntryKind::Task => {
                let task = raw
                    .task
                    .ok_or_else(|| "task entry without a task name".to_string())?;
                Ok(LogEntry::Task {
                    task,
                    time: raw.time,
                })
            }
        }
    }
}

impl From<LogEntry> for RawEntry {
    fn from(entry: LogEntry) -> Self {
        match entry {
            LogEntry::Action {
                action,
                time,
                effects,
            } => RawEntry {
                kind: Some(EntryKind::Action),
                time,
                action: Some(action),
                task: None,
                effects,
            },
            LogEntry::Task { task, time } => RawEntry {
                kind: Some(EntryKind::Task),
                time,
                action: None,
                task: Some(task),
                effects: Effect::default(),
            },
        }
    }
}

// Reads a journal, dropping entries that can't be understood instead of
// rejecting the whole record.
pub(crate) fn skip_unreadable<'de, D>(deserializer: D) -> Result<Vec<LogEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable log entry: {}", e);
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;

    #[test]
    fn task_entry_wire_format() {
        let entry = LogEntry::Task {
            task: "Make the bed".to_string(),
            time: "08:00:00".to_string(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "task",
                "time": "08:00:00",
                "task": "Make the bed",
                "effects": {}
            })
        );
    }

    #[test]
    fn untyped_entries_are_actions() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"action": "Meditate", "time": "9:15:02 PM", "effects": {"intelligence": 1, "hp": 5}}"#,
        )
        .unwrap();
        assert_eq!(
            entry,
            LogEntry::Action {
                action: "Meditate".to_string(),
                time: "9:15:02 PM".to_string(),
                effects: Effect::new()
                    .with(Attribute::Intelligence, 1)
                    .with(Attribute::Health, 5),
            }
        );
    }

    #[test]
    fn entry_without_name_is_rejected() {
        let result = serde_json::from_str::<LogEntry>(r#"{"type": "task", "time": "now"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn matching_helpers() {
        let entry = LogEntry::Action {
            action: "Read a page".to_string(),
            time: String::new(),
            effects: Effect::default(),
        };
        assert!(entry.is_action("Read a page"));
        assert!(!entry.is_task("Read a page"));
        assert_eq!(entry.label(), "Read a page");
    }
}
