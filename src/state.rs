// state.rs

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeSet;
use crate::catalog::ActionDef;
use crate::journal::LogEntry;

/// Everything the tracker persists: attributes, the journal (newest first) and
/// the completed daily tasks. Missing fields load as their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerState {
    pub attributes: AttributeSet,
    #[serde(deserialize_with = "crate::journal::skip_unreadable")]
    pub logs: Vec<LogEntry>,
    #[serde(rename = "dailyTasksCompleted")]
    pub daily_tasks_completed: Vec<String>,
}

impl TrackerState {
    /// How many entries the journal holds for `action`.
    pub fn times_applied(&self, action: &str) -> usize {
        self.logs.iter().filter(|entry| entry.is_action(action)).count()
    }

    /// Whether `action` may be applied right now. Depends only on the current
    /// attributes and journal.
    pub fn can_apply(&self, action: &ActionDef) -> bool {
        let has_room = action
            .effect
            .decreased()
            .all(|attribute| self.attributes.get(attribute) > 0);
        let under_limit = action
            .max_applications
            .is_none_or(|limit| self.times_applied(&action.name) < limit as usize);
        has_room && under_limit
    }

    /// Apply `action` and record it at `time`. Returns the new entry, or `None`
    /// when the action is currently refused.
    pub fn apply_action(&mut self, action: &ActionDef, time: String) -> Option<&LogEntry> {
        if !self.can_apply(action) {
            return None;
        }
        let effects = self.attributes.apply(&action.effect);
        self.logs.insert(
            0,
            LogEntry::Action {
                action: action.name.clone(),
                time,
                effects,
            },
        );
        self.logs.first()
    }

    pub fn is_task_completed(&self, task: &str) -> bool {
        self.daily_tasks_completed.iter().any(|done| done == task)
    }

    /// Flip a task's completion. Returns whether the task is now completed.
    pub fn toggle_task(&mut self, task: &str, time: String) -> bool {
        if self.is_task_completed(task) {
            self.daily_tasks_completed.retain(|done| done != task);
            if let Some(position) = self.logs.iter().position(|entry| entry.is_task(task)) {
                self.logs.remove(position);
            }
            false
        } else {
            self.daily_tasks_completed.push(task.to_string());
            self.logs.insert(
                0,
                LogEntry::Task {
                    task: task.to_string(),
                    time,
                },
            );
            true
        }
    }

    /// Remove the entry at `index` (0 is the newest) and undo what it recorded.
    pub fn delete_log_entry(&mut self, index: usize) -> Option<LogEntry> {
        if index >= self.logs.len() {
            return None;
        }
        let entry = self.logs.remove(index);
        match &entry {
            LogEntry::Action { effects, .. } => self.attributes.reverse(effects),
            LogEntry::Task { task, .. } => self.daily_tasks_completed.retain(|done| done != task),
        }
        Some(entry)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
