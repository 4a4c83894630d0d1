// catalog.rs

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::attribute::Attribute;
use crate::effect::Effect;
use crate::error::{Result, TrackerError};

/// A named action the user can perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDef {
    pub name: String,
    #[serde(rename = "effects")]
    pub effect: Effect,
    // Only changes how the action is drawn.
    #[serde(default)]
    pub negative: bool,
    // How many times the action may appear in the log before it is refused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_applications: Option<u32>,
}

impl ActionDef {
    pub fn new(name: impl Into<String>, effect: Effect) -> Self {
        Self {
            name: name.into(),
            effect,
            negative: false,
            max_applications: None,
        }
    }

    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    pub fn once(self) -> Self {
        self.max_applications(1)
    }

    pub fn max_applications(mut self, limit: u32) -> Self {
        self.max_applications = Some(limit);
        self
    }
}

/// The ordered action list and the fixed daily checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    actions: Vec<ActionDef>,
    #[serde(default)]
    daily_tasks: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        use Attribute::*;

        let actions = vec![
            ActionDef::new(
                "Stay up late",
                Effect::new().with(Health, -50).with(Stamina, -50),
            )
            .negative()
            .once(),
            ActionDef::new("Wake up on time", Effect::new().with(Strength, 1)),
            ActionDef::new(
                "Scroll the phone",
                Effect::new().with(Health, -5).with(Stamina, -5),
            )
            .negative(),
            ActionDef::new(
                "Meditate",
                Effect::new()
                    .with(Intelligence, 1)
                    .with(Health, 5)
                    .with(Stamina, 5),
            ),
            ActionDef::new("Exercise", Effect::new().with(Strength, 1).with(Stamina, -1)),
            ActionDef::new("Daily training", Effect::new().with(Strength, 5)),
            ActionDef::new(
                "Practice calligraphy",
                Effect::new()
                    .with(Intelligence, 1)
                    .with(Health, 2)
                    .with(Stamina, 2),
            ),
            ActionDef::new("Clean up", Effect::new().with(Health, 2).with(Stamina, 2)),
            ActionDef::new("Review notes", Effect::new().with(Intelligence, 1)),
            ActionDef::new("Read a page", Effect::new().with(Intelligence, 1)),
            ActionDef::new("Practice qigong", Effect::new().with(Strength, 3)),
            ActionDef::new("Recite a passage", Effect::new().with(Intelligence, 1)),
            ActionDef::new("Recite a full text", Effect::new().with(Intelligence, 5)),
            ActionDef::new("Retell a passage", Effect::new().with(Intelligence, 1)),
            ActionDef::new("Listening practice", Effect::new().with(Intelligence, 1)),
        ];

        let daily_tasks = [
            "Drink eight glasses of water",
            "Make the bed",
            "Stretch for ten minutes",
            "Write a journal entry",
            "Lights out before midnight",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            actions,
            daily_tasks,
        }
    }
}

impl Catalog {
    pub fn new(actions: Vec<ActionDef>, daily_tasks: Vec<String>) -> Result<Self> {
        let catalog = Self {
            actions,
            daily_tasks,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    // Load a catalog from a JSON file of the form {"actions": [...], "daily_tasks": [...]}.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let Catalog {
            actions,
            daily_tasks,
        } = serde_json::from_str(&data)?;
        Self::new(actions, daily_tasks)
    }

    fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for action in &self.actions {
            if action.name.trim().is_empty() {
                return Err(TrackerError::InvalidCatalog(
                    "action names must not be empty".to_string(),
                ));
            }
            if !names.insert(action.name.as_str()) {
                return Err(TrackerError::InvalidCatalog(format!(
                    "duplicate action '{}'",
                    action.name
                )));
            }
            if action.max_applications == Some(0) {
                return Err(TrackerError::InvalidCatalog(format!(
                    "action '{}' can never be applied",
                    action.name
                )));
            }
        }

        let mut tasks = HashSet::new();
        for task in &self.daily_tasks {
            if task.trim().is_empty() {
                return Err(TrackerError::InvalidCatalog(
                    "task names must not be empty".to_string(),
                ));
            }
            if !tasks.insert(task.as_str()) {
                return Err(TrackerError::InvalidCatalog(format!(
                    "duplicate task '{}'",
                    task
                )));
            }
        }
        Ok(())
    }

    pub fn actions(&self) -> &[ActionDef] {
        &self.actions
    }

    pub fn daily_tasks(&self) -> &[String] {
        &self.daily_tasks
    }

    pub fn action(&self, name: &str) -> Option<&ActionDef> {
        self.actions.iter().find(|action| action.name == name)
    }

    pub fn has_task(&self, name: &str) -> bool {
        self.daily_tasks.iter().any(|task| task == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.actions().len(), 15);
    }

    #[test]
    fn stay_up_late_is_the_only_limited_action() {
        let catalog = Catalog::default();
        let limited: Vec<_> = catalog
            .actions()
            .iter()
            .filter(|action| action.max_applications.is_some())
            .map(|action| action.name.as_str())
            .collect();
        assert_eq!(limited, vec!["Stay up late"]);
    }

    #[test]
    fn duplicate_actions_are_rejected() {
        let result = Catalog::new(
            vec![
                ActionDef::new("Read", Effect::new().with(Attribute::Intelligence, 1)),
                ActionDef::new("Read", Effect::new().with(Attribute::Intelligence, 2)),
            ],
            Vec::new(),
        );
        assert!(matches!(result, Err(TrackerError::InvalidCatalog(_))));
    }

    #[test]
    fn duplicate_tasks_are_rejected() {
        let result = Catalog::new(Vec::new(), vec!["Walk".into(), "Walk".into()]);
        assert!(matches!(result, Err(TrackerError::InvalidCatalog(_))));
    }

    #[test]
    fn parses_catalog_json_with_optional_flags() {
        let json = r#"{
            "actions": [
                {"name": "Nap", "effects": {"stamina": 10}},
                {"name": "Skip lunch", "effects": {"hp": -10}, "negative": true, "max_applications": 2}
            ]
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(catalog.validate().is_ok());
        assert!(catalog.daily_tasks().is_empty());
        let skip = catalog.action("Skip lunch").unwrap();
        assert!(skip.negative);
        assert_eq!(skip.max_applications, Some(2));
        assert!(!catalog.action("Nap").unwrap().negative);
    }

    #[test]
    fn catalog_file_goes_through_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"actions": [{"name": "Nap", "effects": {"stamina": 10}, "max_applications": 0}]}"#,
        )
        .unwrap();
        assert!(matches!(
            Catalog::load_from_file(&path),
            Err(TrackerError::InvalidCatalog(_))
        ));

        fs::write(&path, r#"{"actions": [{"name": "Nap", "effects": {"stamina": 10}}]}"#).unwrap();
        let catalog = Catalog::load_from_file(&path).unwrap();
        assert_eq!(catalog.actions().len(), 1);
    }
}
