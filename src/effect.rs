use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::attribute::Attribute;

/// Signed per-attribute deltas. Attributes without an entry are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Effect(BTreeMap<Attribute, i32>);

impl Effect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attribute: Attribute, delta: i32) -> Self {
        self.0.insert(attribute, delta);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        self.0.iter().map(|(attribute, delta)| (*attribute, *delta))
    }

    // Attributes this effect lowers.
    pub fn decreased(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.iter()
            .filter(|(_, delta)| *delta < 0)
            .map(|(attribute, _)| attribute)
    }

    // One tooltip line per attribute, e.g. "hp: +5".
    pub fn tooltip_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(attribute, delta)| format!("{}: {:+}", attribute.key(), delta))
            .collect()
    }
}

impl FromIterator<(Attribute, i32)> for Effect {
    fn from_iter<T: IntoIterator<Item = (Attribute, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tooltip_lines().join(", "))
    }
}
