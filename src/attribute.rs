// Import necessary modules from external crates.
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::effect::Effect;

// The closed set of tracked attributes. Serialized under the short keys used by the save record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Attribute {
    #[serde(rename = "hp")]
    #[strum(to_string = "Health")]
    Health,
    #[serde(rename = "stamina")]
    #[strum(to_string = "Stamina")]
    Stamina,
    #[serde(rename = "strength")]
    #[strum(to_string = "Strength")]
    Strength,
    #[serde(rename = "intelligence")]
    #[strum(to_string = "Intelligence")]
    Intelligence,
}

impl Attribute {
    // The key used in the persisted record and in effect tooltips.
    pub fn key(&self) -> &'static str {
        match self {
            Attribute::Health => "hp",
            Attribute::Stamina => "stamina",
            Attribute::Strength => "strength",
            Attribute::Intelligence => "intelligence",
        }
    }
}

/// The four tracked values. Every field is non-negative by construction.
///
/// Fields missing from a deserialized record fall back to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSet {
    pub hp: u32,
    pub stamina: u32,
    pub strength: u32,
    pub intelligence: u32,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::baseline()
    }
}

impl AttributeSet {
    pub const fn baseline() -> Self {
        Self {
            hp: 100,
            stamina: 100,
            strength: 0,
            intelligence: 0,
        }
    }

    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Health => self.hp,
            Attribute::Stamina => self.stamina,
            Attribute::Strength => self.strength,
            Attribute::Intelligence => self.intelligence,
        }
    }

    fn get_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Health => &mut self.hp,
            Attribute::Stamina => &mut self.stamina,
            Attribute::Strength => &mut self.strength,
            Attribute::Intelligence => &mut self.intelligence,
        }
    }

    // Iterate over every attribute with its current value, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::iter().map(|attribute| (attribute, self.get(attribute)))
    }

    /// Adds `delta` to one attribute, clamping at zero, and returns the delta
    /// that was actually applied.
    pub fn adjust(&mut self, attribute: Attribute, delta: i32) -> i32 {
        let value = self.get_mut(attribute);
        let old = i64::from(*value);
        let new = (old + i64::from(delta)).clamp(0, i64::from(u32::MAX));
        *value = new as u32;
        (new - old) as i32
    }

    /// Applies every delta of `effect` with the clamp rule and returns the
    /// effect that actually took place.
    pub fn apply(&mut self, effect: &Effect) -> Effect {
        effect
            .iter()
            .map(|(attribute, delta)| (attribute, self.adjust(attribute, delta)))
            .collect()
    }

    // Subtract every delta of a recorded effect, clamping at zero.
    pub fn reverse(&mut self, effect: &Effect) {
        for (attribute, delta) in effect.iter() {
            self.adjust(attribute, delta.saturating_neg());
        }
    }

    // Fraction of the bar filled for an attribute, capped at one.
    pub fn ratio(&self, attribute: Attribute, max: u32) -> f64 {
        if max == 0 {
            return 1.0;
        }
        (f64::from(self.get(attribute)) / f64::from(max)).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_matches_fresh_tracker_values() {
        let set = AttributeSet::default();
        assert_eq!(set.hp, 100);
        assert_eq!(set.stamina, 100);
        assert_eq!(set.strength, 0);
        assert_eq!(set.intelligence, 0);
    }

    #[test]
    fn adjust_clamps_at_zero_and_reports_applied_delta() {
        let mut set = AttributeSet::default();
        set.hp = 3;
        let applied = set.adjust(Attribute::Health, -5);
        assert_eq!(set.hp, 0);
        assert_eq!(applied, -3);
    }

    #[test]
    fn apply_leaves_untouched_keys_alone() {
        let mut set = AttributeSet::default();
        let effect = Effect::from_iter([(Attribute::Intelligence, 1)]);
        set.apply(&effect);
        assert_eq!(set.intelligence, 1);
        assert_eq!(set.hp, 100);
        assert_eq!(set.stamina, 100);
        assert_eq!(set.strength, 0);
    }

    #[test]
    fn missing_fields_fall_back_to_baseline() {
        let set: AttributeSet = serde_json::from_str(r#"{"strength": 7}"#).unwrap();
        assert_eq!(set.strength, 7);
        assert_eq!(set.hp, 100);
        assert_eq!(set.stamina, 100);
    }

    #[test]
    fn ratio_is_capped() {
        let mut set = AttributeSet::default();
        set.strength = 250;
        assert_eq!(set.ratio(Attribute::Strength, 100), 1.0);
        assert_eq!(set.ratio(Attribute::Intelligence, 100), 0.0);
        assert_eq!(set.ratio(Attribute::Health, 200), 0.5);
    }

    #[test]
    fn display_uses_readable_labels() {
        assert_eq!(Attribute::Health.to_string(), "Health");
        assert_eq!(Attribute::Health.key(), "hp");
    }
}
