use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

use crate::config::ValidatorConfig;
use crate::enums::TypeTag;

/// Raw action inputs: input name → textual value.
///
/// A missing key and a key mapped to `""` are different states.
pub type Inputs = HashMap<String, String>;

// ─── Rule ───────────────────────────────────────────────────────────────────

/// Declared shape of one action input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    #[serde(rename = "type", default)]
    pub type_tag: TypeTag,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
    /// Closed set of accepted values for a `string` input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

impl Rule {
    pub fn new(type_tag: TypeTag) -> Self {
        Rule {
            type_tag,
            ..Rule::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn allow<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

// ─── RuleTable ──────────────────────────────────────────────────────────────

/// The rules of one action, keyed by input name in declaration order.
///
/// A table is built once, from a schema document or from an iterator, and is
/// not mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<(String, Rule)>,
}

impl RuleTable {
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of the inputs whose rule is marked required, in declaration order.
    pub fn required_inputs(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|(_, r)| r.required)
            .map(|(n, _)| n.as_str())
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, Rule)> for RuleTable {
    /// Later duplicates of a name replace the earlier rule in place.
    fn from_iter<I: IntoIterator<Item = (S, Rule)>>(iter: I) -> Self {
        let mut rules: Vec<(String, Rule)> = Vec::new();
        for (name, rule) in iter {
            let name = name.into();
            match rules.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = rule,
                None => rules.push((name, rule)),
            }
        }
        RuleTable { rules }
    }
}

impl Serialize for RuleTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for (name, rule) in &self.rules {
            map.serialize_entry(name, rule)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RuleTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // serde_json's `preserve_order` keeps the declaration order.
        let map = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        let mut rules = Vec::with_capacity(map.len());
        for (name, value) in map {
            let rule: Rule = if value.is_null() {
                Rule::default()
            } else {
                serde_json::from_value(value)
                    .map_err(|e| serde::de::Error::custom(format!("input '{}': {}", name, e)))?
            };
            rules.push((name, rule));
        }
        Ok(RuleTable { rules })
    }
}

// ─── ActionSchema ───────────────────────────────────────────────────────────

/// A parsed rule-schema document for one action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionSchema {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub config: ValidatorConfig,
    pub inputs: RuleTable,
}
