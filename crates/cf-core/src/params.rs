//! Project parameter sets.
//!
//! Parameters are the named scalar inputs a recompute evaluates formulas
//! against (e.g. `san_nha` = floor area, `so_tang` = storey count). They
//! are stored per project and replaced wholesale on every recompute so an
//! estimate is always reproducible from the set it was computed with.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Group label for plain user-entered inputs.
pub const INPUT_GROUP: &str = "input";

/// One named parameter with its grouping label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name as referenced from formulas
    pub name: String,

    /// Scalar value
    pub value: f64,

    /// Grouping label, e.g. "input" or "derived"
    #[serde(default = "default_group")]
    pub group: String,
}

fn default_group() -> String {
    INPUT_GROUP.to_string()
}

/// A project's full parameter set.
///
/// Backed by a `BTreeMap` keyed on parameter name so iteration order is
/// deterministic, which keeps recomputes reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    params: BTreeMap<String, Parameter>,
}

impl ParameterSet {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set of plain "input" parameters from name/value pairs.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (name, value) in values {
            set.insert(name.into(), value, INPUT_GROUP);
        }
        set
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, name: String, value: f64, group: &str) {
        self.params.insert(
            name.clone(),
            Parameter {
                name,
                value,
                group: group.to_string(),
            },
        );
    }

    /// Look up a parameter's value by name.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.params.get(name).map(|p| p.value)
    }

    /// True if a parameter with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of parameters in the set.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// True if the set has no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate parameters in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.values()
    }

    /// Name → value view for the expression evaluator.
    pub fn values(&self) -> BTreeMap<String, f64> {
        self.params
            .iter()
            .map(|(name, p)| (name.clone(), p.value))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

#[cfg(test)]
#[path = "params_test.rs"]
mod tests;
