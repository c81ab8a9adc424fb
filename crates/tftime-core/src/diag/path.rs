//! Attribute paths locating a value inside a resource's configuration.

use std::fmt;

use serde::Serialize;

/// One step of an attribute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStep {
    AttributeName(String),
    ElementKeyString(String),
    ElementKeyInt(i64),
}

/// ## Summary
/// A structural path to an attribute, e.g. `timeouts.create` or `rules[0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    /// Creates an empty path.
    #[must_use]
    pub const fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    /// Creates a path rooted at a top-level attribute.
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            steps: vec![PathStep::AttributeName(name.into())],
        }
    }

    /// Returns a copy of this path extended with a nested attribute name.
    #[must_use]
    pub fn at_name(&self, name: impl Into<String>) -> Self {
        self.with_step(PathStep::AttributeName(name.into()))
    }

    /// Returns a copy of this path extended with a list index.
    #[must_use]
    pub fn at_list_index(&self, index: i64) -> Self {
        self.with_step(PathStep::ElementKeyInt(index))
    }

    /// Returns a copy of this path extended with a map key.
    #[must_use]
    pub fn at_map_key(&self, key: impl Into<String>) -> Self {
        self.with_step(PathStep::ElementKeyString(key.into()))
    }

    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn with_step(&self, step: PathStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::AttributeName(name) if i == 0 => f.write_str(name)?,
                PathStep::AttributeName(name) => write!(f, ".{name}")?,
                PathStep::ElementKeyString(key) => write!(f, "[{key:?}]")?,
                PathStep::ElementKeyInt(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_displays_bare_name() {
        assert_eq!(AttributePath::root("test").to_string(), "test");
    }

    #[test]
    fn nested_steps_display() {
        let path = AttributePath::root("rules")
            .at_list_index(0)
            .at_name("timeouts")
            .at_map_key("create");
        assert_eq!(path.to_string(), "rules[0].timeouts[\"create\"]");
        assert_eq!(path.steps().len(), 4);
    }

    #[test]
    fn empty_path_displays_nothing() {
        let path = AttributePath::empty();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }
}
