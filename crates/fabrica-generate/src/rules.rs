//! Path-scoped generation rules.
//!
//! A [`RuleTable`] maps dotted field paths (`"customer.email"`) to either a
//! fixed candidate set or a generator with fixed keyword options. Rules take
//! priority over field-name heuristics and type defaults during resolution.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rand::RngCore;
use serde_json::{Map, Value as Json};

use fabrica_core::{Error, Result, Value};
use fabrica_provider::ProviderKind;

/// The option keys a custom generator is willing to receive.
///
/// Generators declaring [`OptionKeys::Only`] have unknown keys filtered out
/// (with a warning) before the call; [`OptionKeys::Any`] passes caller
/// options through untouched.
#[derive(Clone, Copy, Debug)]
pub enum OptionKeys {
    Any,
    Only(&'static [&'static str]),
}

/// A user-supplied value generator, pluggable alongside the built-in
/// providers.
pub trait Generator: Send + Sync {
    /// Name used in diagnostics.
    fn name(&self) -> &str {
        "custom"
    }

    /// Which option keys this generator accepts.
    fn accepted_options(&self) -> OptionKeys {
        OptionKeys::Any
    }

    fn generate(&self, options: Option<&Map<String, Json>>, rng: &mut dyn RngCore) -> Result<Value>;
}

/// Either a built-in provider or a custom [`Generator`].
#[derive(Clone)]
pub enum GeneratorRef {
    Provider(ProviderKind),
    Custom(Arc<dyn Generator>),
}

impl GeneratorRef {
    pub fn name(&self) -> &str {
        match self {
            GeneratorRef::Provider(kind) => kind.id(),
            GeneratorRef::Custom(generator) => generator.name(),
        }
    }
}

impl fmt::Debug for GeneratorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorRef::Provider(kind) => f.debug_tuple("Provider").field(kind).finish(),
            GeneratorRef::Custom(generator) => {
                f.debug_tuple("Custom").field(&generator.name()).finish()
            }
        }
    }
}

/// A single rule attached to a field path.
#[derive(Clone, Debug)]
pub enum Rule {
    /// Sample uniformly from a fixed candidate set.
    Choices(Vec<Json>),
    /// Call a generator with fixed options.
    Generator {
        generator: GeneratorRef,
        kwargs: Map<String, Json>,
    },
}

/// Dotted-path keyed rules, shared by every record an engine produces.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: HashMap<String, Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a fixed candidate set to `path`.
    pub fn choices(mut self, path: &str, candidates: Vec<Json>) -> Self {
        self.rules.insert(path.to_string(), Rule::Choices(candidates));
        self
    }

    /// Attach a built-in provider (with fixed options) to `path`.
    pub fn provider(mut self, path: &str, kind: ProviderKind, kwargs: Map<String, Json>) -> Self {
        self.rules.insert(
            path.to_string(),
            Rule::Generator {
                generator: GeneratorRef::Provider(kind),
                kwargs,
            },
        );
        self
    }

    /// Attach a custom generator (with fixed options) to `path`.
    pub fn custom(
        mut self,
        path: &str,
        generator: Arc<dyn Generator>,
        kwargs: Map<String, Json>,
    ) -> Self {
        self.rules.insert(
            path.to_string(),
            Rule::Generator {
                generator: GeneratorRef::Custom(generator),
                kwargs,
            },
        );
        self
    }

    pub fn insert(&mut self, path: &str, rule: Rule) {
        self.rules.insert(path.to_string(), rule);
    }

    pub fn get(&self, path: &str) -> Option<&Rule> {
        self.rules.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Build a table from a JSON document of the shape
    /// `{"path": {"choices": [...]}}` or
    /// `{"path": {"generator": "email", "kwargs": {...}}}`.
    pub fn from_json(doc: &Json) -> Result<Self> {
        let Some(entries) = doc.as_object() else {
            return Err(Error::InvalidArgument(
                "rule document must be a JSON object keyed by field path".into(),
            ));
        };
        let mut table = Self::new();
        for (path, body) in entries {
            let Some(body) = body.as_object() else {
                return Err(Error::InvalidArgument(format!(
                    "rule for '{path}' must be an object"
                )));
            };
            if let Some(choices) = body.get("choices") {
                let Some(candidates) = choices.as_array() else {
                    return Err(Error::InvalidArgument(format!(
                        "choices for '{path}' must be an array"
                    )));
                };
                table
                    .rules
                    .insert(path.clone(), Rule::Choices(candidates.clone()));
            } else if let Some(generator) = body.get("generator") {
                let Some(id) = generator.as_str() else {
                    return Err(Error::InvalidArgument(format!(
                        "generator for '{path}' must be a provider name"
                    )));
                };
                let Some(kind) = ProviderKind::parse(id) else {
                    return Err(Error::InvalidArgument(format!(
                        "unknown provider '{id}' for '{path}'"
                    )));
                };
                let kwargs = match body.get("kwargs") {
                    Some(Json::Object(map)) => map.clone(),
                    Some(_) => {
                        return Err(Error::InvalidArgument(format!(
                            "kwargs for '{path}' must be an object"
                        )));
                    }
                    None => Map::new(),
                };
                table.rules.insert(
                    path.clone(),
                    Rule::Generator {
                        generator: GeneratorRef::Provider(kind),
                        kwargs,
                    },
                );
            } else {
                return Err(Error::InvalidArgument(format!(
                    "rule for '{path}' needs either 'choices' or 'generator'"
                )));
            }
        }
        Ok(table)
    }

    /// Reject malformed rules before any record is produced.
    pub(crate) fn validate(&self) -> Result<()> {
        for (path, rule) in &self.rules {
            if let Rule::Choices(candidates) = rule {
                if candidates.is_empty() {
                    return Err(Error::InvalidArgument(format!(
                        "choices for '{path}' must not be empty"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_accepts_choices_and_generator() {
        let table = RuleTable::from_json(&json!({
            "status": { "choices": ["open", "closed"] },
            "customer.email": { "generator": "email" },
            "total": { "generator": "float", "kwargs": { "min_value": 1.0 } },
        }))
        .unwrap();
        assert_eq!(table.len(), 3);
        assert!(matches!(table.get("status"), Some(Rule::Choices(c)) if c.len() == 2));
        assert!(matches!(
            table.get("customer.email"),
            Some(Rule::Generator { generator: GeneratorRef::Provider(ProviderKind::Email), .. })
        ));
    }

    #[test]
    fn from_json_rejects_unknown_provider() {
        let err = RuleTable::from_json(&json!({ "x": { "generator": "warp_drive" } }));
        assert!(err.is_err());
    }

    #[test]
    fn empty_choices_fail_validation() {
        let table = RuleTable::new().choices("status", vec![]);
        assert!(table.validate().is_err());
    }
}
