//! Engine tuning knobs and caller-supplied per-field overrides.

use std::ops::RangeInclusive;

use serde_json::{Map, Value as Json};

use fabrica_core::{Error, Result};

/// Key prefix under which per-field option objects are stored.
const FIELD_PREFIX: &str = "field_name_";

/// Tuning knobs for an [`Engine`](crate::Engine).
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// How many elements a list field fans out to.
    pub list_items: RangeInclusive<usize>,
    /// How many entries a map field fans out to.
    pub map_entries: RangeInclusive<usize>,
    /// Chance that a null in a sample document stays null.
    pub null_sample_probability: f64,
    /// Fixed seed for reproducible output; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            list_items: 1..=3,
            map_entries: 1..=2,
            null_sample_probability: 0.2,
            seed: None,
        }
    }
}

impl GenerateOptions {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.list_items.is_empty() {
            return Err(Error::InvalidArgument("list_items range is empty".into()));
        }
        if self.map_entries.is_empty() {
            return Err(Error::InvalidArgument("map_entries range is empty".into()));
        }
        if !(0.0..=1.0).contains(&self.null_sample_probability) {
            return Err(Error::InvalidArgument(format!(
                "null_sample_probability must be within [0, 1], got {}",
                self.null_sample_probability
            )));
        }
        Ok(())
    }
}

/// Per-call field overrides, keyed by field name regardless of nesting.
///
/// Each field carries an option object forwarded to whichever generator the
/// field resolves to. A `choices` array inside the object short-circuits
/// resolution entirely and samples from the supplied candidates.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    fields: Map<String, Json>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an option object to `name`; `options` must be a JSON object.
    pub fn field(mut self, name: &str, options: Json) -> Self {
        self.fields
            .insert(format!("{FIELD_PREFIX}{name}"), options);
        self
    }

    /// Shorthand for a `choices` override on `name`.
    pub fn choices(self, name: &str, candidates: Vec<Json>) -> Self {
        let mut body = Map::new();
        body.insert("choices".into(), Json::Array(candidates));
        self.field(name, Json::Object(body))
    }

    /// Build from a flat JSON object of `field_name_<name>` keys.
    pub fn from_json(doc: &Json) -> Result<Self> {
        let Some(entries) = doc.as_object() else {
            return Err(Error::InvalidArgument(
                "overrides document must be a JSON object".into(),
            ));
        };
        let mut fields = Map::new();
        for (key, body) in entries {
            if !key.starts_with(FIELD_PREFIX) {
                return Err(Error::InvalidArgument(format!(
                    "override key '{key}' must start with '{FIELD_PREFIX}'"
                )));
            }
            fields.insert(key.clone(), body.clone());
        }
        Ok(Self { fields })
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn options_for(&self, name: &str) -> Option<&Map<String, Json>> {
        self.fields
            .get(&format!("{FIELD_PREFIX}{name}"))
            .and_then(Json::as_object)
    }

    /// Reject malformed overrides before any field is processed.
    pub(crate) fn validate(&self) -> Result<()> {
        for (key, body) in &self.fields {
            let Some(body) = body.as_object() else {
                return Err(Error::InvalidArgument(format!(
                    "override '{key}' must be an object"
                )));
            };
            if let Some(choices) = body.get("choices") {
                let Some(candidates) = choices.as_array() else {
                    return Err(Error::InvalidArgument(format!(
                        "choices in '{key}' must be an array"
                    )));
                };
                if candidates.is_empty() {
                    return Err(Error::InvalidArgument(format!(
                        "choices in '{key}' must not be empty"
                    )));
                }
            }
        }
        Ok(())
    }
}
