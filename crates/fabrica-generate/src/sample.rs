//! Sample-driven generation.
//!
//! A JSON document acts as a shape template: each literal value only tells
//! the engine what kind of data to synthesize, never gets reused verbatim.
//! Arrays regenerate with the configured fan-out regardless of their sampled
//! length, and nulls stay null with a configurable probability.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Map, Value as Json};
use uuid::Uuid;

use fabrica_core::{Error, FieldPath, Record, Result, Value};
use fabrica_provider::ProviderKind;

use crate::engine::{sample_choice, Engine};
use crate::invoke;
use crate::options::Overrides;
use crate::rules::{Rule, RuleTable};

impl Engine {
    /// Generate `count` independent records shaped like `sample`.
    pub fn generate_from_sample(
        &self,
        sample: &Json,
        count: usize,
        rules: &RuleTable,
        overrides: &Overrides,
    ) -> Result<Vec<Record>> {
        let Some(template) = sample.as_object() else {
            return Err(Error::InvalidArgument(
                "sample document must be a JSON object".into(),
            ));
        };
        if count < 1 {
            return Err(Error::InvalidArgument("count must be at least 1".into()));
        }
        self.options().validate()?;
        rules.validate()?;
        overrides.validate()?;

        let mut rng = self.rng();
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            records.push(self.sample_record(template, &FieldPath::root(), rules, overrides, &mut rng));
        }
        Ok(records)
    }

    fn sample_record(
        &self,
        template: &Map<String, Json>,
        path: &FieldPath,
        rules: &RuleTable,
        overrides: &Overrides,
        rng: &mut ChaCha8Rng,
    ) -> Record {
        let mut entries = Vec::new();
        for (name, value) in template {
            let generated = self.sample_field(name, value, path, rules, overrides, None, rng);
            entries.push((name.clone(), generated));
        }
        Record::new(entries)
    }

    fn sample_field(
        &self,
        name: &str,
        template: &Json,
        path: &FieldPath,
        rules: &RuleTable,
        overrides: &Overrides,
        inherited: Option<&Map<String, Json>>,
        rng: &mut ChaCha8Rng,
    ) -> Value {
        let field_options = inherited.or_else(|| overrides.options_for(name));

        if let Some(candidates) = field_options
            .and_then(|map| map.get("choices"))
            .and_then(Json::as_array)
        {
            return sample_choice(candidates, rng);
        }

        if let Some(rule) = rules.get(&path.key_for(name)) {
            return match rule {
                Rule::Choices(candidates) => sample_choice(candidates, rng),
                Rule::Generator { generator, kwargs } => match generator {
                    crate::rules::GeneratorRef::Provider(kind) => {
                        invoke::provider(*kind, Some(kwargs), name, rng)
                    }
                    crate::rules::GeneratorRef::Custom(custom) => {
                        invoke::custom(custom.as_ref(), Some(kwargs), name, rng)
                    }
                },
            };
        }

        if let Some(kind) = self.resolver().heuristic(name) {
            return invoke::provider(kind, field_options, name, rng);
        }

        match template {
            Json::Null => {
                if rng.random_bool(self.options().null_sample_probability) {
                    Value::Null
                } else {
                    invoke::provider(ProviderKind::Text, field_options, name, rng)
                }
            }
            Json::Object(nested) => {
                let child = path.child(name);
                let record = self.sample_record(nested, &child, rules, overrides, rng);
                Value::Record(record.into_entries())
            }
            Json::Array(elements) => {
                let child = path.child(name);
                let count = rng.random_range(self.options().list_items.clone());
                let mut items = Vec::with_capacity(count);
                match elements.first() {
                    Some(element) => {
                        for index in 0..count {
                            let item_name = format!("{name}_item_{index}");
                            items.push(self.sample_field(
                                &item_name,
                                element,
                                &child,
                                rules,
                                overrides,
                                field_options,
                                rng,
                            ));
                        }
                    }
                    None => {
                        // Nothing to infer from, fall back to short strings.
                        let short = json!({ "min_length": 3, "max_length": 10 });
                        for index in 0..count {
                            let item_name = format!("{name}_item_{index}");
                            items.push(invoke::provider(
                                ProviderKind::Text,
                                short.as_object(),
                                &item_name,
                                rng,
                            ));
                        }
                    }
                }
                Value::List(items)
            }
            scalar => invoke::provider(infer_kind(scalar), field_options, name, rng),
        }
    }
}

/// Map a scalar sample literal to the provider that produces its kind.
fn infer_kind(value: &Json) -> ProviderKind {
    match value {
        Json::Bool(_) => ProviderKind::Bool,
        Json::Number(number) if number.is_i64() || number.is_u64() => ProviderKind::Int,
        Json::Number(_) => ProviderKind::Float,
        Json::String(text) if is_uuid_shaped(text) => ProviderKind::Uuid,
        _ => ProviderKind::Text,
    }
}

/// Canonical hyphenated UUID shape: 36 characters, 4 hyphens, parseable.
fn is_uuid_shaped(text: &str) -> bool {
    text.len() == 36
        && text.bytes().filter(|b| *b == b'-').count() == 4
        && Uuid::parse_str(text).is_ok()
}

/// One-shot convenience over a default engine.
pub fn generate_from_sample(
    sample: &Json,
    count: usize,
    rules: &RuleTable,
    overrides: &Overrides,
) -> Result<Vec<Record>> {
    Engine::default().generate_from_sample(sample, count, rules, overrides)
}
