//! Schema-driven record generation.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::{Map, Value as Json};

use fabrica_core::{Describe, FieldPath, FieldType, Record, RecordSchema, Result, Value};

use crate::invoke;
use crate::options::{GenerateOptions, Overrides};
use crate::resolve::{Resolved, Resolver};
use crate::rules::RuleTable;

/// Generation engine; cheap to construct and reusable across calls.
///
/// Every call draws from a fresh random stream (seeded when
/// [`GenerateOptions::seed`] is set), so independent callers may share an
/// engine behind a reference.
pub struct Engine {
    resolver: Resolver,
    options: GenerateOptions,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(GenerateOptions::default())
    }
}

impl Engine {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            resolver: Resolver::new(),
            options,
        }
    }

    /// Generate one record for a schema-describing type.
    pub fn generate_for<T: Describe>(
        &self,
        rules: &RuleTable,
        overrides: &Overrides,
    ) -> Result<Record> {
        self.generate_for_schema(&T::schema(), rules, overrides)
    }

    /// Generate one record for an explicit schema.
    pub fn generate_for_schema(
        &self,
        schema: &RecordSchema,
        rules: &RuleTable,
        overrides: &Overrides,
    ) -> Result<Record> {
        self.options.validate()?;
        rules.validate()?;
        overrides.validate()?;
        let mut rng = self.rng();
        Ok(self.record(schema, &FieldPath::root(), rules, overrides, &mut rng))
    }

    pub(crate) fn rng(&self) -> ChaCha8Rng {
        match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }

    pub(crate) fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub(crate) fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    fn record(
        &self,
        schema: &RecordSchema,
        path: &FieldPath,
        rules: &RuleTable,
        overrides: &Overrides,
        rng: &mut ChaCha8Rng,
    ) -> Record {
        let mut entries = Vec::new();
        for field in schema.fields() {
            let value = self.field(field.name, &field.ty, path, rules, overrides, None, rng);
            entries.push((field.name.to_string(), value));
        }
        Record::new(entries)
    }

    /// Generate one field value. `inherited` carries a parent collection's
    /// options down to its synthetic element fields.
    fn field(
        &self,
        name: &str,
        ty: &FieldType,
        path: &FieldPath,
        rules: &RuleTable,
        overrides: &Overrides,
        inherited: Option<&Map<String, Json>>,
        rng: &mut ChaCha8Rng,
    ) -> Value {
        let field_options = inherited.or_else(|| overrides.options_for(name));

        // Caller-supplied choices beat every other resolution source.
        if let Some(candidates) = field_options
            .and_then(|map| map.get("choices"))
            .and_then(Json::as_array)
        {
            return sample_choice(candidates, rng);
        }

        match self.resolver.resolve(name, ty, path, rules) {
            Resolved::RuleChoices(candidates) => sample_choice(candidates, rng),
            Resolved::RuleProvider { kind, kwargs } => {
                invoke::provider(kind, Some(kwargs), name, rng)
            }
            Resolved::RuleCustom { generator, kwargs } => {
                invoke::custom(generator, Some(kwargs), name, rng)
            }
            Resolved::Provider(kind) => invoke::provider(kind, field_options, name, rng),
            Resolved::List(elem) => {
                let child = path.child(name);
                let count = rng.random_range(self.options.list_items.clone());
                let mut items = Vec::with_capacity(count);
                for index in 0..count {
                    let item_name = format!("{name}_item_{index}");
                    items.push(self.field(
                        &item_name,
                        elem,
                        &child,
                        rules,
                        overrides,
                        field_options,
                        rng,
                    ));
                }
                Value::List(items)
            }
            Resolved::MapOf(key_ty, value_ty) => {
                let child = path.child(name);
                let count = rng.random_range(self.options.map_entries.clone());
                let mut entries = Vec::with_capacity(count);
                for index in 0..count {
                    let key_name = format!("{name}_key_{index}");
                    let value_name = format!("{name}_value_{index}");
                    let key = self.field(
                        &key_name,
                        key_ty,
                        &child,
                        rules,
                        overrides,
                        field_options,
                        rng,
                    );
                    let value = self.field(
                        &value_name,
                        value_ty,
                        &child,
                        rules,
                        overrides,
                        field_options,
                        rng,
                    );
                    entries.push((key.to_key(), value));
                }
                Value::Record(entries)
            }
            Resolved::Nested(schema) => {
                let child = path.child(name);
                let nested = self.record(schema, &child, rules, overrides, rng);
                Value::Record(nested.into_entries())
            }
        }
    }
}

/// Sample one candidate uniformly; candidate sets are non-empty by the time
/// generation starts.
pub(crate) fn sample_choice(candidates: &[Json], rng: &mut dyn RngCore) -> Value {
    let index = rng.random_range(0..candidates.len());
    Value::from_json(&candidates[index])
}

/// One-shot convenience over a default engine.
pub fn generate_for<T: Describe>(rules: &RuleTable, overrides: &Overrides) -> Result<Record> {
    Engine::default().generate_for::<T>(rules, overrides)
}
