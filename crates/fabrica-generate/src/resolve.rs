//! Field-to-generator resolution.
//!
//! Resolution walks a fixed precedence ladder: path-scoped rules, then
//! field-name heuristics, then the shape of the declared type, and finally a
//! plain-text fallback so that a field is never left without a generator.

use std::collections::HashMap;

use serde_json::{Map, Value as Json};
use tracing::warn;

use fabrica_core::{FieldPath, FieldType, RecordSchema};
use fabrica_provider::ProviderKind;

use crate::classify::{classify, PrimitiveKind, Shape};
use crate::rules::{Generator, GeneratorRef, Rule, RuleTable};

/// Outcome of resolving one field.
pub(crate) enum Resolved<'a> {
    /// A rule pinned a candidate set to this path.
    RuleChoices(&'a [Json]),
    /// A rule pinned a provider with fixed options to this path.
    RuleProvider {
        kind: ProviderKind,
        kwargs: &'a Map<String, Json>,
    },
    /// A rule pinned a custom generator with fixed options to this path.
    RuleCustom {
        generator: &'a dyn Generator,
        kwargs: &'a Map<String, Json>,
    },
    /// Heuristic or type-default provider; caller overrides still apply.
    Provider(ProviderKind),
    /// Fan out into a list of the inner type.
    List(&'a FieldType),
    /// Fan out into key/value pairs of the inner types.
    MapOf(&'a FieldType, &'a FieldType),
    /// Recurse into a nested record.
    Nested(&'a RecordSchema),
}

/// Owns the immutable heuristic and type-default tables.
pub(crate) struct Resolver {
    heuristics: HashMap<&'static str, ProviderKind>,
}

impl Resolver {
    pub(crate) fn new() -> Self {
        let mut heuristics = HashMap::new();
        for (name, kind) in [
            ("email", ProviderKind::Email),
            ("phone", ProviderKind::Phone),
            ("phone_number", ProviderKind::Phone),
            ("name", ProviderKind::FullName),
            ("first_name", ProviderKind::FirstName),
            ("last_name", ProviderKind::LastName),
            ("username", ProviderKind::Username),
            ("address", ProviderKind::Address),
            ("street", ProviderKind::StreetAddress),
            ("city", ProviderKind::City),
            ("postal_code", ProviderKind::PostalCode),
            ("country", ProviderKind::Country),
            ("currency", ProviderKind::CurrencyCode),
            ("job_title", ProviderKind::JobTitle),
            ("description", ProviderKind::Sentence),
            ("comment", ProviderKind::Sentence),
            ("title", ProviderKind::Sentence),
            ("id", ProviderKind::Uuid),
            ("uuid", ProviderKind::Uuid),
            ("ip_address", ProviderKind::Ipv4),
            ("credit_card_number", ProviderKind::CreditCardNumber),
            ("card_number", ProviderKind::CreditCardNumber),
            ("iban", ProviderKind::Iban),
            ("ssn", ProviderKind::Ssn),
            ("is_active", ProviderKind::Bool),
            ("is_published", ProviderKind::Bool),
            ("is_resolved", ProviderKind::Bool),
            ("is_paid", ProviderKind::Bool),
        ] {
            heuristics.insert(name, kind);
        }
        Self { heuristics }
    }

    /// Heuristic lookup by lowercased field name.
    pub(crate) fn heuristic(&self, field_name: &str) -> Option<ProviderKind> {
        self.heuristics
            .get(field_name.to_lowercase().as_str())
            .copied()
    }

    pub(crate) fn default_for(&self, kind: PrimitiveKind) -> ProviderKind {
        match kind {
            PrimitiveKind::Text => ProviderKind::Text,
            PrimitiveKind::Int => ProviderKind::Int,
            PrimitiveKind::Float => ProviderKind::Float,
            PrimitiveKind::Bool => ProviderKind::Bool,
            PrimitiveKind::Date => ProviderKind::Date,
            PrimitiveKind::DateTime => ProviderKind::DateTime,
            PrimitiveKind::Uuid => ProviderKind::Uuid,
        }
    }

    /// Resolve `field_name` at `path` to a generation strategy.
    pub(crate) fn resolve<'a>(
        &self,
        field_name: &str,
        ty: &'a FieldType,
        path: &FieldPath,
        rules: &'a RuleTable,
    ) -> Resolved<'a> {
        if let Some(rule) = rules.get(&path.key_for(field_name)) {
            return match rule {
                Rule::Choices(candidates) => Resolved::RuleChoices(candidates),
                Rule::Generator { generator, kwargs } => match generator {
                    GeneratorRef::Provider(kind) => Resolved::RuleProvider {
                        kind: *kind,
                        kwargs,
                    },
                    GeneratorRef::Custom(custom) => Resolved::RuleCustom {
                        generator: custom.as_ref(),
                        kwargs,
                    },
                },
            };
        }

        if let Some(kind) = self.heuristic(field_name) {
            return Resolved::Provider(kind);
        }

        match classify(ty) {
            Shape::List(elem) => Resolved::List(elem),
            Shape::Map(key, value) => Resolved::MapOf(key, value),
            Shape::Primitive(primitive) => Resolved::Provider(self.default_for(primitive)),
            Shape::Record(schema) => Resolved::Nested(schema),
            Shape::Unknown => {
                warn!(field = %path.key_for(field_name), "no generator for field type, falling back to text");
                Resolved::Provider(ProviderKind::Text)
            }
        }
    }
}
