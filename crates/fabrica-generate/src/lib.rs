//! Rule-driven synthetic record generation.
//!
//! The engine walks a schema (or a sample JSON document), resolves each
//! field to a generator through a fixed precedence ladder, and assembles
//! the results into a [`Record`](fabrica_core::Record). Resolution order,
//! first match wins:
//!
//! 1. caller-supplied `choices` override for the field name
//! 2. path-scoped rule ([`RuleTable`]) with a generator or candidate set
//! 3. field-name heuristic (`email`, `city`, `is_active`, ...)
//! 4. structural fan-out for lists, maps, and nested records
//! 5. type-default provider, with plain text as the terminal fallback
//!
//! Generation never fails past argument validation: a generator that
//! rejects its options is retried bare, and a persistent failure renders
//! the field as null with a logged warning.

mod classify;
mod engine;
mod invoke;
mod options;
mod resolve;
mod rules;
mod sample;

pub use engine::{generate_for, Engine};
pub use options::{GenerateOptions, Overrides};
pub use rules::{Generator, GeneratorRef, OptionKeys, Rule, RuleTable};
pub use sample::generate_from_sample;
