//! Defensive generator invocation.
//!
//! Caller overrides arrive without knowledge of each generator's parameter
//! set, so options are filtered down to the declared keys first. A failed
//! call is retried once with no options at all; if that fails too, the field
//! renders as null and the error is logged rather than propagated.

use rand::RngCore;
use serde_json::{Map, Value as Json};
use tracing::warn;

use fabrica_core::Value;
use fabrica_provider::ProviderKind;

use crate::rules::{Generator, OptionKeys};

/// Call a built-in provider with the options it accepts.
pub(crate) fn provider(
    kind: ProviderKind,
    options: Option<&Map<String, Json>>,
    field: &str,
    rng: &mut dyn RngCore,
) -> Value {
    let filtered = filter(options, field, kind.id(), |key| kind.accepts(key));
    match kind.generate(filtered.as_ref(), rng) {
        Ok(value) => value,
        Err(error) => {
            if kind.is_temporal() {
                warn!(field, generator = kind.id(), %error, "temporal options rejected, retrying with the default range");
            } else {
                warn!(field, generator = kind.id(), %error, "generator call failed, retrying without options");
            }
            retry(|rng: &mut dyn RngCore| kind.generate(None, rng), field, kind.id(), rng)
        }
    }
}

/// Call a custom generator, honoring its declared option keys.
pub(crate) fn custom(
    generator: &dyn Generator,
    options: Option<&Map<String, Json>>,
    field: &str,
    rng: &mut dyn RngCore,
) -> Value {
    let name = generator.name().to_string();
    let filtered = match generator.accepted_options() {
        OptionKeys::Any => options.cloned(),
        OptionKeys::Only(keys) => filter(options, field, &name, |key| keys.contains(&key)),
    };
    match generator.generate(filtered.as_ref(), rng) {
        Ok(value) => value,
        Err(error) => {
            warn!(field, generator = %name, %error, "generator call failed, retrying without options");
            retry(|rng: &mut dyn RngCore| generator.generate(None, rng), field, &name, rng)
        }
    }
}

fn retry(
    call: impl Fn(&mut dyn RngCore) -> fabrica_core::Result<Value>,
    field: &str,
    generator: &str,
    rng: &mut dyn RngCore,
) -> Value {
    match call(rng) {
        Ok(value) => value,
        Err(error) => {
            warn!(field, generator, %error, "generator retry failed, field set to null");
            Value::Null
        }
    }
}

/// Keep only the keys `accepts` recognizes, logging whatever gets dropped.
fn filter(
    options: Option<&Map<String, Json>>,
    field: &str,
    generator: &str,
    accepts: impl Fn(&str) -> bool,
) -> Option<Map<String, Json>> {
    let options = options?;
    let mut kept = Map::new();
    for (key, value) in options {
        if accepts(key) {
            kept.insert(key.clone(), value.clone());
        } else {
            warn!(field, generator, key = %key, "option not accepted by generator, dropping");
        }
    }
    if kept.is_empty() { None } else { Some(kept) }
}
