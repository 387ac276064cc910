//! Fake-value provider for Fabrica.
//!
//! Each [`ProviderKind`] produces one randomly generated value of its kind,
//! optionally configured through a JSON options object. Every kind declares
//! the option keys it recognizes so the engine's invocation adapter can
//! reconcile caller-supplied overrides without guessing.

pub mod kind;
pub mod params;

mod primitives;
mod semantic;

pub use kind::ProviderKind;
pub use params::{OptionMap, ParamKind, ParamSpec};
