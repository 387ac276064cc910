//! Core contracts for Fabrica.
//!
//! This crate defines the schema-descriptor model used to drive generation,
//! the generated-value model, the read-only output record, and the dotted
//! field path shared across the provider and the engine.

pub mod error;
pub mod path;
pub mod schema;
pub mod value;

pub use error::{Error, Result};
pub use path::FieldPath;
pub use schema::{Describe, FieldDef, FieldType, RecordSchema};
pub use value::{Record, Value};
