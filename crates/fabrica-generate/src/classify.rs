//! Shape classification for schema field types.
//!
//! Strips `Optional` wrappers (any depth) and reduces the remaining type to
//! the structural shape the engine dispatches on; generation always produces
//! a value for the unwrapped type.

use fabrica_core::{FieldType, RecordSchema};

/// Primitive shapes with a built-in provider default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Text,
    Int,
    Float,
    Bool,
    Date,
    DateTime,
    Uuid,
}

#[derive(Debug)]
pub enum Shape<'a> {
    Primitive(PrimitiveKind),
    List(&'a FieldType),
    Map(&'a FieldType, &'a FieldType),
    Record(&'a RecordSchema),
    Unknown,
}

pub fn classify(ty: &FieldType) -> Shape<'_> {
    match ty {
        FieldType::Optional(inner) => classify(inner),
        FieldType::Text => Shape::Primitive(PrimitiveKind::Text),
        FieldType::Int => Shape::Primitive(PrimitiveKind::Int),
        FieldType::Float => Shape::Primitive(PrimitiveKind::Float),
        FieldType::Bool => Shape::Primitive(PrimitiveKind::Bool),
        FieldType::Date => Shape::Primitive(PrimitiveKind::Date),
        FieldType::DateTime => Shape::Primitive(PrimitiveKind::DateTime),
        FieldType::Uuid => Shape::Primitive(PrimitiveKind::Uuid),
        FieldType::List(elem) => Shape::List(elem),
        FieldType::Map(key, value) => Shape::Map(key, value),
        FieldType::Record(schema) => Shape::Record(schema),
        FieldType::Any => Shape::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabrica_core::FieldType;

    #[test]
    fn nested_optionals_collapse_to_the_inner_shape() {
        let ty = FieldType::optional(FieldType::optional(FieldType::Int));
        assert!(matches!(
            classify(&ty),
            Shape::Primitive(PrimitiveKind::Int)
        ));
    }

    #[test]
    fn list_and_map_keep_their_inner_types() {
        let list = FieldType::list(FieldType::Text);
        assert!(matches!(classify(&list), Shape::List(FieldType::Text)));

        let map = FieldType::map(FieldType::Text, FieldType::Float);
        assert!(matches!(
            classify(&map),
            Shape::Map(FieldType::Text, FieldType::Float)
        ));
    }

    #[test]
    fn any_is_unknown() {
        assert!(matches!(classify(&FieldType::Any), Shape::Unknown));
    }
}
