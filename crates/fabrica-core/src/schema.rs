/// Declared type of a field in a record schema.
///
/// Composite types declare their shape through [`Describe`] rather than
/// runtime reflection: the engine walks an ordered list of `(name, type)`
/// pairs supplied by the type itself.
#[derive(Debug, Clone)]
pub enum FieldType {
    Text,
    Int,
    Float,
    Bool,
    Date,
    DateTime,
    Uuid,
    /// Nullable wrapper; the engine unwraps to the inner type.
    Optional(Box<FieldType>),
    /// Ordered sequence of elements of one type.
    List(Box<FieldType>),
    /// Key/value mapping.
    Map(Box<FieldType>, Box<FieldType>),
    /// Nested user-defined record.
    Record(RecordSchema),
    /// A type the schema cannot place; always resolves to the generic
    /// string fallback.
    Any,
}

impl FieldType {
    pub fn optional(inner: FieldType) -> Self {
        FieldType::Optional(Box::new(inner))
    }

    pub fn list(elem: FieldType) -> Self {
        FieldType::List(Box::new(elem))
    }

    pub fn map(key: FieldType, value: FieldType) -> Self {
        FieldType::Map(Box::new(key), Box::new(value))
    }

    pub fn record<T: Describe>() -> Self {
        FieldType::Record(T::schema())
    }
}

/// One declared field of a record: name plus declared type.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub ty: FieldType,
}

impl FieldDef {
    pub fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }
}

/// Walkable descriptor for a record type: its name and an ordered field
/// list. The field list is produced by a function pointer so nested and
/// self-referential schemas stay cheap to clone.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    pub name: &'static str,
    fields: fn() -> Vec<FieldDef>,
}

impl RecordSchema {
    pub fn new(name: &'static str, fields: fn() -> Vec<FieldDef>) -> Self {
        Self { name, fields }
    }

    pub fn fields(&self) -> Vec<FieldDef> {
        (self.fields)()
    }
}

/// Capability exposing a type's generation schema.
pub trait Describe {
    fn schema() -> RecordSchema;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point;

    impl Describe for Point {
        fn schema() -> RecordSchema {
            RecordSchema::new("Point", || {
                vec![
                    FieldDef::new("x", FieldType::Float),
                    FieldDef::new("y", FieldType::Float),
                ]
            })
        }
    }

    #[test]
    fn schema_preserves_declaration_order() {
        let schema = Point::schema();
        let names: Vec<_> = schema.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["x", "y"]);
    }

    #[test]
    fn record_field_type_embeds_schema() {
        let ty = FieldType::record::<Point>();
        match ty {
            FieldType::Record(schema) => assert_eq!(schema.name, "Point"),
            other => panic!("unexpected type: {other:?}"),
        }
    }
}
