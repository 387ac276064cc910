//! Built-in demonstration models.

use fabrica_core::{Describe, FieldDef, FieldType, RecordSchema};

pub struct Address;

impl Describe for Address {
    fn schema() -> RecordSchema {
        RecordSchema::new("Address", || {
            vec![
                FieldDef::new("street", FieldType::optional(FieldType::Text)),
                FieldDef::new("city", FieldType::optional(FieldType::Text)),
                FieldDef::new("postal_code", FieldType::optional(FieldType::Text)),
                FieldDef::new("country", FieldType::optional(FieldType::Text)),
            ]
        })
    }
}

pub struct Product;

impl Describe for Product {
    fn schema() -> RecordSchema {
        RecordSchema::new("Product", || {
            vec![
                FieldDef::new("product_id", FieldType::optional(FieldType::Uuid)),
                FieldDef::new("name", FieldType::optional(FieldType::Text)),
                FieldDef::new("price", FieldType::optional(FieldType::Float)),
                FieldDef::new("quantity", FieldType::optional(FieldType::Int)),
                FieldDef::new("description", FieldType::optional(FieldType::Text)),
            ]
        })
    }
}

pub struct DisputeCase;

impl Describe for DisputeCase {
    fn schema() -> RecordSchema {
        RecordSchema::new("DisputeCase", || {
            vec![
                FieldDef::new("dispute_id", FieldType::optional(FieldType::Uuid)),
                FieldDef::new("customer_id", FieldType::optional(FieldType::Text)),
                FieldDef::new("transaction_amount", FieldType::optional(FieldType::Float)),
                FieldDef::new("transaction_currency", FieldType::optional(FieldType::Text)),
                FieldDef::new("dispute_reason", FieldType::optional(FieldType::Text)),
                FieldDef::new("dispute_date", FieldType::optional(FieldType::Date)),
                FieldDef::new("status", FieldType::optional(FieldType::Text)),
                FieldDef::new("is_resolved", FieldType::optional(FieldType::Bool)),
                FieldDef::new(
                    "comments",
                    FieldType::optional(FieldType::list(FieldType::Text)),
                ),
                FieldDef::new(
                    "evidence_files",
                    FieldType::optional(FieldType::list(FieldType::map(
                        FieldType::Text,
                        FieldType::Text,
                    ))),
                ),
                FieldDef::new("contact_email", FieldType::optional(FieldType::Text)),
                FieldDef::new(
                    "billing_address",
                    FieldType::optional(FieldType::record::<Address>()),
                ),
                FieldDef::new("last_updated_at", FieldType::optional(FieldType::DateTime)),
            ]
        })
    }
}

pub struct Order;

impl Describe for Order {
    fn schema() -> RecordSchema {
        RecordSchema::new("Order", || {
            vec![
                FieldDef::new("order_id", FieldType::optional(FieldType::Uuid)),
                FieldDef::new("customer_email", FieldType::optional(FieldType::Text)),
                FieldDef::new("order_date", FieldType::optional(FieldType::DateTime)),
                FieldDef::new("total_amount", FieldType::optional(FieldType::Float)),
                FieldDef::new(
                    "items",
                    FieldType::optional(FieldType::list(FieldType::record::<Product>())),
                ),
                FieldDef::new(
                    "shipping_address",
                    FieldType::optional(FieldType::record::<Address>()),
                ),
                FieldDef::new("payment_method", FieldType::optional(FieldType::Text)),
                FieldDef::new("is_paid", FieldType::optional(FieldType::Bool)),
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispute_case_declares_its_nested_shapes() {
        let schema = DisputeCase::schema();
        let fields = schema.fields();
        assert_eq!(fields.len(), 13);
        assert_eq!(fields[0].name, "dispute_id");
        assert!(matches!(
            fields[11].ty,
            FieldType::Optional(ref inner) if matches!(**inner, FieldType::Record(_))
        ));
    }
}
