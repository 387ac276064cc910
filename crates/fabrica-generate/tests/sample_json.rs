use serde_json::json;

use fabrica_core::{Error, Value};
use fabrica_generate::{generate_from_sample, Engine, GenerateOptions, Overrides, RuleTable};

fn seeded(seed: u64) -> Engine {
    Engine::new(GenerateOptions::seeded(seed))
}

#[test]
fn rejects_non_object_samples_and_zero_count() {
    let rules = RuleTable::new();
    let overrides = Overrides::new();

    let result = generate_from_sample(&json!([1, 2, 3]), 1, &rules, &overrides);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));

    let result = generate_from_sample(&json!({ "a": 1 }), 0, &rules, &overrides);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn produces_count_records_with_the_sample_shape() {
    let sample = json!({ "name": "Ada", "age": 36, "active": true });
    let records = generate_from_sample(&sample, 3, &RuleTable::new(), &Overrides::new()).unwrap();
    assert_eq!(records.len(), 3);
    for record in &records {
        assert!(record.contains("name"));
        assert!(record.contains("age"));
        assert!(record.contains("active"));
    }
}

#[test]
fn scalar_kinds_are_inferred_from_literals() {
    let sample = json!({ "count": 7, "ratio": 0.5, "flag": false, "label": "x" });
    let records = seeded(11)
        .generate_from_sample(&sample, 1, &RuleTable::new(), &Overrides::new())
        .unwrap();
    let record = &records[0];
    assert!(record.get("count").unwrap().as_i64().is_some());
    assert!(matches!(record.get("ratio"), Some(Value::Float(_))));
    assert!(record.get("flag").unwrap().as_bool().is_some());
    assert!(record.get("label").unwrap().as_str().is_some());
}

#[test]
fn uuid_shaped_strings_regenerate_as_uuids() {
    let sample = json!({ "ref": "8b55f3a2-6a86-4a6e-bb1b-9030a1f1c67e" });
    let records = generate_from_sample(&sample, 1, &RuleTable::new(), &Overrides::new()).unwrap();
    let generated = records[0].get("ref").and_then(Value::as_str).unwrap();
    assert_ne!(generated, "8b55f3a2-6a86-4a6e-bb1b-9030a1f1c67e");
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[test]
fn nested_objects_recurse() {
    let sample = json!({ "customer": { "email": "x@y.z", "age": 30 } });
    let records = generate_from_sample(&sample, 1, &RuleTable::new(), &Overrides::new()).unwrap();
    let customer = records[0].get("customer").and_then(Value::as_record).unwrap();
    let email = customer
        .iter()
        .find(|(name, _)| name == "email")
        .map(|(_, value)| value)
        .and_then(Value::as_str)
        .unwrap();
    assert!(email.contains('@'));
}

#[test]
fn arrays_regenerate_with_bounded_fan_out() {
    // Sampled length is irrelevant; output is always 1 to 3 elements.
    let sample = json!({ "scores": [1, 2, 3, 4, 5, 6, 7] });
    for seed in 0..20 {
        let records = seeded(seed)
            .generate_from_sample(&sample, 1, &RuleTable::new(), &Overrides::new())
            .unwrap();
        let scores = records[0].get("scores").and_then(Value::as_list).unwrap();
        assert!((1..=3).contains(&scores.len()));
        for score in scores {
            assert!(score.as_i64().is_some());
        }
    }
}

#[test]
fn empty_arrays_fall_back_to_short_strings() {
    let sample = json!({ "tags": [] });
    let records = seeded(2)
        .generate_from_sample(&sample, 1, &RuleTable::new(), &Overrides::new())
        .unwrap();
    let tags = records[0].get("tags").and_then(Value::as_list).unwrap();
    assert!(!tags.is_empty());
    for tag in tags {
        let text = tag.as_str().unwrap();
        assert!((3..=10).contains(&text.len()), "tag length {}", text.len());
    }
}

#[test]
fn null_handling_follows_the_configured_probability() {
    let sample = json!({ "maybe": null });
    let rules = RuleTable::new();
    let overrides = Overrides::new();

    let always_null = Engine::new(GenerateOptions {
        null_sample_probability: 1.0,
        seed: Some(1),
        ..GenerateOptions::default()
    });
    let records = always_null.generate_from_sample(&sample, 1, &rules, &overrides).unwrap();
    assert!(records[0].get("maybe").unwrap().is_null());

    let never_null = Engine::new(GenerateOptions {
        null_sample_probability: 0.0,
        seed: Some(1),
        ..GenerateOptions::default()
    });
    let records = never_null.generate_from_sample(&sample, 1, &rules, &overrides).unwrap();
    assert!(records[0].get("maybe").unwrap().as_str().is_some());
}

#[test]
fn heuristics_apply_to_sample_keys() {
    let sample = json!({ "email": "someone@example.com", "city": "Porto" });
    let records = generate_from_sample(&sample, 1, &RuleTable::new(), &Overrides::new()).unwrap();
    let email = records[0].get("email").and_then(Value::as_str).unwrap();
    assert!(email.contains('@'));
}

#[test]
fn rules_address_nested_sample_fields_by_dotted_path() {
    let sample = json!({ "customer": { "city": "Porto" } });
    let rules = RuleTable::new().choices("customer.city", vec![json!("Madrid")]);
    let records = generate_from_sample(&sample, 1, &rules, &Overrides::new()).unwrap();
    let customer = records[0].get("customer").and_then(Value::as_record).unwrap();
    let city = customer
        .iter()
        .find(|(name, _)| name == "city")
        .map(|(_, value)| value)
        .and_then(Value::as_str);
    assert_eq!(city, Some("Madrid"));
}

#[test]
fn caller_choices_short_circuit_inference() {
    let sample = json!({ "status": 123 });
    let overrides = Overrides::new().choices("status", vec![json!("pinned")]);
    let records = generate_from_sample(&sample, 1, &RuleTable::new(), &overrides).unwrap();
    assert_eq!(records[0].get("status").and_then(Value::as_str), Some("pinned"));
}

#[test]
fn same_seed_reproduces_the_same_batch() {
    let sample = json!({ "name": "Ada", "scores": [1, 2], "meta": { "note": null } });
    let rules = RuleTable::new();
    let overrides = Overrides::new();
    let first = seeded(99).generate_from_sample(&sample, 5, &rules, &overrides).unwrap();
    let second = seeded(99).generate_from_sample(&sample, 5, &rules, &overrides).unwrap();
    let render = |records: &[fabrica_core::Record]| {
        records.iter().map(|r| r.to_json()).collect::<Vec<_>>()
    };
    assert_eq!(render(&first), render(&second));
}

#[test]
fn overrides_and_count_compose_on_a_sample() {
    let sample = json!({
        "id": "8b55f3a2-6a86-4a6e-bb1b-9030a1f1c67e",
        "age": 30,
        "is_active": true
    });
    let overrides = Overrides::new().field("age", json!({ "min_value": 18, "max_value": 60 }));
    let records = generate_from_sample(&sample, 2, &RuleTable::new(), &overrides).unwrap();
    assert_eq!(records.len(), 2);
    for record in &records {
        let id = record.get("id").and_then(Value::as_str).unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
        let age = record.get("age").and_then(Value::as_i64).unwrap();
        assert!((18..=60).contains(&age));
        assert!(record.get("is_active").unwrap().as_bool().is_some());
    }
}

#[test]
fn output_keys_follow_the_sample_document_order() {
    let sample = json!({ "zeta": 1, "alpha": "x", "mid": true });
    let records = generate_from_sample(&sample, 1, &RuleTable::new(), &Overrides::new()).unwrap();
    let keys: Vec<_> = records[0].keys().collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}
