use chrono::{Duration, NaiveDate, Utc};
use rand::{Rng, RngCore};

use fabrica_core::{Error, Result, Value};

use crate::params::OptionMap;

const DEFAULT_MIN_LENGTH: usize = 1;
const DEFAULT_MAX_LENGTH: usize = 20;
const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = 100_000;
const DEFAULT_FLOAT_MIN: f64 = 0.0;
const DEFAULT_FLOAT_MAX: f64 = 1000.0;
const DEFAULT_DECIMAL_PLACES: i64 = 2;
const DEFAULT_RANGE_YEARS: i64 = 30;
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random string from a charset, or expanded from a placeholder pattern
/// where `#` becomes a digit and `@` a letter.
pub(crate) fn text(options: OptionMap<'_>, rng: &mut dyn RngCore) -> Result<Value> {
    if let Some(pattern) = options.try_str("pattern")? {
        let mut value = String::with_capacity(pattern.len());
        for ch in pattern.chars() {
            match ch {
                '#' => value.push(char::from(b'0' + rng.random_range(0..10u8))),
                '@' => {
                    let letters: Vec<char> = LETTERS.chars().collect();
                    value.push(letters[rng.random_range(0..letters.len())]);
                }
                other => value.push(other),
            }
        }
        return Ok(Value::Text(value));
    }

    let min_length = usize_option(&options, "min_length", DEFAULT_MIN_LENGTH)?;
    let max_length = usize_option(&options, "max_length", DEFAULT_MAX_LENGTH)?;
    if min_length > max_length {
        return Err(Error::Provider(
            "text min_length must be <= max_length".to_string(),
        ));
    }

    let charset = options.try_str("chars")?.unwrap_or(ALPHANUMERIC);
    let chars: Vec<char> = charset.chars().collect();
    if chars.is_empty() {
        return Err(Error::Provider("text chars must not be empty".to_string()));
    }

    let length = if min_length == max_length {
        min_length
    } else {
        rng.random_range(min_length..=max_length)
    };
    let mut value = String::with_capacity(length);
    for _ in 0..length {
        value.push(chars[rng.random_range(0..chars.len())]);
    }
    Ok(Value::Text(value))
}

pub(crate) fn int(options: OptionMap<'_>, rng: &mut dyn RngCore) -> Result<Value> {
    let min = options.try_i64("min_value")?.unwrap_or(DEFAULT_INT_MIN);
    let max = options.try_i64("max_value")?.unwrap_or(DEFAULT_INT_MAX);
    if min > max {
        return Err(Error::Provider(
            "int min_value must be <= max_value".to_string(),
        ));
    }
    Ok(Value::Int(rng.random_range(min..=max)))
}

pub(crate) fn float(options: OptionMap<'_>, rng: &mut dyn RngCore) -> Result<Value> {
    let min = options.try_f64("min_value")?.unwrap_or(DEFAULT_FLOAT_MIN);
    let max = options.try_f64("max_value")?.unwrap_or(DEFAULT_FLOAT_MAX);
    if min > max {
        return Err(Error::Provider(
            "float min_value must be <= max_value".to_string(),
        ));
    }
    let places = options
        .try_i64("decimal_places")?
        .unwrap_or(DEFAULT_DECIMAL_PLACES);
    if !(0..=15).contains(&places) {
        return Err(Error::Provider(
            "float decimal_places must be between 0 and 15".to_string(),
        ));
    }
    let value = rng.random_range(min..=max);
    let factor = 10_f64.powi(places as i32);
    Ok(Value::Float((value * factor).round() / factor))
}

pub(crate) fn boolean(options: OptionMap<'_>, rng: &mut dyn RngCore) -> Result<Value> {
    let probability = options.try_f64("true_probability")?.unwrap_or(0.5);
    if !(0.0..=1.0).contains(&probability) {
        return Err(Error::Provider(
            "bool true_probability must be within [0, 1]".to_string(),
        ));
    }
    Ok(Value::Bool(rng.random_bool(probability)))
}

pub(crate) fn date(options: OptionMap<'_>, rng: &mut dyn RngCore) -> Result<Value> {
    let (start, end) = date_bounds(&options)?;
    let span = (end - start).num_days().max(0);
    let offset = rng.random_range(0..=span);
    Ok(Value::Date(start + Duration::days(offset)))
}

pub(crate) fn datetime(options: OptionMap<'_>, rng: &mut dyn RngCore) -> Result<Value> {
    let default_end = Utc::now().naive_utc();
    let default_start = default_end - Duration::days(DEFAULT_RANGE_YEARS * 365);
    let start = options.try_datetime("start_date")?.unwrap_or(default_start);
    let end = options.try_datetime("end_date")?.unwrap_or(default_end);
    if start > end {
        return Err(Error::Provider(
            "datetime start_date must be <= end_date".to_string(),
        ));
    }
    let span = (end - start).num_seconds().max(0);
    let offset = rng.random_range(0..=span);
    Ok(Value::DateTime(start + Duration::seconds(offset)))
}

/// Random v4 UUID drawn from the caller's rng, so seeded runs stay
/// deterministic.
pub(crate) fn uuid(rng: &mut dyn RngCore) -> Value {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Value::Uuid(uuid::Uuid::from_bytes(bytes).to_string())
}

fn date_bounds(options: &OptionMap<'_>) -> Result<(NaiveDate, NaiveDate)> {
    let default_end = Utc::now().date_naive();
    let default_start = default_end - Duration::days(DEFAULT_RANGE_YEARS * 365);
    let start = options.try_date("start_date")?.unwrap_or(default_start);
    let end = options.try_date("end_date")?.unwrap_or(default_end);
    if start > end {
        return Err(Error::Provider(
            "date start_date must be <= end_date".to_string(),
        ));
    }
    Ok((start, end))
}

fn usize_option(options: &OptionMap<'_>, key: &str, default: usize) -> Result<usize> {
    match options.try_i64(key)? {
        Some(value) if value < 0 => Err(Error::Provider(format!(
            "text {key} must not be negative"
        ))),
        Some(value) => Ok(value as usize),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    fn options(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn pattern_expands_placeholders() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let raw = options(json!({"pattern": "ID-##@@"}));
        let value = text(OptionMap::new(Some(&raw)), &mut rng).unwrap();
        let text = value.as_str().unwrap();
        assert_eq!(text.len(), 7);
        assert!(text.starts_with("ID-"));
        assert!(text[3..5].chars().all(|c| c.is_ascii_digit()));
        assert!(text[5..7].chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn text_length_options_bound_the_output() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let raw = options(json!({"min_length": 4, "max_length": 6}));
        for _ in 0..50 {
            let value = text(OptionMap::new(Some(&raw)), &mut rng).unwrap();
            let length = value.as_str().unwrap().len();
            assert!((4..=6).contains(&length), "length {length}");
        }
    }

    #[test]
    fn text_rejects_negative_and_inverted_lengths() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let negative = options(json!({"min_length": -1}));
        assert!(text(OptionMap::new(Some(&negative)), &mut rng).is_err());
        let inverted = options(json!({"min_length": 9, "max_length": 2}));
        assert!(text(OptionMap::new(Some(&inverted)), &mut rng).is_err());
    }

    #[test]
    fn int_respects_bounds_and_rejects_inverted_ones() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let raw = options(json!({"min_value": 20, "max_value": 70}));
        for _ in 0..50 {
            let value = int(OptionMap::new(Some(&raw)), &mut rng).unwrap();
            let value = value.as_i64().unwrap();
            assert!((20..=70).contains(&value));
        }
        let bad = options(json!({"min_value": 70, "max_value": 20}));
        assert!(int(OptionMap::new(Some(&bad)), &mut rng).is_err());
    }

    #[test]
    fn float_rounds_to_decimal_places() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let raw = options(json!({"min_value": 10.0, "max_value": 20.0, "decimal_places": 1}));
        for _ in 0..50 {
            let value = float(OptionMap::new(Some(&raw)), &mut rng).unwrap();
            let value = value.as_f64().unwrap();
            assert!((10.0..=20.0).contains(&value));
            assert!((value * 10.0 - (value * 10.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn bool_probability_extremes_are_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let always = options(json!({"true_probability": 1.0}));
        let never = options(json!({"true_probability": 0.0}));
        for _ in 0..10 {
            assert_eq!(
                boolean(OptionMap::new(Some(&always)), &mut rng).unwrap(),
                Value::Bool(true)
            );
            assert_eq!(
                boolean(OptionMap::new(Some(&never)), &mut rng).unwrap(),
                Value::Bool(false)
            );
        }
    }

    #[test]
    fn date_stays_inside_requested_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let raw = options(json!({"start_date": "2024-01-01", "end_date": "2024-12-31"}));
        for _ in 0..50 {
            let value = date(OptionMap::new(Some(&raw)), &mut rng).unwrap();
            match value {
                Value::Date(date) => {
                    assert!(date >= NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
                    assert!(date <= NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
                }
                other => panic!("expected date, got {other:?}"),
            }
        }
    }

    #[test]
    fn uuid_has_canonical_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let value = uuid(&mut rng);
        let text = match value {
            Value::Uuid(text) => text,
            other => panic!("expected uuid, got {other:?}"),
        };
        assert_eq!(text.len(), 36);
        assert_eq!(text.matches('-').count(), 4);
        assert!(uuid::Uuid::parse_str(&text).is_ok());
    }
}
