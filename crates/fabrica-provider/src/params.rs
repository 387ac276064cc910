use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use fabrica_core::{Error, Result};

/// Kind of a provider option value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Bool,
    Int,
    Float,
    String,
    Date,
    DateTime,
}

/// Declares one option key a provider recognizes.
#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    pub key: &'static str,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub const fn new(key: &'static str, kind: ParamKind) -> Self {
        Self { key, kind }
    }
}

/// Typed view over a JSON options object.
///
/// Getters fail when a key is present with the wrong shape; absent keys fall
/// through to the provider's defaults.
#[derive(Clone, Copy, Debug)]
pub struct OptionMap<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> OptionMap<'a> {
    pub fn new(map: Option<&'a Map<String, Value>>) -> Self {
        Self { map }
    }

    pub fn is_empty(&self) -> bool {
        self.map.map(|map| map.is_empty()).unwrap_or(true)
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|map| map.get(key))
    }

    pub fn try_i64(&self, key: &str) -> Result<Option<i64>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_i64()
                .map(Some)
                .ok_or_else(|| Error::Provider(format!("option '{key}' must be an integer"))),
        }
    }

    pub fn try_f64(&self, key: &str) -> Result<Option<f64>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| Error::Provider(format!("option '{key}' must be a number"))),
        }
    }

    pub fn try_str(&self, key: &str) -> Result<Option<&'a str>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| Error::Provider(format!("option '{key}' must be a string"))),
        }
    }

    pub fn try_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| Error::Provider(format!("option '{key}' must be a boolean"))),
        }
    }

    pub fn try_date(&self, key: &str) -> Result<Option<NaiveDate>> {
        match self.try_str(key)? {
            None => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| {
                    Error::Provider(format!("option '{key}' must be a date (YYYY-MM-DD)"))
                }),
        }
    }

    pub fn try_datetime(&self, key: &str) -> Result<Option<NaiveDateTime>> {
        match self.try_str(key)? {
            None => Ok(None),
            Some(raw) => parse_datetime(raw).map(Some).ok_or_else(|| {
                Error::Provider(format!(
                    "option '{key}' must be a timestamp (YYYY-MM-DDTHH:MM:SS) or date"
                ))
            }),
        }
    }
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
