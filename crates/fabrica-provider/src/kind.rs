use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

use fabrica_core::{Result, Value};

use crate::params::{OptionMap, ParamKind, ParamSpec};
use crate::{primitives, semantic};

const TEXT_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("min_length", ParamKind::Int),
    ParamSpec::new("max_length", ParamKind::Int),
    ParamSpec::new("chars", ParamKind::String),
    ParamSpec::new("pattern", ParamKind::String),
];
const INT_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("min_value", ParamKind::Int),
    ParamSpec::new("max_value", ParamKind::Int),
];
const FLOAT_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("min_value", ParamKind::Float),
    ParamSpec::new("max_value", ParamKind::Float),
    ParamSpec::new("decimal_places", ParamKind::Int),
];
const BOOL_PARAMS: &[ParamSpec] = &[ParamSpec::new("true_probability", ParamKind::Float)];
const DATE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("start_date", ParamKind::Date),
    ParamSpec::new("end_date", ParamKind::Date),
];
const DATETIME_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("start_date", ParamKind::DateTime),
    ParamSpec::new("end_date", ParamKind::DateTime),
];
const SENTENCE_PARAMS: &[ParamSpec] = &[ParamSpec::new("words", ParamKind::Int)];

/// Kind of fake value the provider can produce.
///
/// The snake_case identifier is the external name used in rule files and
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Text,
    Int,
    Float,
    Bool,
    Date,
    DateTime,
    Uuid,
    Email,
    Phone,
    Ipv4,
    FullName,
    FirstName,
    LastName,
    Username,
    StreetAddress,
    City,
    PostalCode,
    Address,
    Country,
    CurrencyCode,
    CreditCardNumber,
    JobTitle,
    Sentence,
    Iban,
    Ssn,
}

impl ProviderKind {
    pub fn id(&self) -> &'static str {
        match self {
            ProviderKind::Text => "text",
            ProviderKind::Int => "int",
            ProviderKind::Float => "float",
            ProviderKind::Bool => "bool",
            ProviderKind::Date => "date",
            ProviderKind::DateTime => "date_time",
            ProviderKind::Uuid => "uuid",
            ProviderKind::Email => "email",
            ProviderKind::Phone => "phone",
            ProviderKind::Ipv4 => "ipv4",
            ProviderKind::FullName => "full_name",
            ProviderKind::FirstName => "first_name",
            ProviderKind::LastName => "last_name",
            ProviderKind::Username => "username",
            ProviderKind::StreetAddress => "street_address",
            ProviderKind::City => "city",
            ProviderKind::PostalCode => "postal_code",
            ProviderKind::Address => "address",
            ProviderKind::Country => "country",
            ProviderKind::CurrencyCode => "currency_code",
            ProviderKind::CreditCardNumber => "credit_card_number",
            ProviderKind::JobTitle => "job_title",
            ProviderKind::Sentence => "sentence",
            ProviderKind::Iban => "iban",
            ProviderKind::Ssn => "ssn",
        }
    }

    pub fn parse(id: &str) -> Option<ProviderKind> {
        serde_json::from_value(Json::String(id.to_string())).ok()
    }

    /// Option keys this kind recognizes. The invocation adapter filters
    /// caller overrides down to these before calling.
    pub fn accepted_params(&self) -> &'static [ParamSpec] {
        match self {
            ProviderKind::Text => TEXT_PARAMS,
            ProviderKind::Int => INT_PARAMS,
            ProviderKind::Float => FLOAT_PARAMS,
            ProviderKind::Bool => BOOL_PARAMS,
            ProviderKind::Date => DATE_PARAMS,
            ProviderKind::DateTime => DATETIME_PARAMS,
            ProviderKind::Sentence => SENTENCE_PARAMS,
            _ => &[],
        }
    }

    pub fn accepts(&self, key: &str) -> bool {
        self.accepted_params().iter().any(|spec| spec.key == key)
    }

    /// True for the date-flavored kinds whose failed calls fall back to the
    /// default range instead of propagating.
    pub fn is_temporal(&self) -> bool {
        matches!(self, ProviderKind::Date | ProviderKind::DateTime)
    }

    /// Produces one value of this kind, configured by `options`.
    pub fn generate(
        &self,
        options: Option<&Map<String, Json>>,
        rng: &mut dyn RngCore,
    ) -> Result<Value> {
        let options = OptionMap::new(options);
        match self {
            ProviderKind::Text => primitives::text(options, rng),
            ProviderKind::Int => primitives::int(options, rng),
            ProviderKind::Float => primitives::float(options, rng),
            ProviderKind::Bool => primitives::boolean(options, rng),
            ProviderKind::Date => primitives::date(options, rng),
            ProviderKind::DateTime => primitives::datetime(options, rng),
            ProviderKind::Uuid => Ok(primitives::uuid(rng)),
            ProviderKind::Email => Ok(semantic::email(rng)),
            ProviderKind::Phone => Ok(semantic::phone(rng)),
            ProviderKind::Ipv4 => Ok(semantic::ipv4(rng)),
            ProviderKind::FullName => Ok(semantic::full_name(rng)),
            ProviderKind::FirstName => Ok(semantic::first_name(rng)),
            ProviderKind::LastName => Ok(semantic::last_name(rng)),
            ProviderKind::Username => Ok(semantic::username(rng)),
            ProviderKind::StreetAddress => Ok(semantic::street_address(rng)),
            ProviderKind::City => Ok(semantic::city(rng)),
            ProviderKind::PostalCode => Ok(semantic::postal_code(rng)),
            ProviderKind::Address => Ok(semantic::address(rng)),
            ProviderKind::Country => Ok(semantic::country(rng)),
            ProviderKind::CurrencyCode => Ok(semantic::currency_code(rng)),
            ProviderKind::CreditCardNumber => Ok(semantic::credit_card_number(rng)),
            ProviderKind::JobTitle => Ok(semantic::job_title(rng)),
            ProviderKind::Sentence => semantic::sentence(options, rng),
            ProviderKind::Iban => Ok(semantic::iban(rng)),
            ProviderKind::Ssn => Ok(semantic::ssn(rng)),
        }
    }
}
