use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, CountryName, PostCode, StateAbbr, StreetName};
use fake::faker::creditcard::en::CreditCardNumber;
use fake::faker::currency::en::CurrencyCode;
use fake::faker::internet::en::{IPv4, SafeEmail, Username};
use fake::faker::job::en::Title;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use rand::{Rng, RngCore};

use fabrica_core::{Result, Value};

use crate::params::OptionMap;

pub(crate) fn email(rng: &mut dyn RngCore) -> Value {
    Value::Text(SafeEmail().fake_with_rng::<String, _>(rng))
}

pub(crate) fn phone(rng: &mut dyn RngCore) -> Value {
    Value::Text(PhoneNumber().fake_with_rng::<String, _>(rng))
}

pub(crate) fn ipv4(rng: &mut dyn RngCore) -> Value {
    Value::Text(IPv4().fake_with_rng::<String, _>(rng))
}

pub(crate) fn username(rng: &mut dyn RngCore) -> Value {
    Value::Text(Username().fake_with_rng::<String, _>(rng))
}

pub(crate) fn full_name(rng: &mut dyn RngCore) -> Value {
    Value::Text(Name().fake_with_rng::<String, _>(rng))
}

pub(crate) fn first_name(rng: &mut dyn RngCore) -> Value {
    Value::Text(FirstName().fake_with_rng::<String, _>(rng))
}

pub(crate) fn last_name(rng: &mut dyn RngCore) -> Value {
    Value::Text(LastName().fake_with_rng::<String, _>(rng))
}

pub(crate) fn street_address(rng: &mut dyn RngCore) -> Value {
    let number = BuildingNumber().fake_with_rng::<String, _>(rng);
    let street = StreetName().fake_with_rng::<String, _>(rng);
    Value::Text(format!("{number} {street}"))
}

pub(crate) fn city(rng: &mut dyn RngCore) -> Value {
    Value::Text(CityName().fake_with_rng::<String, _>(rng))
}

pub(crate) fn postal_code(rng: &mut dyn RngCore) -> Value {
    Value::Text(PostCode().fake_with_rng::<String, _>(rng))
}

/// Single-line postal address: street, city, state and postal code.
pub(crate) fn address(rng: &mut dyn RngCore) -> Value {
    let number = BuildingNumber().fake_with_rng::<String, _>(rng);
    let street = StreetName().fake_with_rng::<String, _>(rng);
    let city = CityName().fake_with_rng::<String, _>(rng);
    let state = StateAbbr().fake_with_rng::<String, _>(rng);
    let postal = PostCode().fake_with_rng::<String, _>(rng);
    Value::Text(format!("{number} {street}, {city}, {state} {postal}"))
}

pub(crate) fn country(rng: &mut dyn RngCore) -> Value {
    Value::Text(CountryName().fake_with_rng::<String, _>(rng))
}

pub(crate) fn currency_code(rng: &mut dyn RngCore) -> Value {
    Value::Text(CurrencyCode().fake_with_rng::<String, _>(rng))
}

pub(crate) fn credit_card_number(rng: &mut dyn RngCore) -> Value {
    Value::Text(CreditCardNumber().fake_with_rng::<String, _>(rng))
}

pub(crate) fn job_title(rng: &mut dyn RngCore) -> Value {
    Value::Text(Title().fake_with_rng::<String, _>(rng))
}

/// Short free-text sentence; `words` pins the word count, otherwise the
/// length varies between 4 and 8 words.
pub(crate) fn sentence(options: OptionMap<'_>, rng: &mut dyn RngCore) -> Result<Value> {
    let value = match options.try_i64("words")? {
        Some(words) if words > 0 => {
            let words = words as usize;
            Sentence(words..words + 1).fake_with_rng::<String, _>(rng)
        }
        _ => Sentence(4..9).fake_with_rng::<String, _>(rng),
    };
    Ok(Value::Text(value))
}

pub(crate) fn iban(rng: &mut dyn RngCore) -> Value {
    let check = rng.random_range(10..=99);
    let mut account = String::with_capacity(14);
    for _ in 0..14 {
        account.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    Value::Text(format!("GB{check}FABR{account}"))
}

pub(crate) fn ssn(rng: &mut dyn RngCore) -> Value {
    let area = rng.random_range(100..=899);
    let group = rng.random_range(10..=99);
    let serial = rng.random_range(1000..=9999);
    Value::Text(format!("{area:03}-{group:02}-{serial:04}"))
}
