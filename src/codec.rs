//! JSON and fixed binary encodings of [`Value`].
//!
//! # JSON
//!
//! `{"Amount": "<decimal>", "Currency": "<unique code>"}`, with `Currency`
//! omitted for values without currency.
//!
//! # Binary
//!
//! `[4 bytes big-endian unique ID][16 bytes decimal]`. Unique ID `0` stands for
//! "no currency". The decimal part is `rust_decimal`'s own lossless encoding.
//!
//! The `serde` implementations pick the JSON shape for human readable formats
//! and the binary layout for everything else (MessagePack, bincode, ...).

use crate::error::{MoneyError, Result};
use crate::registry::{currencies, CurrencyRegistry};
use crate::value::Value;
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the currency ID prefix.
pub const CURRENCY_ID_LEN: usize = 4;

/// Length of the encoded decimal.
pub const DECIMAL_LEN: usize = 16;

/// Largest scale `rust_decimal` can represent.
const MAX_SCALE: u8 = 28;

#[derive(Serialize)]
struct JsonValueRef<'a> {
    #[serde(rename = "Amount")]
    amount: &'a Decimal,
    #[serde(rename = "Currency", skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
}

#[derive(Deserialize)]
struct JsonValue {
    #[serde(rename = "Amount")]
    amount: Decimal,
    #[serde(rename = "Currency", default)]
    currency: Option<String>,
}

impl JsonValue {
    fn resolve(self, registry: &CurrencyRegistry) -> Result<Value> {
        let currency = match self.currency.as_deref() {
            None | Some("") => None,
            Some(code) => Some(registry.resolve_unique_code(code)?),
        };
        Ok(Value::new(self.amount, currency))
    }
}

impl Value {
    fn json_repr(&self) -> JsonValueRef<'_> {
        JsonValueRef {
            amount: &self.amount,
            currency: self.currency.as_ref().map(|c| c.unique_code()),
        }
    }

    /// Encodes the value as a JSON object.
    ///
    /// ```
    /// use money_split::Value;
    ///
    /// let json = Value::must_parse("-12345.6789 ISO4217-EUR").to_json().unwrap();
    /// assert_eq!(json, r#"{"Amount":"-12345.6789","Currency":"ISO4217-EUR"}"#);
    /// ```
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.json_repr())?)
    }

    /// Decodes a JSON object, resolving the currency through the default
    /// registry.
    pub fn from_json(json: &str) -> Result<Value> {
        Self::from_json_in(json, currencies())
    }

    /// Decodes a JSON object, resolving the currency through `registry`.
    pub fn from_json_in(json: &str, registry: &CurrencyRegistry) -> Result<Value> {
        serde_json::from_str::<JsonValue>(json)?.resolve(registry)
    }

    /// Encodes the value into the fixed binary layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let unique_id = self.currency.as_ref().map_or(0, |c| c.unique_id());

        let mut data = Vec::with_capacity(CURRENCY_ID_LEN + DECIMAL_LEN);
        data.extend_from_slice(&unique_id.to_be_bytes());
        data.extend_from_slice(&self.amount.serialize());
        data
    }

    /// Decodes the fixed binary layout, resolving the currency through the
    /// default registry.
    pub fn from_bytes(data: &[u8]) -> Result<Value> {
        Self::from_bytes_in(data, currencies())
    }

    /// Decodes the fixed binary layout, resolving the currency through
    /// `registry`.
    pub fn from_bytes_in(data: &[u8], registry: &CurrencyRegistry) -> Result<Value> {
        if data.len() < CURRENCY_ID_LEN {
            return Err(MoneyError::Truncated {
                expected: CURRENCY_ID_LEN,
                actual: data.len(),
            });
        }

        let (id, rest) = data.split_at(CURRENCY_ID_LEN);
        let mut id_bytes = [0u8; CURRENCY_ID_LEN];
        id_bytes.copy_from_slice(id);

        let currency = match i32::from_be_bytes(id_bytes) {
            0 => None,
            unique_id => Some(registry.resolve_unique_id(unique_id)?),
        };

        Ok(Value::new(decode_decimal(rest)?, currency))
    }
}

fn decode_decimal(data: &[u8]) -> Result<Decimal> {
    if data.len() < DECIMAL_LEN {
        return Err(MoneyError::Truncated {
            expected: CURRENCY_ID_LEN + DECIMAL_LEN,
            actual: CURRENCY_ID_LEN + data.len(),
        });
    }
    if data.len() > DECIMAL_LEN {
        return Err(MoneyError::InvalidDecimalEncoding);
    }

    let mut bytes = [0u8; DECIMAL_LEN];
    bytes.copy_from_slice(data);

    // Flags word: scale in bits 16..24, sign in bit 31, everything else zero.
    if bytes[0] != 0 || bytes[1] != 0 || bytes[2] > MAX_SCALE || bytes[3] & 0x7f != 0 {
        return Err(MoneyError::InvalidDecimalEncoding);
    }

    Ok(Decimal::deserialize(bytes))
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            self.json_repr().serialize(serializer)
        } else {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }
}

struct BinaryVisitor;

impl<'de> Visitor<'de> for BinaryVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} bytes of encoded monetary value", CURRENCY_ID_LEN + DECIMAL_LEN)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> std::result::Result<Value, E>
    where
        E: de::Error,
    {
        Value::from_bytes(v).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut data = Vec::with_capacity(CURRENCY_ID_LEN + DECIMAL_LEN);
        while let Some(byte) = seq.next_element::<u8>()? {
            data.push(byte);
        }
        Value::from_bytes(&data).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            JsonValue::deserialize(deserializer)?
                .resolve(currencies())
                .map_err(de::Error::custom)
        } else {
            deserializer.deserialize_bytes(BinaryVisitor)
        }
    }
}
