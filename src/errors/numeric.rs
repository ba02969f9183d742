//! Integers carried as quoted decimal strings on the wire.
//!
//! Deserialization also accepts bare JSON integers.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

pub(crate) fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

pub(crate) fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr + TryFrom<u64>,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(QuotedIntVisitor(PhantomData))
}

struct QuotedIntVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for QuotedIntVisitor<T>
where
    T: FromStr + TryFrom<u64>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned integer or a string containing one")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        v.parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        T::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        match u64::try_from(v) {
            Ok(unsigned) => self.visit_u64(unsigned),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Probe {
        #[serde(with = "super")]
        status: u16,
        #[serde(with = "super", default, skip_serializing_if = "super::is_zero")]
        code: u32,
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Probe { status: 404, code: 7 }).unwrap();
        assert_eq!(json, r#"{"status":"404","code":"7"}"#);
    }

    #[test]
    fn test_zero_code_omitted() {
        let json = serde_json::to_string(&Probe { status: 500, code: 0 }).unwrap();
        assert_eq!(json, r#"{"status":"500"}"#);
    }

    #[test]
    fn test_accepts_string_and_number() {
        let quoted: Probe = serde_json::from_str(r#"{"status":"422","code":"12"}"#).unwrap();
        let bare: Probe = serde_json::from_str(r#"{"status":422,"code":12}"#).unwrap();
        assert_eq!(quoted, bare);
        assert_eq!(quoted.status, 422);
        assert_eq!(quoted.code, 12);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Probe>(r#"{"status":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"status":-1}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"status":"70000"}"#).is_err());
    }
}
