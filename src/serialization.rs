use super::PersonName;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Serialized as the canonical string.
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

struct PersonNameVisitor;

impl<'de> Visitor<'de> for PersonNameVisitor {
    type Value = PersonName;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a person name of the form \"Family,Given\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<PersonName, E>
    where
        E: de::Error,
    {
        PersonName::parse(v).map_err(E::custom)
    }
}

/// Deserialized through the parser, so invalid names are rejected.
impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<PersonName, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(PersonNameVisitor)
    }
}
