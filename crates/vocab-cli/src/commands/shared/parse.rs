use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};

/// Clap value parser for snake_case enums, via serde-deserialization.
///
/// Accepts any case and `-` in place of `_`, so `Terminology` and
/// `terminology` both parse. Rejections surface as clap usage errors.
pub fn enum_arg<T>(raw: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let deserializer: StrDeserializer<'_, ValueError> = normalized.as_str().into_deserializer();
    T::deserialize(deserializer).map_err(|error| error.to_string())
}
