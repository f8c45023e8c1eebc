/// Serde utility functions for common patterns
use serde::{Deserializer, de};
use std::fmt;

/// Deserialize an optional identifier written either as a string or a number.
///
/// ClickUp ids are strings on the wire, but YAML config files and callers
/// routinely write team ids as bare numbers.
///
/// - Missing field or `null` → `None`
/// - `"9012"` or `9012` → `Some("9012")`
///
/// Usage:
/// ```ignore
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(default, deserialize_with = "crate::serde_utils::optional_id")]
///     team_id: Option<String>,
/// }
/// ```
pub fn optional_id<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptionalIdVisitor;

    impl<'de> de::Visitor<'de> for OptionalIdVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer id")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }
    }

    de.deserialize_option(OptionalIdVisitor)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::optional_id")]
        id: Option<String>,
    }

    #[test]
    fn accepts_string_number_null_and_missing() {
        let h: Holder = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(h.id.as_deref(), Some("abc"));

        let h: Holder = serde_json::from_str(r#"{"id": 9012}"#).unwrap();
        assert_eq!(h.id.as_deref(), Some("9012"));

        let h: Holder = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(h.id, None);

        let h: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(h.id, None);
    }

    #[test]
    fn rejects_other_types() {
        let result: Result<Holder, _> = serde_json::from_str(r#"{"id": [1]}"#);
        assert!(result.is_err());
    }
}
