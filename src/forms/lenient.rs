//! Deserializers for HTML form values, which arrive as strings as often as numbers.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

/// `12.5`, `"12.5"` -> `Some(12.5)`; missing, `null`, `""` -> `None`.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("{} is out of range", n))),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("{:?} is not a number", s))),
    }
}

/// Text column that clients sometimes send as a number, e.g. a star count.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        None => None,
        Some(NumberOrText::Number(n)) => Some(n.to_string()),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => None,
        Some(NumberOrText::Text(s)) => Some(s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct Sample {
        #[serde(default, deserialize_with = "optional_number")]
        value: Option<f64>,
        #[serde(default, deserialize_with = "optional_text")]
        label: Option<String>,
    }

    fn parse(json: &str) -> Result<Sample, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn numbers_and_numeric_strings() {
        assert_eq!(parse(r#"{"value": 67.8}"#).unwrap().value, Some(67.8));
        assert_eq!(parse(r#"{"value": 13}"#).unwrap().value, Some(13.0));
        assert_eq!(parse(r#"{"value": "1.38e10"}"#).unwrap().value, Some(1.38e10));
        assert_eq!(parse(r#"{"value": " 4 "}"#).unwrap().value, Some(4.0));
    }

    #[test]
    fn blanks_are_absent() {
        assert_eq!(parse(r#"{}"#).unwrap().value, None);
        assert_eq!(parse(r#"{"value": null}"#).unwrap().value, None);
        assert_eq!(parse(r#"{"value": ""}"#).unwrap().value, None);
        assert_eq!(parse(r#"{"label": ""}"#).unwrap().label, None);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse(r#"{"value": "many"}"#).is_err());
        assert!(parse(r#"{"value": true}"#).is_err());
    }

    #[test]
    fn numeric_text_keeps_its_digits() {
        assert_eq!(
            parse(r#"{"label": 400000000000}"#).unwrap().label.as_deref(),
            Some("400000000000")
        );
        assert_eq!(
            parse(r#"{"label": "about 100 billion"}"#).unwrap().label.as_deref(),
            Some("about 100 billion")
        );
    }
}
