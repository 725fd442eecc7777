//! Types shared across service models.

use std::collections::HashMap;

/// Resource tags.
pub type Tags = HashMap<String, String>;

/// Free-form JSON document member.
pub type Document = serde_json::Value;

/// Epoch-seconds timestamps, as REST-JSON services send them.
///
/// Seconds may carry a fractional part. Use with
/// `#[serde(default, with = "crate::types::epoch_seconds")]` on an
/// `Option<DateTime<Utc>>`.
pub mod epoch_seconds {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    /// Serialize as fractional seconds.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => {
                let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_millis()) / 1000.0;
                serializer.serialize_f64(seconds)
            }
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from a number of seconds.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(seconds) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let whole = seconds.floor();
        let nanos = ((seconds - whole) * 1_000_000_000.0).round() as u32;
        Utc.timestamp_opt(whole as i64, nanos.min(999_999_999))
            .single()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", seconds)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(
            default,
            with = "super::epoch_seconds",
            skip_serializing_if = "Option::is_none"
        )]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_fractional_seconds() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":1700000000.5}"#).unwrap();
        let expected = Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap();
        assert_eq!(parsed.at, Some(expected));
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"at":1700000000.5}"#
        );
    }

    #[test]
    fn test_missing_and_null() {
        let missing: Stamped = serde_json::from_str("{}").unwrap();
        assert!(missing.at.is_none());
        let null: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert!(null.at.is_none());
        assert_eq!(serde_json::to_string(&missing).unwrap(), "{}");
    }

    #[test]
    fn test_integer_seconds() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":1700000000}"#).unwrap();
        assert_eq!(parsed.at.unwrap().timestamp(), 1_700_000_000);
    }
}
