//! Serde adapters for wire representations that differ from the Rust type.

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default (empty collection, zero, ...).
///
/// Pair with `#[serde(default)]` so that absent fields are tolerated too.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Base64 (standard alphabet, padded) blobs as `Option<Bytes>`.
pub mod blob {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a blob as a base64 string.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<Bytes>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize a base64 string into a blob.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Bytes>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map(|decoded| Some(Bytes::from(decoded)))
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Timestamps sent as a (possibly fractional) number of seconds since the
/// Unix epoch, as `Option<DateTime<Utc>>`.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
    const MICROS_PER_SECOND: f64 = 1_000_000.0;

    /// Serialize a timestamp as fractional epoch seconds.
    #[allow(clippy::ref_option, clippy::cast_precision_loss)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) if ts.timestamp_subsec_nanos() == 0 => serializer.serialize_i64(ts.timestamp()),
            Some(ts) => serializer.serialize_f64(
                ts.timestamp() as f64 + f64::from(ts.timestamp_subsec_nanos()) / NANOS_PER_SECOND,
            ),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize fractional epoch seconds into a timestamp.
    ///
    /// The fraction is rounded to whole microseconds, below the error of an
    /// `f64` holding a current epoch.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(seconds) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let whole = seconds.floor();
        let micros = ((seconds - whole) * MICROS_PER_SECOND).round() as u32;
        let (whole, nanos) = if micros >= 1_000_000 {
            (whole + 1.0, 0)
        } else {
            (whole, micros * 1_000)
        };
        DateTime::from_timestamp(whole as i64, nanos)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {seconds}")))
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Shape {
        #[serde(default, with = "super::blob", skip_serializing_if = "Option::is_none")]
        blob: Option<Bytes>,
        #[serde(
            default,
            with = "super::epoch_seconds",
            skip_serializing_if = "Option::is_none"
        )]
        at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        items: Vec<String>,
    }

    #[test]
    fn test_should_decode_fractional_epoch() {
        let shape: Shape = serde_json::from_str(r#"{"at":1709136000.25}"#).expect("decode");
        let at = shape.at.expect("timestamp");
        assert_eq!(at.timestamp(), 1_709_136_000);
        assert_eq!(at.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_should_decode_epoch_fraction_to_its_literal_value() {
        let shape: Shape = serde_json::from_str(r#"{"at":1700000000.123}"#).expect("decode");
        let at = shape.at.expect("timestamp");
        assert_eq!(at.timestamp(), 1_700_000_000);
        assert_eq!(at.timestamp_subsec_nanos(), 123_000_000);

        let shape: Shape = serde_json::from_str(r#"{"at":1604342135.001}"#).expect("decode");
        let at = shape.at.expect("timestamp");
        assert_eq!(at.timestamp(), 1_604_342_135);
        assert_eq!(at.timestamp_subsec_millis(), 1);

        let shape: Shape = serde_json::from_str(r#"{"at":1604342135.9999999}"#).expect("decode");
        let at = shape.at.expect("timestamp");
        assert_eq!(at.timestamp(), 1_604_342_136);
        assert_eq!(at.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_should_encode_whole_epoch_as_integer() {
        let shape = Shape {
            at: Some(Utc.timestamp_opt(1_700_000_000, 0).single().expect("valid")),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&shape).expect("encode"),
            r#"{"at":1700000000,"items":[]}"#
        );
    }

    #[test]
    fn test_should_roundtrip_base64_blob() {
        let shape: Shape = serde_json::from_str(r#"{"blob":"aGVsbG8="}"#).expect("decode");
        assert_eq!(shape.blob.as_deref(), Some(&b"hello"[..]));
        let json = serde_json::to_string(&shape).expect("encode");
        assert!(json.contains(r#""blob":"aGVsbG8=""#));
    }

    #[test]
    fn test_should_reject_invalid_base64() {
        assert!(serde_json::from_str::<Shape>(r#"{"blob":"***"}"#).is_err());
    }

    #[test]
    fn test_should_treat_null_and_absent_collections_as_empty() {
        let shape: Shape = serde_json::from_str(r#"{"items":null}"#).expect("decode");
        assert!(shape.items.is_empty());
        let shape: Shape = serde_json::from_str("{}").expect("decode");
        assert!(shape.items.is_empty() && shape.blob.is_none() && shape.at.is_none());
    }
}
