//! Label/value metadata attached to articles, tags, authors and media.

use mongodb::bson::Bson;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::lenient;

/// Metadata value. The collections store either a scalar or an empty array here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MetadataValue {
    #[default]
    Empty,
    Scalar(String),
}

impl MetadataValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::Empty => None,
            MetadataValue::Scalar(value) => Some(value),
        }
    }

    fn from_bson(value: Bson) -> Self {
        match value {
            Bson::Null | Bson::Undefined => MetadataValue::Empty,
            Bson::Array(items) => {
                // Non-empty arrays have not been observed; keep their scalar parts.
                let parts: Vec<String> = items.iter().filter_map(lenient::scalar_text).collect();
                if parts.is_empty() {
                    MetadataValue::Empty
                } else {
                    MetadataValue::Scalar(parts.join(", "))
                }
            }
            other => match lenient::scalar_text(&other) {
                Some(text) => MetadataValue::Scalar(text),
                None => MetadataValue::Scalar(other.to_string()),
            },
        }
    }
}

impl<'de> Deserialize<'de> for MetadataValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Bson::deserialize(deserializer).map(MetadataValue::from_bson)
    }
}

impl Serialize for MetadataValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MetadataValue::Empty => serializer.serialize_none(),
            MetadataValue::Scalar(value) => serializer.serialize_str(value),
        }
    }
}

/// A labelled metadata entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "lenient::string")]
    pub label: String,
    pub value: MetadataValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_scalar_and_empty_array_both_deserialize() {
        let scalar: Metadata =
            mongodb::bson::from_document(doc! { "label": "photographer", "value": "Jane" })
                .unwrap();
        assert_eq!(scalar.value, MetadataValue::Scalar("Jane".to_string()));

        let empty: Metadata =
            mongodb::bson::from_document(doc! { "label": "photographer", "value": [] }).unwrap();
        assert_eq!(empty.value, MetadataValue::Empty);
        assert_eq!(empty.value.as_str(), None);
    }

    #[test]
    fn test_missing_value_is_empty() {
        let meta: Metadata = mongodb::bson::from_document(doc! { "label": "x" }).unwrap();
        assert_eq!(meta.value, MetadataValue::Empty);
    }

    #[test]
    fn test_serializes_to_null_or_string() {
        let empty = Metadata {
            label: "a".to_string(),
            value: MetadataValue::Empty,
        };
        let scalar = Metadata {
            label: "b".to_string(),
            value: MetadataValue::Scalar("1".to_string()),
        };

        assert_eq!(
            serde_json::to_value(&empty).unwrap(),
            serde_json::json!({ "label": "a", "value": null })
        );
        assert_eq!(
            serde_json::to_value(&scalar).unwrap(),
            serde_json::json!({ "label": "b", "value": "1" })
        );
    }

    #[test]
    fn test_deserializes_from_json_too() {
        let meta: Metadata =
            serde_json::from_value(serde_json::json!({ "label": "a", "value": [] })).unwrap();
        assert_eq!(meta.value, MetadataValue::Empty);
    }
}
