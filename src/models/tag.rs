//! Tag model as stored on each article.

use serde::{Deserialize, Serialize};

use super::{lenient, Metadata};

/// A taxonomy tag embedded in an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub uuid: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub metadata: Vec<Metadata>,
    #[serde(deserialize_with = "lenient::string")]
    pub ceoid: String,
}
