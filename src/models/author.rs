//! Author model as stored on articles and media.

use serde::{Deserialize, Serialize};

use super::{lenient, Metadata};

/// A byline author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub uuid: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(deserialize_with = "lenient::string")]
    pub bio: String,
    #[serde(deserialize_with = "lenient::string")]
    pub tagline: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub metadata: Vec<Metadata>,
    #[serde(deserialize_with = "lenient::string")]
    pub ceoid: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
}
