//! Article and dominant media models.
//!
//! Field names on the wire are the stored document field names, so a response
//! mirrors what the CMS export wrote into the collection.

use serde::{Deserialize, Serialize};

use super::{lenient, Author, Metadata, Tag};

/// A published article.
///
/// Timestamps exist twice: as CMS-formatted strings (`createdat`, ...) and as epoch
/// seconds (`ctime`, ...). The two forms are not normalized against each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(rename = "_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub uuid: String,
    #[serde(deserialize_with = "lenient::string")]
    pub slug: String,
    #[serde(rename = "seotitle", deserialize_with = "lenient::string")]
    pub seo_title: String,
    #[serde(rename = "seodescription", deserialize_with = "lenient::string")]
    pub seo_description: String,
    #[serde(rename = "seoimage", deserialize_with = "lenient::string")]
    pub seo_image: String,
    #[serde(deserialize_with = "lenient::string")]
    pub headline: String,
    #[serde(deserialize_with = "lenient::string")]
    pub subhead: String,
    #[serde(rename = "abstract", deserialize_with = "lenient::string")]
    pub abstract_text: String,
    #[serde(deserialize_with = "lenient::string")]
    pub content: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub infobox: serde_json::Value,
    #[serde(deserialize_with = "lenient::string")]
    pub template: String,
    #[serde(rename = "shorttoken", deserialize_with = "lenient::string")]
    pub short_token: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::string")]
    pub weight: String,
    #[serde(rename = "mediaid", deserialize_with = "lenient::string")]
    pub media_id: String,
    #[serde(rename = "createdat", deserialize_with = "lenient::string")]
    pub created_at: String,
    #[serde(rename = "modifiedat", deserialize_with = "lenient::string")]
    pub modified_at: String,
    #[serde(rename = "publishedat", deserialize_with = "lenient::string")]
    pub published_at: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub metadata: Vec<Metadata>,
    /// View counter, stored as text.
    #[serde(deserialize_with = "lenient::string")]
    pub hits: String,
    #[serde(rename = "normalizedtags", deserialize_with = "lenient::string")]
    pub normalized_tags: String,
    #[serde(rename = "ceoid", deserialize_with = "lenient::string")]
    pub ceo_id: String,
    #[serde(rename = "sstsid", deserialize_with = "lenient::string")]
    pub ssts_id: String,
    #[serde(rename = "sstsPath", deserialize_with = "lenient::string")]
    pub ssts_path: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub authors: Vec<Author>,
    #[serde(rename = "dominantmedia", deserialize_with = "lenient::or_default")]
    pub dominant_media: Media,
    #[serde(rename = "ctime", deserialize_with = "lenient::integer")]
    pub created_time: i64,
    #[serde(rename = "mtime", deserialize_with = "lenient::integer")]
    pub modified_time: i64,
    #[serde(rename = "ptime", deserialize_with = "lenient::integer")]
    pub published_time: i64,
}

impl Article {
    /// Numeric view count, if `hits` holds a number.
    pub fn hit_count(&self) -> Option<i64> {
        self.hits.trim().parse().ok()
    }
}

/// The media attachment shown with an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub content: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub authors: Vec<Author>,
    #[serde(deserialize_with = "lenient::string")]
    pub base_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub extension: String,
    #[serde(deserialize_with = "lenient::string")]
    pub seo_title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub seo_description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub seo_image: String,
    #[serde(deserialize_with = "lenient::string")]
    pub source: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub metadata: Vec<Metadata>,
    #[serde(deserialize_with = "lenient::string")]
    pub normalized_tags: String,
    #[serde(deserialize_with = "lenient::string")]
    pub uuid: String,
    #[serde(deserialize_with = "lenient::string")]
    pub click_through: String,
    #[serde(deserialize_with = "lenient::string")]
    pub svg_preview: String,
    #[serde(deserialize_with = "lenient::string")]
    pub ssts_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub ssts_path: String,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub media_type: String,
    #[serde(deserialize_with = "lenient::string")]
    pub ceo_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub weight: String,
    #[serde(deserialize_with = "lenient::string")]
    pub hits: String,
    #[serde(deserialize_with = "lenient::string")]
    pub attachment_uuid: String,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::string")]
    pub created_at: String,
    #[serde(deserialize_with = "lenient::string")]
    pub modified_at: String,
    #[serde(deserialize_with = "lenient::string")]
    pub published_at: String,
    #[serde(deserialize_with = "lenient::string")]
    pub preview_extension: String,
    #[serde(deserialize_with = "lenient::string")]
    pub height: String,
    #[serde(deserialize_with = "lenient::string")]
    pub width: String,
    #[serde(deserialize_with = "lenient::string")]
    pub transcoded: String,
}
