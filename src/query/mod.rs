//! Article query builder.
//!
//! Turns the optional, independently combinable request parameters into one
//! conjunctive MongoDB filter plus find options.

use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{Collation, FindOptions};

use crate::errors::ValidationError;

/// Supported result orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Descending view count
    Popular,
}

impl SortStrategy {
    /// Parse a `sort` parameter. Empty means "no sort".
    ///
    /// Date based orderings (`new`, `old`) are rejected until the stored publish
    /// dates share one format.
    pub fn parse(value: &str) -> Result<Option<Self>, ValidationError> {
        match value {
            "" => Ok(None),
            "popular" => Ok(Some(SortStrategy::Popular)),
            _ => Err(ValidationError::InvalidSort),
        }
    }

    fn sort_document(&self) -> Document {
        match self {
            SortStrategy::Popular => doc! { "hits": -1 },
        }
    }

    /// `hits` is stored as text, so it needs numeric ordering to sort by value.
    fn collation(&self) -> Collation {
        match self {
            SortStrategy::Popular => Collation::builder()
                .locale("en")
                .numeric_ordering(true)
                .build(),
        }
    }
}

/// Raw request parameters for an article query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub slug: Option<String>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
}

impl ArticleQuery {
    /// Collect parameters from decoded query string pairs.
    ///
    /// `author`/`author[]` and `tag`/`tag[]` may repeat; blank values are dropped.
    /// For single-valued keys the first occurrence wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = ArticleQuery::default();

        for (key, value) in pairs {
            match key.as_str() {
                "slug" => {
                    if query.slug.is_none() && !value.is_empty() {
                        query.slug = Some(value);
                    }
                }
                "author" | "author[]" => {
                    if !value.trim().is_empty() {
                        query.authors.push(value);
                    }
                }
                "tag" | "tag[]" => {
                    if !value.trim().is_empty() {
                        query.tags.push(value);
                    }
                }
                "sort" => {
                    if query.sort.is_none() {
                        query.sort = Some(value);
                    }
                }
                "limit" => {
                    if query.limit.is_none() && !value.is_empty() {
                        query.limit = Some(value);
                    }
                }
                _ => {}
            }
        }

        query
    }

    /// Validate the parameters and compose the store query.
    ///
    /// Clauses appear in the order slug, authors, tags. A query with no clause
    /// must carry a limit.
    pub fn build(&self) -> Result<ArticleFind, ValidationError> {
        let mut filter = Document::new();

        if let Some(slug) = self.slug.as_deref().filter(|s| !s.is_empty()) {
            filter.insert("slug", slug);
        }
        if !self.authors.is_empty() {
            filter.insert("authors", contains_all_slugs(&self.authors));
        }
        if !self.tags.is_empty() {
            filter.insert("tags", contains_all_slugs(&self.tags));
        }

        let sort = SortStrategy::parse(self.sort.as_deref().unwrap_or(""))?;

        let limit = match self.limit.as_deref() {
            Some(raw) => Some(parse_limit(raw)?),
            None if filter.is_empty() => return Err(ValidationError::LimitRequired),
            None => None,
        };

        Ok(ArticleFind {
            filter,
            sort,
            limit,
        })
    }
}

/// `{"$all": [{"$elemMatch": {"slug": s}}, ...]}` for every slug.
fn contains_all_slugs(slugs: &[String]) -> Document {
    let clauses: Vec<Bson> = slugs
        .iter()
        .map(|slug| Bson::Document(doc! { "$elemMatch": { "slug": slug.as_str() } }))
        .collect();
    doc! { "$all": clauses }
}

fn parse_limit(raw: &str) -> Result<i64, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(ValidationError::InvalidLimit),
    }
}

/// A validated query, ready to run against a tenant's collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleFind {
    pub filter: Document,
    pub sort: Option<SortStrategy>,
    pub limit: Option<i64>,
}

impl ArticleFind {
    /// Unfiltered query returning at most `count` articles, for the legacy recent endpoint.
    pub fn recent(count: &str) -> Result<Self, ValidationError> {
        ArticleQuery {
            limit: Some(count.to_string()),
            ..ArticleQuery::default()
        }
        .build()
        .map_err(|_| ValidationError::InvalidCount)
    }

    pub fn sort_document(&self) -> Option<Document> {
        self.sort.as_ref().map(SortStrategy::sort_document)
    }

    pub fn collation(&self) -> Option<Collation> {
        self.sort.as_ref().map(SortStrategy::collation)
    }

    /// True when the query can only return nothing.
    pub fn is_empty_page(&self) -> bool {
        self.limit == Some(0)
    }

    pub fn find_options(&self) -> FindOptions {
        FindOptions::builder()
            .sort(self.sort_document())
            .collation(self.collation())
            .limit(self.limit)
            .build()
    }
}
