//! In-memory article store used by the test suite.
//!
//! Evaluates the part of the MongoDB query language the query builder emits:
//! field equality, `$all` over `$elemMatch` sub-documents, a single-key sort and
//! a limit.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use super::ArticleStore;
use crate::errors::AppError;
use crate::models::Article;
use crate::query::ArticleFind;

#[derive(Default)]
pub struct InMemoryArticleStore {
    documents: Vec<Document>,
    unreachable: bool,
    delay: Option<Duration>,
    pub find_calls: AtomicU64,
}

impl InMemoryArticleStore {
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents,
            ..Self::default()
        }
    }

    /// A store whose every call fails.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn round_trip(&self) -> Result<(), AppError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.unreachable {
            return Err(AppError::StoreUnavailable(
                "server selection timeout".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn find(&self, find: &ArticleFind) -> Result<Vec<Article>, AppError> {
        self.find_calls.fetch_add(1, AtomicOrdering::Relaxed);
        self.round_trip().await?;

        let mut matched: Vec<&Document> = self
            .documents
            .iter()
            .filter(|doc| satisfies(doc, &find.filter))
            .collect();

        if let Some(sort) = find.sort_document() {
            let numeric_text = find
                .collation()
                .and_then(|c| c.numeric_ordering)
                .unwrap_or(false);
            if let Some((field, direction)) = sort.iter().next() {
                let descending = matches!(direction, Bson::Int32(n) if *n < 0);
                matched.sort_by(|a, b| {
                    let ordering = compare(a.get(field), b.get(field), numeric_text);
                    if descending {
                        ordering.reverse()
                    } else {
                        ordering
                    }
                });
            }
        }

        if let Some(limit) = find.limit.filter(|n| *n > 0) {
            matched.truncate(limit as usize);
        }

        matched
            .into_iter()
            .map(|doc| {
                mongodb::bson::from_document(doc.clone())
                    .map_err(|e| AppError::StoreUnavailable(format!("decode failed: {}", e)))
            })
            .collect()
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.round_trip().await
    }
}

fn satisfies(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(field, condition)| match condition {
        Bson::Document(ops) if ops.keys().any(|k| k.starts_with('$')) => {
            ops.iter().all(|(op, arg)| match (op.as_str(), arg) {
                ("$all", Bson::Array(items)) => {
                    items.iter().all(|item| array_contains(doc.get(field), item))
                }
                _ => false,
            })
        }
        expected => doc.get(field) == Some(expected),
    })
}

fn array_contains(field: Option<&Bson>, item: &Bson) -> bool {
    let Some(Bson::Array(entries)) = field else {
        return false;
    };

    match item {
        Bson::Document(clause) => match clause.get_document("$elemMatch") {
            Ok(sub) => entries
                .iter()
                .any(|entry| matches!(entry, Bson::Document(d) if satisfies(d, sub))),
            Err(_) => entries.contains(item),
        },
        other => entries.contains(other),
    }
}

/// Sort key following the server's cross-type order: missing, then numbers, then strings.
#[derive(Debug, PartialEq, PartialOrd)]
enum SortKey<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

fn sort_key(value: Option<&Bson>) -> SortKey<'_> {
    match value {
        Some(Bson::Int32(n)) => SortKey::Number(f64::from(*n)),
        Some(Bson::Int64(n)) => SortKey::Number(*n as f64),
        Some(Bson::Double(n)) => SortKey::Number(*n),
        Some(Bson::String(s)) => SortKey::Text(s),
        _ => SortKey::Missing,
    }
}

/// Strings compare bytewise unless the collation asks for numeric ordering.
fn compare(a: Option<&Bson>, b: Option<&Bson>, numeric_text: bool) -> Ordering {
    match (sort_key(a), sort_key(b)) {
        (SortKey::Text(x), SortKey::Text(y)) if numeric_text => {
            match (x.trim().parse::<f64>(), y.trim().parse::<f64>()) {
                (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => x.cmp(y),
            }
        }
        (x, y) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_compares_bytewise_without_numeric_collation() {
        let low = Bson::String("950".to_string());
        let high = Bson::String("1200".to_string());

        assert_eq!(compare(Some(&low), Some(&high), false), Ordering::Greater);
        assert_eq!(compare(Some(&low), Some(&high), true), Ordering::Less);
    }

    #[test]
    fn test_cross_type_order() {
        let number = Bson::Int32(5);
        let text = Bson::String("1".to_string());

        assert_eq!(compare(None, Some(&number), true), Ordering::Less);
        assert_eq!(compare(Some(&number), Some(&text), true), Ordering::Less);
    }
}
