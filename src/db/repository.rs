//! Article query service.
//!
//! Resolves the tenant, runs the query under a deadline and returns the articles.

use std::sync::Arc;
use std::time::Duration;

use super::TenantRegistry;
use crate::errors::AppError;
use crate::models::Article;
use crate::query::ArticleFind;

/// Read-only access to the articles of every registered tenant.
#[derive(Clone)]
pub struct ArticleRepository {
    registry: Arc<TenantRegistry>,
    query_timeout: Duration,
}

impl ArticleRepository {
    pub fn new(registry: Arc<TenantRegistry>, query_timeout: Duration) -> Self {
        Self {
            registry,
            query_timeout,
        }
    }

    /// Run a validated query against one tenant.
    pub async fn query(&self, tenant: &str, find: &ArticleFind) -> Result<Vec<Article>, AppError> {
        let store = self.registry.resolve(tenant)?;

        // The driver reads a zero limit as "no limit".
        if find.is_empty_page() {
            return Ok(Vec::new());
        }

        match tokio::time::timeout(self.query_timeout, store.find(find)).await {
            Ok(Ok(articles)) => {
                tracing::debug!("Tenant {} returned {} articles", tenant, articles.len());
                Ok(articles)
            }
            Ok(Err(e)) => {
                tracing::error!("Query against tenant {} failed: {}", tenant, e);
                Err(match e {
                    AppError::StoreUnavailable(_) => e,
                    other => AppError::StoreUnavailable(other.to_string()),
                })
            }
            Err(_) => {
                tracing::error!(
                    "Query against tenant {} exceeded {:?}",
                    tenant,
                    self.query_timeout
                );
                Err(AppError::StoreUnavailable(format!(
                    "query timed out after {:?}",
                    self.query_timeout
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::InMemoryArticleStore;
    use crate::db::ArticleStore;
    use crate::query::ArticleQuery;
    use mongodb::bson::doc;
    use std::sync::atomic::Ordering;

    fn repository(store: Arc<InMemoryArticleStore>, timeout: Duration) -> ArticleRepository {
        let registry = TenantRegistry::from_stores(
            vec![("dp".to_string(), store as Arc<dyn ArticleStore>)],
            timeout,
        );
        ArticleRepository::new(Arc::new(registry), timeout)
    }

    fn find(items: &[(&str, &str)]) -> ArticleFind {
        ArticleQuery::from_pairs(items.iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_unknown_tenant() {
        let repo = repository(Arc::new(InMemoryArticleStore::default()), Duration::from_secs(1));
        let result = repo.query("nyt", &find(&[("limit", "1")])).await;
        assert!(matches!(result, Err(AppError::UnknownTenant(_))));
    }

    #[tokio::test]
    async fn test_zero_limit_skips_store() {
        let store = Arc::new(InMemoryArticleStore::with_documents(vec![
            doc! { "slug": "a" },
        ]));
        let repo = repository(store.clone(), Duration::from_secs(1));

        let articles = repo.query("dp", &find(&[("limit", "0")])).await.unwrap();
        assert!(articles.is_empty());
        assert_eq!(store.find_calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_store_failure_is_unavailable() {
        let repo = repository(
            Arc::new(InMemoryArticleStore::unreachable()),
            Duration::from_secs(1),
        );
        let result = repo.query("dp", &find(&[("limit", "1")])).await;
        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_deadline_maps_to_unavailable() {
        let store = InMemoryArticleStore::default().with_delay(Duration::from_secs(5));
        let repo = repository(Arc::new(store), Duration::from_millis(50));

        let result = repo.query("dp", &find(&[("limit", "1")])).await;
        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }
}
