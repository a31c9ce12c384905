//! Document store access for a single tenant.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

use crate::errors::AppError;
use crate::models::Article;
use crate::query::ArticleFind;

/// Database holding the article collection on every tenant cluster.
pub const DATABASE_NAME: &str = "Cluster";
/// Collection holding the articles.
pub const COLLECTION_NAME: &str = "articles";

/// Read access to one tenant's article collection.
///
/// This trait allows swapping the database layer in tests.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Run a validated query and materialize the matching articles.
    async fn find(&self, find: &ArticleFind) -> Result<Vec<Article>, AppError>;

    /// Round trip to the server.
    async fn ping(&self) -> Result<(), AppError>;

    /// Release connections. Called once when the server stops.
    async fn shutdown(&self) {}
}

/// MongoDB implementation of the ArticleStore.
pub struct MongoArticleStore {
    client: Client,
    collection: Collection<Article>,
}

impl MongoArticleStore {
    pub fn new(client: Client) -> Self {
        let collection = client
            .database(DATABASE_NAME)
            .collection::<Article>(COLLECTION_NAME);
        Self { client, collection }
    }
}

#[async_trait]
impl ArticleStore for MongoArticleStore {
    async fn find(&self, find: &ArticleFind) -> Result<Vec<Article>, AppError> {
        let cursor = self
            .collection
            .find(find.filter.clone())
            .with_options(find.find_options())
            .await?;

        let articles: Vec<Article> = cursor.try_collect().await?;
        Ok(articles)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database(DATABASE_NAME)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }
}
