//! Article API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::ApiResult;
use crate::models::Article;
use crate::query::{ArticleFind, ArticleQuery};
use crate::AppState;

/// GET /{tenant}/articles - Query articles by slug, author, tag, popularity.
pub async fn list_articles(
    State(state): State<AppState>,
    Path(tenant): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Article>>> {
    let find = ArticleQuery::from_pairs(pairs).build()?;
    let articles = state.articles.query(&tenant, &find).await?;
    Ok(Json(articles))
}

/// GET /{tenant}/articles/recent/{count} - First `count` articles, unfiltered.
pub async fn recent_articles(
    State(state): State<AppState>,
    Path((tenant, count)): Path<(String, String)>,
) -> ApiResult<Json<Vec<Article>>> {
    let find = ArticleFind::recent(&count)?;
    let articles = state.articles.query(&tenant, &find).await?;
    Ok(Json(articles))
}
