//! Tenant registry.
//!
//! Built once at startup from the static tenant list and never mutated afterwards,
//! so handlers share it behind an `Arc` without locking.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use mongodb::Client;

use super::{ArticleStore, MongoArticleStore};
use crate::config::{Credentials, TenantConfig};
use crate::errors::AppError;

/// Routes a tenant key to that tenant's store.
pub struct TenantRegistry {
    stores: HashMap<String, Arc<dyn ArticleStore>>,
    /// Keys in configuration order, for deterministic health reports.
    order: Vec<String>,
    ping_timeout: Duration,
}

impl TenantRegistry {
    /// Connect every configured tenant. Any failure here is fatal for the process.
    pub async fn initialize(
        credentials: &Credentials,
        tenants: &[TenantConfig],
        ping_timeout: Duration,
    ) -> Result<Self, AppError> {
        if !credentials.is_complete() {
            return Err(AppError::Startup(
                "Missing required environment variables MONGO_USER / MONGO_PASSWORD".to_string(),
            ));
        }

        tracing::info!("Connecting to MongoDB...");

        let mut stores: Vec<(String, Arc<dyn ArticleStore>)> = Vec::with_capacity(tenants.len());
        for tenant in tenants {
            let client = Client::with_uri_str(tenant.connection_uri(credentials))
                .await
                .map_err(|e| {
                    AppError::Startup(format!("Failed to connect tenant {}: {}", tenant.key, e))
                })?;
            stores.push((tenant.key.clone(), Arc::new(MongoArticleStore::new(client))));
        }

        Self::connect(stores, ping_timeout).await
    }

    /// Build a registry and ping every store once. The driver connects lazily, so
    /// this is where an unreachable tenant is detected at boot.
    pub async fn connect<I>(stores: I, ping_timeout: Duration) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (String, Arc<dyn ArticleStore>)>,
    {
        let registry = Self::from_stores(stores, ping_timeout);

        for key in &registry.order {
            let store = &registry.stores[key];
            match tokio::time::timeout(ping_timeout, store.ping()).await {
                Ok(Ok(())) => tracing::info!("Tenant {} connected", key),
                Ok(Err(e)) => {
                    return Err(AppError::Startup(format!(
                        "Failed to connect tenant {}: {}",
                        key, e
                    )))
                }
                Err(_) => {
                    return Err(AppError::Startup(format!(
                        "Failed to connect tenant {}: ping timed out after {:?}",
                        key, ping_timeout
                    )))
                }
            }
        }

        Ok(registry)
    }

    /// Build a registry over already constructed stores.
    pub fn from_stores<I>(stores: I, ping_timeout: Duration) -> Self
    where
        I: IntoIterator<Item = (String, Arc<dyn ArticleStore>)>,
    {
        let mut map = HashMap::new();
        let mut order = Vec::new();
        for (key, store) in stores {
            if map.insert(key.clone(), store).is_none() {
                order.push(key);
            }
        }

        Self {
            stores: map,
            order,
            ping_timeout,
        }
    }

    /// Look up the store for a tenant key.
    pub fn resolve(&self, tenant: &str) -> Result<&Arc<dyn ArticleStore>, AppError> {
        self.stores
            .get(tenant)
            .ok_or_else(|| AppError::UnknownTenant(tenant.to_string()))
    }

    /// Registered tenant keys in configuration order.
    pub fn tenants(&self) -> &[String] {
        &self.order
    }

    /// Ping every tenant. Reports the first failing tenant in configuration order.
    pub async fn health_check(&self) -> Result<(), AppError> {
        let pings = self.order.iter().map(|key| async move {
            let store = &self.stores[key];
            let outcome = match tokio::time::timeout(self.ping_timeout, store.ping()).await {
                Ok(result) => result,
                Err(_) => Err(AppError::StoreUnavailable(format!(
                    "ping timed out after {:?}",
                    self.ping_timeout
                ))),
            };
            (key, outcome)
        });

        for (key, outcome) in join_all(pings).await {
            if let Err(e) = outcome {
                tracing::error!("Health check failed for tenant {}: {}", key, e);
                return Err(AppError::Unreachable(key.clone()));
            }
        }

        Ok(())
    }

    /// Shut down every tenant's connections.
    pub async fn shutdown(&self) {
        join_all(self.stores.values().map(|store| store.shutdown())).await;
        tracing::info!("Disconnected from MongoDB");
    }
}
