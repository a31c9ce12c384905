//! Configuration module for the articles API.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

/// A publication backed by its own MongoDB cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantConfig {
    /// Path key used in request URLs (e.g. `dp`)
    pub key: String,
    /// Atlas SRV host of the tenant's cluster
    pub host: String,
}

impl TenantConfig {
    pub fn new(key: &str, host: &str) -> Self {
        Self {
            key: key.to_string(),
            host: host.to_string(),
        }
    }

    /// Build the connection URI for this tenant. Contains the password, never log it.
    pub fn connection_uri(&self, credentials: &Credentials) -> String {
        format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
            credentials.user, credentials.password, self.host
        )
    }
}

/// The publications served by this API.
pub const DEFAULT_TENANTS: &[(&str, &str)] = &[
    ("dp", "dp.5aehsyo.mongodb.net"),
    ("34st", "34st.rvmlxes.mongodb.net"),
    ("utb", "utb.rjdlubs.mongodb.net"),
];

/// Database credential pair shared by every tenant.
#[derive(Clone, Default)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.user.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credentials interpolated into every tenant's connection URI
    pub credentials: Credentials,
    /// Tenants to connect at startup
    pub tenants: Vec<TenantConfig>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Deadline for a single store round trip
    pub query_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let credentials = Credentials {
            user: env::var("MONGO_USER").unwrap_or_default(),
            password: env::var("MONGO_PASSWORD").unwrap_or_default(),
        };

        let tenants = DEFAULT_TENANTS
            .iter()
            .map(|(key, host)| TenantConfig::new(key, host))
            .collect();

        let bind_addr = env::var("API_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:80".to_string())
            .parse()
            .expect("Invalid API_BIND_ADDR format");

        let log_level = env::var("API_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("API_LOG_JSON")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let query_timeout = env::var("API_QUERY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        Self {
            credentials,
            tenants,
            bind_addr,
            log_level,
            log_json,
            query_timeout,
        }
    }
}
