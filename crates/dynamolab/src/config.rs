use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Notes table name (default: "tb_notes")
    pub notes_table_name: String,
    /// Music table name (default: "Music")
    pub music_table_name: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local (default: none)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_endpoint_url: Option<String>,
    /// AWS region override (default: resolved by the SDK provider chain)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_region: Option<String>,
    /// Maximum attempts per store call, including the first one (default: 51)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub dynamodb_max_attempts: u32,
    /// Base delay for the full-jitter backoff in milliseconds (default: 2,000)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub dynamodb_initial_backoff_ms: u64,
    /// Upper bound for a single backoff delay in milliseconds (default: 30,000)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub dynamodb_max_backoff_ms: u64,
    /// Per-request timeout enforced by the HTTP layer (default: 60)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `NOTES_TABLE_NAME` - Notes table (default: "tb_notes")
    /// - `MUSIC_TABLE_NAME` - Music table (default: "Music")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint, e.g. `http://localhost:8000`
    /// - `AWS_REGION` - Region override
    /// - `DYNAMODB_MAX_ATTEMPTS` - Max attempts per call (default: 51)
    /// - `DYNAMODB_INITIAL_BACKOFF_MS` - Backoff base delay (default: 2,000)
    /// - `DYNAMODB_MAX_BACKOFF_MS` - Backoff cap (default: 30,000)
    /// - `REQUEST_TIMEOUT_SECONDS` - HTTP request timeout (default: 60)
    pub fn from_env() -> Self {
        Self {
            notes_table_name: env::var("NOTES_TABLE_NAME")
                .unwrap_or_else(|_| "tb_notes".to_string()),
            music_table_name: env::var("MUSIC_TABLE_NAME").unwrap_or_else(|_| "Music".to_string()),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            aws_region: env::var("AWS_REGION").ok(),
            dynamodb_max_attempts: env::var("DYNAMODB_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(51),
            dynamodb_initial_backoff_ms: env::var("DYNAMODB_INITIAL_BACKOFF_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2_000),
            dynamodb_max_backoff_ms: env::var("DYNAMODB_MAX_BACKOFF_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Get the initial backoff as a Duration.
    #[allow(dead_code)]
    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.dynamodb_initial_backoff_ms)
    }

    /// Get the maximum backoff as a Duration.
    #[allow(dead_code)]
    pub fn max_backoff(&self) -> Duration {
        Duration::from_millis(self.dynamodb_max_backoff_ms)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
