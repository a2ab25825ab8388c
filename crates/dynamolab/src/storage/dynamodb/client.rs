//! AWS SDK client setup.

use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;

use crate::config::Config;

/// Build the retry policy for every store call.
///
/// Standard retry mode backs off exponentially with full jitter, bounded by
/// the configured base and cap. The application itself never retries.
pub fn retry_config(config: &Config) -> RetryConfig {
    RetryConfig::standard()
        .with_max_attempts(config.dynamodb_max_attempts.max(1))
        .with_initial_backoff(config.initial_backoff())
        .with_max_backoff(config.max_backoff())
}

/// Creates a DynamoDB client with the given configuration.
///
/// Credentials come from the SDK default provider chain, which reads the
/// `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` environment variables first.
pub async fn create_client(config: &Config) -> Client {
    let mut sdk_config_loader =
        aws_config::defaults(BehaviorVersion::latest()).retry_config(retry_config(config));

    if let Some(region) = &config.aws_region {
        sdk_config_loader = sdk_config_loader.region(aws_config::Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.aws_endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;

    tracing::info!(
        endpoint = config.aws_endpoint_url.as_deref().unwrap_or("default"),
        region = ?sdk_config.region(),
        max_attempts = config.dynamodb_max_attempts,
        "DynamoDB client configured"
    );

    Client::new(&sdk_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> Config {
        Config {
            notes_table_name: "tb_notes".to_string(),
            music_table_name: "Music".to_string(),
            aws_endpoint_url: None,
            aws_region: None,
            dynamodb_max_attempts: 51,
            dynamodb_initial_backoff_ms: 2_000,
            dynamodb_max_backoff_ms: 30_000,
            request_timeout_seconds: 60,
        }
    }

    #[test]
    fn test_retry_config_uses_configured_policy() {
        let retry = retry_config(&config());

        assert_eq!(retry.max_attempts(), 51);
        assert_eq!(retry.initial_backoff(), Duration::from_secs(2));
        assert_eq!(retry.max_backoff(), Duration::from_secs(30));
    }

    #[test]
    fn test_retry_config_never_drops_below_one_attempt() {
        let mut config = config();
        config.dynamodb_max_attempts = 0;

        assert_eq!(retry_config(&config).max_attempts(), 1);
    }
}
