//! Integration tests for the process-wide default configuration

use super::{EnvGuard, ENV_MUTEX};
use sdkconf::config::{default_config, ServiceConfig, DEFAULT_RETRIES, REGION_ENV_VAR};
use sdkconf::credentials::default_chain_credentials;
use sdkconf::logging::LogSink;

#[test]
fn test_missing_region_env_yields_empty_region() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let _env = EnvGuard::new(&[(REGION_ENV_VAR, None)]);

    let config = ServiceConfig::defaults_from_env();
    assert_eq!(config.region, Some(String::new()));
}

#[test]
fn test_region_env_seeds_region() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let _env = EnvGuard::new(&[(REGION_ENV_VAR, Some("ca-central-1"))]);

    let config = ServiceConfig::defaults_from_env();
    assert_eq!(config.region.as_deref(), Some("ca-central-1"));
}

#[test]
fn test_default_config_handles() {
    let config = default_config();
    assert!(config
        .credentials
        .as_ref()
        .unwrap()
        .same_provider(default_chain_credentials()));
    assert!(config.logger.as_ref().unwrap().same_sink(LogSink::stdout()));
    assert_eq!(config.max_retries, Some(DEFAULT_RETRIES));
    assert!(config.region.is_some());
}

#[test]
fn test_concurrent_readers_see_same_default() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let overrides = ServiceConfig::new().with_max_retries(i);
                let merged = default_config().merge(Some(&overrides));
                assert_eq!(merged.max_retries, Some(i));
                default_config() as *const ServiceConfig as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(default_config().max_retries, Some(DEFAULT_RETRIES));
}
