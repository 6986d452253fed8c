//! Integration tests for duplicating and merging configuration records

use sdkconf::config::{ServiceConfig, DEFAULT_RETRIES};
use sdkconf::credentials::{Credentials, SharedCredentialsProvider};
use sdkconf::http::HttpClient;
use sdkconf::logging::LogSink;

#[test]
fn test_region_kept_when_override_only_sets_retries() {
    let base = ServiceConfig::new().with_region("us-east-1");
    let overrides = ServiceConfig::new().with_max_retries(3);

    let merged = base.merge(Some(&overrides));
    assert_eq!(merged.region.as_deref(), Some("us-east-1"));
    assert_eq!(merged.max_retries, Some(3));
    assert_eq!(merged.disable_ssl, None);
}

#[test]
fn test_explicit_zero_log_level_differs_from_absent() {
    let zero_base = ServiceConfig::new().with_log_level(0);
    let explicit_zero = ServiceConfig::new().with_log_level(0);
    assert_eq!(zero_base.merge(Some(&explicit_zero)).log_level, Some(0));

    let verbose_base = ServiceConfig::new().with_log_level(2);
    assert_eq!(verbose_base.merge(Some(&explicit_zero)).log_level, Some(0));
    assert_eq!(verbose_base.merge(Some(&ServiceConfig::new())).log_level, Some(2));
}

#[test]
fn test_explicit_false_clears_disable_ssl() {
    let base = ServiceConfig::new().with_disable_ssl(true);
    let overrides = ServiceConfig::new().with_disable_ssl(false);
    assert_eq!(base.merge(Some(&overrides)).disable_ssl, Some(false));
}

#[test]
fn test_client_config_from_defaults_and_overrides() {
    let base = ServiceConfig::defaults_for_region("us-east-1");
    let creds = Credentials::new(SharedCredentialsProvider {
        filename: "/tmp/credentials".to_string(),
        profile: "ci".to_string(),
    });
    let overrides = ServiceConfig::new()
        .with_credentials(creds.clone())
        .with_endpoint("http://localhost:4566")
        .with_disable_ssl(true)
        .with_force_path_style(true);

    let merged = base.merge(Some(&overrides));
    assert!(merged.credentials.as_ref().unwrap().same_provider(&creds));
    assert_eq!(merged.endpoint.as_deref(), Some("http://localhost:4566"));
    assert!(!merged.uses_default_endpoint());
    assert_eq!(merged.force_path_style, Some(true));
    assert_eq!(merged.max_retries, Some(DEFAULT_RETRIES));
    assert_eq!(merged.http_client, base.http_client);
    assert_eq!(merged.logger, base.logger);

    // Base is untouched
    assert_eq!(base.disable_ssl, Some(false));
    assert_eq!(base.endpoint.as_deref(), Some(""));
}

#[test]
fn test_writes_through_shared_logger_reach_both_copies() {
    let path = tempfile::NamedTempFile::new().unwrap();
    let file = path.reopen().unwrap();
    let original = ServiceConfig::new().with_logger(LogSink::new("file", file));
    let copy = original.duplicate();

    original.logger.as_ref().unwrap().write_line("from original").unwrap();
    copy.logger.as_ref().unwrap().write_line("from copy").unwrap();
    copy.logger.as_ref().unwrap().flush().unwrap();

    let contents = std::fs::read_to_string(path.path()).unwrap();
    assert_eq!(contents, "from original\nfrom copy\n");
}

#[test]
fn test_duplicate_then_edit_leaves_source() {
    let source = ServiceConfig::defaults_for_region("us-west-1");
    let mut copy = source.duplicate();
    copy.region = Some("eu-west-3".to_string());
    copy.http_client = Some(HttpClient::new(reqwest::Client::new()));

    assert_eq!(source.region.as_deref(), Some("us-west-1"));
    assert_ne!(source.http_client, copy.http_client);
    assert_eq!(source.credentials, copy.credentials);
}
