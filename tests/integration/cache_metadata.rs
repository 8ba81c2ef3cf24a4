//! The cache metadata contract: tags, contexts, max-age.

use std::sync::Arc;

use seasonal_paragraphs::cache::{CacheMaxAge, SEASONAL_CACHE_TAG};
use seasonal_paragraphs::config::SITE_CONFIG_CACHE_TAG;
use seasonal_paragraphs::season::SeasonResolver;
use seasonal_paragraphs::test_utils::{init_test_logging, summer_config};

fn resolver() -> SeasonResolver {
    init_test_logging(None);
    SeasonResolver::new(Arc::new(summer_config("06-01", "09-01")))
}

#[test]
fn test_tags_union_config_and_seasonal() {
    let metadata = resolver().cache_metadata().unwrap();
    assert!(metadata.has_tag(SEASONAL_CACHE_TAG));
    assert!(metadata.has_tag(SITE_CONFIG_CACHE_TAG));
    assert_eq!(metadata.tags.len(), 2);
}

#[test]
fn test_no_contexts_and_permanent_max_age() {
    let metadata = resolver().cache_metadata().unwrap();
    assert!(metadata.contexts.is_empty(), "result must not vary by request context");
    assert_eq!(metadata.max_age, CacheMaxAge::Permanent);
}

#[test]
fn test_expiring_tags_declared_for_the_scheduler() {
    assert_eq!(SeasonResolver::expiring_cache_tags(), [SEASONAL_CACHE_TAG]);
}

#[test]
fn test_descriptor_serializes_for_host_storage() {
    let metadata = resolver().cache_metadata().unwrap();
    let json = serde_json::to_string(&metadata).unwrap();
    assert!(json.contains(SEASONAL_CACHE_TAG));

    let parsed: seasonal_paragraphs::CacheDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, metadata);
}
