//! End-to-end option-list construction and alteration.

use std::sync::Arc;

use seasonal_paragraphs::extensions::ExtensionRegistry;
use seasonal_paragraphs::models::{ContentRecord, FieldDefinition};
use seasonal_paragraphs::season::{Season, SeasonOption, SeasonResolver};
use seasonal_paragraphs::test_utils::{init_test_logging, summer_config};
use seasonal_paragraphs::{SeasonalError, SEASONAL_FIELD};
use serde_json::json;

fn resolver_with(extensions: ExtensionRegistry) -> SeasonResolver {
    init_test_logging(None);
    SeasonResolver::new(Arc::new(summer_config("06-01", "09-01"))).with_extensions(extensions)
}

fn seasonal_field() -> FieldDefinition {
    FieldDefinition::new(SEASONAL_FIELD, "paragraph")
}

#[test]
fn test_no_extensions_yields_exactly_the_builtin_pair() {
    let resolver = resolver_with(ExtensionRegistry::new());
    let available = resolver.available_seasons(&seasonal_field(), None).unwrap();

    assert_eq!(
        available.options,
        vec![
            SeasonOption::new(Season::Summer, "only visible in summer"),
            SeasonOption::new(Season::Winter, "only visible in winter"),
        ]
    );
    assert!(available.cacheable);
}

#[test]
fn test_extension_appends_after_builtins() {
    let mut extensions = ExtensionRegistry::new();
    extensions.register_available_seasons("christmas_module", |options, _, _| {
        options.push(SeasonOption::new("CHRISTMAS", "Merry christmas"));
        Ok(true)
    });

    let available =
        resolver_with(extensions).available_seasons(&seasonal_field(), None).unwrap();
    let ids: Vec<&str> = available.options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["summer", "winter", "CHRISTMAS"]);
}

#[test]
fn test_extensions_may_remove_and_reorder_builtins() {
    let mut extensions = ExtensionRegistry::new();
    extensions.register_available_seasons("winter_only_module", |options, _, _| {
        options.retain(|option| option.id == Season::Winter);
        Ok(true)
    });

    let available =
        resolver_with(extensions).available_seasons(&seasonal_field(), None).unwrap();
    assert_eq!(available.options.len(), 1);
    assert_eq!(available.options[0].id, Season::Winter);
}

#[test]
fn test_duplicate_ids_are_not_deduplicated() {
    let mut extensions = ExtensionRegistry::new();
    extensions.register_available_seasons("sloppy_module", |options, _, _| {
        options.push(SeasonOption::new(Season::Summer, "summer again"));
        Ok(true)
    });

    let available =
        resolver_with(extensions).available_seasons(&seasonal_field(), None).unwrap();
    let summer_count =
        available.options.iter().filter(|option| option.id == Season::Summer).count();
    assert_eq!(summer_count, 2);
}

#[test]
fn test_cacheable_downgrade_survives_later_votes() {
    let mut extensions = ExtensionRegistry::new();
    extensions.register_available_seasons("per_user_module", |_, _, record| {
        // Options depend on the concrete record, so the list must not be cached.
        Ok(record.is_none())
    });
    extensions.register_available_seasons("harmless_module", |_, _, _| Ok(true));

    let resolver = resolver_with(extensions);
    let record = ContentRecord::new("7", "paragraph");

    let with_record =
        resolver.available_seasons(&seasonal_field(), Some(&record)).unwrap();
    assert!(!with_record.cacheable);

    let without_record = resolver.available_seasons(&seasonal_field(), None).unwrap();
    assert!(without_record.cacheable);
}

#[test]
fn test_field_settings_reach_extensions_untouched() {
    let mut extensions = ExtensionRegistry::new();
    extensions.register_available_seasons("settings_module", |options, field, _| {
        if field.settings["allow_sale_season"] == json!(true) {
            options.push(SeasonOption::new("SALE", "Seasonal sale"));
        }
        Ok(true)
    });
    let resolver = resolver_with(extensions);

    let mut field = seasonal_field();
    field.settings = json!({"allow_sale_season": true});
    let available = resolver.available_seasons(&field, None).unwrap();
    assert_eq!(available.options.len(), 3);

    let plain = resolver.available_seasons(&seasonal_field(), None).unwrap();
    assert_eq!(plain.options.len(), 2);
}

#[test]
fn test_failing_extension_yields_no_partial_list() {
    let mut extensions = ExtensionRegistry::new();
    extensions.register_available_seasons("first_module", |options, _, _| {
        options.push(SeasonOption::new("EASTER", "Happy easter"));
        Ok(true)
    });
    extensions.register_available_seasons("broken_module", |_, _, _| {
        anyhow::bail!("storage offline")
    });

    let err = resolver_with(extensions)
        .available_seasons(&seasonal_field(), None)
        .unwrap_err();
    assert!(matches!(err, SeasonalError::Extension { .. }), "got {err:?}");
}
