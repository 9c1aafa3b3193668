//! Global metrics recorded by the provider.
//!
//! Kept in their own test binary so no unrelated test touches the shared
//! counters; `#[serial]` orders the tests within it.

use serial_test::serial;
use std::rc::Rc;

use live_localization::i18n::{
    LanguageTag, LocalizationBridge, LocalizationMetrics, LocalizationProvider, Provider,
    StaticTables, Table,
};

fn greeting_provider() -> Rc<LocalizationProvider> {
    let source = StaticTables::new()
        .with_table(
            LanguageTag::parse("en").unwrap(),
            Table::from_static(&[("greeting", "Hello")]),
        )
        .with_table(
            LanguageTag::parse("hr").unwrap(),
            Table::from_static(&[("greeting", "Bok")]),
        );
    Rc::new(LocalizationProvider::new(source, "en").unwrap())
}

// ==================== Metrics Tests ====================

#[test]
#[serial]
fn test_metrics_count_lookup_failures() {
    let metrics = LocalizationMetrics::global();
    metrics.reset();

    let provider = greeting_provider();
    provider.get_string("greeting");
    provider.get_string("nope");

    let report = metrics.report();
    assert_eq!(report.lookups, 2);
    assert_eq!(report.missing_keys, 1);
    assert_eq!(report.lookup_failure_rate, 50.0);
}

#[test]
#[serial]
fn test_metrics_count_switch_notifications() {
    let metrics = LocalizationMetrics::global();
    metrics.reset();

    let provider = greeting_provider();
    let a = LocalizationBridge::new(provider.clone());
    let b = LocalizationBridge::new(provider.clone());
    a.connect();
    b.connect();

    provider.set_language("hr").unwrap();
    provider.set_language("HR").unwrap();

    assert_eq!(metrics.language_switches(), 1);
    assert_eq!(metrics.notifications(), 2);
}
