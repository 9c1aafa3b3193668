//! Localization metrics and observability module.
//!
//! Counts lookups, lookup failures, language switches and the listener
//! notifications they fan out to.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Localization counters.
///
/// The provider records into [`LocalizationMetrics::global`]; separate
/// instances can be created for isolated measurements.
#[derive(Debug, Default)]
pub struct LocalizationMetrics {
    /// Number of `get_string` calls on a root provider
    lookups: AtomicUsize,

    /// Number of lookups for keys absent from the active table
    missing_keys: AtomicUsize,

    /// Number of lookups whose stored value was not valid UTF-8
    decoding_failures: AtomicUsize,

    /// Number of language switches that actually changed the language
    language_switches: AtomicUsize,

    /// Number of listeners invoked by language switches
    notifications: AtomicUsize,
}

static METRICS: OnceLock<LocalizationMetrics> = OnceLock::new();

impl LocalizationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global metrics instance.
    pub fn global() -> &'static LocalizationMetrics {
        METRICS.get_or_init(LocalizationMetrics::new)
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_decoding_failure(&self) {
        self.decoding_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_switch(&self) {
        self.language_switches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record `count` listener invocations from one fan-out.
    pub fn record_notifications(&self, count: usize) {
        self.notifications.fetch_add(count, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    pub fn decoding_failures(&self) -> usize {
        self.decoding_failures.load(Ordering::Relaxed)
    }

    pub fn language_switches(&self) -> usize {
        self.language_switches.load(Ordering::Relaxed)
    }

    pub fn notifications(&self) -> usize {
        self.notifications.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let missing_keys = self.missing_keys();
        let decoding_failures = self.decoding_failures();
        let failed = missing_keys + decoding_failures;
        let lookup_failure_rate = if lookups > 0 {
            (failed as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            missing_keys,
            decoding_failures,
            lookup_failure_rate,
            language_switches: self.language_switches(),
            notifications: self.notifications(),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.missing_keys.store(0, Ordering::Relaxed);
        self.decoding_failures.store(0, Ordering::Relaxed);
        self.language_switches.store(0, Ordering::Relaxed);
        self.notifications.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the localization counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub missing_keys: usize,
    pub decoding_failures: usize,

    /// Failed lookups as a percentage of all lookups (0-100)
    pub lookup_failure_rate: f64,

    pub language_switches: usize,
    pub notifications: usize,
}
