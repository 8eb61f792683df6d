//! Shared test utilities for `algokit-core`.

use algokit_test_support::ci::property_test_profile::ProptestRunProfile;
use algokit_test_support::tracing::RecordingLayer;
use proptest::test_runner::Config as ProptestConfig;
use tracing_subscriber::layer::SubscriberExt;

/// Proptest configuration for the graph, edit-distance, and disjoint-set
/// property suites.
///
/// `default_cases` is the per-suite case count; `PROGTEST_CASES` and
/// `ALGOKIT_PBT_FORK` override it for CI runs. Processes are not forked by
/// default.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Runs `f` with a [`RecordingLayer`] installed as the thread's subscriber
/// and returns its result alongside the layer.
pub(crate) fn with_recorded_spans<T>(f: impl FnOnce() -> T) -> (T, RecordingLayer) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, layer)
}

#[cfg(feature = "metrics")]
pub(crate) use self::counting::CountingRecorder;

#[cfg(feature = "metrics")]
mod counting {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex, PoisonError};

    use metrics::{
        Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString,
        Unit,
    };

    #[derive(Default)]
    struct AtomicCounter(AtomicU64);

    impl CounterFn for AtomicCounter {
        fn increment(&self, value: u64) {
            self.0.fetch_add(value, Ordering::Relaxed);
        }

        fn absolute(&self, value: u64) {
            self.0.fetch_max(value, Ordering::Relaxed);
        }
    }

    /// Recorder that keeps counters in memory and ignores everything else.
    #[derive(Default)]
    pub(crate) struct CountingRecorder {
        counters: Mutex<Vec<(Key, Arc<AtomicCounter>)>>,
    }

    impl CountingRecorder {
        /// Sums every counter called `name` whose labels include all of
        /// `labels`.
        pub(crate) fn total(&self, name: &str, labels: &[(&str, &str)]) -> u64 {
            let counters = self
                .counters
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            counters
                .iter()
                .filter(|(key, _)| key.name() == name)
                .filter(|(key, _)| {
                    labels.iter().all(|&(label, value)| {
                        key.labels()
                            .any(|candidate| candidate.key() == label && candidate.value() == value)
                    })
                })
                .map(|(_, counter)| counter.0.load(Ordering::Relaxed))
                .sum()
        }
    }

    impl Recorder for CountingRecorder {
        fn describe_counter(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

        fn describe_gauge(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

        fn describe_histogram(
            &self,
            _key: KeyName,
            _unit: Option<Unit>,
            _description: SharedString,
        ) {
        }

        fn register_counter(&self, key: &Key, _metadata: &Metadata<'_>) -> Counter {
            let counter = Arc::new(AtomicCounter::default());
            self.counters
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((key.clone(), Arc::clone(&counter)));
            Counter::from_arc(counter)
        }

        fn register_gauge(&self, _key: &Key, _metadata: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _key: &Key, _metadata: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }
}
