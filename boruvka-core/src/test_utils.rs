//! Shared test utilities for `boruvka-core`.

use boruvka_test_support::ci::suite_profile::SuiteProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Suite profile with `default_cases` and any environment overrides applied.
pub(crate) fn suite_profile(default_cases: u32) -> SuiteProfile {
    SuiteProfile::default()
        .with_cases(default_cases)
        .with_env_overrides()
}

/// Builds a proptest configuration from [`suite_profile`].
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = suite_profile(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Engine runs per input for the concurrency property.
pub(crate) fn concurrency_repetitions() -> usize {
    SuiteProfile::default()
        .with_env_overrides()
        .concurrency_reps()
}
