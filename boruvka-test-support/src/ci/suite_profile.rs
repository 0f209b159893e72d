//! Environment knobs for the workspace's property suites.
//!
//! A [`SuiteProfile`] starts from compiled-in defaults and then takes
//! overrides from the process environment. Malformed overrides are logged and
//! ignored so a bad CI variable never aborts a suite.

use std::env;

/// Number of proptest cases per property.
pub const CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Whether proptest runs each case in a forked subprocess.
pub const FORK_ENV_KEY: &str = "BORUVKA_PBT_FORK";
/// How often the concurrency property re-runs the engine on one input.
pub const CONCURRENCY_REPS_ENV_KEY: &str = "BORUVKA_PBT_CONCURRENCY_REPS";

const DEFAULT_CASES: u32 = 64;
const DEFAULT_CONCURRENCY_REPS: usize = 5;

/// Settings shared by the property suites.
///
/// # Examples
///
/// ```
/// use boruvka_test_support::ci::suite_profile::SuiteProfile;
///
/// let profile = SuiteProfile::default()
///     .with_cases(128)
///     .with_overrides(|_| None);
/// assert_eq!(profile.cases(), 128);
/// assert!(!profile.fork());
/// assert_eq!(profile.concurrency_reps(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuiteProfile {
    cases: u32,
    fork: bool,
    concurrency_reps: usize,
}

impl Default for SuiteProfile {
    fn default() -> Self {
        Self {
            cases: DEFAULT_CASES,
            fork: false,
            concurrency_reps: DEFAULT_CONCURRENCY_REPS,
        }
    }
}

impl SuiteProfile {
    /// Replaces the default case count. Zero is ignored.
    #[must_use]
    pub const fn with_cases(mut self, cases: u32) -> Self {
        if cases > 0 {
            self.cases = cases;
        }
        self
    }

    /// Applies overrides from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides resolved through `lookup`, keyed by the
    /// `*_ENV_KEY` constants in this module.
    #[must_use]
    pub fn with_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cases: resolve(&lookup, CASES_ENV_KEY, self.cases, parse_count),
            fork: resolve(&lookup, FORK_ENV_KEY, self.fork, parse_flag),
            concurrency_reps: resolve(
                &lookup,
                CONCURRENCY_REPS_ENV_KEY,
                self.concurrency_reps,
                parse_count,
            ),
        }
    }

    /// Proptest cases per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether proptest forks per case.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }

    /// Engine runs per input in the concurrency property.
    #[must_use]
    pub const fn concurrency_reps(&self) -> usize {
        self.concurrency_reps
    }
}

fn resolve<T, F>(
    lookup: &F,
    key: &'static str,
    current: T,
    parse: fn(&str) -> Result<T, &'static str>,
) -> T
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return current;
    };
    parse(raw.trim()).unwrap_or_else(|reason| {
        tracing::warn!(env = key, raw = %raw, reason, "ignoring suite profile override");
        current
    })
}

fn parse_count<T>(raw: &str) -> Result<T, &'static str>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let value = raw.parse::<T>().map_err(|_| "not an unsigned integer")?;
    if value == T::default() {
        return Err("must be positive");
    }
    Ok(value)
}

fn parse_flag(raw: &str) -> Result<bool, &'static str> {
    if raw == "1" || raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw == "0" || raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err("expected true, false, 1 or 0")
    }
}
