//! CI-facing configuration shared by the workspace's test suites.

pub mod suite_profile;
