//! Environment-driven tuning for test suites run locally and in CI.

pub mod property_test_profile;
