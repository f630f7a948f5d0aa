// tests/support/mod.rs
// Shared fixtures for the integration test binaries. Individual test crates
// use different subsets, which would otherwise trip dead_code lints.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod mocks;
