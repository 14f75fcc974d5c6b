//! Shared fixtures and setup for the integration test suite.

pub mod fixtures;
