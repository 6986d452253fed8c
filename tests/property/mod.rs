//! Property-based tests for configuration layering
