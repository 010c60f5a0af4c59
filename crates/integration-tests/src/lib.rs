//! Integration tests for toolfmt.
//!
//! These tests exercise the public formatting API end to end, the way the
//! tool-invocation layer uses it: tool results arrive as `serde_json`
//! values, get bridged into [`toolfmt_core::Value`] trees, and the tests
//! assert on the exact rendered text.
//!
//! # Test Categories
//!
//! - `format_scenarios` - Full payload-to-text scenarios in both modes
