#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// RFC 3986 reference resolution module
///
/// This module runs the resolution examples of RFC 3986 §5.4 plus extra
/// vectors, loaded from a JSON fixture.
#[path = "rfc3986/loader.rs"]
mod loader;

#[path = "rfc3986/resolution_tests.rs"]
mod resolution_tests;
